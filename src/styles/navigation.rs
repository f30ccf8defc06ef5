//! Navigation tab styles

use super::{StyleRegistry, StyleTemplate};
use crate::appearance::NavigationStyle;

impl StyleRegistry for NavigationStyle {
    const SURFACE: &'static str = "navigation";

    fn template(self) -> StyleTemplate {
        let (name, source) = match self {
            Self::Current => ("navigation/current", CURRENT),
            Self::Pills => ("navigation/pills", PILLS),
            Self::Underline => ("navigation/underline", UNDERLINE),
            Self::Journal => ("navigation/journal", JOURNAL),
            Self::Sidebar => ("navigation/sidebar", SIDEBAR),
            Self::Kawaii => ("navigation/kawaii", KAWAII),
            Self::Wuxia => ("navigation/wuxia", WUXIA),
            Self::Horrific => ("navigation/horrific", HORRIFIC),
        };
        StyleTemplate { name, source }
    }
}

const CURRENT: &str = r#".site-nav {
    display: flex;
    flex-wrap: wrap;
    gap: 0.25rem;
    border-bottom: 2px solid {{ colors.border }};
    margin-bottom: 1.5rem;
}

.nav-tab {
    padding: 0.6rem 1.1rem;
    border: none;
    background: transparent;
    color: {{ colors.muted }};
    font-family: {{ fonts.heading }};
    font-size: 1rem;
    cursor: pointer;
}

.nav-tab:hover {
    color: {{ colors.text }};
}

.nav-tab.active {
    color: {{ colors.primary }};
    background: {{ colors.surface }};
    border: 2px solid {{ colors.border }};
    border-bottom-color: {{ colors.surface }};
    margin-bottom: -2px;
    border-radius: 6px 6px 0 0;
}
"#;

const PILLS: &str = r#".site-nav {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
}

.nav-tab {
    padding: 0.45rem 1.2rem;
    border: 1px solid {{ colors.border }};
    border-radius: 999px;
    background: {{ colors.surface }};
    color: {{ colors.text }};
    font-family: {{ fonts.body }};
    cursor: pointer;
    transition: background 0.2s ease;
}

.nav-tab:hover {
    background: {{ colors.highlight }};
}

.nav-tab.active {
    background: {{ colors.primary }};
    border-color: {{ colors.primary }};
    color: {{ colors.surface }};
}
"#;

const UNDERLINE: &str = r#".site-nav {
    display: flex;
    flex-wrap: wrap;
    gap: 1.5rem;
    margin-bottom: 1.5rem;
}

.nav-tab {
    padding: 0.4rem 0;
    border: none;
    border-bottom: 3px solid transparent;
    background: none;
    color: {{ colors.muted }};
    font-family: {{ fonts.heading }};
    text-transform: uppercase;
    letter-spacing: 0.08em;
    cursor: pointer;
}

.nav-tab.active,
.nav-tab:hover {
    color: {{ colors.text }};
    border-bottom-color: {{ colors.accent }};
}
"#;

const JOURNAL: &str = r#".site-nav {
    display: flex;
    flex-direction: column;
    gap: 0.35rem;
    padding-top: 1rem;
}

.nav-tab {
    position: relative;
    text-align: left;
    padding: 0.75rem 1rem;
    min-height: 52px;
    border: 1px solid {{ colors.border }};
    border-left: 6px solid {{ colors.secondary }};
    border-radius: 0 8px 8px 0;
    background: {{ colors.surface }};
    color: {{ colors.text }};
    font-family: {{ fonts.accent }};
    cursor: pointer;
    box-shadow: 2px 2px 0 {{ colors.border }};
}

.nav-tab:hover {
    transform: translateX(4px);
}

.nav-tab.active {
    border-left-color: {{ colors.accent }};
    background: {{ colors.highlight }};
    transform: translateX(8px);
}
"#;

const SIDEBAR: &str = r#".site-nav {
    display: flex;
    flex-direction: column;
    padding: 0.5rem;
    background: {{ colors.surface }};
    border: 1px solid {{ colors.border }};
    border-radius: 8px;
}

.nav-tab {
    text-align: left;
    padding: 0.7rem 0.9rem;
    min-height: 48px;
    border: none;
    border-radius: 6px;
    background: none;
    color: {{ colors.text }};
    font-family: {{ fonts.body }};
    cursor: pointer;
}

.nav-tab:hover {
    background: {{ colors.highlight }};
}

.nav-tab.active {
    background: {{ colors.primary }};
    color: {{ colors.surface }};
}
"#;

const KAWAII: &str = r#".site-nav {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.6rem;
    margin-bottom: 1.5rem;
}

.nav-tab {
    padding: 0.5rem 1.3rem;
    border: 3px dotted {{ colors.secondary }};
    border-radius: 20px;
    background: {{ colors.highlight }};
    color: {{ colors.primary }};
    font-family: {{ fonts.accent }};
    font-weight: 700;
    cursor: pointer;
}

.nav-tab::before {
    content: "\2661  ";
}

.nav-tab:hover {
    transform: scale(1.06) rotate(-2deg);
}

.nav-tab.active {
    background: {{ colors.primary }};
    border-style: solid;
    color: {{ colors.surface }};
}
"#;

const WUXIA: &str = r#".site-nav {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0;
    margin-bottom: 1.5rem;
    border-top: 1px solid {{ colors.accent }};
    border-bottom: 1px solid {{ colors.accent }};
}

.nav-tab {
    padding: 0.7rem 1.6rem;
    border: none;
    background: none;
    color: {{ colors.text }};
    font-family: {{ fonts.accent }};
    font-size: 1.1rem;
    letter-spacing: 0.2em;
    cursor: pointer;
}

.nav-tab.active {
    color: {{ colors.primary }};
    background: linear-gradient(180deg, transparent 0%, {{ colors.highlight }} 100%);
}
"#;

const HORRIFIC: &str = r#".site-nav {
    display: flex;
    flex-wrap: wrap;
    gap: 0.4rem;
    margin-bottom: 1.5rem;
    border-bottom: 1px solid {{ colors.primary }};
}

.nav-tab {
    padding: 0.55rem 1rem;
    border: 1px solid {{ colors.border }};
    border-bottom: none;
    background: {{ colors.surface }};
    color: {{ colors.muted }};
    font-family: {{ fonts.accent }};
    letter-spacing: 0.05em;
    cursor: pointer;
}

.nav-tab:hover {
    color: {{ colors.primary }};
    text-shadow: 0 0 6px {{ colors.primary }};
}

.nav-tab.active {
    color: {{ colors.text }};
    background: {{ colors.highlight }};
    box-shadow: inset 0 -3px 0 {{ colors.primary }};
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::AppearanceSettings;
    use crate::styles::render_variant;
    use crate::template::{CssEngine, StyleContext};

    #[test]
    fn test_vertical_styles_stack_tabs() {
        let engine = CssEngine::new().unwrap();
        let ctx = StyleContext::new(&AppearanceSettings::default(), 200);

        for style in [NavigationStyle::Journal, NavigationStyle::Sidebar] {
            let css = render_variant(&engine, style, &ctx).unwrap();
            assert!(css.contains("flex-direction: column;"), "{style}");
        }
    }

    #[test]
    fn test_pills_use_primary_for_active_tab() {
        let engine = CssEngine::new().unwrap();
        let ctx = StyleContext::new(&AppearanceSettings::default(), 200);

        let css = render_variant(&engine, NavigationStyle::Pills, &ctx).unwrap();
        assert!(css.contains(&format!("background: {};", ctx.colors.primary)));
    }
}
