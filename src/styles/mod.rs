//! Style registries
//!
//! Each themeable surface has a registry mapping its variant enum to a static
//! CSS template. The mapping is an exhaustive `match`, so adding a variant
//! without a template does not compile.

pub mod button;
pub mod card;
pub mod container;
pub mod navigation;
pub mod overview;

use crate::error::Result;
use crate::template::{CssEngine, StyleContext};
use crate::variant::Variant;

/// A named CSS template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTemplate {
    pub name: &'static str,
    pub source: &'static str,
}

/// A variant enum with one CSS template per variant
pub trait StyleRegistry: Variant {
    /// Surface the registry styles, e.g. `navigation`
    const SURFACE: &'static str;

    fn template(self) -> StyleTemplate;
}

/// Render a variant of a registry
pub fn render_variant<S: StyleRegistry>(
    engine: &CssEngine,
    variant: S,
    ctx: &StyleContext,
) -> Result<String> {
    engine.render(variant.template(), ctx)
}

/// Render a registry entry by name, using the default variant for unknown names
pub fn render_named<S: StyleRegistry>(
    engine: &CssEngine,
    name: &str,
    ctx: &StyleContext,
) -> Result<String> {
    render_variant(engine, S::from_name(name), ctx)
}

/// Page layout, typography, banner, tags and world listing
pub const BASE: StyleTemplate = StyleTemplate {
    name: "base",
    source: r#":root {
    --color-primary: {{ colors.primary }};
    --color-secondary: {{ colors.secondary }};
    --color-accent: {{ colors.accent }};
    --color-background: {{ colors.background }};
    --color-surface: {{ colors.surface }};
    --color-text: {{ colors.text }};
    --color-muted: {{ colors.muted }};
    --color-border: {{ colors.border }};
    --color-link: {{ colors.link }};
    --color-highlight: {{ colors.highlight }};
    --font-heading: {{ fonts.heading }};
    --font-body: {{ fonts.body }};
    --font-accent: {{ fonts.accent }};
    --font-mono: {{ fonts.mono }};
    --site-width: {{ site_width }}px;
    --banner-height: {{ banner_height }}px;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: {{ colors.background }};
    color: {{ colors.text }};
    font-family: {{ fonts.body }};
    line-height: 1.6;
}

h1, h2, h3, h4 {
    font-family: {{ fonts.heading }};
    color: {{ colors.primary }};
    line-height: 1.25;
}

a {
    color: {{ colors.link }};
}

code, pre {
    font-family: {{ fonts.mono }};
}

.site-wrapper {
    max-width: {{ site_width }}px;
    margin: 0 auto;
    padding: 0 1rem 2rem;
}

{% if banner_height > 0 %}.site-banner {
    height: {{ banner_height }}px;
    background-color: {{ colors.secondary }};
    background-size: cover;
    background-position: center;
    display: flex;
    align-items: flex-end;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}

.site-banner h1 {
    margin: 0;
    color: {{ colors.surface }};
    text-shadow: 0 2px 6px rgba(0, 0, 0, 0.45);
}
{% else %}.site-banner {
    display: none;
}
{% endif %}
.site-body {
    display: block;
}

.main-container {
    min-height: {{ min_height }}px;
}
{% if vertical_nav %}
.site-body {
    display: flex;
    align-items: flex-start;
    gap: 1.5rem;
}

.site-body .site-nav {
    flex: 0 0 180px;
    flex-direction: column;
}

.site-body .main-container {
    flex: 1 1 auto;
    min-width: 0;
}
{% endif %}
.content-panel[hidden] {
    display: none;
}

.tag-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.35rem;
    list-style: none;
    padding: 0;
    margin: 0.5rem 0 0;
}

.tag-link {
    display: inline-block;
    padding: 0.1rem 0.6rem;
    border-radius: 999px;
    background: {{ colors.highlight }};
    color: {{ colors.text }};
    font-size: 0.8rem;
    text-decoration: none;
    cursor: pointer;
}

.tag-link.selected {
    background: {{ colors.accent }};
    color: {{ colors.surface }};
}

.world-controls {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    align-items: center;
    margin-bottom: 1rem;
}

.world-controls input,
.world-controls select {
    padding: 0.4rem 0.6rem;
    border: 1px solid {{ colors.border }};
    border-radius: 4px;
    background: {{ colors.surface }};
    color: {{ colors.text }};
    font-family: inherit;
}

.world-tag-cloud {
    margin-bottom: 1rem;
}

.world-list {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1rem;
}

.world-item[hidden] {
    display: none;
}

.world-item .item-meta {
    color: {{ colors.muted }};
    font-size: 0.85rem;
}

.world-item img {
    max-width: 100%;
    height: auto;
}

.world-empty {
    color: {{ colors.muted }};
    font-style: italic;
}

.site-footer {
    margin-top: 2rem;
    text-align: center;
    color: {{ colors.muted }};
    font-size: 0.85rem;
}

@media (max-width: 768px) {
    .site-body {
        display: block;
    }

    .world-list {
        grid-template-columns: 1fr;
    }
}
"#,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::{
        AppearanceSettings, ButtonStyle, CardStyle, ContainerStyle, NavigationStyle, OverviewStyle,
    };

    fn context() -> StyleContext {
        StyleContext::new(&AppearanceSettings::default(), 200)
    }

    fn assert_unknown_matches_default<S: StyleRegistry>(engine: &CssEngine) {
        let ctx = context();
        let fallback = render_named::<S>(engine, "definitely-not-a-style", &ctx).unwrap();
        let default = render_variant(engine, S::default(), &ctx).unwrap();
        assert_eq!(fallback, default, "{} registry", S::SURFACE);

        let blank = render_named::<S>(engine, "", &ctx).unwrap();
        assert_eq!(blank, default, "{} registry", S::SURFACE);
    }

    #[test]
    fn test_unknown_names_render_default_variant() {
        let engine = CssEngine::new().unwrap();
        assert_unknown_matches_default::<NavigationStyle>(&engine);
        assert_unknown_matches_default::<ContainerStyle>(&engine);
        assert_unknown_matches_default::<ButtonStyle>(&engine);
        assert_unknown_matches_default::<CardStyle>(&engine);
        assert_unknown_matches_default::<OverviewStyle>(&engine);
    }

    fn assert_distinct_templates<S: StyleRegistry>() {
        let names: std::collections::HashSet<_> =
            S::ALL.iter().map(|v| v.template().name).collect();
        assert_eq!(names.len(), S::ALL.len(), "{} registry", S::SURFACE);
        for variant in S::ALL {
            let template = variant.template();
            assert!(template.name.starts_with(S::SURFACE));
            assert!(template.name.ends_with(variant.name()));
        }
    }

    #[test]
    fn test_template_names_follow_surface_and_variant() {
        assert_distinct_templates::<NavigationStyle>();
        assert_distinct_templates::<ContainerStyle>();
        assert_distinct_templates::<ButtonStyle>();
        assert_distinct_templates::<CardStyle>();
        assert_distinct_templates::<OverviewStyle>();
    }

    #[test]
    fn test_base_hides_banner_when_height_is_zero() {
        let engine = CssEngine::new().unwrap();
        let mut ctx = context();
        ctx.banner_height = 0;

        let css = engine.render(BASE, &ctx).unwrap();
        assert!(css.contains(".site-banner {\n    display: none;\n}"));
    }

    #[test]
    fn test_base_lays_out_vertical_navigation() {
        let engine = CssEngine::new().unwrap();
        let mut ctx = context();

        let horizontal = engine.render(BASE, &ctx).unwrap();
        assert!(!horizontal.contains("flex: 0 0 180px"));

        ctx.vertical_nav = true;
        let vertical = engine.render(BASE, &ctx).unwrap();
        assert!(vertical.contains("flex: 0 0 180px"));
        assert!(vertical.contains("min-height: 200px;"));
    }
}
