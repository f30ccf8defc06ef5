//! World item card styles

use super::{StyleRegistry, StyleTemplate};
use crate::appearance::CardStyle;

impl StyleRegistry for CardStyle {
    const SURFACE: &'static str = "card";

    fn template(self) -> StyleTemplate {
        let (name, source) = match self {
            Self::Standard => ("card/default", STANDARD),
            Self::Elevated => ("card/elevated", ELEVATED),
            Self::Bordered => ("card/bordered", BORDERED),
            Self::Kawaii => ("card/kawaii", KAWAII),
            Self::Wuxia => ("card/wuxia", WUXIA),
            Self::Industrial => ("card/industrial", INDUSTRIAL),
            Self::Horrific => ("card/horrific", HORRIFIC),
        };
        StyleTemplate { name, source }
    }
}

const STANDARD: &str = r#".world-card {
    background: {{ colors.surface }};
    border: 1px solid {{ colors.border }};
    border-radius: 8px;
    padding: 1rem;
}

.world-card h3 {
    margin: 0 0 0.35rem;
}
"#;

const ELEVATED: &str = r#".world-card {
    background: {{ colors.surface }};
    border: none;
    border-radius: 10px;
    padding: 1.1rem;
    box-shadow: 0 4px 14px rgba(0, 0, 0, 0.12);
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.world-card:hover {
    transform: translateY(-3px);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.16);
}

.world-card h3 {
    margin: 0 0 0.35rem;
}
"#;

const BORDERED: &str = r#".world-card {
    background: {{ colors.surface }};
    border: 2px solid {{ colors.primary }};
    border-radius: 4px;
    padding: 1rem;
}

.world-card h3 {
    margin: -1rem -1rem 0.75rem;
    padding: 0.5rem 1rem;
    background: {{ colors.primary }};
    color: {{ colors.surface }};
}
"#;

const KAWAII: &str = r#".world-card {
    background: {{ colors.surface }};
    border: 3px solid {{ colors.secondary }};
    border-radius: 24px;
    padding: 1.1rem;
    box-shadow: 4px 4px 0 {{ colors.highlight }};
}

.world-card h3 {
    margin: 0 0 0.35rem;
    font-family: {{ fonts.accent }};
    color: {{ colors.primary }};
}

.world-card h3::before {
    content: "\2606  ";
    color: {{ colors.accent }};
}
"#;

const WUXIA: &str = r#".world-card {
    background: {{ colors.surface }};
    border: 1px solid {{ colors.border }};
    border-left: 4px solid {{ colors.primary }};
    padding: 1rem 1.25rem;
}

.world-card h3 {
    margin: 0 0 0.35rem;
    font-family: {{ fonts.accent }};
    letter-spacing: 0.1em;
}
"#;

const INDUSTRIAL: &str = r#".world-card {
    background: {{ colors.surface }};
    border: 2px solid {{ colors.border }};
    border-radius: 0;
    padding: 1rem;
    position: relative;
}

.world-card::after {
    content: "";
    position: absolute;
    top: 6px;
    right: 6px;
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: {{ colors.accent }};
}

.world-card h3 {
    margin: 0 0 0.35rem;
    font-family: {{ fonts.mono }};
    text-transform: uppercase;
}
"#;

const HORRIFIC: &str = r#".world-card {
    background: {{ colors.surface }};
    border: 1px solid {{ colors.border }};
    border-radius: 2px;
    padding: 1rem;
    box-shadow: inset 0 0 30px rgba(0, 0, 0, 0.55);
    filter: saturate(0.85);
}

.world-card:hover {
    filter: none;
    box-shadow: inset 0 0 30px rgba(0, 0, 0, 0.55), 0 0 12px {{ colors.primary }};
}

.world-card h3 {
    margin: 0 0 0.35rem;
    font-family: {{ fonts.accent }};
    color: {{ colors.primary }};
}
"#;
