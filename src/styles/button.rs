//! Button styles

use super::{StyleRegistry, StyleTemplate};
use crate::appearance::ButtonStyle;

impl StyleRegistry for ButtonStyle {
    const SURFACE: &'static str = "button";

    fn template(self) -> StyleTemplate {
        let (name, source) = match self {
            Self::Standard => ("button/default", STANDARD),
            Self::Pill => ("button/pill", PILL),
            Self::Outline => ("button/outline", OUTLINE),
            Self::Kawaii => ("button/kawaii", KAWAII),
            Self::Wuxia => ("button/wuxia", WUXIA),
            Self::Industrial => ("button/industrial", INDUSTRIAL),
            Self::Horrific => ("button/horrific", HORRIFIC),
        };
        StyleTemplate { name, source }
    }
}

const STANDARD: &str = r#".btn {
    display: inline-block;
    padding: 0.45rem 1rem;
    border: 1px solid {{ colors.primary }};
    border-radius: 6px;
    background: {{ colors.primary }};
    color: {{ colors.surface }};
    font-family: {{ fonts.body }};
    cursor: pointer;
    text-decoration: none;
}

.btn:hover {
    background: {{ colors.secondary }};
    border-color: {{ colors.secondary }};
}
"#;

const PILL: &str = r#".btn {
    display: inline-block;
    padding: 0.45rem 1.4rem;
    border: none;
    border-radius: 999px;
    background: {{ colors.primary }};
    color: {{ colors.surface }};
    font-family: {{ fonts.body }};
    cursor: pointer;
    text-decoration: none;
}

.btn:hover {
    background: {{ colors.accent }};
}
"#;

const OUTLINE: &str = r#".btn {
    display: inline-block;
    padding: 0.45rem 1rem;
    border: 2px solid {{ colors.primary }};
    border-radius: 6px;
    background: transparent;
    color: {{ colors.primary }};
    font-family: {{ fonts.body }};
    cursor: pointer;
    text-decoration: none;
}

.btn:hover {
    background: {{ colors.primary }};
    color: {{ colors.surface }};
}
"#;

const KAWAII: &str = r#".btn {
    display: inline-block;
    padding: 0.5rem 1.3rem;
    border: 3px solid {{ colors.secondary }};
    border-radius: 20px;
    background: {{ colors.highlight }};
    color: {{ colors.primary }};
    font-family: {{ fonts.accent }};
    font-weight: 700;
    cursor: pointer;
    box-shadow: 0 4px 0 {{ colors.secondary }};
}

.btn:active {
    transform: translateY(3px);
    box-shadow: 0 1px 0 {{ colors.secondary }};
}
"#;

const WUXIA: &str = r#".btn {
    display: inline-block;
    padding: 0.5rem 1.5rem;
    border: 1px solid {{ colors.accent }};
    border-radius: 0;
    background: {{ colors.primary }};
    color: {{ colors.highlight }};
    font-family: {{ fonts.accent }};
    letter-spacing: 0.15em;
    cursor: pointer;
}

.btn:hover {
    box-shadow: 0 0 0 3px {{ colors.highlight }}, 0 0 0 4px {{ colors.accent }};
}
"#;

const INDUSTRIAL: &str = r#".btn {
    display: inline-block;
    padding: 0.5rem 1.1rem;
    border: 2px solid {{ colors.border }};
    border-radius: 2px;
    background: linear-gradient(180deg, {{ colors.surface }} 0%, {{ colors.background }} 100%);
    color: {{ colors.accent }};
    font-family: {{ fonts.mono }};
    text-transform: uppercase;
    cursor: pointer;
}

.btn:hover {
    border-color: {{ colors.accent }};
}
"#;

const HORRIFIC: &str = r#".btn {
    display: inline-block;
    padding: 0.5rem 1.1rem;
    border: 1px solid {{ colors.primary }};
    border-radius: 2px;
    background: {{ colors.background }};
    color: {{ colors.primary }};
    font-family: {{ fonts.accent }};
    cursor: pointer;
    transition: text-shadow 0.3s ease;
}

.btn:hover {
    text-shadow: 0 0 8px {{ colors.primary }};
    background: {{ colors.highlight }};
}
"#;
