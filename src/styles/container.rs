//! Content panel frames

use super::{StyleRegistry, StyleTemplate};
use crate::appearance::ContainerStyle;

impl StyleRegistry for ContainerStyle {
    const SURFACE: &'static str = "container";

    fn template(self) -> StyleTemplate {
        let (name, source) = match self {
            Self::Rounded => ("container/rounded", ROUNDED),
            Self::Sharp => ("container/sharp", SHARP),
            Self::Parchment => ("container/parchment", PARCHMENT),
            Self::Glass => ("container/glass", GLASS),
            Self::Kawaii => ("container/kawaii", KAWAII),
            Self::Wuxia => ("container/wuxia", WUXIA),
            Self::Industrial => ("container/industrial", INDUSTRIAL),
            Self::Horrific => ("container/horrific", HORRIFIC),
        };
        StyleTemplate { name, source }
    }
}

const ROUNDED: &str = r#".content-panel {
    background: {{ colors.surface }};
    border: 1px solid {{ colors.border }};
    border-radius: 12px;
    padding: 1.5rem;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
}
"#;

const SHARP: &str = r#".content-panel {
    background: {{ colors.surface }};
    border: 2px solid {{ colors.text }};
    border-radius: 0;
    padding: 1.5rem;
}
"#;

const PARCHMENT: &str = r#".content-panel {
    background: linear-gradient(135deg, {{ colors.highlight }} 0%, {{ colors.surface }} 60%, {{ colors.highlight }} 100%);
    border: 1px solid {{ colors.border }};
    border-radius: 4px;
    padding: 2rem 2.25rem;
    box-shadow: inset 0 0 40px rgba(120, 90, 40, 0.18), 0 3px 10px rgba(0, 0, 0, 0.12);
    font-family: {{ fonts.body }};
}

.content-panel h2 {
    font-family: {{ fonts.accent }};
    border-bottom: 1px double {{ colors.border }};
}
"#;

const GLASS: &str = r#".content-panel {
    background: rgba(255, 255, 255, 0.12);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.25);
    border-radius: 16px;
    padding: 1.75rem;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.18);
    color: {{ colors.text }};
}
"#;

const KAWAII: &str = r#".content-panel {
    background: {{ colors.surface }};
    border: 4px dashed {{ colors.secondary }};
    border-radius: 28px;
    padding: 1.75rem;
    box-shadow: 6px 6px 0 {{ colors.highlight }};
}

.content-panel h2::after {
    content: " \2727";
    color: {{ colors.accent }};
}
"#;

const WUXIA: &str = r#".content-panel {
    position: relative;
    background: {{ colors.surface }};
    border-top: 3px solid {{ colors.primary }};
    border-bottom: 3px solid {{ colors.primary }};
    border-left: none;
    border-right: none;
    padding: 2rem 2.5rem;
}

.content-panel::before,
.content-panel::after {
    content: "";
    position: absolute;
    top: 8px;
    bottom: 8px;
    width: 4px;
    background: {{ colors.accent }};
}

.content-panel::before {
    left: 0;
}

.content-panel::after {
    right: 0;
}

.content-panel h2 {
    font-family: {{ fonts.accent }};
    letter-spacing: 0.15em;
    text-align: center;
}
"#;

const INDUSTRIAL: &str = r#".content-panel {
    background: {{ colors.surface }};
    border: 3px solid {{ colors.border }};
    border-radius: 2px;
    padding: 1.5rem;
    box-shadow: inset 0 0 0 1px {{ colors.background }}, 0 0 0 1px {{ colors.secondary }};
    background-image: repeating-linear-gradient(45deg, transparent 0 12px, rgba(0, 0, 0, 0.04) 12px 24px);
}

.content-panel h2 {
    font-family: {{ fonts.mono }};
    text-transform: uppercase;
    color: {{ colors.accent }};
}
"#;

const HORRIFIC: &str = r#".content-panel {
    background: radial-gradient(ellipse at top, {{ colors.highlight }} 0%, {{ colors.surface }} 70%);
    border: 1px solid {{ colors.border }};
    border-radius: 3px;
    padding: 1.75rem;
    box-shadow: 0 0 24px rgba(0, 0, 0, 0.6), inset 0 0 60px rgba(0, 0, 0, 0.5);
}

.content-panel h2 {
    font-family: {{ fonts.accent }};
    color: {{ colors.primary }};
    text-shadow: 1px 1px 2px {{ colors.background }};
}
"#;
