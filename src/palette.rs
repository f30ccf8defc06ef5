//! Color schemes and font sets
//!
//! Both are immutable lookup tables selected by name. Color overrides from the
//! site file are applied on top of the resolved scheme.

use crate::variant::variants;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Named colors used by every style template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub muted: String,
    pub border: String,
    pub link: String,
    pub highlight: String,
}

impl Palette {
    /// Keys accepted by [`Palette::apply_overrides`]
    pub const KEYS: &'static [&'static str] = &[
        "primary",
        "secondary",
        "accent",
        "background",
        "surface",
        "text",
        "muted",
        "border",
        "link",
        "highlight",
    ];

    #[allow(clippy::too_many_arguments)]
    fn new(
        primary: &str,
        secondary: &str,
        accent: &str,
        background: &str,
        surface: &str,
        text: &str,
        muted: &str,
        border: &str,
        link: &str,
        highlight: &str,
    ) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            surface: surface.to_string(),
            text: text.to_string(),
            muted: muted.to_string(),
            border: border.to_string(),
            link: link.to_string(),
            highlight: highlight.to_string(),
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        let slot = match key {
            "primary" => &mut self.primary,
            "secondary" => &mut self.secondary,
            "accent" => &mut self.accent,
            "background" => &mut self.background,
            "surface" => &mut self.surface,
            "text" => &mut self.text,
            "muted" => &mut self.muted,
            "border" => &mut self.border,
            "link" => &mut self.link,
            "highlight" => &mut self.highlight,
            _ => return None,
        };
        Some(slot)
    }

    /// Replace named colors. Unknown keys are ignored.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, String>) {
        for (key, value) in overrides {
            match self.slot_mut(key.trim()) {
                Some(slot) => *slot = value.trim().to_string(),
                None => warn!("Ignoring override for unknown color '{}'", key),
            }
        }
    }
}

/// Font stacks used by every style template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub heading: String,
    pub body: String,
    pub accent: String,
    pub mono: String,
}

impl FontSet {
    fn new(heading: &str, body: &str, accent: &str, mono: &str) -> Self {
        Self {
            heading: heading.to_string(),
            body: body.to_string(),
            accent: accent.to_string(),
            mono: mono.to_string(),
        }
    }
}

const SYSTEM_SANS: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif";
const SYSTEM_MONO: &str = "'SF Mono', 'Fira Code', Consolas, monospace";

variants! {
    pub enum ColorScheme: "color scheme", default Default {
        Default => "default",
        Midnight => "midnight",
        Sakura => "sakura",
        Jade => "jade",
        Rust => "rust",
        Crimson => "crimson",
    }
}

impl ColorScheme {
    pub fn palette(self) -> Palette {
        match self {
            Self::Default => Palette::new(
                "#3b5b92", "#6b7fa8", "#d9a441", "#f5f3ee", "#ffffff", "#2b2b2b", "#6e6e6e",
                "#d8d4ca", "#2f6fbf", "#fff2c6",
            ),
            Self::Midnight => Palette::new(
                "#58a6ff", "#a371f7", "#d29922", "#0d1117", "#161b22", "#c9d1d9", "#8b949e",
                "#30363d", "#79c0ff", "#21262d",
            ),
            Self::Sakura => Palette::new(
                "#e75480", "#f4a7bb", "#9bd3cb", "#fff5f8", "#ffffff", "#5a3d48", "#a07c88",
                "#f6cfda", "#d63f6c", "#ffe3ec",
            ),
            Self::Jade => Palette::new(
                "#2e7d5b", "#8c6d3f", "#c9a227", "#f3f1e7", "#fbfaf4", "#23312b", "#66756d",
                "#cfd8c8", "#1f6e4c", "#e6efd9",
            ),
            Self::Rust => Palette::new(
                "#b7410e", "#5c5c5c", "#f2a900", "#1e1e1e", "#2a2a2a", "#e0ddd5", "#9a968c",
                "#4a4a4a", "#ff8c42", "#3a2a20",
            ),
            Self::Crimson => Palette::new(
                "#8b0000", "#3d0c11", "#c0c0c0", "#0b0607", "#160b0d", "#d8cfcf", "#8a7a7a",
                "#3a1a1e", "#d14545", "#2a0a0f",
            ),
        }
    }
}

variants! {
    pub enum FontChoice: "font set", default Default {
        Default => "default",
        Serif => "serif",
        Rounded => "rounded",
        Brush => "brush",
        Mono => "mono",
        Gothic => "gothic",
    }
}

impl FontChoice {
    pub fn fonts(self) -> FontSet {
        match self {
            Self::Default => FontSet::new(SYSTEM_SANS, SYSTEM_SANS, SYSTEM_SANS, SYSTEM_MONO),
            Self::Serif => FontSet::new(
                "'Playfair Display', Georgia, serif",
                "'Source Serif Pro', Georgia, serif",
                "'Playfair Display', Georgia, serif",
                SYSTEM_MONO,
            ),
            Self::Rounded => FontSet::new(
                "'Nunito', 'Varela Round', sans-serif",
                "'Nunito', 'Varela Round', sans-serif",
                "'Comic Neue', 'Nunito', cursive",
                SYSTEM_MONO,
            ),
            Self::Brush => FontSet::new(
                "'Ma Shan Zheng', 'Noto Serif SC', serif",
                "'Noto Serif SC', 'Noto Serif', serif",
                "'Ma Shan Zheng', cursive",
                SYSTEM_MONO,
            ),
            Self::Mono => FontSet::new(SYSTEM_MONO, SYSTEM_MONO, SYSTEM_MONO, SYSTEM_MONO),
            Self::Gothic => FontSet::new(
                "'UnifrakturMaguntia', 'Cinzel', serif",
                "'EB Garamond', Georgia, serif",
                "'Creepster', 'Cinzel', cursive",
                SYSTEM_MONO,
            ),
        }
    }
}
