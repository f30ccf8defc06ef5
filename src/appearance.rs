//! Appearance settings for a generated site

use crate::palette::{ColorScheme, FontChoice};
use crate::variant::variants;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

variants! {
    /// Layout of the top-level section tabs
    pub enum NavigationStyle: "navigation style", default Current {
        Current => "current",
        Pills => "pills",
        Underline => "underline",
        /// Vertical tabs styled as journal bookmarks
        Journal => "journal",
        /// Vertical tabs in a sidebar
        Sidebar => "sidebar",
        Kawaii => "kawaii",
        Wuxia => "wuxia",
        Horrific => "horrific",
    }
}

impl NavigationStyle {
    /// Whether tabs are stacked vertically beside the content
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Journal | Self::Sidebar)
    }
}

variants! {
    /// Frame drawn around each content panel
    pub enum ContainerStyle: "container style", default Rounded {
        Rounded => "rounded",
        Sharp => "sharp",
        Parchment => "parchment",
        Glass => "glass",
        Kawaii => "kawaii",
        Wuxia => "wuxia",
        Industrial => "industrial",
        Horrific => "horrific",
    }
}

variants! {
    pub enum ButtonStyle: "button style", default Standard {
        Standard => "default",
        Pill => "pill",
        Outline => "outline",
        Kawaii => "kawaii",
        Wuxia => "wuxia",
        Industrial => "industrial",
        Horrific => "horrific",
    }
}

variants! {
    /// Look of world item cards
    pub enum CardStyle: "card style", default Standard {
        Standard => "default",
        Elevated => "elevated",
        Bordered => "bordered",
        Kawaii => "kawaii",
        Wuxia => "wuxia",
        Industrial => "industrial",
        Horrific => "horrific",
    }
}

variants! {
    /// Arrangement of the overview panel
    pub enum OverviewStyle: "overview style", default Classic {
        Classic => "classic",
        Magazine => "magazine",
        Minimal => "minimal",
        Hero => "hero",
        Split => "split",
    }
}

variants! {
    pub enum BannerSize: "banner size", default Medium {
        Hidden => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        Full => "full",
    }
}

impl BannerSize {
    /// Banner height in pixels
    pub fn height(self) -> u32 {
        match self {
            Self::Hidden => 0,
            Self::Small => 150,
            Self::Medium => 250,
            Self::Large => 350,
            Self::Full => 480,
        }
    }
}

/// A top-level section of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Overview,
    World,
    Characters,
    Timeline,
    Plans,
}

impl Section {
    /// Anchor id used for the section panel
    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::World => "world",
            Self::Characters => "characters",
            Self::Timeline => "timeline",
            Self::Plans => "plans",
        }
    }

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::World => "World",
            Self::Characters => "Characters",
            Self::Timeline => "Timeline",
            Self::Plans => "Plans",
        }
    }
}

/// Which top-level sections are shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionToggles {
    pub overview: bool,
    pub world: bool,
    pub characters: bool,
    pub timeline: bool,
    pub plans: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            overview: true,
            world: true,
            characters: false,
            timeline: false,
            plans: false,
        }
    }
}

impl SectionToggles {
    /// Enabled sections in display order
    pub fn enabled(&self) -> Vec<Section> {
        [
            (self.overview, Section::Overview),
            (self.world, Section::World),
            (self.characters, Section::Characters),
            (self.timeline, Section::Timeline),
            (self.plans, Section::Plans),
        ]
        .into_iter()
        .filter_map(|(on, section)| on.then_some(section))
        .collect()
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().len()
    }
}

/// User-chosen appearance of the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub navigation_style: NavigationStyle,
    pub container_style: ContainerStyle,
    pub button_style: ButtonStyle,
    pub card_style: CardStyle,
    pub overview_style: OverviewStyle,
    pub color_scheme: ColorScheme,
    pub font_set: FontChoice,
    pub banner_size: BannerSize,
    /// Maximum content width in pixels
    pub site_width: u32,
    pub sections: SectionToggles,
    /// Named palette colors replaced after the scheme is resolved
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub color_overrides: BTreeMap<String, String>,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            navigation_style: NavigationStyle::default(),
            container_style: ContainerStyle::default(),
            button_style: ButtonStyle::default(),
            card_style: CardStyle::default(),
            overview_style: OverviewStyle::default(),
            color_scheme: ColorScheme::default(),
            font_set: FontChoice::default(),
            banner_size: BannerSize::default(),
            site_width: 1000,
            sections: SectionToggles::default(),
            color_overrides: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    #[test]
    fn test_defaults_from_empty_json() {
        let settings: AppearanceSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppearanceSettings::default());
        assert_eq!(settings.site_width, 1000);
        assert_eq!(settings.overview_style, OverviewStyle::Classic);
        assert_eq!(settings.sections.enabled(), vec![Section::Overview, Section::World]);
    }

    #[test]
    fn test_unknown_style_names_fall_back() {
        let settings: AppearanceSettings = serde_json::from_str(
            r#"{"navigation_style": "holographic", "container_style": "wuxia", "banner_size": "huge"}"#,
        )
        .unwrap();

        assert_eq!(settings.navigation_style, NavigationStyle::Current);
        assert_eq!(settings.container_style, ContainerStyle::Wuxia);
        assert_eq!(settings.banner_size, BannerSize::Medium);
    }

    #[test]
    fn test_vertical_navigation_styles() {
        let vertical: Vec<_> = NavigationStyle::ALL
            .iter()
            .filter(|s| s.is_vertical())
            .map(|s| s.name())
            .collect();
        assert_eq!(vertical, vec!["journal", "sidebar"]);
    }

    #[test]
    fn test_enabled_count() {
        let toggles = SectionToggles {
            overview: true,
            world: true,
            characters: true,
            timeline: false,
            plans: true,
        };
        assert_eq!(toggles.enabled_count(), 4);
        assert_eq!(toggles.enabled().last(), Some(&Section::Plans));
    }

    #[test]
    fn test_banner_heights() {
        assert_eq!(BannerSize::Hidden.height(), 0);
        assert!(BannerSize::Small.height() < BannerSize::Large.height());
        assert_eq!(BannerSize::default().height(), 250);
    }
}
