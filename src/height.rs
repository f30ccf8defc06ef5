//! Minimum container height estimation
//!
//! Before the page paints, the main container gets a `min-height` sized from
//! the content it is about to show, so the layout does not jump once text and
//! images arrive. The estimate sums empirical constants from [`HeightTuning`];
//! none of them are measured, they are tuning knobs.

use crate::appearance::{AppearanceSettings, OverviewStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A link shown under the overview title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewLink {
    pub label: String,
    pub url: String,
}

/// Content of the overview section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewContent {
    pub title: String,
    pub links: Vec<OverviewLink>,
    /// Body text; paragraphs are separated by blank lines
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl OverviewContent {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Paragraphs are blocks of text separated by at least one blank line
    pub fn paragraphs(&self) -> Vec<String> {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in self.text.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }

        paragraphs
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().len()
    }
}

/// Empirical constants used by the estimate, all in pixels unless noted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightTuning {
    /// Padding around the overview, per overview style
    pub base_padding: BTreeMap<OverviewStyle, u32>,
    pub title: u32,
    pub links: u32,
    /// Height reserved when there is no body text
    pub empty_text: u32,
    /// Words that fit on one rendered line (count, not pixels)
    pub words_per_line: u32,
    pub line_height: u32,
    pub paragraph_spacing: u32,
    pub image: u32,
    /// Height of one vertical navigation tab
    pub nav_tab: u32,
    pub nav_margin: u32,
    /// The estimate never goes below this
    pub floor: u32,
}

impl Default for HeightTuning {
    fn default() -> Self {
        Self {
            base_padding: OverviewStyleDefaults::table(),
            title: 50,
            links: 40,
            empty_text: 25,
            words_per_line: 12,
            line_height: 24,
            paragraph_spacing: 16,
            image: 220,
            nav_tab: 60,
            nav_margin: 30,
            floor: 200,
        }
    }
}

struct OverviewStyleDefaults;

impl OverviewStyleDefaults {
    fn padding(style: OverviewStyle) -> u32 {
        match style {
            OverviewStyle::Classic => 60,
            OverviewStyle::Magazine => 80,
            OverviewStyle::Minimal => 40,
            OverviewStyle::Hero => 100,
            OverviewStyle::Split => 70,
        }
    }

    fn table() -> BTreeMap<OverviewStyle, u32> {
        use crate::variant::Variant;
        OverviewStyle::ALL
            .iter()
            .map(|style| (*style, Self::padding(*style)))
            .collect()
    }
}

impl HeightTuning {
    /// Base padding for a style; styles missing from the table use the built-in value
    pub fn base_padding(&self, style: OverviewStyle) -> u32 {
        self.base_padding
            .get(&style)
            .copied()
            .unwrap_or_else(|| OverviewStyleDefaults::padding(style))
    }

    /// Height of the overview body text
    pub fn text_height(&self, words: usize, paragraphs: usize) -> u32 {
        if words == 0 {
            return self.empty_text;
        }

        let words_per_line = self.words_per_line.max(1) as usize;
        let lines = words.div_ceil(words_per_line);
        let estimated = saturating_u32(lines)
            .saturating_mul(self.line_height)
            .saturating_add(saturating_u32(paragraphs).saturating_mul(self.paragraph_spacing));

        estimated.max(self.empty_text)
    }

    /// Height of a vertical tab column with `tabs` tabs
    pub fn navigation_height(&self, tabs: usize) -> u32 {
        saturating_u32(tabs)
            .saturating_mul(self.nav_tab)
            .saturating_add(self.nav_margin)
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Every component of a height estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeightBreakdown {
    pub base: u32,
    pub title: u32,
    pub links: u32,
    pub text: u32,
    pub image: u32,
    /// Height of the vertical navigation, 0 for horizontal styles
    pub navigation: u32,
    pub floor: u32,
}

impl HeightBreakdown {
    /// Sum of the overview components
    pub fn content(&self) -> u32 {
        self.base
            .saturating_add(self.title)
            .saturating_add(self.links)
            .saturating_add(self.text)
            .saturating_add(self.image)
    }

    /// The final minimum height
    pub fn total(&self) -> u32 {
        self.content().max(self.navigation).max(self.floor)
    }
}

/// Break the estimate down into its components
pub fn estimate(
    appearance: &AppearanceSettings,
    overview: &OverviewContent,
    tuning: &HeightTuning,
) -> HeightBreakdown {
    let words = overview.word_count();
    let paragraphs = overview.paragraph_count();

    let navigation = if appearance.navigation_style.is_vertical() {
        tuning.navigation_height(appearance.sections.enabled_count())
    } else {
        0
    };

    let breakdown = HeightBreakdown {
        base: tuning.base_padding(appearance.overview_style),
        title: if overview.title.trim().is_empty() { 0 } else { tuning.title },
        links: if overview.links.is_empty() { 0 } else { tuning.links },
        text: tuning.text_height(words, paragraphs),
        image: if overview.image.is_some() { tuning.image } else { 0 },
        navigation,
        floor: tuning.floor,
    };

    debug!(
        "Height estimate for {} words / {} paragraphs: {:?} -> {}px",
        words,
        paragraphs,
        breakdown,
        breakdown.total()
    );

    breakdown
}

/// Minimum height of the main container in pixels
pub fn minimum_container_height(
    appearance: &AppearanceSettings,
    overview: &OverviewContent,
    tuning: &HeightTuning,
) -> u32 {
    estimate(appearance, overview, tuning).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::{NavigationStyle, SectionToggles};

    fn text_of(words: usize, paragraphs: usize) -> String {
        let per_paragraph = words / paragraphs.max(1);
        let mut out = Vec::new();
        let mut remaining = words;
        for i in 0..paragraphs {
            let take = if i + 1 == paragraphs { remaining } else { per_paragraph };
            remaining -= take;
            out.push(vec!["word"; take].join(" "));
        }
        out.join("\n\n")
    }

    fn overview_with_text(text: String) -> OverviewContent {
        OverviewContent {
            text,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_classic_overview_hits_floor() {
        let appearance = AppearanceSettings::default();
        let overview = OverviewContent::default();
        let tuning = HeightTuning::default();

        let breakdown = estimate(&appearance, &overview, &tuning);
        assert_eq!(breakdown.content(), 85);
        assert_eq!(breakdown.total(), 200);
        assert_eq!(minimum_container_height(&appearance, &overview, &tuning), 200);
    }

    #[test]
    fn test_journal_navigation_wins_when_taller() {
        let appearance = AppearanceSettings {
            navigation_style: NavigationStyle::Journal,
            sections: SectionToggles {
                overview: true,
                world: true,
                characters: true,
                timeline: true,
                plans: true,
            },
            ..Default::default()
        };

        let height = minimum_container_height(
            &appearance,
            &OverviewContent::default(),
            &HeightTuning::default(),
        );
        assert_eq!(height, 330);
    }

    #[test]
    fn test_horizontal_navigation_is_ignored() {
        let appearance = AppearanceSettings {
            navigation_style: NavigationStyle::Pills,
            sections: SectionToggles {
                overview: true,
                world: true,
                characters: true,
                timeline: true,
                plans: true,
            },
            ..Default::default()
        };

        let breakdown = estimate(&appearance, &OverviewContent::default(), &HeightTuning::default());
        assert_eq!(breakdown.navigation, 0);
        assert_eq!(breakdown.total(), 200);
    }

    #[test]
    fn test_all_components_add_up() {
        let appearance = AppearanceSettings {
            overview_style: OverviewStyle::Hero,
            ..Default::default()
        };
        let overview = OverviewContent {
            title: "The Shattered Isles".to_string(),
            links: vec![OverviewLink {
                label: "Map".to_string(),
                url: "map.html".to_string(),
            }],
            text: text_of(30, 2),
            image: Some("isles.png".to_string()),
        };

        let breakdown = estimate(&appearance, &overview, &HeightTuning::default());
        // 30 words -> 3 lines * 24 + 2 paragraphs * 16
        assert_eq!(breakdown.text, 104);
        assert_eq!(breakdown.content(), 100 + 50 + 40 + 104 + 220);
        assert_eq!(breakdown.total(), 514);
    }

    #[test]
    fn test_monotonic_in_word_count() {
        let appearance = AppearanceSettings::default();
        let tuning = HeightTuning::default();

        let mut previous = 0;
        for words in 0..400 {
            let overview = overview_with_text(text_of(words, 1));
            let height = minimum_container_height(&appearance, &overview, &tuning);
            assert!(height >= previous, "{words} words: {height} < {previous}");
            assert!(height >= 200);
            previous = height;
        }
    }

    #[test]
    fn test_monotonic_in_paragraph_count() {
        let appearance = AppearanceSettings::default();
        let tuning = HeightTuning::default();

        let mut previous = 0;
        for paragraphs in 1..=40 {
            let overview = overview_with_text(text_of(120, paragraphs));
            assert_eq!(overview.paragraph_count(), paragraphs);

            let height = minimum_container_height(&appearance, &overview, &tuning);
            assert!(height >= previous);
            previous = height;
        }
    }

    #[test]
    fn test_text_height_never_below_empty_reservation() {
        let tuning = HeightTuning {
            line_height: 1,
            paragraph_spacing: 0,
            ..Default::default()
        };
        assert_eq!(tuning.text_height(0, 0), 25);
        assert_eq!(tuning.text_height(1, 1), 25);
    }

    #[test]
    fn test_zero_words_per_line_does_not_panic() {
        let tuning = HeightTuning {
            words_per_line: 0,
            ..Default::default()
        };
        assert_eq!(tuning.text_height(3, 1), 3 * 24 + 16);
    }

    #[test]
    fn test_partial_padding_table_falls_back() {
        let tuning: HeightTuning =
            serde_json::from_str(r#"{"base_padding": {"classic": 90}}"#).unwrap();
        assert_eq!(tuning.base_padding(OverviewStyle::Classic), 90);
        assert_eq!(tuning.base_padding(OverviewStyle::Minimal), 40);
        assert_eq!(tuning.floor, 200);
    }

    #[test]
    fn test_paragraph_splitting() {
        let overview = overview_with_text("First line\ncontinues.\n\n\n  \nSecond.\n".to_string());
        assert_eq!(
            overview.paragraphs(),
            vec!["First line continues.".to_string(), "Second.".to_string()]
        );
        assert_eq!(overview.word_count(), 4);
    }
}
