//! Stylesheet assembly

use crate::appearance::AppearanceSettings;
use crate::error::Result;
use crate::height::{self, HeightTuning, OverviewContent};
use crate::styles::{self, StyleRegistry};
use crate::template::{CssEngine, StyleContext};
use crate::variant::Variant;
use tracing::debug;

fn push_section(css: &mut String, label: &str, body: &str) {
    if !css.is_empty() {
        css.push('\n');
    }
    css.push_str("/* ");
    css.push_str(label);
    css.push_str(" */\n");
    css.push_str(body);
}

fn push_variant<S: StyleRegistry>(
    css: &mut String,
    engine: &CssEngine,
    variant: S,
    ctx: &StyleContext,
) -> Result<()> {
    let body = styles::render_variant(engine, variant, ctx)?;
    push_section(css, &format!("{}: {}", S::SURFACE, variant.name()), &body);
    Ok(())
}

/// Render the complete stylesheet for the given appearance and overview content
pub fn render_stylesheet(
    appearance: &AppearanceSettings,
    overview: &OverviewContent,
    tuning: &HeightTuning,
) -> Result<String> {
    let engine = CssEngine::new()?;
    let min_height = height::minimum_container_height(appearance, overview, tuning);
    let ctx = StyleContext::new(appearance, min_height);

    debug!(
        "Rendering stylesheet: navigation={} container={} button={} card={} overview={} colors={} fonts={}",
        appearance.navigation_style,
        appearance.container_style,
        appearance.button_style,
        appearance.card_style,
        appearance.overview_style,
        appearance.color_scheme,
        appearance.font_set,
    );

    let mut css = String::with_capacity(16 * 1024);
    push_section(&mut css, "base", &engine.render(styles::BASE, &ctx)?);
    push_variant(&mut css, &engine, appearance.navigation_style, &ctx)?;
    push_variant(&mut css, &engine, appearance.container_style, &ctx)?;
    push_variant(&mut css, &engine, appearance.button_style, &ctx)?;
    push_variant(&mut css, &engine, appearance.card_style, &ctx)?;
    push_variant(&mut css, &engine, appearance.overview_style, &ctx)?;

    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::{ContainerStyle, NavigationStyle};
    use crate::palette::ColorScheme;
    use pretty_assertions::assert_eq;

    fn render(appearance: &AppearanceSettings) -> String {
        render_stylesheet(appearance, &OverviewContent::default(), &HeightTuning::default()).unwrap()
    }

    #[test]
    fn test_sections_in_order() {
        let css = render(&AppearanceSettings::default());
        let labels: Vec<_> = css
            .lines()
            .filter(|line| line.starts_with("/* "))
            .collect();
        assert_eq!(
            labels,
            vec![
                "/* base */",
                "/* navigation: current */",
                "/* container: rounded */",
                "/* button: default */",
                "/* card: default */",
                "/* overview: classic */",
            ]
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let appearance = AppearanceSettings {
            navigation_style: NavigationStyle::Journal,
            container_style: ContainerStyle::Wuxia,
            color_scheme: ColorScheme::Jade,
            ..Default::default()
        };
        assert_eq!(render(&appearance), render(&appearance));
    }

    #[test]
    fn test_unknown_names_match_defaults() {
        let parsed: AppearanceSettings = serde_json::from_str(
            r#"{"navigation_style": "neon", "container_style": "neon", "button_style": "neon",
                "card_style": "neon", "overview_style": "neon", "color_scheme": "neon", "font_set": "neon"}"#,
        )
        .unwrap();
        assert_eq!(render(&parsed), render(&AppearanceSettings::default()));
    }

    #[test]
    fn test_override_cannot_comment_out_later_rules() {
        let mut appearance = AppearanceSettings::default();
        appearance
            .color_overrides
            .insert("primary".to_string(), "red /*".to_string());
        let css = render(&appearance);

        assert!(css.contains("--color-primary: red ;"));
        assert_eq!(css.matches("/*").count(), 6);
        assert_eq!(css.matches("*/").count(), 6);
    }

    #[test]
    fn test_min_height_and_colors_are_interpolated() {
        let appearance = AppearanceSettings {
            color_scheme: ColorScheme::Midnight,
            ..Default::default()
        };
        let css = render(&appearance);

        assert!(css.contains("min-height: 200px;"));
        assert!(css.contains("background: #0d1117;"));
        assert!(!css.contains("{{"));
    }
}
