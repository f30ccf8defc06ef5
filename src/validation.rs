//! Site file validation

use crate::appearance::AppearanceSettings;
use crate::error::{Error, Result};
use crate::height::HeightTuning;
use crate::palette::Palette;
use regex::Regex;
use std::ops::RangeInclusive;

/// Accepted site widths in pixels
pub const SITE_WIDTH_RANGE: RangeInclusive<u32> = 480..=2400;

/// Checks CSS color values
pub struct ColorValidator {
    hex: Regex,
    function: Regex,
    variable: Regex,
    keyword: Regex,
}

impl ColorValidator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            hex: Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")?,
            function: Regex::new(r"^(?:rgb|rgba|hsl|hsla)\(\s*[0-9.%\s,/+-]+\)$")?,
            variable: Regex::new(r"^var\(\s*--[A-Za-z0-9_-]+\s*\)$")?,
            keyword: Regex::new(r"^[A-Za-z]+$")?,
        })
    }

    pub fn is_color(&self, value: &str) -> bool {
        let value = value.trim();
        self.hex.is_match(value)
            || self.function.is_match(value)
            || self.variable.is_match(value)
            || self.keyword.is_match(value)
    }
}

/// Validate appearance settings before rendering
pub fn validate_appearance(appearance: &AppearanceSettings) -> Result<()> {
    if !SITE_WIDTH_RANGE.contains(&appearance.site_width) {
        return Err(Error::ConfigError(format!(
            "site_width must be between {} and {} pixels, got {}",
            SITE_WIDTH_RANGE.start(),
            SITE_WIDTH_RANGE.end(),
            appearance.site_width
        )));
    }

    let validator = ColorValidator::new()?;
    for (key, value) in &appearance.color_overrides {
        if !Palette::KEYS.contains(&key.trim()) {
            return Err(Error::ConfigError(format!(
                "Unknown color '{}' in color_overrides. Expected one of: {}",
                key,
                Palette::KEYS.join(", ")
            )));
        }
        if !validator.is_color(value) {
            return Err(Error::ConfigError(format!(
                "Invalid color '{}' for '{}'. Expected formats: '#rrggbb', 'rgb(...)', 'hsl(...)', 'var(--name)' or a color keyword",
                value, key
            )));
        }
    }

    Ok(())
}

/// Validate the height tuning table
pub fn validate_tuning(tuning: &HeightTuning) -> Result<()> {
    if tuning.words_per_line == 0 {
        return Err(Error::ConfigError(
            "words_per_line must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_formats() {
        let validator = ColorValidator::new().unwrap();
        for ok in [
            "#fff",
            "#FFFA",
            "#1a2b3c",
            "#1a2b3c80",
            "rgb(10, 20, 30)",
            "rgba(0 0 0 / 50%)",
            "hsl(210, 40%, 50%)",
            "var(--brand-main)",
            "rebeccapurple",
        ] {
            assert!(validator.is_color(ok), "{ok} should be a color");
        }

        for bad in ["#ggg", "#12345", "red; }", "url(x.png)", "", "var(brand)"] {
            assert!(!validator.is_color(bad), "{bad} should not be a color");
        }
    }

    #[test]
    fn test_site_width_range() {
        let mut appearance = AppearanceSettings::default();
        assert!(validate_appearance(&appearance).is_ok());

        appearance.site_width = 300;
        assert!(validate_appearance(&appearance).is_err());

        appearance.site_width = 2400;
        assert!(validate_appearance(&appearance).is_ok());
    }

    #[test]
    fn test_color_overrides() {
        let mut appearance = AppearanceSettings::default();
        appearance
            .color_overrides
            .insert("primary".to_string(), "#112233".to_string());
        assert!(validate_appearance(&appearance).is_ok());

        appearance
            .color_overrides
            .insert("glow".to_string(), "#112233".to_string());
        let err = validate_appearance(&appearance).unwrap_err();
        assert!(err.to_string().contains("Unknown color 'glow'"));

        appearance.color_overrides.remove("glow");
        appearance
            .color_overrides
            .insert("accent".to_string(), "red; }".to_string());
        assert!(validate_appearance(&appearance).is_err());
    }

    #[test]
    fn test_tuning() {
        assert!(validate_tuning(&HeightTuning::default()).is_ok());
        let tuning = HeightTuning {
            words_per_line: 0,
            ..Default::default()
        };
        assert!(validate_tuning(&tuning).is_err());
    }
}
