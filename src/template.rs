//! CSS templating helper
//!
//! Every style template is rendered through one minijinja environment whose
//! formatter strips characters that could end a declaration, open or close a
//! block or comment, or break out of a `<style>` element. Colors and font
//! stacks from a site file can therefore never change the structure of the
//! stylesheet.

use crate::appearance::{
    AppearanceSettings, ButtonStyle, CardStyle, ContainerStyle, NavigationStyle, OverviewStyle,
};
use crate::error::Result;
use crate::palette::{FontSet, Palette};
use crate::styles::{self, StyleRegistry, StyleTemplate};
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;
use std::fmt::Write;

/// Values available to every style template
#[derive(Debug, Clone, Serialize)]
pub struct StyleContext {
    pub colors: Palette,
    pub fonts: FontSet,
    /// Maximum content width in pixels
    pub site_width: u32,
    /// Banner height in pixels, 0 hides the banner
    pub banner_height: u32,
    /// Minimum height of the main container in pixels
    pub min_height: u32,
    /// Whether the navigation tabs are stacked beside the content
    pub vertical_nav: bool,
}

impl StyleContext {
    /// Resolve the palette (with overrides) and fonts selected by the settings
    pub fn new(appearance: &AppearanceSettings, min_height: u32) -> Self {
        let mut colors = appearance.color_scheme.palette();
        colors.apply_overrides(&appearance.color_overrides);

        Self {
            colors,
            fonts: appearance.font_set.fonts(),
            site_width: appearance.site_width,
            banner_height: appearance.banner_size.height(),
            min_height,
            vertical_nav: appearance.navigation_style.is_vertical(),
        }
    }
}

/// Remove everything that could change the structure around an interpolated
/// CSS value: block and declaration delimiters, markup, escapes, comment
/// delimiters and unbalanced quotes
pub fn sanitize_css_value(raw: &str) -> String {
    let mut value: String = raw
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | ';' | '<' | '>' | '\\' | '\n' | '\r'))
        .collect();

    // Removing one delimiter can join its neighbours into another
    while value.contains("/*") || value.contains("*/") {
        value = value.replace("/*", "").replace("*/", "");
    }

    for quote in ['\'', '"'] {
        if value.matches(quote).count() % 2 != 0 {
            value.retain(|c| c != quote);
        }
    }

    value
}

/// Sanitize a value placed inside `url('...')`, where quotes and parentheses
/// would also end the argument
pub fn sanitize_css_url(raw: &str) -> String {
    let mut value = sanitize_css_value(raw);
    value.retain(|c| !matches!(c, '\'' | '"' | '(' | ')'));
    value.trim().to_string()
}

/// Precompiled style templates
pub struct CssEngine {
    env: Environment<'static>,
}

impl CssEngine {
    /// Compile the base template and every variant of every registry
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_formatter(|out, _state, value| {
            write!(out, "{}", sanitize_css_value(&value.to_string())).map_err(|_| {
                minijinja::Error::new(ErrorKind::WriteFailure, "failed to write css value")
            })
        });

        env.add_template(styles::BASE.name, styles::BASE.source)?;
        register::<NavigationStyle>(&mut env)?;
        register::<ContainerStyle>(&mut env)?;
        register::<ButtonStyle>(&mut env)?;
        register::<CardStyle>(&mut env)?;
        register::<OverviewStyle>(&mut env)?;

        Ok(Self { env })
    }

    /// Render one template against the context
    pub fn render(&self, template: StyleTemplate, ctx: &StyleContext) -> Result<String> {
        let tmpl = self.env.get_template(template.name)?;
        Ok(tmpl.render(ctx)?)
    }
}

fn register<S: StyleRegistry>(env: &mut Environment<'static>) -> Result<()> {
    for variant in S::ALL {
        let template = variant.template();
        env.add_template(template.name, template.source)?;
    }
    Ok(())
}
