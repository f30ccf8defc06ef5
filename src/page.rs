//! Site file loading and single-page HTML output

use crate::appearance::{AppearanceSettings, Section};
use crate::error::{Error, Result};
use crate::filter::WorldItem;
use crate::height::{HeightTuning, OverviewContent, OverviewLink};
use crate::stylesheet::render_stylesheet;
use crate::template::sanitize_css_url;
use crate::world::{render_world_section, WORLD_FILTER_SCRIPT};
use chrono::{DateTime, Utc};
use minijinja::{context, Environment};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// HTML template for the site page
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <style>
{{ stylesheet | safe }}
    </style>
</head>
<body>
    <header class="site-banner"{% if banner_image %} style="background-image: url('{{ banner_image }}')"{% endif %}>
        <h1>{{ title }}</h1>
    </header>
    <div class="site-wrapper">
        <div class="site-body">
            <nav class="site-nav" role="tablist">
                {% for section in sections %}
                <button type="button" class="nav-tab{% if loop.first %} active{% endif %}" role="tab" data-section="{{ section.id }}">{{ section.label }}</button>
                {% endfor %}
            </nav>
            <main class="main-container">
                {% for section in sections %}
                <section class="content-panel" id="{{ section.id }}" role="tabpanel"{% if not loop.first %} hidden{% endif %}>
                    <h2>{{ section.label }}</h2>
                    {% if section.id == "overview" %}
                    <div class="overview">
                        {% if overview.title %}<h3 class="overview-title">{{ overview.title }}</h3>{% endif %}
                        {% if overview.links %}
                        <div class="overview-links">
                            {% for link in overview.links %}<a class="btn" href="{{ link.url }}">{{ link.label }}</a>{% endfor %}
                        </div>
                        {% endif %}
                        {% if overview.image %}<img class="overview-image" src="{{ overview.image }}" alt="{{ overview.title }}">{% endif %}
                        <div class="overview-text">
                            {% for paragraph in paragraphs %}<p>{{ paragraph }}</p>{% endfor %}
                        </div>
                    </div>
                    {% elif section.id == "world" %}
{{ world_section | safe }}
                    {% else %}
                    <p class="world-empty">Nothing here yet.</p>
                    {% endif %}
                </section>
                {% endfor %}
            </main>
        </div>
        <footer class="site-footer">
            {% if generated_at %}<p>Last built: {{ generated_at }}</p>{% endif %}
        </footer>
    </div>
    <script>
        document.querySelectorAll('.site-nav').forEach(function (nav) {
            nav.addEventListener('click', function (event) {
                var tab = event.target.closest('[data-section]');
                if (!tab) {
                    return;
                }
                nav.querySelectorAll('.nav-tab').forEach(function (t) {
                    t.classList.toggle('active', t === tab);
                });
                document.querySelectorAll('.content-panel').forEach(function (panel) {
                    panel.hidden = panel.id !== tab.dataset.section;
                });
            });
        });
    </script>
    <script>
{{ filter_script | safe }}
    </script>
</body>
</html>
"#;

/// Everything needed to build a site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteFile {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    pub appearance: AppearanceSettings,
    pub tuning: HeightTuning,
    pub overview: OverviewContent,
    pub world: Vec<WorldItem>,
}

impl SiteFile {
    /// Load a site file from JSON
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let site: Self = serde_json::from_str(&content)?;
        Ok(site)
    }

    /// Save the site file as pretty JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::FileWriteError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| Error::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Page title, falling back to the overview title
    pub fn display_title(&self) -> &str {
        [self.title.trim(), self.overview.title.trim()]
            .into_iter()
            .find(|t| !t.is_empty())
            .unwrap_or("Untitled World")
    }

    /// A small demonstration site
    pub fn sample() -> Self {
        let world = vec![
            WorldItem {
                name: "Saltmarrow Harbor".to_string(),
                category: "Location".to_string(),
                status: "Active".to_string(),
                tags: vec!["coastal".to_string(), "trade".to_string(), "!smugglers".to_string()],
                description: "A crowded port built on the ribs of a leviathan.".to_string(),
                ..Default::default()
            },
            WorldItem {
                name: "The Ember Court".to_string(),
                category: "Faction".to_string(),
                status: "Active".to_string(),
                tags: vec!["nobility".to_string(), "fire".to_string()],
                description: "Rulers who keep a flame lit for every oath sworn.".to_string(),
                ..Default::default()
            },
            WorldItem {
                name: "Glasswing Moth".to_string(),
                category: "Creature".to_string(),
                status: "Endangered".to_string(),
                tags: vec!["coastal".to_string(), "!spoiler-key-to-the-vault".to_string()],
                description: "Its wings refract moonlight into readable runes.".to_string(),
                ..Default::default()
            },
        ];

        Self {
            title: "The Shattered Isles".to_string(),
            banner_image: None,
            appearance: AppearanceSettings::default(),
            tuning: HeightTuning::default(),
            overview: OverviewContent {
                title: "Welcome to the Isles".to_string(),
                links: vec![OverviewLink {
                    label: "World".to_string(),
                    url: "#world".to_string(),
                }],
                text: "An archipelago split by a falling star.\n\nEach island keeps its own calendar."
                    .to_string(),
                image: None,
            },
            world,
        }
    }
}

/// Section data for template rendering
#[derive(Debug, Clone, Serialize)]
struct SectionData {
    id: &'static str,
    label: &'static str,
}

impl From<Section> for SectionData {
    fn from(section: Section) -> Self {
        Self {
            id: section.id(),
            label: section.label(),
        }
    }
}

/// Render the complete page with the stylesheet inlined
pub fn render_page(site: &SiteFile, generated_at: Option<DateTime<Utc>>) -> Result<String> {
    let stylesheet = render_stylesheet(&site.appearance, &site.overview, &site.tuning)?;
    render_page_with_stylesheet(site, &stylesheet, generated_at)
}

fn render_page_with_stylesheet(
    site: &SiteFile,
    stylesheet: &str,
    generated_at: Option<DateTime<Utc>>,
) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)?;
    let template = env.get_template("page.html")?;

    let sections: Vec<SectionData> = site
        .appearance
        .sections
        .enabled()
        .into_iter()
        .map(SectionData::from)
        .collect();

    let world_section = render_world_section(&site.world, &site.appearance)?;
    let generated_at = generated_at.map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    let html = template.render(context! {
        title => site.display_title(),
        banner_image => site
            .banner_image
            .as_deref()
            .map(sanitize_css_url)
            .filter(|url| !url.is_empty()),
        stylesheet => stylesheet,
        sections => sections,
        overview => &site.overview,
        paragraphs => site.overview.paragraphs(),
        world_section => world_section,
        filter_script => WORLD_FILTER_SCRIPT,
        generated_at => generated_at,
    })?;

    Ok(html)
}

/// Write `index.html` and `style.css` into `out_dir`, returning the index path
pub fn write_site(
    site: &SiteFile,
    out_dir: &Path,
    generated_at: Option<DateTime<Utc>>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|e| Error::FileWriteError {
        path: out_dir.display().to_string(),
        source: e,
    })?;

    let stylesheet = render_stylesheet(&site.appearance, &site.overview, &site.tuning)?;
    let html = render_page_with_stylesheet(site, &stylesheet, generated_at)?;

    let index_path = out_dir.join("index.html");
    std::fs::write(&index_path, html).map_err(|e| Error::FileWriteError {
        path: index_path.display().to_string(),
        source: e,
    })?;

    let css_path = out_dir.join("style.css");
    std::fs::write(&css_path, &stylesheet).map_err(|e| Error::FileWriteError {
        path: css_path.display().to_string(),
        source: e,
    })?;

    info!("Wrote {} and {}", index_path.display(), css_path.display());

    Ok(index_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_sample_page() {
        let site = SiteFile::sample();
        let html = render_page(&site, None).unwrap();

        assert!(html.contains("<title>The Shattered Isles</title>"));
        assert!(html.contains(r#"data-section="overview""#));
        assert!(html.contains(r#"data-section="world""#));
        assert!(!html.contains(r#"data-section="plans""#));
        assert!(html.contains("<p>An archipelago split by a falling star.</p>"));
        assert!(html.contains("Saltmarrow Harbor"));
        assert!(html.contains("/* navigation: current */"));
        assert!(!html.contains("Last built"));
    }

    #[test]
    fn test_placeholder_panels_and_timestamp() {
        let mut site = SiteFile::sample();
        site.appearance.sections.plans = true;
        let built = Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap();

        let html = render_page(&site, Some(built)).unwrap();
        assert!(html.contains(r#"id="plans""#));
        assert!(html.contains("Nothing here yet."));
        assert!(html.contains("Last built: 2024-03-09 12:30:00 UTC"));
    }

    #[test]
    fn test_banner_image_cannot_leave_url() {
        let mut site = SiteFile::sample();
        site.banner_image = Some(
            "x.png'); position: fixed; inset: 0; z-index: 99; background: red; content: ('"
                .to_string(),
        );

        let html = render_page(&site, None).unwrap();
        assert!(html.contains(
            "url('x.png position: fixed inset: 0 z-index: 99 background: red content:')"
        ));
        assert!(!html.contains("x.png&#x27;"));
    }

    #[test]
    fn test_display_title_fallbacks() {
        let mut site = SiteFile::default();
        assert_eq!(site.display_title(), "Untitled World");

        site.overview.title = "Overview Title".to_string();
        assert_eq!(site.display_title(), "Overview Title");

        site.title = "Site".to_string();
        assert_eq!(site.display_title(), "Site");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteFile::load_from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::FileReadError { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("site.json");

        let site = SiteFile::sample();
        site.save_to_file(&path).unwrap();

        let loaded = SiteFile::load_from_file(&path).unwrap();
        assert_eq!(loaded, site);
    }

    #[test]
    fn test_write_site() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("public");

        let index = write_site(&SiteFile::sample(), &out_dir, None).unwrap();
        assert_eq!(index, out_dir.join("index.html"));

        let css = std::fs::read_to_string(out_dir.join("style.css")).unwrap();
        let html = std::fs::read_to_string(&index).unwrap();
        assert!(css.starts_with("/* base */"));
        assert!(html.contains(css.lines().nth(1).unwrap()));
    }
}
