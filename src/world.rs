//! World section HTML fragment and its client-side filter script

use crate::appearance::AppearanceSettings;
use crate::error::Result;
use crate::filter::WorldItem;
use minijinja::{context, Environment};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

const WORLD_TEMPLATE: &str = r#"<div class="world-section card-{{ card_style }}" data-world-root>
    <div class="world-controls">
        <input type="search" placeholder="Search the world..." aria-label="Search world entries" data-world-search>
        {% if statuses %}
        <select aria-label="Filter by status" data-world-status>
            <option value="">All statuses</option>
            {% for status in statuses %}
            <option value="{{ status }}">{{ status }}</option>
            {% endfor %}
        </select>
        {% endif %}
        <button type="button" class="btn" data-world-mode="any">Match any tag</button>
        <button type="button" class="btn" data-world-clear>Clear</button>
    </div>
    {% if tag_cloud %}
    <ul class="tag-list world-tag-cloud">
        {% for tag in tag_cloud %}
        <li><button type="button" class="tag-link" data-world-tag="{{ tag.key }}">{{ tag.label }}</button></li>
        {% endfor %}
    </ul>
    {% endif %}
    {% if cards %}
    <div class="world-list">
        {% for card in cards %}
        <article class="world-item world-card" id="world-{{ card.id }}" data-name="{{ card.name }}" data-category="{{ card.category }}" data-status="{{ card.status }}" data-tags="{{ card.tag_keys }}" data-text="{{ card.full_text }}">
            {% if card.image %}<img src="{{ card.image }}" alt="{{ card.name }}" loading="lazy">{% endif %}
            <h3>{% if card.link %}<a href="{{ card.link }}">{{ card.name }}</a>{% else %}{{ card.name }}{% endif %}</h3>
            <p class="item-meta">{{ card.category }}{% if card.category and card.status %} &middot; {% endif %}{{ card.status }}</p>
            {% if card.description %}<p class="item-description">{{ card.description }}</p>{% endif %}
            {% if card.tags %}
            <ul class="tag-list">
                {% for tag in card.tags %}
                <li><button type="button" class="tag-link" data-world-tag="{{ tag.key }}">{{ tag.label }}</button></li>
                {% endfor %}
            </ul>
            {% endif %}
        </article>
        {% endfor %}
    </div>
    <p class="world-empty" data-world-empty hidden>No entries match the current filters.</p>
    {% else %}
    <p class="world-empty">No world entries yet.</p>
    {% endif %}
</div>
"#;

/// Client-side filter for rendered world sections. Each section keeps its own
/// filter state; the predicate mirrors [`crate::filter::WorldFilter::matches`].
pub const WORLD_FILTER_SCRIPT: &str = r#"(function () {
    'use strict';

    function createWorldFilter(root) {
        var state = { search: '', status: '', tags: [], mode: 'any' };
        var items = Array.prototype.slice.call(root.querySelectorAll('.world-item'));
        var empty = root.querySelector('[data-world-empty]');
        var modeButton = root.querySelector('[data-world-mode]');

        function contains(haystack, needle) {
            return (haystack || '').toLowerCase().indexOf(needle) !== -1;
        }

        function matches(el) {
            var d = el.dataset;
            var term = state.search.trim().toLowerCase();
            if (term) {
                var fields = [d.name, d.category, d.status, d.tags, d.text];
                if (!fields.some(function (f) { return contains(f, term); })) {
                    return false;
                }
            }
            if (state.status && d.status !== state.status) {
                return false;
            }
            if (state.tags.length) {
                var keys = (d.tags || '').split('|').filter(Boolean);
                var hit = function (tag) {
                    return keys.some(function (key) { return key.indexOf(tag) !== -1; });
                };
                var ok = state.mode === 'all' ? state.tags.every(hit) : state.tags.some(hit);
                if (!ok) {
                    return false;
                }
            }
            return true;
        }

        function apply() {
            var shown = 0;
            items.forEach(function (el) {
                var visible = matches(el);
                el.hidden = !visible;
                if (visible) {
                    shown += 1;
                }
            });
            root.querySelectorAll('[data-world-tag]').forEach(function (btn) {
                btn.classList.toggle('selected', state.tags.indexOf(btn.dataset.worldTag) !== -1);
            });
            if (empty) {
                empty.hidden = shown !== 0;
            }
        }

        function toggleTag(tag) {
            var i = state.tags.indexOf(tag);
            if (i === -1) {
                state.tags.push(tag);
            } else {
                state.tags.splice(i, 1);
            }
            apply();
        }

        var search = root.querySelector('[data-world-search]');
        if (search) {
            search.addEventListener('input', function () {
                state.search = search.value;
                apply();
            });
        }

        var status = root.querySelector('[data-world-status]');
        if (status) {
            status.addEventListener('change', function () {
                state.status = status.value;
                apply();
            });
        }

        root.addEventListener('click', function (event) {
            var tagButton = event.target.closest('[data-world-tag]');
            if (tagButton) {
                toggleTag(tagButton.dataset.worldTag);
            }
        });

        if (modeButton) {
            modeButton.addEventListener('click', function () {
                state.mode = state.mode === 'any' ? 'all' : 'any';
                modeButton.dataset.worldMode = state.mode;
                modeButton.textContent = state.mode === 'all' ? 'Match all tags' : 'Match any tag';
                apply();
            });
        }

        var clear = root.querySelector('[data-world-clear]');
        if (clear) {
            clear.addEventListener('click', function () {
                state.search = '';
                state.status = '';
                state.tags = [];
                if (search) {
                    search.value = '';
                }
                if (status) {
                    status.value = '';
                }
                apply();
            });
        }

        apply();
    }

    document.querySelectorAll('[data-world-root]').forEach(createWorldFilter);
})();
"#;

/// Tag button data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TagChip {
    key: String,
    label: String,
}

/// Card data for template rendering
#[derive(Debug, Clone, Serialize)]
struct WorldCard {
    id: String,
    name: String,
    category: String,
    status: String,
    description: String,
    image: Option<String>,
    link: Option<String>,
    tag_keys: String,
    full_text: String,
    tags: Vec<TagChip>,
}

impl WorldCard {
    fn new(index: usize, item: &WorldItem) -> Self {
        let fields = item.searchable();
        let slug = item
            .name
            .to_lowercase()
            .replace(|c: char| !c.is_alphanumeric(), "-");

        Self {
            id: format!("{}-{}", index, slug.trim_matches('-')),
            name: item.name.clone(),
            category: item.category.clone(),
            status: item.status.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            link: item.link.clone(),
            tag_keys: fields.tags,
            full_text: fields.full_text,
            tags: item
                .visible_tags()
                .into_iter()
                .map(|tag| TagChip {
                    label: tag.label().to_string(),
                    key: tag.match_key,
                })
                .collect(),
        }
    }
}

/// Distinct non-empty statuses, sorted
fn distinct_statuses(items: &[WorldItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.status.trim())
        .filter(|status| !status.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct visible tags across all items, sorted by key; the first label seen wins
fn tag_cloud(cards: &[WorldCard]) -> Vec<TagChip> {
    let mut chips: BTreeMap<&str, &TagChip> = BTreeMap::new();
    for chip in cards.iter().flat_map(|card| card.tags.iter()) {
        chips.entry(chip.key.as_str()).or_insert(chip);
    }
    chips.into_values().cloned().collect()
}

/// Render the world section. Returns an empty string when the section is disabled.
pub fn render_world_section(items: &[WorldItem], appearance: &AppearanceSettings) -> Result<String> {
    if !appearance.sections.world {
        return Ok(String::new());
    }

    let mut env = Environment::new();
    env.add_template("world.html", WORLD_TEMPLATE)?;
    let template = env.get_template("world.html")?;

    let cards: Vec<WorldCard> = items
        .iter()
        .enumerate()
        .map(|(index, item)| WorldCard::new(index, item))
        .collect();

    let html = template.render(context! {
        card_style => appearance.card_style,
        statuses => distinct_statuses(items),
        tag_cloud => tag_cloud(&cards),
        cards => cards,
    })?;

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, status: &str, tags: &[&str]) -> WorldItem {
        WorldItem {
            name: name.to_string(),
            category: "Faction".to_string(),
            status: status.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: "Keeps to the shadows.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_world() {
        let html = render_world_section(&[], &AppearanceSettings::default()).unwrap();
        assert!(html.contains("No world entries yet."));
        assert!(!html.contains("data-world-status"));
    }

    #[test]
    fn test_disabled_world_renders_nothing() {
        let mut appearance = AppearanceSettings::default();
        appearance.sections.world = false;

        let html = render_world_section(&[item("Guild", "Active", &[])], &appearance).unwrap();
        assert!(html.is_empty());
    }

    #[test]
    fn test_hidden_tags_only_in_data_attribute() {
        let items = vec![item("Night Guild", "Active", &["Thieves", "!Betrayal"])];
        let html = render_world_section(&items, &AppearanceSettings::default()).unwrap();

        assert!(html.contains(r#"data-tags="thieves|betrayal""#));
        assert!(html.contains(">Thieves</button>"));
        assert!(!html.contains(">Betrayal</button>"));
        assert!(!html.contains("!Betrayal"));
        assert!(html.contains(r#"id="world-0-night-guild""#));
    }

    #[test]
    fn test_statuses_and_tag_cloud_are_distinct() {
        let items = vec![
            item("A", "Active", &["Coast"]),
            item("B", "Ruined", &["coast", "North"]),
            item("C", "Active", &[]),
        ];
        let html = render_world_section(&items, &AppearanceSettings::default()).unwrap();

        assert_eq!(html.matches(r#"<option value="Active">"#).count(), 1);
        assert_eq!(html.matches(r#"<option value="Ruined">"#).count(), 1);

        let cards: Vec<_> = items.iter().enumerate().map(|(i, it)| WorldCard::new(i, it)).collect();
        let cloud = tag_cloud(&cards);
        let keys: Vec<_> = cloud.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["coast", "north"]);
        assert_eq!(cloud[0].label, "Coast");
    }

    #[test]
    fn test_content_is_html_escaped() {
        let items = vec![WorldItem {
            description: "<script>alert(1)</script>".to_string(),
            ..item("Bad & Co", "", &[])
        }];
        let html = render_world_section(&items, &AppearanceSettings::default()).unwrap();

        assert!(html.contains("Bad &amp; Co"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_script_has_no_globals() {
        assert!(WORLD_FILTER_SCRIPT.starts_with("(function () {"));
        assert!(!WORLD_FILTER_SCRIPT.contains("window."));
        assert!(!WORLD_FILTER_SCRIPT.contains("var selectedWorldTags"));
    }
}
