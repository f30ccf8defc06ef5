//! World items and the filter predicate behind the world section controls

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Prefix marking a tag as hidden from the visible tag list
pub const HIDDEN_TAG_PREFIX: char = '!';

/// A tag as authored, with its visibility and the key used for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Tag text as written in the site file
    pub raw: String,
    /// Hidden tags are indexed for filtering but never listed
    pub visible: bool,
    /// Lowercased tag text without the hidden prefix, `|` replaced by a space
    pub match_key: String,
}

impl Tag {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let (visible, text) = match trimmed.strip_prefix(HIDDEN_TAG_PREFIX) {
            Some(rest) => (false, rest),
            None => (true, trimmed),
        };

        Self {
            raw: raw.to_string(),
            visible,
            match_key: tag_key(text),
        }
    }

    /// Text shown for a visible tag
    pub fn label(&self) -> &str {
        self.raw.trim()
    }
}

/// A single worldbuilding entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldItem {
    pub name: String,
    pub category: String,
    pub status: String,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl WorldItem {
    /// Parsed tags; tags with nothing to match on are dropped
    pub fn tags(&self) -> Vec<Tag> {
        self.tags
            .iter()
            .map(|raw| Tag::parse(raw))
            .filter(|tag| !tag.match_key.is_empty())
            .collect()
    }

    pub fn visible_tags(&self) -> Vec<Tag> {
        self.tags().into_iter().filter(|tag| tag.visible).collect()
    }

    /// Fields the filter looks at, as they are rendered into the page
    pub fn searchable(&self) -> SearchableFields {
        let tags = self.tags();

        let tag_keys = tags
            .iter()
            .map(|tag| tag.match_key.as_str())
            .collect::<Vec<_>>()
            .join("|");

        let mut full_text = vec![
            self.name.as_str(),
            self.category.as_str(),
            self.status.as_str(),
            self.description.as_str(),
        ];
        full_text.extend(tags.iter().filter(|tag| tag.visible).map(Tag::label));

        SearchableFields {
            name: self.name.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            tags: tag_keys,
            full_text: full_text
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Rendered, searchable view of a world item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchableFields {
    pub name: String,
    pub category: String,
    pub status: String,
    /// Match keys of every tag, hidden ones included, joined with `|`
    pub tags: String,
    pub full_text: String,
}

impl SearchableFields {
    fn tag_keys(&self) -> impl Iterator<Item = &str> {
        self.tags.split('|').filter(|key| !key.is_empty())
    }
}

/// How selected tags combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// At least one selected tag must match
    #[default]
    Any,
    /// Every selected tag must match
    All,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "or" => Ok(Self::Any),
            "all" | "and" => Ok(Self::All),
            other => Err(Error::ConfigError(format!(
                "Invalid tag match mode '{}': expected 'any' or 'all'",
                other
            ))),
        }
    }
}

/// State of the world section filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldFilter {
    /// Free-text search term
    pub search: String,
    /// Required status; empty matches every status
    pub status: String,
    /// Selected tag keys
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: BTreeSet<String>,
    pub mode: MatchMode,
}

/// Match key for tag text. `|` separates keys in [`SearchableFields::tags`].
fn tag_key(text: &str) -> String {
    text.trim().to_lowercase().replace('|', " ")
}

fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    tag_key(tag.strip_prefix(HIDDEN_TAG_PREFIX).unwrap_or(tag))
}

fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Vec::<String>::deserialize(deserializer)?;
    Ok(tags
        .iter()
        .map(|tag| normalize_tag(tag))
        .filter(|key| !key.is_empty())
        .collect())
}

impl WorldFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Select a tag (a leading `!` is ignored)
    pub fn select_tag(mut self, tag: &str) -> Self {
        let key = normalize_tag(tag);
        if !key.is_empty() {
            self.tags.insert(key);
        }
        self
    }

    /// Select the tag if it is not selected, deselect it otherwise.
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let key = normalize_tag(tag);
        if key.is_empty() {
            return false;
        }
        if self.tags.remove(&key) {
            false
        } else {
            self.tags.insert(key);
            true
        }
    }

    /// Reset search, status and tag selection, keeping the match mode
    pub fn clear(&mut self) {
        self.search.clear();
        self.status.clear();
        self.tags.clear();
    }

    /// Whether the filter lets everything through
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status.is_empty() && self.tags.is_empty()
    }

    pub fn matches(&self, fields: &SearchableFields) -> bool {
        self.matches_search(fields) && self.matches_status(fields) && self.matches_tags(fields)
    }

    pub fn matches_item(&self, item: &WorldItem) -> bool {
        self.matches(&item.searchable())
    }

    /// Items that stay visible, in their original order
    pub fn apply<'a>(&self, items: &'a [WorldItem]) -> Vec<&'a WorldItem> {
        items.iter().filter(|item| self.matches_item(item)).collect()
    }

    fn matches_search(&self, fields: &SearchableFields) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        [
            &fields.name,
            &fields.category,
            &fields.status,
            &fields.tags,
            &fields.full_text,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_status(&self, fields: &SearchableFields) -> bool {
        self.status.is_empty() || fields.status == self.status
    }

    fn matches_tags(&self, fields: &SearchableFields) -> bool {
        if self.tags.is_empty() {
            return true;
        }

        let selected: Vec<String> = self
            .tags
            .iter()
            .map(|tag| normalize_tag(tag))
            .filter(|key| !key.is_empty())
            .collect();
        if selected.is_empty() {
            return true;
        }

        let item_tags: Vec<&str> = fields.tag_keys().collect();
        let hit = |selected: &String| item_tags.iter().any(|key| key.contains(selected.as_str()));

        match self.mode {
            MatchMode::Any => selected.iter().any(hit),
            MatchMode::All => selected.iter().all(hit),
        }
    }
}
