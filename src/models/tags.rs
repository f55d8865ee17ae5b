//! Tag probing for boundary and street features.

use serde::Deserialize;

use super::source::Tags;

/// Name-like street tags, in priority order. The first present value is the
/// display name; every present value is an alias.
pub const NAME_TAGS: &[&str] = &[
    "name",
    "alt_name",
    "short_name",
    "nickname",
    "old_name",
    "name:left",
    "name:right",
    "bridge:name",
];

/// Collect every non-blank string name from the tags, in [`NAME_TAGS`] order.
pub fn collect_names(tags: &Tags) -> Vec<String> {
    NAME_TAGS
        .iter()
        .filter_map(|key| tags.get(*key).and_then(|v| v.as_str()))
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Required tags on the boundary feature
#[derive(Debug, Clone, Deserialize)]
pub struct BoundaryTags {
    pub name: String,
    #[serde(default)]
    pub population: Option<String>,
}

impl BoundaryTags {
    /// Validate the boundary's tags. Unknown tags are ignored.
    pub fn parse(tags: &Tags) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(tags.clone()))
    }
}
