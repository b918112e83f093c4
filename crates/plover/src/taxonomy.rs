use std::collections::HashMap;

use derive_more::Deref;
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::content::ContentRecord;
use crate::route::{RoutePath, TagSummary};

/// Display information for a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TagInfo {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The tags declared in the site configuration.
///
/// Posts may use tags that are not declared here; those fall back to a
/// capitalized form of the tag and an empty description.
#[derive(Debug, Clone, Default, Deref, Deserialize)]
#[serde(transparent)]
pub struct TagRegistry(IndexMap<String, TagInfo>);

impl TagRegistry {
    pub fn insert(&mut self, tag: impl Into<String>, info: TagInfo) {
        self.0.insert(tag.into(), info);
    }

    pub fn name(&self, tag: &str) -> String {
        self.0
            .get(tag)
            .and_then(|info| info.name.clone())
            .unwrap_or_else(|| capitalize(tag))
    }

    pub fn description(&self, tag: &str) -> String {
        self.0
            .get(tag)
            .and_then(|info| info.description.clone())
            .unwrap_or_default()
    }
}

/// The distinct tags used across a set of posts, in the order they were first
/// encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct TagIndex(IndexSet<String>);

impl TagIndex {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ContentRecord>) -> Self {
        Self(
            records
                .into_iter()
                .flat_map(|record| record.tags.iter().cloned())
                .collect(),
        )
    }
}

/// Summarizes every tag used by `records`, sorted by tag.
pub fn tag_summaries(
    records: &[ContentRecord],
    registry: &TagRegistry,
    tag_base: &str,
) -> Vec<TagSummary> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in records.iter().flat_map(|record| record.tags.iter()) {
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }

    let mut tags = counts.into_iter().collect::<Vec<_>>();
    tags.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    tags.into_iter()
        .map(|(tag, posts)| TagSummary {
            tag: tag.to_string(),
            name: registry.name(tag),
            description: registry.description(tag),
            posts,
            path: RoutePath::from_segments([tag_base, tag]),
        })
        .collect()
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
