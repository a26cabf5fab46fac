//! Post and tag snapshots exchanged with the caller's fetch layer.
//!
//! Records are read-only per selection call; the selector never mutates them
//! and holds nothing between calls.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Tag descriptor attached to a post. `name` comparison is case-insensitive
/// throughout the crate; `slug` addresses the tag in provider queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Snapshot of a published post as the content API reports it.
///
/// `id` is an opaque identifier, unique within a candidate pool.
/// `published_at` may be absent on malformed upstream data; a missing value
/// contributes zero to recency scoring rather than failing the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub brief: String,
    pub slug: String,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

impl PostRecord {
    pub fn tag_slugs(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.slug.clone()).collect()
    }
}
