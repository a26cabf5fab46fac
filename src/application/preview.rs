//! Preview-card data shaping for selected posts.
//!
//! Rendering stays with the caller; this module only prepares the fields a
//! related-posts card shows: a brief truncated to 100 characters, at most
//! three tag names, and a cover image with a configured fallback.

use serde::Serialize;

use crate::domain::entities::PostRecord;

pub const BRIEF_PREVIEW_CHARS: usize = 100;
pub const PREVIEW_TAG_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPreview {
    pub id: String,
    pub title: String,
    pub brief: String,
    pub slug: String,
    pub tag_names: Vec<String>,
    pub cover_image_url: String,
}

impl PostPreview {
    pub fn from_record(record: &PostRecord, default_cover_url: &str) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            brief: truncate_brief(&record.brief),
            slug: record.slug.clone(),
            tag_names: record
                .tags
                .iter()
                .take(PREVIEW_TAG_LIMIT)
                .map(|tag| tag.name.clone())
                .collect(),
            cover_image_url: record
                .cover_image_url
                .clone()
                .unwrap_or_else(|| default_cover_url.to_string()),
        }
    }
}

// Counts chars, not bytes, so multi-byte briefs never split mid-character.
fn truncate_brief(brief: &str) -> String {
    if brief.chars().count() <= BRIEF_PREVIEW_CHARS {
        return brief.to_string();
    }
    let mut truncated: String = brief.chars().take(BRIEF_PREVIEW_CHARS).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TagRef;

    fn record(brief: &str, tags: &[&str], cover: Option<&str>) -> PostRecord {
        PostRecord {
            id: "p1".to_string(),
            title: "A title".to_string(),
            brief: brief.to_string(),
            slug: "a-title".to_string(),
            tags: tags
                .iter()
                .map(|name| TagRef {
                    id: format!("tag-{name}"),
                    name: name.to_string(),
                    slug: name.to_string(),
                })
                .collect(),
            published_at: None,
            cover_image_url: cover.map(str::to_string),
        }
    }

    #[test]
    fn short_briefs_pass_through() {
        let preview = PostPreview::from_record(&record("short note", &[], None), "/fallback.png");
        assert_eq!(preview.brief, "short note");
    }

    #[test]
    fn long_briefs_truncate_on_char_boundaries() {
        let brief = "ő".repeat(120);
        let preview = PostPreview::from_record(&record(&brief, &[], None), "/fallback.png");

        assert_eq!(preview.brief.chars().count(), BRIEF_PREVIEW_CHARS + 1);
        assert!(preview.brief.ends_with('…'));
    }

    #[test]
    fn tag_names_cap_at_three() {
        let preview = PostPreview::from_record(
            &record("", &["one", "two", "three", "four"], None),
            "/fallback.png",
        );
        assert_eq!(preview.tag_names, vec!["one", "two", "three"]);
    }

    #[test]
    fn missing_cover_falls_back_to_default() {
        let with_cover = PostPreview::from_record(
            &record("", &[], Some("https://cdn.example.com/c.png")),
            "/fallback.png",
        );
        let without_cover = PostPreview::from_record(&record("", &[], None), "/fallback.png");

        assert_eq!(with_cover.cover_image_url, "https://cdn.example.com/c.png");
        assert_eq!(without_cover.cover_image_url, "/fallback.png");
    }
}
