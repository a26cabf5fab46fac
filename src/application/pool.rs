//! Candidate pool assembly over an abstract posts provider.
//!
//! The provider is whatever fetch layer the caller already has (a content
//! API client, a fixture in tests). Assembly pages through posts sharing the
//! current post's tags until the pool limit is reached or the provider runs
//! out of pages, skipping the current post and deduplicating across pages.

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::PostRecord;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(String),
    #[error("provider returned malformed data: {0}")]
    Malformed(String),
}

impl ProviderError {
    pub fn from_request(err: impl std::fmt::Display) -> Self {
        Self::Request(err.to_string())
    }
}

/// One page of candidate posts plus the cursor for the next page, if any.
#[derive(Debug, Clone, Default)]
pub struct PostBatch {
    pub posts: Vec<PostRecord>,
    pub next_cursor: Option<String>,
}

/// Source of candidate posts filtered by tag slugs.
///
/// An empty `tag_slugs` asks for posts regardless of tag; providers that
/// cannot express that may return an empty batch.
#[async_trait]
pub trait PostsProvider: Send + Sync {
    async fn posts_by_tags(
        &self,
        tag_slugs: &[String],
        first: usize,
        after: Option<&str>,
    ) -> Result<PostBatch, ProviderError>;
}

/// Page through the provider until at least `limit` distinct candidates are
/// gathered or pages run out. The check happens before each fetch, so the
/// final page may push the pool slightly past `limit`; the selector bounds
/// the output regardless.
pub async fn assemble_pool(
    provider: &dyn PostsProvider,
    current: &PostRecord,
    limit: usize,
) -> Result<Vec<PostRecord>, ProviderError> {
    let tag_slugs = current.tag_slugs();
    let mut pool: Vec<PostRecord> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut after: Option<String> = None;

    loop {
        if pool.len() >= limit {
            break;
        }

        let batch = provider
            .posts_by_tags(&tag_slugs, limit, after.as_deref())
            .await?;
        for post in batch.posts {
            if post.id == current.id || !seen.insert(post.id.clone()) {
                continue;
            }
            pool.push(post);
        }

        match batch.next_cursor {
            Some(cursor) => after = Some(cursor),
            None => break,
        }
    }

    Ok(pool)
}
