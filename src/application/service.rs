//! Orchestration: assemble the pool, select, shape previews.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::application::pool::{PostsProvider, assemble_pool};
use crate::application::preview::PostPreview;
use crate::application::selector::select_related;
use crate::config::{ConfigError, SelectionConfig};
use crate::domain::entities::PostRecord;

/// Related-content widget backend: fetches candidates through the provider,
/// ranks them, and returns preview cards. A provider failure degrades to an
/// empty result so the widget shows nothing instead of breaking the page.
#[derive(Clone)]
pub struct RelatedContentService {
    provider: Arc<dyn PostsProvider>,
    config: SelectionConfig,
}

impl std::fmt::Debug for RelatedContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelatedContentService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RelatedContentService {
    pub fn new(
        provider: Arc<dyn PostsProvider>,
        config: SelectionConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Related previews with a freshly OS-seeded generator for the fallback
    /// fill. Use [`Self::related_previews_with`] to inject a seeded one.
    pub async fn related_previews(&self, current: &PostRecord) -> Vec<PostPreview> {
        self.related_previews_with(current, &mut StdRng::from_os_rng())
            .await
    }

    pub async fn related_previews_with<R: Rng>(
        &self,
        current: &PostRecord,
        rng: &mut R,
    ) -> Vec<PostPreview> {
        let pool = match assemble_pool(self.provider.as_ref(), current, self.config.pool_limit)
            .await
        {
            Ok(pool) => pool,
            Err(err) => {
                warn!(post_id = %current.id, error = %err, "related-posts fetch failed, rendering none");
                Vec::new()
            }
        };

        let selection = select_related(
            current,
            &pool,
            self.config.desired_count,
            &self.config.weights,
            rng,
        );
        debug!(
            post_id = %current.id,
            pool = pool.len(),
            selected = selection.len(),
            "related posts selected"
        );

        selection
            .iter()
            .map(|post| PostPreview::from_record(post, &self.config.default_cover_url))
            .collect()
    }
}
