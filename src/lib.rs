//! Related-content selection for blog frontends.
//!
//! Given the currently viewed post and a pool of candidate posts, this crate
//! scores every candidate by tag overlap, title containment, and publish-date
//! proximity, then returns a bounded, deduplicated, ordered list suitable for
//! a "related posts" widget. Fetching candidates and rendering the widget are
//! the caller's concern; selection itself performs no I/O, and the only
//! randomness is the fallback fill, fed by a caller-supplied generator.

pub mod application;
pub mod config;
pub mod domain;

pub use application::pool::{PostBatch, PostsProvider, ProviderError, assemble_pool};
pub use application::preview::PostPreview;
pub use application::selector::select_related;
pub use application::service::RelatedContentService;
pub use config::{ConfigError, SelectionConfig};
pub use domain::entities::{PostRecord, TagRef};
pub use domain::relatedness::{RelatednessWeights, score};
