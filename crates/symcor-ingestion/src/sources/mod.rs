//! Source clients for patient reports and literature.

pub mod pubmed;
pub mod reddit;

use async_trait::async_trait;

use crate::models::{PaperMetadata, RedditPost};

/// Common interface for literature source clients.
#[async_trait]
pub trait LiteratureSource: Send + Sync {
    /// Search for papers matching a query, returns metadata list.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> anyhow::Result<Vec<PaperMetadata>>;
}

/// Common interface for patient-report source clients.
#[async_trait]
pub trait SocialSource: Send + Sync {
    /// Search one community for posts matching a query.
    async fn search(
        &self,
        community: &str,
        query: &str,
        max_results: usize,
    ) -> anyhow::Result<Vec<RedditPost>>;
}
