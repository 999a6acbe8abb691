//! End-to-end collection pipeline.
//!
//! Orchestrates the full flow for a single collection job:
//!   1. Search each configured subreddit for patient posts
//!   2. Deduplicate posts (exact ID + SimHash near-duplicate)
//!   3. Search PubMed for literature on the same condition
//!   4. Return one batch ready for extraction and mining

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::dedup::{check_duplicate, simhash, DedupResult};
use crate::models::{PaperMetadata, RedditPost};
use crate::sources::{LiteratureSource, SocialSource};

/// Parameters for a single collection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionJob {
    /// Condition under study, used as the search query for both sources
    /// (e.g. "PCOS", "finasteride side effects").
    pub condition: String,
    /// Communities to search for patient reports.
    pub subreddits: Vec<String>,
    /// Per-subreddit post bound.
    pub max_posts_per_subreddit: usize,
    /// Literature result bound.
    pub max_papers: usize,
}

impl Default for CollectionJob {
    fn default() -> Self {
        Self {
            condition: "PCOS".to_string(),
            subreddits: vec!["PCOS".to_string()],
            max_posts_per_subreddit: 200,
            max_papers: 100,
        }
    }
}

/// Everything one collection run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionBatch {
    pub posts: Vec<RedditPost>,
    pub papers: Vec<PaperMetadata>,
    pub duplicate_posts_dropped: usize,
}

/// Run a collection job against the given sources.
///
/// Source failures propagate as errors; an empty result set is not a
/// failure and comes back as an empty batch.
#[instrument(skip(social, literature))]
pub async fn run_collection(
    job: &CollectionJob,
    social: &dyn SocialSource,
    literature: &dyn LiteratureSource,
) -> anyhow::Result<CollectionBatch> {
    let mut posts: Vec<RedditPost> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_hashes: Vec<(String, u64)> = Vec::new();
    let mut dropped = 0usize;

    for subreddit in &job.subreddits {
        let found = social
            .search(subreddit, &job.condition, job.max_posts_per_subreddit)
            .await?;
        info!(subreddit = %subreddit, count = found.len(), "posts fetched");

        for post in found {
            match check_duplicate(&post, &seen_ids, &seen_hashes) {
                DedupResult::New => {
                    seen_ids.insert(post.id.clone());
                    seen_hashes.push((post.id.clone(), simhash(&post.full_text())));
                    posts.push(post);
                }
                DedupResult::DuplicateId(id) => {
                    warn!(%id, "dropping re-fetched post");
                    dropped += 1;
                }
                DedupResult::ProbableDuplicate { of_id, distance } => {
                    warn!(%of_id, distance, "dropping near-duplicate post");
                    dropped += 1;
                }
            }
        }
    }

    let papers = literature.search(&job.condition, job.max_papers).await?;
    info!(
        posts = posts.len(),
        papers = papers.len(),
        dropped,
        "collection complete"
    );

    Ok(CollectionBatch {
        posts,
        papers,
        duplicate_posts_dropped: dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CollectionSource;
    use async_trait::async_trait;

    struct FakeSocial;

    #[async_trait]
    impl SocialSource for FakeSocial {
        async fn search(
            &self,
            community: &str,
            _query: &str,
            _max_results: usize,
        ) -> anyhow::Result<Vec<RedditPost>> {
            let post = |id: &str, title: &str| RedditPost {
                id: id.to_string(),
                subreddit: community.to_string(),
                title: title.to_string(),
                body: String::new(),
                author: None,
                created_utc: None,
                score: 0,
                num_comments: 0,
                permalink: None,
                source: CollectionSource::Reddit,
            };
            // "a1" appears twice to exercise ID dedup
            Ok(vec![
                post("a1", "acne and hair loss after starting spironolactone"),
                post("a1", "acne and hair loss after starting spironolactone"),
                post("b2", "completely unrelated question about insurance coverage"),
            ])
        }
    }

    struct FakeLiterature;

    #[async_trait]
    impl LiteratureSource for FakeLiterature {
        async fn search(
            &self,
            _query: &str,
            _max_results: usize,
        ) -> anyhow::Result<Vec<PaperMetadata>> {
            Ok(vec![PaperMetadata {
                doi: None,
                pmid: Some("1".to_string()),
                title: "Spironolactone in dermatology".to_string(),
                abstract_text: None,
                authors: vec![],
                journal: None,
                pub_year: Some(2021),
                source: CollectionSource::PubMed,
            }])
        }
    }

    #[tokio::test]
    async fn test_run_collection_dedups_posts() {
        let job = CollectionJob {
            condition: "spironolactone".to_string(),
            subreddits: vec!["PCOS".to_string()],
            max_posts_per_subreddit: 10,
            max_papers: 10,
        };

        let batch = run_collection(&job, &FakeSocial, &FakeLiterature)
            .await
            .unwrap();

        assert_eq!(batch.posts.len(), 2);
        assert_eq!(batch.duplicate_posts_dropped, 1);
        assert_eq!(batch.papers.len(), 1);
    }
}
