//! Reddit public JSON listing client.
//!
//! Uses the unauthenticated search endpoint:
//!   https://www.reddit.com/r/<subreddit>/search.json
//! Reddit requires a descriptive User-Agent; anonymous defaults are
//! throttled aggressively.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use symcor_common::sandbox::SandboxClient as Client;
use tracing::{debug, instrument};

use super::SocialSource;
use crate::models::{CollectionSource, RedditPost};

const USER_AGENT: &str = "symcor/0.1 (symptom research collection)";
const PAGE_SIZE: usize = 100;

pub struct RedditClient {
    client: Client,
}

impl RedditClient {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self { client: Client::new()? })
    }

    /// Fetch one page of search results for a subreddit.
    #[instrument(skip(self))]
    async fn search_page(
        &self,
        subreddit: &str,
        query: &str,
        after: Option<&str>,
    ) -> anyhow::Result<(Vec<RedditPost>, Option<String>)> {
        let url = format!("https://www.reddit.com/r/{}/search.json", subreddit);
        let mut params = vec![
            ("q", query.to_string()),
            ("restrict_sr", "1".to_string()),
            ("sort", "new".to_string()),
            ("limit", PAGE_SIZE.to_string()),
        ];
        if let Some(cursor) = after {
            params.push(("after", cursor.to_string()));
        }

        let listing: Listing = self.client
            .get(&url)?
            .header("User-Agent", USER_AGENT)
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        let cursor = listing.data.after.clone();
        let posts = listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.into_post())
            .collect();

        Ok((posts, cursor))
    }
}

#[async_trait]
impl SocialSource for RedditClient {
    async fn search(
        &self,
        community: &str,
        query: &str,
        max_results: usize,
    ) -> anyhow::Result<Vec<RedditPost>> {
        let mut posts: Vec<RedditPost> = Vec::new();
        let mut after: Option<String> = None;

        while posts.len() < max_results {
            let (page, cursor) = self
                .search_page(community, query, after.as_deref())
                .await?;
            if page.is_empty() {
                break;
            }
            posts.extend(page);
            match cursor {
                Some(c) => after = Some(c),
                None => break,
            }
        }

        posts.truncate(max_results);
        debug!(community, count = posts.len(), "reddit search complete");
        Ok(posts)
    }
}

// ── Listing wire format ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    after: Option<String>,
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: RawPost,
}

#[derive(Debug, Deserialize)]
struct RawPost {
    id: String,
    subreddit: String,
    title: String,
    #[serde(default)]
    selftext: String,
    author: Option<String>,
    created_utc: Option<f64>,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    num_comments: u64,
    permalink: Option<String>,
}

impl RawPost {
    fn into_post(self) -> RedditPost {
        let created_utc: Option<DateTime<Utc>> = self
            .created_utc
            .and_then(|epoch| DateTime::from_timestamp(epoch as i64, 0));
        RedditPost {
            id: self.id,
            subreddit: self.subreddit,
            title: self.title,
            body: self.selftext,
            author: self.author,
            created_utc,
            score: self.score,
            num_comments: self.num_comments,
            permalink: self.permalink,
            source: CollectionSource::Reddit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcor_test_utils::reddit_listing_json;

    #[test]
    fn test_parse_listing_fixture() {
        let listing: Listing = serde_json::from_str(reddit_listing_json()).unwrap();
        assert_eq!(listing.data.after.as_deref(), Some("t3_next"));
        assert_eq!(listing.data.children.len(), 2);

        let post = listing.data.children.into_iter().next().unwrap().data.into_post();
        assert_eq!(post.id, "abc123");
        assert_eq!(post.subreddit, "PCOS");
        assert_eq!(post.score, 42);
        assert!(post.created_utc.is_some());
        assert!(post.full_text().contains("hair loss is worse"));
    }

    #[test]
    fn test_empty_selftext_defaults() {
        let raw: RawPost = serde_json::from_str(
            r#"{"id": "x1", "subreddit": "PCOS", "title": "Title only"}"#,
        )
        .unwrap();
        let post = raw.into_post();
        assert_eq!(post.body, "");
        assert_eq!(post.full_text(), "Title only");
    }
}
