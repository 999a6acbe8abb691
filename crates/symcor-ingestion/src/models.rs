//! Data models for the collection pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A patient post collected from a social source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditPost {
    pub id: String,
    pub subreddit: String,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    pub created_utc: Option<DateTime<Utc>>,
    pub score: i64,
    pub num_comments: u64,
    pub permalink: Option<String>,
    pub source: CollectionSource,
}

impl RedditPost {
    /// Title and body joined for tagging; the APIs return them separately
    /// but symptom mentions appear in both.
    pub fn full_text(&self) -> String {
        if self.body.is_empty() {
            self.title.clone()
        } else {
            format!("{}\n{}", self.title, self.body)
        }
    }
}

/// Represents a discovered paper before coverage counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperMetadata {
    pub doi: Option<String>,
    pub pmid: Option<String>,
    pub title: String,
    pub abstract_text: Option<String>,
    pub authors: Vec<Author>,
    pub journal: Option<String>,
    pub pub_year: Option<i32>,
    pub source: CollectionSource,
}

impl PaperMetadata {
    /// Title and abstract joined for coverage tagging.
    pub fn full_text(&self) -> String {
        match &self.abstract_text {
            Some(a) => format!("{}\n{}", self.title, a),
            None => self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub affiliation: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CollectionSource {
    Reddit,
    PubMed,
}

impl CollectionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionSource::Reddit => "reddit",
            CollectionSource::PubMed => "pubmed",
        }
    }
}
