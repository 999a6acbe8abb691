//! Shared fixtures for symcor workspace tests.
//!
//! Kept free of workspace dependencies so every crate can dev-depend on it
//! without cycles: fixtures are plain std collections and raw JSON/XML
//! strings in the shapes the real APIs return.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a transaction list from `(tags, repeat)` pairs.
pub fn transactions(spec: &[(&[&str], usize)]) -> Vec<BTreeSet<String>> {
    let mut out = Vec::new();
    for (tags, count) in spec {
        for _ in 0..*count {
            out.push(tags.iter().map(|t| t.to_string()).collect());
        }
    }
    out
}

/// Deterministic pseudo-random transactions over a small symptom vocabulary.
/// Same seed, same dataset — property tests rely on this.
pub fn seeded_transactions(n: usize, seed: u64) -> Vec<BTreeSet<String>> {
    const VOCAB: &[&str] = &[
        "acne", "anxiety", "fatigue", "hair_loss", "headache",
        "insomnia", "joint_pain", "mood_swings", "nausea", "weight_gain",
    ];

    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let size = rng.gen_range(1..=5);
            let mut txn = BTreeSet::new();
            while txn.len() < size {
                txn.insert(VOCAB[rng.gen_range(0..VOCAB.len())].to_string());
            }
            txn
        })
        .collect()
}

/// A minimal Reddit search listing in the public JSON API shape.
pub fn reddit_listing_json() -> &'static str {
    r#"{
  "kind": "Listing",
  "data": {
    "after": "t3_next",
    "children": [
      {
        "kind": "t3",
        "data": {
          "id": "abc123",
          "subreddit": "PCOS",
          "title": "Anyone else dealing with acne and hair loss?",
          "selftext": "Started six months ago. The acne is bad but the hair loss is worse.",
          "author": "throwaway_2847",
          "created_utc": 1714521600.0,
          "score": 42,
          "num_comments": 17,
          "permalink": "/r/PCOS/comments/abc123/anyone_else/"
        }
      },
      {
        "kind": "t3",
        "data": {
          "id": "def456",
          "subreddit": "PCOS",
          "title": "Fatigue that never ends",
          "selftext": "",
          "author": "tired_all_day",
          "created_utc": 1714608000.0,
          "score": 8,
          "num_comments": 3,
          "permalink": "/r/PCOS/comments/def456/fatigue/"
        }
      }
    ]
  }
}"#
}

/// A minimal PubMed efetch response (abstract retmode).
pub fn pubmed_efetch_xml() -> &'static str {
    r#"<?xml version="1.0"?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>31234567</PMID>
      <Article>
        <ArticleTitle>Acne and androgenic alopecia in polycystic ovary syndrome</ArticleTitle>
        <Abstract><AbstractText>Hyperandrogenism manifests as acne and hair loss in a majority of patients.</AbstractText></Abstract>
        <AuthorList>
          <Author><LastName>Chen</LastName><ForeName>Wei</ForeName></Author>
        </AuthorList>
        <Journal><Title>Journal of Clinical Endocrinology</Title></Journal>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#
}

/// An LLM extraction reply with chatter around the JSON payload.
pub fn llm_extraction_reply() -> &'static str {
    r#"Sure, here are the structured mentions:
{"mentions": [
  {"raw_text": "my skin is breaking out", "tag": "acne", "negated": false, "confidence": 0.9},
  {"raw_text": "no more headaches", "tag": "headache", "negated": true, "confidence": 0.8}
]}
Let me know if you need anything else."#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_transactions_are_deterministic() {
        assert_eq!(seeded_transactions(50, 7), seeded_transactions(50, 7));
    }

    #[test]
    fn test_fixture_json_parses() {
        let v: serde_json::Value = serde_json::from_str(reddit_listing_json()).unwrap();
        assert_eq!(v["data"]["children"][0]["data"]["id"], "abc123");
    }
}
