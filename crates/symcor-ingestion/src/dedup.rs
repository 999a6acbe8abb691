//! Deduplication for collected posts.
//!
//! Crossposts and reposts are common in symptom communities; the same
//! complaint shows up with a new post ID and lightly edited text. Exact ID
//! matching catches re-fetches, SimHash catches near-duplicate text.

use std::collections::HashSet;

use crate::models::RedditPost;

/// Hamming distance at or below which two post texts are considered the
/// same complaint.
pub const NEAR_DUPLICATE_DISTANCE: u32 = 6;

/// Result of a deduplication check.
#[derive(Debug)]
pub enum DedupResult {
    /// Post is new — keep it.
    New,
    /// Post ID was already collected (re-fetch or pagination overlap).
    DuplicateId(String),
    /// Post text is a probable duplicate of an earlier post.
    ProbableDuplicate { of_id: String, distance: u32 },
}

/// Check an incoming post against everything collected so far.
pub fn check_duplicate(
    incoming: &RedditPost,
    seen_ids: &HashSet<String>,
    seen_hashes: &[(String, u64)],
) -> DedupResult {
    if seen_ids.contains(&incoming.id) {
        return DedupResult::DuplicateId(incoming.id.clone());
    }

    let hash = simhash(&incoming.full_text());
    for (id, existing) in seen_hashes {
        let distance = hamming_distance(hash, *existing);
        if distance <= NEAR_DUPLICATE_DISTANCE {
            return DedupResult::ProbableDuplicate { of_id: id.clone(), distance };
        }
    }

    DedupResult::New
}

/// Compute a 64-bit SimHash of text for approximate deduplication.
pub fn simhash(text: &str) -> u64 {
    let normalised = text.to_lowercase();
    let words: Vec<&str> = normalised.split_whitespace().collect();

    let mut v: [i64; 64] = [0; 64];

    for word in &words {
        // Skip common stop words
        if STOP_WORDS.contains(word) { continue; }

        let hash = fnv64(word.as_bytes());
        for i in 0..64usize {
            if (hash >> i) & 1 == 1 {
                v[i] += 1;
            } else {
                v[i] -= 1;
            }
        }
    }

    let mut fingerprint: u64 = 0;
    for i in 0..64usize {
        if v[i] > 0 {
            fingerprint |= 1u64 << i;
        }
    }
    fingerprint
}

/// FNV-1a 64-bit hash.
fn fnv64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 14695981039346656037;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(1099511628211);
    }
    hash
}

/// Hamming distance between two 64-bit fingerprints.
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// Stop words to exclude from SimHash computation.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "in", "of", "to", "is", "was",
    "for", "on", "with", "this", "that", "are", "were", "be", "been",
    "by", "from", "we", "our", "their", "which", "also", "i", "my",
    "me", "have", "has", "had", "it", "its",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CollectionSource;

    fn post(id: &str, title: &str, body: &str) -> RedditPost {
        RedditPost {
            id: id.to_string(),
            subreddit: "PCOS".to_string(),
            title: title.to_string(),
            body: body.to_string(),
            author: None,
            created_utc: None,
            score: 0,
            num_comments: 0,
            permalink: None,
            source: CollectionSource::Reddit,
        }
    }

    #[test]
    fn test_identical_texts_same_simhash() {
        let text = "severe acne and hair loss since starting the medication";
        assert_eq!(simhash(text), simhash(text));
    }

    #[test]
    fn test_similar_texts_small_hamming() {
        let t1 = "severe acne and hair loss since starting the medication";
        let t2 = "severe acne and hair loss since stopping the medication";
        let dist = hamming_distance(simhash(t1), simhash(t2));
        assert!(dist <= 12, "Hamming distance was {dist}");
    }

    #[test]
    fn test_different_texts_large_hamming() {
        let t1 = "severe acne and hair loss since starting the medication";
        let t2 = "my insurance refuses to cover the endocrinologist referral";
        let dist = hamming_distance(simhash(t1), simhash(t2));
        assert!(dist > 10, "Expected large hamming distance, got {dist}");
    }

    #[test]
    fn test_duplicate_id_detected() {
        let incoming = post("abc", "acne again", "flareup this week");
        let mut seen_ids = HashSet::new();
        seen_ids.insert("abc".to_string());
        assert!(matches!(
            check_duplicate(&incoming, &seen_ids, &[]),
            DedupResult::DuplicateId(_)
        ));
    }

    #[test]
    fn test_near_duplicate_text_detected() {
        let original = post("abc", "Anyone else dealing with acne and hair loss?", "");
        let repost = post("xyz", "Anyone else dealing with acne and hair loss??", "");

        let seen_ids: HashSet<String> = [original.id.clone()].into();
        let seen_hashes = vec![(original.id.clone(), simhash(&original.full_text()))];

        match check_duplicate(&repost, &seen_ids, &seen_hashes) {
            DedupResult::ProbableDuplicate { of_id, .. } => assert_eq!(of_id, "abc"),
            other => panic!("expected probable duplicate, got {:?}", other),
        }
    }
}
