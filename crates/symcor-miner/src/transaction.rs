//! Transaction construction from per-post symptom tags.

use std::collections::BTreeSet;

/// The set of distinct symptom tags observed in a single post.
///
/// Set semantics are load-bearing: repeated mentions of the same symptom
/// within one post count once toward support.
pub type Transaction = BTreeSet<String>;

/// Build transactions from raw per-post tag lists.
///
/// Tags are deduplicated per post. Posts with no tags still produce an
/// (empty) transaction so the caller's transaction total matches the post
/// total; the miner itself skips transactions that cannot contribute to an
/// association.
pub fn build_transactions<I, T, S>(raw: I) -> Vec<Transaction>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = S>,
    S: Into<String>,
{
    raw.into_iter()
        .map(|tags| tags.into_iter().map(Into::into).collect())
        .collect()
}

/// Transactions that can contribute to a pairwise or larger association.
/// A transaction with fewer than 2 tags supports no itemset of size ≥ 2
/// and is excluded from support counting.
pub(crate) fn valid_transactions(all: &[Transaction]) -> Vec<&Transaction> {
    all.iter().filter(|t| t.len() >= 2).collect()
}
