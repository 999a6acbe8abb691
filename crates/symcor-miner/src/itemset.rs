//! Frequent itemset discovery (level-wise Apriori).

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::transaction::Transaction;

/// A candidate symptom combination, canonicalized by sorting its tags.
pub type Itemset = Vec<String>;

/// All frequent itemsets (any size) with their support counts.
pub type SupportCounts = HashMap<Itemset, u64>;

/// Discover every frequent itemset up to `max_size` over the given
/// transactions, with support threshold `min_support` (inclusive, ≥).
///
/// Support counting is a subset scan per candidate. An index-based counting
/// structure would be faster but the scan is the defined semantics; output
/// must not differ from it.
pub fn frequent_itemsets(
    transactions: &[&Transaction],
    min_support: u64,
    max_size: usize,
) -> SupportCounts {
    let mut frequent: SupportCounts = HashMap::new();

    // Level 1: one scan counts every individual symptom.
    let mut singleton_counts: HashMap<String, u64> = HashMap::new();
    for txn in transactions {
        for tag in txn.iter() {
            *singleton_counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    let mut current_level: Vec<Itemset> = Vec::new();
    for (tag, count) in singleton_counts {
        if count >= min_support {
            let itemset = vec![tag];
            frequent.insert(itemset.clone(), count);
            current_level.push(itemset);
        }
    }
    current_level.sort();
    debug!(frequent_singletons = current_level.len(), "level 1 complete");

    // Levels 2..=max_size: join, count, prune. Monotonicity lets us stop
    // as soon as a level yields nothing.
    for k in 2..=max_size {
        let candidates = generate_candidates(&current_level, k);
        if candidates.is_empty() {
            break;
        }

        let mut next_level: Vec<Itemset> = Vec::new();
        for candidate in candidates {
            let support = count_support(&candidate, transactions);
            if support >= min_support {
                frequent.insert(candidate.clone(), support);
                next_level.push(candidate);
            }
        }

        debug!(level = k, survivors = next_level.len(), "level complete");
        if next_level.is_empty() {
            break;
        }
        current_level = next_level;
    }

    frequent
}

/// Number of transactions containing `itemset` as a subset.
pub fn count_support(itemset: &Itemset, transactions: &[&Transaction]) -> u64 {
    transactions
        .iter()
        .filter(|txn| itemset.iter().all(|tag| txn.contains(tag)))
        .count() as u64
}

/// Apriori candidate generation: two frequent (k−1)-itemsets combine into a
/// candidate k-itemset only if they share k−2 members, i.e. their union has
/// exactly k elements. Candidates are deduplicated and sorted.
fn generate_candidates(prev_level: &[Itemset], k: usize) -> Vec<Itemset> {
    let mut candidates: BTreeSet<Itemset> = BTreeSet::new();

    for i in 0..prev_level.len() {
        for j in (i + 1)..prev_level.len() {
            let mut union: BTreeSet<&str> = prev_level[i].iter().map(String::as_str).collect();
            union.extend(prev_level[j].iter().map(String::as_str));
            if union.len() == k {
                candidates.insert(union.into_iter().map(String::from).collect());
            }
        }
    }

    candidates.into_iter().collect()
}
