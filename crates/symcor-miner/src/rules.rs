//! Association rule derivation and ranking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MinerConfig;
use crate::itemset::{frequent_itemsets, Itemset, SupportCounts};
use crate::transaction::{valid_transactions, Transaction};

/// A directed co-occurrence rule: posts mentioning the antecedent symptoms
/// also tend to mention the consequent symptoms.
///
/// Serialized field names match the exported JSON shape consumed by the
/// downstream analysis notebooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    #[serde(rename = "if_symptoms")]
    pub antecedent: Vec<String>,
    #[serde(rename = "then_symptom")]
    pub consequent: Vec<String>,
    /// Transactions containing the full itemset (antecedent ∪ consequent).
    pub support: u64,
    /// P(consequent | antecedent) = support(itemset) / support(antecedent).
    pub confidence: f64,
    /// confidence / P(consequent). Above 1.0 means the pairing occurs more
    /// often than chance.
    pub lift: f64,
}

/// Mine association rules from per-post symptom transactions.
///
/// Support is counted over transactions with at least 2 tags; smaller
/// transactions cannot contribute to an association but still count toward
/// the transaction total used for fractional thresholds and lift baselines.
///
/// Fewer than 2 usable transactions means mining is undefined: the result
/// is an empty list, not an error, and callers treat it as "no patterns
/// found".
///
/// Pure and deterministic: repeated calls over the same input produce an
/// identical rule list, including order (lift desc, support desc, then
/// antecedent lexicographic).
pub fn mine(transactions: &[Transaction], config: &MinerConfig) -> Vec<AssociationRule> {
    let total = transactions.len();
    let valid = valid_transactions(transactions);
    if valid.len() < 2 {
        debug!(total, usable = valid.len(), "insufficient transactions for mining");
        return Vec::new();
    }

    let min_support = config.min_support.resolve(total);
    let frequent = frequent_itemsets(&valid, min_support, config.max_itemset_size);
    debug!(min_support, frequent = frequent.len(), "itemset discovery complete");

    let mut rules = derive_rules(&frequent, total as u64, config);

    rules.sort_by(|a, b| {
        b.lift
            .total_cmp(&a.lift)
            .then_with(|| b.support.cmp(&a.support))
            .then_with(|| a.antecedent.cmp(&b.antecedent))
            // Same antecedent can head several rules; the consequent keeps
            // the order total and the output reproducible.
            .then_with(|| a.consequent.cmp(&b.consequent))
    });

    rules
}

/// Enumerate every non-trivial binary partition of each frequent itemset of
/// size ≥ 2 and keep the rules passing both thresholds.
fn derive_rules(
    frequent: &SupportCounts,
    total_transactions: u64,
    config: &MinerConfig,
) -> Vec<AssociationRule> {
    let mut rules = Vec::new();

    for (itemset, &itemset_support) in frequent {
        let n = itemset.len();
        if n < 2 {
            continue;
        }

        // Every non-empty proper subset as antecedent, complement as consequent.
        for mask in 1..((1usize << n) - 1) {
            let mut antecedent: Itemset = Vec::new();
            let mut consequent: Itemset = Vec::new();
            for (idx, tag) in itemset.iter().enumerate() {
                if mask & (1 << idx) != 0 {
                    antecedent.push(tag.clone());
                } else {
                    consequent.push(tag.clone());
                }
            }

            // Subsets of a frequent itemset are frequent themselves, so both
            // lookups normally hit. A miss can only come from cap truncation;
            // skip rather than divide by zero.
            let Some(&antecedent_support) = frequent.get(&antecedent) else { continue };
            let Some(&consequent_support) = frequent.get(&consequent) else { continue };
            if antecedent_support == 0 || consequent_support == 0 {
                continue;
            }

            let confidence = itemset_support as f64 / antecedent_support as f64;
            let baseline = consequent_support as f64 / total_transactions as f64;
            let lift = confidence / baseline;

            if confidence >= config.min_confidence && lift >= config.min_lift {
                rules.push(AssociationRule {
                    antecedent,
                    consequent,
                    support: itemset_support,
                    confidence,
                    lift,
                });
            }
        }
    }

    rules
}
