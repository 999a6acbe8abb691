//! symcor-miner — Symptom co-occurrence mining.
//!
//! Discovers which symptom combinations appear together in patient posts
//! more often than chance, expressed as association rules with
//! support/confidence/lift:
//! - Transaction building (per-post symptom sets, deduplicated)
//! - Frequent itemset discovery (level-wise Apriori with candidate join)
//! - Rule derivation over all non-trivial bipartitions of each itemset
//! - Deterministic ranking by lift, support, antecedent
//!
//! Mining is a pure in-memory computation: no I/O, no shared state, and a
//! fully deterministic result for a fixed input and configuration.

pub mod config;
pub mod itemset;
pub mod rules;
pub mod transaction;

// Re-export commonly used types
pub use config::{MinSupport, MinerConfig};
pub use rules::{mine, AssociationRule};
pub use transaction::{build_transactions, Transaction};
