//! Mining thresholds.

use serde::{Deserialize, Serialize};

/// Minimum support, either an absolute post count or a fraction of the
/// total transaction count.
///
/// Untagged so TOML/JSON configs can write `min_support = 3` or
/// `min_support = 0.05` directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MinSupport {
    Count(u64),
    Fraction(f64),
}

impl MinSupport {
    /// Resolve to an absolute transaction count.
    ///
    /// Fractions are converted with `ceil(fraction × total)` so an itemset
    /// just under the intended threshold is never admitted through
    /// floating-point rounding. The resolved threshold is never below 1.
    pub fn resolve(&self, total_transactions: usize) -> u64 {
        let resolved = match self {
            MinSupport::Count(c) => *c,
            MinSupport::Fraction(f) => (f * total_transactions as f64).ceil() as u64,
        };
        resolved.max(1)
    }

    /// A fractional threshold must lie in (0, 1]; counts are always valid.
    pub fn is_valid(&self) -> bool {
        match self {
            MinSupport::Count(_) => true,
            MinSupport::Fraction(f) => *f > 0.0 && *f <= 1.0,
        }
    }
}

/// Thresholds and bounds for one mining run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Minimum itemset support (inclusive, ≥).
    #[serde(default = "default_min_support")]
    pub min_support: MinSupport,

    /// Minimum rule confidence (inclusive).
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    /// Minimum rule lift (inclusive). 1.2 means "at least 20% more likely
    /// than chance".
    #[serde(default = "default_min_lift")]
    pub min_lift: f64,

    /// Largest itemset size explored. Runtime is exponential in this bound
    /// and in the number of frequent symptoms, so callers wanting to limit
    /// runtime lower it rather than cancelling mid-run.
    #[serde(default = "default_max_itemset_size")]
    pub max_itemset_size: usize,
}

fn default_min_support() -> MinSupport { MinSupport::Count(3) }
fn default_min_confidence() -> f64 { 0.5 }
fn default_min_lift() -> f64 { 1.2 }
fn default_max_itemset_size() -> usize { 5 }

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: default_min_support(),
            min_confidence: default_min_confidence(),
            min_lift: default_min_lift(),
            max_itemset_size: default_max_itemset_size(),
        }
    }
}

impl MinerConfig {
    /// Validate threshold ranges.
    pub fn validate(&self) -> bool {
        self.min_support.is_valid()
            && (0.0..=1.0).contains(&self.min_confidence)
            && self.min_lift >= 0.0
            && self.max_itemset_size >= 2
    }
}
