//! Evidence-tier assignment per symptom.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use symcor_common::tiers::{classify_tier, EvidenceTier};

/// The symptoms listed in the condition's official diagnostic criteria.
/// An explicit value passed into tiering, not a process-wide table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfficialCriteria {
    tags: BTreeSet<String>,
}

impl OfficialCriteria {
    pub fn from_tags<S: Into<String>, I: IntoIterator<Item = S>>(tags: I) -> Self {
        Self { tags: tags.into_iter().map(Into::into).collect() }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Assign an evidence tier to every tag seen in either posts or papers.
pub fn assign_tiers(
    report_volume: &BTreeMap<String, u64>,
    literature_coverage: &BTreeMap<String, u64>,
    official: &OfficialCriteria,
) -> BTreeMap<String, EvidenceTier> {
    let mut all_tags: BTreeSet<&String> = report_volume.keys().collect();
    all_tags.extend(literature_coverage.keys());

    all_tags
        .into_iter()
        .map(|tag| {
            let reports = report_volume.get(tag).copied().unwrap_or(0);
            let papers = literature_coverage.get(tag).copied().unwrap_or(0);
            let tier = classify_tier(official.contains(tag), papers, reports);
            (tag.clone(), tier)
        })
        .collect()
}
