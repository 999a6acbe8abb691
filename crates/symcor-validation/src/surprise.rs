//! Surprise scoring for patient-reported symptoms.
//!
//! A symptom is surprising when patients report it often and the
//! literature barely covers it. The score is a weighted multiplier over
//! report frequency; values stay in [0, 1].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use symcor_common::tiers::EvidenceTier;
use tracing::debug;

use crate::tiering::{assign_tiers, OfficialCriteria};

/// Scoring inputs for one symptom.
#[derive(Debug, Clone)]
pub struct SurpriseInputs {
    pub report_count: u64,
    pub total_posts: u64,
    pub literature_count: u64,
    pub tier: EvidenceTier,
}

/// Compute the surprise score for one symptom.
/// Returns a value in [0.0, 1.0].
pub fn compute_surprise(inputs: &SurpriseInputs) -> f64 {
    if inputs.total_posts == 0 {
        return 0.0;
    }

    let frequency = inputs.report_count as f64 / inputs.total_posts as f64;
    let mut score = frequency * inputs.tier.surprise_multiplier();

    // Volume bonus: many independent reporters
    if inputs.report_count >= 20 {
        score *= 1.20;
    } else if inputs.report_count >= 10 {
        score *= 1.10;
    }

    // Saturated literature damps whatever frequency is left
    if inputs.literature_count >= 25 {
        score *= 0.80;
    }

    // Cap at 1.0
    score.min(1.0)
}

/// A fully validated per-symptom signal, ready for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomSignal {
    pub tag: String,
    pub report_count: u64,
    pub report_frequency: f64,
    pub literature_count: u64,
    pub tier: EvidenceTier,
    pub surprise: f64,
}

/// Build and rank the per-symptom signal report.
///
/// Sorted by surprise descending, then report count descending, then tag
/// (deterministic output for a fixed input).
pub fn rank_signals(
    report_volume: &BTreeMap<String, u64>,
    literature_coverage: &BTreeMap<String, u64>,
    official: &OfficialCriteria,
    total_posts: u64,
) -> Vec<SymptomSignal> {
    let tiers = assign_tiers(report_volume, literature_coverage, official);

    let mut signals: Vec<SymptomSignal> = tiers
        .into_iter()
        .map(|(tag, tier)| {
            let report_count = report_volume.get(&tag).copied().unwrap_or(0);
            let literature_count = literature_coverage.get(&tag).copied().unwrap_or(0);
            let inputs = SurpriseInputs { report_count, total_posts, literature_count, tier };
            SymptomSignal {
                surprise: compute_surprise(&inputs),
                report_frequency: if total_posts == 0 {
                    0.0
                } else {
                    report_count as f64 / total_posts as f64
                },
                tag,
                report_count,
                literature_count,
                tier,
            }
        })
        .collect();

    signals.sort_by(|a, b| {
        b.surprise
            .total_cmp(&a.surprise)
            .then_with(|| b.report_count.cmp(&a.report_count))
            .then_with(|| a.tag.cmp(&b.tag))
    });

    debug!(signals = signals.len(), "signal ranking complete");
    signals
}
