/// Evidence-tier classification for symptom claims.
///
/// A tier expresses how well a patient-reported symptom is backed by
/// official diagnostic criteria, published literature, or report volume
/// alone. Tiers carry the multiplier used by surprise scoring: the less
/// literature support a frequently reported symptom has, the more
/// "surprising" it is.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceTier {
    /// Listed in the official diagnostic criteria for the condition.
    OfficialCriterion,
    /// Repeatedly described in the literature (10+ papers).
    WellDocumented,
    /// Some literature coverage (2–9 papers).
    EmergingEvidence,
    /// Reported by patients (3+ posts) with no literature coverage.
    PatientReportedOnly,
    /// Neither literature nor meaningful report volume.
    Unsupported,
}

impl EvidenceTier {
    /// Surprise multiplier for this tier.
    /// Inverse of literature support: undocumented symptoms that patients
    /// keep reporting score highest.
    pub fn surprise_multiplier(&self) -> f64 {
        match self {
            EvidenceTier::OfficialCriterion   => 0.10,
            EvidenceTier::WellDocumented      => 0.25,
            EvidenceTier::EmergingEvidence    => 0.60,
            EvidenceTier::PatientReportedOnly => 1.00,
            EvidenceTier::Unsupported         => 0.40,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceTier::OfficialCriterion   => "official_criterion",
            EvidenceTier::WellDocumented      => "well_documented",
            EvidenceTier::EmergingEvidence    => "emerging_evidence",
            EvidenceTier::PatientReportedOnly => "patient_reported_only",
            EvidenceTier::Unsupported         => "unsupported",
        }
    }
}

/// Classify a symptom into an evidence tier.
///
/// Thresholds are inclusive: exactly 10 papers is WellDocumented, exactly
/// 2 is EmergingEvidence, exactly 3 patient reports with zero papers is
/// PatientReportedOnly.
pub fn classify_tier(
    in_official_criteria: bool,
    literature_count: u64,
    report_count: u64,
) -> EvidenceTier {
    if in_official_criteria {
        return EvidenceTier::OfficialCriterion;
    }
    if literature_count >= 10 {
        return EvidenceTier::WellDocumented;
    }
    if literature_count >= 2 {
        return EvidenceTier::EmergingEvidence;
    }
    if report_count >= 3 {
        return EvidenceTier::PatientReportedOnly;
    }
    EvidenceTier::Unsupported
}
