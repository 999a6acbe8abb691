//! symcor-validation — Evidence-tiered validation of patient-reported signals.
//!
//! Combines three inputs per symptom tag:
//! - report volume: how many collected posts mention it
//! - literature coverage: how many fetched papers mention it
//! - official criteria: whether it appears in the condition's diagnostic
//!   criteria
//! and produces an evidence tier plus a surprise score — high when patients
//! keep reporting a symptom the literature barely covers.

pub mod coverage;
pub mod surprise;
pub mod tiering;

pub use coverage::{count_literature_coverage, count_report_volume};
pub use surprise::{rank_signals, SymptomSignal};
pub use tiering::OfficialCriteria;
