//! Symptom vocabulary: canonical tags and their surface-form aliases.
//!
//! The lexicon is an explicit configuration object passed to whatever needs
//! it. There is no process-wide standardization dictionary; two analyses
//! can run with different vocabularies in the same process.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use symcor_common::{Result, SymcorError};

/// Canonical symptom tags mapped to the alias strings patients and papers
/// actually use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomLexicon {
    /// canonical tag → aliases (the tag itself always matches too).
    entries: BTreeMap<String, Vec<String>>,
}

impl SymptomLexicon {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Register a canonical tag with its aliases.
    pub fn add_symptom<S: Into<String>>(&mut self, tag: S, aliases: &[&str]) {
        self.entries
            .insert(tag.into(), aliases.iter().map(|a| a.to_string()).collect());
    }

    /// Load a lexicon from its JSON form (`{"tag": ["alias", ...], ...}`).
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(SymcorError::Config("lexicon has no symptoms".to_string()));
        }
        Ok(Self { entries })
    }

    /// Resolve a surface form to its canonical tag, case-insensitively.
    /// Underscores and spaces are interchangeable ("hair loss" == "hair_loss").
    pub fn canonicalize(&self, surface: &str) -> Option<&str> {
        let needle = normalize(surface);
        for (tag, aliases) in &self.entries {
            if normalize(tag) == needle {
                return Some(tag);
            }
            if aliases.iter().any(|a| normalize(a) == needle) {
                return Some(tag);
            }
        }
        None
    }

    /// All `(surface_form, canonical_tag)` pairs for automaton construction.
    /// Multi-word tags also match with spaces instead of underscores.
    pub fn surface_forms(&self) -> Vec<(String, String)> {
        let mut forms = Vec::new();
        for (tag, aliases) in &self.entries {
            forms.push((tag.replace('_', " "), tag.clone()));
            for alias in aliases {
                forms.push((alias.clone(), tag.clone()));
            }
        }
        forms
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace('_', " ")
}

impl Default for SymptomLexicon {
    /// Vocabulary seeded with the symptoms most reported in the
    /// dermatology/endocrine communities this pipeline targets.
    fn default() -> Self {
        let mut lex = Self::new();
        lex.add_symptom("acne", &["breakout", "breakouts", "pimples", "cystic acne"]);
        lex.add_symptom("hair_loss", &["alopecia", "shedding", "losing hair", "thinning hair"]);
        lex.add_symptom("fatigue", &["exhaustion", "exhausted", "always tired", "no energy"]);
        lex.add_symptom("anxiety", &["anxious", "panic attacks"]);
        lex.add_symptom("depression", &["depressed", "low mood"]);
        lex.add_symptom("insomnia", &["sleeplessness", "trouble sleeping"]);
        lex.add_symptom("weight_gain", &["gained weight", "weight increase"]);
        lex.add_symptom("headache", &["headaches", "migraine", "migraines"]);
        lex.add_symptom("nausea", &["nauseous", "queasy"]);
        lex.add_symptom("mood_swings", &["mood swing", "irritability", "irritable"]);
        lex.add_symptom("brain_fog", &["foggy head", "trouble concentrating"]);
        lex.add_symptom("joint_pain", &["aching joints", "joints ache"]);
        lex.add_symptom("hirsutism", &["facial hair", "excess hair growth"]);
        lex.add_symptom("irregular_periods", &["missed period", "missed periods", "irregular cycle"]);
        lex.add_symptom("hot_flashes", &["hot flash", "hot flushes"]);
        lex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_aliases() {
        let lex = SymptomLexicon::default();
        assert_eq!(lex.canonicalize("alopecia"), Some("hair_loss"));
        assert_eq!(lex.canonicalize("Hair Loss"), Some("hair_loss"));
        assert_eq!(lex.canonicalize("hair_loss"), Some("hair_loss"));
        assert_eq!(lex.canonicalize("unknown thing"), None);
    }

    #[test]
    fn test_from_json() {
        let lex = SymptomLexicon::from_json(r#"{"acne": ["breakout"], "fatigue": []}"#).unwrap();
        assert_eq!(lex.canonicalize("breakout"), Some("acne"));
        assert_eq!(lex.canonicalize("fatigue"), Some("fatigue"));
        assert_eq!(lex.tags().count(), 2);
    }

    #[test]
    fn test_empty_json_rejected() {
        assert!(SymptomLexicon::from_json("{}").is_err());
    }

    #[test]
    fn test_surface_forms_use_spaces_for_multiword_tags() {
        let lex = SymptomLexicon::default();
        let forms = lex.surface_forms();
        assert!(forms.iter().any(|(s, t)| s == "hair loss" && t == "hair_loss"));
    }
}
