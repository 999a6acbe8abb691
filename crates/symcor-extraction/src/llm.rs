//! Contract for the external LLM extraction collaborator.
//!
//! The model call itself (prompts, backends, retries) lives outside this
//! workspace. This module owns the boundary: the trait a backend
//! implements and the parsing of its JSON replies. Parsing failures are
//! errors, not empty results — callers must be able to tell "no mentions
//! found" from "the call produced garbage".

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use symcor_common::{Result, SymcorError};

use crate::lexicon::SymptomLexicon;

/// One symptom mention extracted by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomMention {
    /// The span of source text the model attributed the mention to.
    pub raw_text: String,
    /// Model-assigned tag, canonicalized downstream against the lexicon.
    pub tag: String,
    /// True when the text denies the symptom ("no more headaches").
    #[serde(default)]
    pub negated: bool,
    /// Model self-reported confidence in [0, 1].
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 { 1.0 }

#[derive(Debug, Deserialize)]
struct ExtractionOutput {
    mentions: Vec<SymptomMention>,
}

/// Backend-agnostic extraction interface.
#[async_trait]
pub trait MentionExtractor: Send + Sync {
    /// Extract symptom mentions from one post's text.
    async fn extract(&self, text: &str) -> anyhow::Result<Vec<SymptomMention>>;
}

/// Parse a raw model reply into structured mentions.
///
/// Models pad their JSON with prose, so the parser locates the outermost
/// object before deserializing. Anything that does not contain a valid
/// `{"mentions": [...]}` object is a descriptive error.
pub fn parse_extraction_output(reply: &str) -> Result<Vec<SymptomMention>> {
    let start = reply.find('{').ok_or_else(|| {
        SymcorError::Extraction("no JSON object found in model reply".to_string())
    })?;
    let end = reply.rfind('}').ok_or_else(|| {
        SymcorError::Extraction("no closing brace found in model reply".to_string())
    })?;
    if end < start {
        return Err(SymcorError::Extraction(
            "malformed JSON object in model reply".to_string(),
        ));
    }

    let output: ExtractionOutput = serde_json::from_str(&reply[start..=end])
        .map_err(|e| SymcorError::Extraction(format!("invalid mentions payload: {}", e)))?;

    Ok(output.mentions)
}

/// Collapse mentions into the transaction shape the miner consumes:
/// negated mentions are dropped, tags are canonicalized against the
/// lexicon, and unknown tags are skipped with a warning.
pub fn mentions_to_tags(
    mentions: &[SymptomMention],
    lexicon: &SymptomLexicon,
) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    for mention in mentions {
        if mention.negated {
            continue;
        }
        match lexicon.canonicalize(&mention.tag) {
            Some(tag) => {
                tags.insert(tag.to_string());
            }
            None => {
                warn!(tag = %mention.tag, "model produced tag outside lexicon");
            }
        }
    }
    tags
}
