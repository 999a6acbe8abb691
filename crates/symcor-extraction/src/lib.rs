//! symcor-extraction — Symptom tagging of free text.
//!
//! Two tagging paths feed the miner:
//! - Lexicon tagging: deterministic alias matching against a configured
//!   symptom vocabulary (no model involved)
//! - LLM extraction: an external model returns structured mentions; this
//!   crate owns the contract and the response parsing, never the prompts

pub mod lexicon;
pub mod llm;
pub mod tagger;

pub use lexicon::SymptomLexicon;
pub use llm::{parse_extraction_output, MentionExtractor, SymptomMention};
pub use tagger::LexiconTagger;
