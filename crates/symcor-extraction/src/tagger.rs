//! Lexicon-based symptom tagging.

use std::collections::BTreeSet;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use tracing::debug;

use symcor_common::Result;

use crate::lexicon::SymptomLexicon;

/// Tags free text with canonical symptom tags by matching lexicon surface
/// forms. Matching is case-insensitive and word-boundary checked, so
/// "acne" does not fire inside "acnegenic".
pub struct LexiconTagger {
    automaton: AhoCorasick,
    /// pattern index → canonical tag
    tags: Vec<String>,
}

impl LexiconTagger {
    pub fn new(lexicon: &SymptomLexicon) -> Result<Self> {
        let forms = lexicon.surface_forms();
        let patterns: Vec<&str> = forms.iter().map(|(surface, _)| surface.as_str()).collect();
        let tags: Vec<String> = forms.iter().map(|(_, tag)| tag.clone()).collect();

        let automaton = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| symcor_common::SymcorError::Config(format!(
                "failed to build tagging automaton: {}",
                e
            )))?;

        Ok(Self { automaton, tags })
    }

    /// Extract the set of canonical symptom tags mentioned in `text`.
    ///
    /// Returns a set: tagging a post yields exactly the transaction shape
    /// the miner consumes, with repeated mentions collapsed.
    pub fn tag(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let bytes = text.as_bytes();

        for m in self.automaton.find_iter(text) {
            if !on_word_boundary(bytes, m.start(), m.end()) {
                continue;
            }
            found.insert(self.tags[m.pattern().as_usize()].clone());
        }

        debug!(tags = found.len(), "text tagged");
        found
    }
}

/// A match counts only when not embedded in a larger word.
fn on_word_boundary(bytes: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tagger() -> LexiconTagger {
        LexiconTagger::new(&SymptomLexicon::default()).unwrap()
    }

    #[test]
    fn test_tags_aliases_to_canonical() {
        let tags = tagger().tag("Dealing with alopecia and constant exhaustion lately.");
        let expected: BTreeSet<String> =
            ["hair_loss", "fatigue"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn test_case_insensitive() {
        let tags = tagger().tag("ACNE got so much worse");
        assert!(tags.contains("acne"));
    }

    #[test]
    fn test_word_boundary_respected() {
        // "acnegenic" must not tag as acne
        let tags = tagger().tag("this product is acnegenic according to the label");
        assert!(!tags.contains("acne"));
    }

    #[test]
    fn test_repeated_mentions_collapse() {
        let tags = tagger().tag("acne acne acne and more acne");
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_multiword_surface_form() {
        let tags = tagger().tag("noticed hair loss and weight gain this month");
        assert!(tags.contains("hair_loss"));
        assert!(tags.contains("weight_gain"));
    }

    #[test]
    fn test_no_symptoms_yields_empty_set() {
        let tags = tagger().tag("question about my insurance paperwork");
        assert!(tags.is_empty());
    }
}
