//! Per-symptom coverage counts from posts and papers.

use std::collections::{BTreeMap, BTreeSet};

use symcor_extraction::LexiconTagger;
use symcor_ingestion::models::PaperMetadata;
use tracing::debug;

/// Count how many papers mention each symptom tag in title or abstract.
///
/// A paper counts once per tag regardless of how often the tag appears in
/// its text, mirroring the set semantics used for posts.
pub fn count_literature_coverage(
    papers: &[PaperMetadata],
    tagger: &LexiconTagger,
) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for paper in papers {
        for tag in tagger.tag(&paper.full_text()) {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    debug!(papers = papers.len(), tags = counts.len(), "literature coverage counted");
    counts
}

/// Count how many posts mention each symptom tag, given the already-tagged
/// per-post sets.
pub fn count_report_volume(post_tags: &[BTreeSet<String>]) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for tags in post_tags {
        for tag in tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcor_extraction::SymptomLexicon;
    use symcor_ingestion::models::{Author, CollectionSource};

    fn paper(title: &str, abstract_text: Option<&str>) -> PaperMetadata {
        PaperMetadata {
            doi: None,
            pmid: None,
            title: title.to_string(),
            abstract_text: abstract_text.map(String::from),
            authors: vec![Author { name: "A".to_string(), affiliation: None }],
            journal: None,
            pub_year: None,
            source: CollectionSource::PubMed,
        }
    }

    #[test]
    fn test_paper_counts_once_per_tag() {
        let tagger = LexiconTagger::new(&SymptomLexicon::default()).unwrap();
        let papers = vec![
            paper("Acne in adults", Some("Acne, acne, and more acne.")),
            paper("Alopecia and acne comorbidity", None),
        ];

        let coverage = count_literature_coverage(&papers, &tagger);
        assert_eq!(coverage.get("acne"), Some(&2));
        assert_eq!(coverage.get("hair_loss"), Some(&1));
    }

    #[test]
    fn test_report_volume_from_tag_sets() {
        let sets: Vec<BTreeSet<String>> = vec![
            ["acne", "fatigue"].iter().map(|s| s.to_string()).collect(),
            ["acne"].iter().map(|s| s.to_string()).collect(),
            BTreeSet::new(),
        ];
        let volume = count_report_volume(&sets);
        assert_eq!(volume.get("acne"), Some(&2));
        assert_eq!(volume.get("fatigue"), Some(&1));
    }
}
