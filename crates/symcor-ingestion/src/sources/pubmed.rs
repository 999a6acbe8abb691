//! PubMed E-utilities client.
//!
//! Endpoints used:
//!   esearch: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!   efetch:  https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use symcor_common::sandbox::SandboxClient as Client;
use tracing::{debug, instrument, warn};

use super::LiteratureSource;
use crate::models::{Author, CollectionSource, PaperMetadata};

const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

pub struct PubMedClient {
    client: Client,
    api_key: Option<String>,
}

impl PubMedClient {
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::new()?,
            api_key,
        })
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("retmode", "json".to_string())];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Search PubMed and return a list of PMIDs.
    #[instrument(skip(self))]
    async fn esearch(&self, query: &str, max: usize) -> anyhow::Result<Vec<String>> {
        let mut params = self.base_params();
        params.push(("db", "pubmed".to_string()));
        params.push(("term", query.to_string()));
        params.push(("retmax", max.to_string()));
        params.push(("usehistory", "n".to_string()));

        let resp: serde_json::Value = self.client
            .get(ESEARCH_URL)?
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        let ids = resp["esearchresult"]["idlist"]
            .as_array()
            .unwrap_or(&vec![])
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect();

        debug!(?ids, "PubMed esearch returned PMIDs");
        Ok(ids)
    }

    /// Fetch PubMed XML for a list of PMIDs and parse into PaperMetadata.
    #[instrument(skip(self))]
    async fn efetch_abstracts(&self, pmids: &[String]) -> anyhow::Result<Vec<PaperMetadata>> {
        if pmids.is_empty() {
            return Ok(vec![]);
        }

        let mut params = vec![
            ("db", "pubmed".to_string()),
            ("id", pmids.join(",")),
            ("rettype", "abstract".to_string()),
            ("retmode", "xml".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }

        let xml = self.client
            .get(EFETCH_URL)?
            .query(&params)
            .send()
            .await?
            .text()
            .await?;

        parse_pubmed_xml(&xml)
    }
}

#[async_trait]
impl LiteratureSource for PubMedClient {
    async fn search(&self, query: &str, max_results: usize) -> anyhow::Result<Vec<PaperMetadata>> {
        let pmids = self.esearch(query, max_results).await?;
        self.efetch_abstracts(&pmids).await
    }
}

/// Parse PubMed XML (efetch abstract mode) into PaperMetadata list.
/// Handles the <PubmedArticleSet><PubmedArticle> structure.
pub(crate) fn parse_pubmed_xml(xml: &str) -> anyhow::Result<Vec<PaperMetadata>> {
    let mut papers = Vec::new();
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // State machine for XML parsing
    let mut current: Option<PaperMetadata> = None;
    let mut in_pmid       = false;
    let mut in_title      = false;
    let mut in_abstract   = false;
    let mut in_author     = false;
    let mut in_last_name  = false;
    let mut in_fore_name  = false;
    let mut in_journal    = false;
    let mut in_year       = false;
    let mut current_last  = String::new();
    let mut current_fore  = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                match e.name().as_ref() {
                    b"PubmedArticle" => {
                        current = Some(PaperMetadata {
                            doi: None,
                            pmid: None,
                            title: String::new(),
                            abstract_text: None,
                            authors: vec![],
                            journal: None,
                            pub_year: None,
                            source: CollectionSource::PubMed,
                        });
                    }
                    b"PMID"         => in_pmid = true,
                    b"ArticleTitle" => in_title = true,
                    b"AbstractText" => in_abstract = true,
                    b"Author"       => { in_author = true; current_last.clear(); current_fore.clear(); }
                    b"LastName"     => in_last_name = true,
                    b"ForeName"     => in_fore_name = true,
                    b"Title"        => in_journal = true,
                    b"Year"         => in_year = true,
                    _ => {}
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                if let Some(ref mut p) = current {
                    if in_pmid      { p.pmid = Some(text.clone()); }
                    if in_title     { p.title = text.clone(); }
                    if in_abstract  {
                        // Structured abstracts arrive as several AbstractText
                        // sections; concatenate them.
                        match &mut p.abstract_text {
                            Some(existing) => {
                                existing.push(' ');
                                existing.push_str(&text);
                            }
                            None => p.abstract_text = Some(text.clone()),
                        }
                    }
                    if in_last_name { current_last = text.clone(); }
                    if in_fore_name { current_fore = text.clone(); }
                    if in_journal   { p.journal = Some(text.clone()); }
                    if in_year && p.pub_year.is_none() {
                        p.pub_year = text.parse().ok();
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                match e.name().as_ref() {
                    b"PMID"         => in_pmid = false,
                    b"ArticleTitle" => in_title = false,
                    b"AbstractText" => in_abstract = false,
                    b"LastName"     => in_last_name = false,
                    b"ForeName"     => in_fore_name = false,
                    b"Title"        => in_journal = false,
                    b"Year"         => in_year = false,
                    b"Author" => {
                        if in_author {
                            if let Some(ref mut p) = current {
                                let name = if current_fore.is_empty() {
                                    current_last.clone()
                                } else {
                                    format!("{} {}", current_fore, current_last)
                                };
                                p.authors.push(Author { name, affiliation: None });
                            }
                            in_author = false;
                        }
                    }
                    b"PubmedArticle" => {
                        if let Some(p) = current.take() {
                            if !p.title.is_empty() {
                                papers.push(p);
                            } else {
                                warn!("Skipping paper with empty title");
                            }
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!("XML parse error: {}", e);
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(papers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcor_test_utils::pubmed_efetch_xml;

    #[test]
    fn test_parse_minimal_pubmed_xml() {
        let papers = parse_pubmed_xml(pubmed_efetch_xml()).unwrap();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].pmid, Some("31234567".to_string()));
        assert_eq!(
            papers[0].title,
            "Acne and androgenic alopecia in polycystic ovary syndrome"
        );
        assert_eq!(papers[0].authors[0].name, "Wei Chen");
        assert!(papers[0]
            .abstract_text
            .as_deref()
            .unwrap()
            .contains("Hyperandrogenism"));
    }

    #[test]
    fn test_structured_abstract_sections_concatenate() {
        let xml = r#"<?xml version="1.0"?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>1</PMID>
      <Article>
        <ArticleTitle>Structured abstract</ArticleTitle>
        <Abstract>
          <AbstractText>Background part.</AbstractText>
          <AbstractText>Results part.</AbstractText>
        </Abstract>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;
        let papers = parse_pubmed_xml(xml).unwrap();
        assert_eq!(
            papers[0].abstract_text.as_deref(),
            Some("Background part. Results part.")
        );
    }

    #[test]
    fn test_empty_title_skipped() {
        let xml = r#"<?xml version="1.0"?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation><PMID>2</PMID><Article></Article></MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;
        let papers = parse_pubmed_xml(xml).unwrap();
        assert!(papers.is_empty());
    }
}
