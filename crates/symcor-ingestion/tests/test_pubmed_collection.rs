//! Test collection against the real PubMed API.
//!
//! Run with: cargo test --package symcor-ingestion --test test_pubmed_collection -- --ignored --nocapture

use symcor_ingestion::sources::pubmed::PubMedClient;
use symcor_ingestion::sources::LiteratureSource;

#[tokio::test]
#[ignore] // Requires network access
async fn test_pubmed_search_pcos_symptoms() {
    let client = PubMedClient::new(None).expect("client construction failed");

    let papers = client
        .search("polycystic ovary syndrome[tiab] AND acne[tiab]", 5)
        .await
        .expect("PubMed search failed");

    println!("Found {} papers", papers.len());
    for paper in &papers {
        println!("\n---");
        println!("Title: {}", paper.title);
        println!("PMID: {:?}", paper.pmid);
    }

    assert!(!papers.is_empty(), "Should find at least one paper");
}
