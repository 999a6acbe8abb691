//! Configuration loading for symcor.
//! Reads symcor.toml from the current directory or the path in the
//! SYMCOR_CONFIG env var.

use std::path::Path;

use serde::{Deserialize, Serialize};
use symcor_common::{Result, SymcorError};
use symcor_miner::MinerConfig;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mining: MinerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_subreddits")]
    pub subreddits: Vec<String>,
    #[serde(default = "default_max_posts")]
    pub max_posts_per_subreddit: usize,
    #[serde(default = "default_max_papers")]
    pub max_papers: usize,
    /// Optional NCBI API key for higher rate limits.
    pub pubmed_api_key: Option<String>,
}

fn default_subreddits() -> Vec<String> { vec!["PCOS".to_string()] }
fn default_max_posts() -> usize { 200 }
fn default_max_papers() -> usize { 100 }

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            subreddits: default_subreddits(),
            max_posts_per_subreddit: default_max_posts(),
            max_papers: default_max_papers(),
            pubmed_api_key: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Path to a JSON lexicon; the built-in vocabulary is used when absent.
    pub lexicon_path: Option<String>,
    /// Symptoms from the condition's official diagnostic criteria.
    #[serde(default)]
    pub official_criteria: Vec<String>,
}

impl Config {
    /// Load from SYMCOR_CONFIG or ./symcor.toml.
    pub fn load() -> Result<Self> {
        let path = std::env::var("SYMCOR_CONFIG").unwrap_or_else(|_| "symcor.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SymcorError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)
            .map_err(|e| SymcorError::Config(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.mining.validate() {
            return Err(SymcorError::Config(
                "mining thresholds out of range: min_support fraction must be in (0, 1], \
                 min_confidence in [0, 1], min_lift >= 0, max_itemset_size >= 2"
                    .to_string(),
            ));
        }
        if self.sources.subreddits.is_empty() {
            return Err(SymcorError::Config("no subreddits configured".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcor_miner::MinSupport;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.mining.min_support, MinSupport::Count(3));
        assert_eq!(config.mining.min_confidence, 0.5);
        assert_eq!(config.mining.min_lift, 1.2);
        assert_eq!(config.mining.max_itemset_size, 5);
        assert_eq!(config.sources.subreddits, vec!["PCOS"]);
    }

    #[test]
    fn test_integer_and_fractional_support() {
        let config = Config::from_toml_str("[mining]\nmin_support = 5\n").unwrap();
        assert_eq!(config.mining.min_support, MinSupport::Count(5));

        let config = Config::from_toml_str("[mining]\nmin_support = 0.05\n").unwrap();
        assert_eq!(config.mining.min_support, MinSupport::Fraction(0.05));
    }

    #[test]
    fn test_out_of_range_thresholds_rejected() {
        let err = Config::from_toml_str("[mining]\nmin_support = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let err = Config::from_toml_str("[mining]\nmin_confidence = 2.0\n").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_full_config_parses() {
        let raw = r#"
[mining]
min_support = 0.05
min_confidence = 0.6
min_lift = 1.2
max_itemset_size = 4

[sources]
subreddits = ["PCOS", "Hypothyroidism"]
max_posts_per_subreddit = 500
max_papers = 250

[extraction]
official_criteria = ["hirsutism", "irregular_periods", "acne"]
"#;
        let config = Config::from_toml_str(raw).unwrap();
        assert_eq!(config.sources.subreddits.len(), 2);
        assert_eq!(config.extraction.official_criteria.len(), 3);
        assert_eq!(config.mining.max_itemset_size, 4);
    }
}
