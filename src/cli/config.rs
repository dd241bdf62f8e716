// config.rs - Configuration file support

use crate::core::ModelParameters;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Overrides for the inheritance model; missing keys keep the defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ModelConfig {
    pub gene_prior: Option<[f64; 3]>,
    pub trait_given_gene: Option<[f64; 3]>,
    pub mutation: Option<f64>,
}

impl ModelConfig {
    pub fn apply(&self, mut params: ModelParameters) -> ModelParameters {
        if let Some(prior) = self.gene_prior {
            params.gene_prior = prior;
        }
        if let Some(table) = self.trait_given_gene {
            params.trait_given_gene = table;
        }
        if let Some(mutation) = self.mutation {
            params.mutation = mutation;
        }
        params
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub data: Option<String>,
    pub corpus: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,

    // PageRank
    pub damping: Option<f64>,
    pub samples: Option<usize>,
    pub seed: Option<u64>,
    pub threshold: Option<f64>,
    pub max_iterations: Option<usize>,
    pub method: Option<String>,

    // Pedigree model
    pub model: Option<ModelConfig>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::usage(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::usage(format!("Failed to read config file '{}': {}", path.display(), e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::usage(format!("Failed to parse config file '{}': {}", path.display(), e)))?;

        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::usage(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;

        info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Model parameters with this configuration's overrides applied
    pub fn model_parameters(&self) -> ModelParameters {
        match &self.model {
            Some(model) => model.apply(ModelParameters::default()),
            None => ModelParameters::default(),
        }
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# heredirank.toml - Configuration file for heredity and pagerank
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Pedigree CSV for heredity (name,mother,father,trait)
data = "data/family0.csv"

# Directory of .html pages for pagerank
corpus = "data/corpus0"

# Results file (omit to print to the console)
# output = "results.tsv"

# Output format: text, tsv, csv, json
format = "text"

# =============================================================================
# PAGERANK
# =============================================================================

# Probability of following a link rather than jumping to a random page
damping = 0.85

# Pages visited by the sampler
samples = 10000

# Random seed for reproducible sampling (omit for a fresh seed each run)
# seed = 42

# Largest per-page change between sweeps that counts as converged
threshold = 0.001

# Sweeps allowed before giving up
max_iterations = 10000

# Method: sample, iterate, both
method = "both"

# =============================================================================
# PEDIGREE MODEL
# =============================================================================

[model]
# P(0 copies), P(1 copy), P(2 copies) for people with no recorded parents
gene_prior = [0.96, 0.03, 0.01]

# P(trait | 0 copies), P(trait | 1 copy), P(trait | 2 copies)
trait_given_gene = [0.01, 0.56, 0.65]

# Chance a copy flips when passed from parent to child
mutation = 0.01
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config = Config::from_toml(&Config::generate_sample()).unwrap();
        assert_eq!(config.data.as_deref(), Some("data/family0.csv"));
        assert_eq!(config.damping, Some(0.85));
        assert_eq!(config.samples, Some(10000));
        assert!(config.seed.is_none());
        assert_eq!(config.model_parameters(), ModelParameters::default());
    }

    #[test]
    fn test_partial_model_override() {
        let config = Config::from_toml("[model]\nmutation = 0.05\n").unwrap();
        let params = config.model_parameters();
        assert_eq!(params.mutation, 0.05);
        assert_eq!(params.gene_prior, ModelParameters::default().gene_prior);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml("damping = \"high\"").is_err());
        assert!(Config::from_file("/nonexistent/config.toml").is_err());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            corpus: Some("corpus1".to_string()),
            seed: Some(7),
            ..Config::new()
        };
        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.corpus.as_deref(), Some("corpus1"));
        assert_eq!(loaded.seed, Some(7));
    }
}
