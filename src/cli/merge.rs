// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config, PageRankArgs};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: &Config) -> Self {
        self.data = self.data.or_else(|| config.data.clone());
        self.output = self.output.or_else(|| config.output.clone());
        self.format = self.format.or_else(|| config.format.clone());
        self.mutation = self.mutation.or_else(|| config.model.as_ref().and_then(|m| m.mutation));
        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<(Self, Config)> {
        let config = Config::from_file(config_path)?;
        Ok((self.merge_with_config(&config), config))
    }
}

impl PageRankArgs {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: &Config) -> Self {
        self.corpus = self.corpus.or_else(|| config.corpus.clone());
        self.output = self.output.or_else(|| config.output.clone());
        self.format = self.format.or_else(|| config.format.clone());
        self.method = self.method.or_else(|| config.method.clone());

        self.seed = self.seed.or(config.seed);
        self.damping = self.damping.or(config.damping);
        self.samples = self.samples.or(config.samples);
        self.threshold = self.threshold.or(config.threshold);
        self.max_iterations = self.max_iterations.or(config.max_iterations);

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn pagerank_args(cli: &[&str]) -> PageRankArgs {
        PageRankArgs::from_args(&["pagerank"], cli).unwrap()
    }

    #[test]
    fn test_config_fills_unset_options() {
        let config = Config::from_toml("corpus = \"corpus0\"\ndamping = 0.5\nsamples = 200\nmethod = \"iterate\"\n").unwrap();
        let args = pagerank_args(&[]).merge_with_config(&config);
        assert_eq!(args.corpus.as_deref(), Some("corpus0"));
        assert_eq!(args.damping, Some(0.5));
        assert_eq!(args.samples, Some(200));
        assert_eq!(args.method.as_deref(), Some("iterate"));
        assert_eq!(args.threshold, None);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let config = Config::from_toml("corpus = \"corpus0\"\ndamping = 0.5\nformat = \"json\"\n").unwrap();
        let args = pagerank_args(&["--corpus", "corpus2", "--damping", "0.7", "--format", "csv"]).merge_with_config(&config);
        assert_eq!(args.corpus.as_deref(), Some("corpus2"));
        assert_eq!(args.damping, Some(0.7));
        assert_eq!(args.format.as_deref(), Some("csv"));
    }

    #[test]
    fn test_explicit_default_values_beat_config() {
        let config = Config::from_toml(
            "damping = 0.5\nsamples = 20\nthreshold = 0.1\nmax_iterations = 5\nmethod = \"sample\"\nformat = \"json\"\n",
        )
        .unwrap();
        let args = pagerank_args(&[
            "--damping",
            "0.85",
            "--samples",
            "10000",
            "--threshold",
            "0.001",
            "--max-iterations",
            "10000",
            "--method",
            "both",
            "--format",
            "text",
        ])
        .merge_with_config(&config);
        assert_eq!(args.damping, Some(0.85));
        assert_eq!(args.samples, Some(10000));
        assert_eq!(args.threshold, Some(0.001));
        assert_eq!(args.max_iterations, Some(10000));
        assert_eq!(args.method.as_deref(), Some("both"));
        assert_eq!(args.format.as_deref(), Some("text"));

        let heredity = Args::from_args(&["heredity"], &["--format", "text"])
            .unwrap()
            .merge_with_config(&config);
        assert_eq!(heredity.format.as_deref(), Some("text"));
    }

    #[test]
    fn test_heredity_merge() {
        let config = Config::from_toml("data = \"family.csv\"\n[model]\nmutation = 0.02\n").unwrap();
        let args = Args::from_args(&["heredity"], &[]).unwrap().merge_with_config(&config);
        assert_eq!(args.data.as_deref(), Some("family.csv"));
        assert_eq!(args.mutation, Some(0.02));

        let args = Args::from_args(&["heredity"], &["--mutation", "0.1"]).unwrap().merge_with_config(&config);
        assert_eq!(args.mutation, Some(0.1));
    }
}
