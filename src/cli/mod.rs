// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, PageRankArgs};
pub use config::{Config, ModelConfig};
pub use validation::{validate_args, validate_pagerank_args, PageRankValidation, RankMethod, ValidationResult};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; `RUST_LOG` wins over `--verbose`
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Fails only when a subscriber is already installed
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
