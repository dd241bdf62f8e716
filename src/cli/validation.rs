// validation.rs - Input validation utilities

use crate::cli::args::{Args, PageRankArgs};
use crate::core::{ModelParameters, PageRankConfig};
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use std::str::FromStr;

/// Which PageRank estimates to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMethod {
    Sample,
    Iterate,
    Both,
}

impl FromStr for RankMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sample" | "sampling" => Ok(RankMethod::Sample),
            "iterate" | "iteration" => Ok(RankMethod::Iterate),
            "both" => Ok(RankMethod::Both),
            _ => Err(Error::usage(format!("Unknown method '{}'. Use: sample, iterate, both", s))),
        }
    }
}

impl RankMethod {
    pub fn samples(self) -> bool {
        matches!(self, RankMethod::Sample | RankMethod::Both)
    }

    pub fn iterates(self) -> bool {
        matches!(self, RankMethod::Iterate | RankMethod::Both)
    }
}

pub struct ValidationResult {
    pub format: OutputFormat,
    pub model: ModelParameters,
}

pub struct PageRankValidation {
    pub format: OutputFormat,
    pub method: RankMethod,
    pub config: PageRankConfig,
}

/// Validate heredity arguments against the model from the config file
pub fn validate_args(args: &Args, base_model: ModelParameters) -> Result<ValidationResult> {
    if args.data.is_none() {
        return Err(Error::usage("--data is required"));
    }

    let format = OutputFormat::from_str(args.format.as_deref().unwrap_or("text"))?;

    let model = match args.mutation {
        Some(mutation) => base_model.with_mutation(mutation),
        None => base_model,
    };
    model.validate()?;

    Ok(ValidationResult { format, model })
}

/// Validate pagerank arguments
pub fn validate_pagerank_args(args: &PageRankArgs) -> Result<PageRankValidation> {
    if args.corpus.is_none() {
        return Err(Error::usage("--corpus is required"));
    }

    let format = OutputFormat::from_str(args.format.as_deref().unwrap_or("text"))?;
    let method = match args.method.as_deref() {
        Some(method) => RankMethod::from_str(method)?,
        None => RankMethod::Both,
    };

    let defaults = PageRankConfig::default();
    let config = PageRankConfig {
        damping: args.damping.unwrap_or(defaults.damping),
        samples: args.samples.unwrap_or(defaults.samples),
        threshold: args.threshold.unwrap_or(defaults.threshold),
        max_iterations: args.max_iterations.or(defaults.max_iterations),
        seed: args.seed,
    };
    config.validate()?;

    Ok(PageRankValidation { format, method, config })
}
