// error.rs - Error kinds shared by loaders and engines

use thiserror::Error;

/// Which half of a person's posterior failed to normalize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Gene,
    Trait,
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distribution::Gene => write!(f, "gene"),
            Distribution::Trait => write!(f, "trait"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or inconsistent input data
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Bad arguments or configuration values
    #[error("usage: {0}")]
    Usage(String),

    /// Every world consistent with the evidence had zero probability
    #[error("degenerate posterior: {distribution} distribution of '{individual}' has no probability mass")]
    DegeneratePosterior {
        individual: String,
        distribution: Distribution,
    },

    /// Failure writing results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Iterative PageRank hit its iteration cap
    #[error("PageRank did not converge within {iterations} iterations (last max delta {delta:.6})")]
    NonConvergence { iterations: usize, delta: f64 },
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Error::Usage(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
