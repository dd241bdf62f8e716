// lib.rs - heredirank library root

//! # heredirank - Exact pedigree inference and PageRank estimation
//!
//! Two independent engines over small in-memory inputs:
//!
//! - **Pedigree inference**: exact posterior distributions over gene copies
//!   (0, 1, 2) and trait presence for every member of a family, by enumerating
//!   every world consistent with the observed traits
//! - **PageRank**: page importance in a link corpus, estimated by a damped
//!   random walk and computed by synchronous fixed-point iteration
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use heredirank::prelude::*;
//!
//! let pedigree = Pedigree::from_csv(std::path::Path::new("family.csv"))?;
//! let posteriors = compute_posteriors(&pedigree, &ModelParameters::default())?;
//! for person in posteriors.iter() {
//!     println!("{}: P(trait) = {:.4}", person.name, person.trait_.present);
//! }
//!
//! let corpus = Corpus::from_directory(std::path::Path::new("corpus0"))?;
//! let ranks = iterate_pagerank(&corpus, 0.85, 0.001, Some(10_000))?;
//! # Ok::<(), heredirank::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::core::{compute_posteriors, compute_posteriors_with_progress, joint_probability};
    pub use crate::core::{iterate_pagerank, sample_pagerank, transition_model};
    pub use crate::core::{GeneCount, ModelParameters, PageRankConfig, Posteriors, RankDistribution};
    pub use crate::data::{Corpus, Individual, Pedigree};
    pub use crate::error::{Error, Result};
    pub use crate::output::{write_posteriors, write_ranks, OutputFormat, RankReport};
}

// Re-export main types at the root level for convenience
pub use crate::core::{ModelParameters, PageRankConfig, Posteriors};
pub use crate::data::{Corpus, Pedigree};
pub use crate::error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
