// mod.rs - Core logic module

pub mod inference;
pub mod model;
pub mod pagerank;
pub mod powerset;

// Re-export main types for convenience
pub use inference::{
    compute_posteriors, compute_posteriors_with_progress, consistent_worlds, joint_probability,
    GeneDistribution, PersonPosterior, Posteriors, TraitDistribution, World,
};
pub use model::{GeneCount, ModelParameters};
pub use pagerank::{iterate_pagerank, sample_pagerank, transition_model, PageRankConfig, RankDistribution};
pub use powerset::{Powerset, Subset};
