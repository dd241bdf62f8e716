// mod.rs - Data structures module

pub mod corpus;
pub mod loaders;
pub mod pedigree;

// Re-export main types for convenience
pub use corpus::Corpus;
pub use pedigree::{Individual, Parents, Pedigree};
