// model.rs - Inheritance model parameters

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of copies of the modeled gene an individual carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    pub fn index(self) -> usize {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2,
        }
    }

    pub fn copies(self) -> u8 {
        self.index() as u8
    }
}

impl std::fmt::Display for GeneCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.copies())
    }
}

/// Probabilities driving the pedigree network.
///
/// Indexed by gene count: `gene_prior[i]` is P(gene = i) for a person with no
/// recorded parents, `trait_given_gene[i]` is P(trait | gene = i).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub gene_prior: [f64; 3],
    pub trait_given_gene: [f64; 3],
    pub mutation: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            gene_prior: [0.96, 0.03, 0.01],
            trait_given_gene: [0.01, 0.56, 0.65],
            mutation: 0.01,
        }
    }
}

impl ModelParameters {
    pub fn with_mutation(mut self, mutation: f64) -> Self {
        self.mutation = mutation;
        self
    }

    /// Check every probability is in [0, 1] and the prior sums to 1
    pub fn validate(&self) -> Result<()> {
        let in_range = |p: f64| p.is_finite() && (0.0..=1.0).contains(&p);

        for (i, &p) in self.gene_prior.iter().enumerate() {
            if !in_range(p) {
                return Err(Error::usage(format!("gene prior for {} copies must be in [0, 1], got {}", i, p)));
            }
        }
        for (i, &p) in self.trait_given_gene.iter().enumerate() {
            if !in_range(p) {
                return Err(Error::usage(format!("trait probability for {} copies must be in [0, 1], got {}", i, p)));
            }
        }
        if !in_range(self.mutation) {
            return Err(Error::usage(format!("mutation probability must be in [0, 1], got {}", self.mutation)));
        }

        let total: f64 = self.gene_prior.iter().sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(Error::usage(format!("gene prior must sum to 1, got {}", total)));
        }
        Ok(())
    }

    pub fn gene_probability(&self, count: GeneCount) -> f64 {
        self.gene_prior[count.index()]
    }

    /// P(trait = has_trait | gene = count)
    pub fn trait_probability(&self, count: GeneCount, has_trait: bool) -> f64 {
        let p = self.trait_given_gene[count.index()];
        if has_trait {
            p
        } else {
            1.0 - p
        }
    }

    /// Probability a parent with `count` copies passes one copy to a child
    pub fn transmit_probability(&self, count: GeneCount) -> f64 {
        let mu = self.mutation;
        match count {
            GeneCount::Zero => mu,
            GeneCount::One => 0.5 * mu + 0.5 * (1.0 - mu),
            GeneCount::Two => 1.0 - mu,
        }
    }

    /// Transmission probability of a parent whose genotype is not in the pedigree
    pub fn population_transmit_probability(&self) -> f64 {
        GeneCount::ALL
            .iter()
            .map(|&g| self.gene_probability(g) * self.transmit_probability(g))
            .sum()
    }
}

/// Gene-count factor for a child given each parent's transmit probability
pub fn inherited_gene_probability(count: GeneCount, from_mother: f64, from_father: f64) -> f64 {
    match count {
        GeneCount::Zero => (1.0 - from_mother) * (1.0 - from_father),
        GeneCount::One => from_mother * (1.0 - from_father) + (1.0 - from_mother) * from_father,
        GeneCount::Two => from_mother * from_father,
    }
}
