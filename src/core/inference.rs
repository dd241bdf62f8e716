// inference.rs - Exact posterior inference over a pedigree by world enumeration

use crate::core::model::{inherited_gene_probability, GeneCount, ModelParameters};
use crate::core::powerset::{Powerset, Subset};
use crate::data::Pedigree;
use crate::error::{Distribution, Error, Result};
use indicatif::ProgressBar;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Probability mass per gene count
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GeneDistribution {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

impl GeneDistribution {
    pub fn get(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    fn add(&mut self, count: GeneCount, p: f64) {
        match count {
            GeneCount::Zero => self.zero += p,
            GeneCount::One => self.one += p,
            GeneCount::Two => self.two += p,
        }
    }

    pub fn total(&self) -> f64 {
        self.zero + self.one + self.two
    }

    /// Values keyed by gene count, highest count first
    pub fn iter(&self) -> impl Iterator<Item = (GeneCount, f64)> + '_ {
        [GeneCount::Two, GeneCount::One, GeneCount::Zero]
            .into_iter()
            .map(move |g| (g, self.get(g)))
    }
}

/// Probability mass per trait value
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TraitDistribution {
    pub present: f64,
    pub absent: f64,
}

impl TraitDistribution {
    pub fn get(&self, has_trait: bool) -> f64 {
        if has_trait {
            self.present
        } else {
            self.absent
        }
    }

    fn add(&mut self, has_trait: bool, p: f64) {
        if has_trait {
            self.present += p;
        } else {
            self.absent += p;
        }
    }

    pub fn total(&self) -> f64 {
        self.present + self.absent
    }

    pub fn iter(&self) -> impl Iterator<Item = (bool, f64)> + '_ {
        [true, false].into_iter().map(move |t| (t, self.get(t)))
    }
}

/// Gene and trait distributions of one individual
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PersonPosterior {
    pub name: String,
    pub gene: GeneDistribution,
    #[serde(rename = "trait")]
    pub trait_: TraitDistribution,
}

/// Per-individual accumulators, in pedigree order
#[derive(Debug, Clone, Serialize)]
pub struct Posteriors {
    people: Vec<PersonPosterior>,
}

impl Posteriors {
    /// Zeroed accumulators for every individual
    pub fn zeroed(pedigree: &Pedigree) -> Self {
        Self {
            people: pedigree
                .names()
                .map(|name| PersonPosterior {
                    name: name.to_string(),
                    ..PersonPosterior::default()
                })
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PersonPosterior> {
        self.people.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonPosterior> {
        self.people.iter()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Add the probability of one world to every individual's accumulators
    pub fn update(&mut self, world: &World, p: f64) {
        for (i, person) in self.people.iter_mut().enumerate() {
            person.gene.add(world.gene_count(i), p);
            person.trait_.add(world.has_trait.contains(i), p);
        }
    }

    /// Rescale every gene and trait distribution to sum to 1.
    ///
    /// Fails on the first distribution whose total is zero or not finite.
    pub fn normalize(&mut self) -> Result<()> {
        for person in &mut self.people {
            let gene_total = person.gene.total();
            if !(gene_total.is_finite() && gene_total > 0.0) {
                return Err(Error::DegeneratePosterior {
                    individual: person.name.clone(),
                    distribution: Distribution::Gene,
                });
            }
            person.gene.zero /= gene_total;
            person.gene.one /= gene_total;
            person.gene.two /= gene_total;

            let trait_total = person.trait_.total();
            if !(trait_total.is_finite() && trait_total > 0.0) {
                return Err(Error::DegeneratePosterior {
                    individual: person.name.clone(),
                    distribution: Distribution::Trait,
                });
            }
            person.trait_.present /= trait_total;
            person.trait_.absent /= trait_total;
        }
        Ok(())
    }
}

/// One complete assignment of gene counts and trait values.
///
/// `one_gene` and `two_genes` are disjoint; everyone outside both carries no copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct World {
    pub one_gene: Subset,
    pub two_genes: Subset,
    pub has_trait: Subset,
}

impl World {
    pub fn new(one_gene: Subset, two_genes: Subset, has_trait: Subset) -> Result<Self> {
        if one_gene.bits() & two_genes.bits() != 0 {
            return Err(Error::invalid_input("one-copy and two-copy sets overlap"));
        }
        Ok(Self {
            one_gene,
            two_genes,
            has_trait,
        })
    }

    pub fn gene_count(&self, index: usize) -> GeneCount {
        if self.two_genes.contains(index) {
            GeneCount::Two
        } else if self.one_gene.contains(index) {
            GeneCount::One
        } else {
            GeneCount::Zero
        }
    }
}

/// Probability of one complete world under the model
pub fn joint_probability(pedigree: &Pedigree, world: &World, params: &ModelParameters) -> f64 {
    let population_transmit = params.population_transmit_probability();
    let transmit = |parent: Option<usize>| match parent {
        Some(i) => params.transmit_probability(world.gene_count(i)),
        None => population_transmit,
    };

    let mut p = 1.0;
    for i in 0..pedigree.len() {
        let count = world.gene_count(i);
        let parents = pedigree.parents(i);

        let gene_factor = if parents.is_founder() {
            params.gene_probability(count)
        } else {
            inherited_gene_probability(count, transmit(parents.mother), transmit(parents.father))
        };
        let trait_factor = params.trait_probability(count, world.has_trait.contains(i));

        p *= gene_factor * trait_factor;
    }
    p
}

/// Every world consistent with the pedigree's trait evidence.
///
/// Yields trait subsets in the outer loop, then one-copy subsets, then two-copy
/// subsets drawn from the complement of the one-copy set.
pub fn consistent_worlds(pedigree: &Pedigree) -> impl Iterator<Item = World> + '_ {
    let everyone = pedigree.everyone();
    Powerset::within(everyone)
        .filter(move |&has_trait| pedigree.is_consistent_with_evidence(has_trait))
        .flat_map(move |has_trait| {
            Powerset::within(everyone).flat_map(move |one_gene| {
                let rest = Subset::from_bits(everyone.bits() & !one_gene.bits());
                Powerset::within(rest).map(move |two_genes| World {
                    one_gene,
                    two_genes,
                    has_trait,
                })
            })
        })
}

/// Exact posterior gene and trait distributions for every individual
pub fn compute_posteriors(pedigree: &Pedigree, params: &ModelParameters) -> Result<Posteriors> {
    compute_posteriors_with_progress(pedigree, params, None)
}

/// Same as [`compute_posteriors`], ticking `progress` once per consistent trait subset
pub fn compute_posteriors_with_progress(
    pedigree: &Pedigree,
    params: &ModelParameters,
    progress: Option<&ProgressBar>,
) -> Result<Posteriors> {
    params.validate()?;

    let start = Instant::now();
    let mut posteriors = Posteriors::zeroed(pedigree);
    let mut worlds = 0u64;
    let mut current_traits = None;

    for world in consistent_worlds(pedigree) {
        // Worlds arrive grouped by trait subset
        if current_traits != Some(world.has_trait) {
            current_traits = Some(world.has_trait);
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }
        let p = joint_probability(pedigree, &world, params);
        posteriors.update(&world, p);
        worlds += 1;
    }

    if let Some(pb) = progress {
        pb.finish_with_message("✅ Enumeration completed!");
    }

    debug!(worlds, trait_sets = trait_subset_count(pedigree), "enumerated pedigree worlds");
    posteriors.normalize()?;

    info!(
        individuals = pedigree.len(),
        worlds,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "posterior inference completed"
    );
    Ok(posteriors)
}

/// Number of trait subsets consistent with the evidence, for sizing progress bars.
///
/// Observed members are fixed, so only the unobserved ones vary.
pub fn trait_subset_count(pedigree: &Pedigree) -> u64 {
    1u64 << (pedigree.len() - pedigree.observed_count())
}
