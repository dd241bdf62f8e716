// pedigree.rs - Family tree data structures

use crate::core::powerset::{Powerset, Subset};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// One person as recorded in the input
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub name: String,
    pub mother: Option<String>,
    pub father: Option<String>,
    /// Observed trait: `Some(true)` has it, `Some(false)` does not, `None` unknown
    pub observed_trait: Option<bool>,
}

impl Individual {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mother: None,
            father: None,
            observed_trait: None,
        }
    }

    pub fn with_parents(mut self, mother: &str, father: &str) -> Self {
        self.mother = Some(mother.to_string());
        self.father = Some(father.to_string());
        self
    }

    pub fn with_trait(mut self, observed: bool) -> Self {
        self.observed_trait = Some(observed);
        self
    }
}

/// Parent links resolved to positions in the population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parents {
    pub mother: Option<usize>,
    pub father: Option<usize>,
}

impl Parents {
    pub fn is_founder(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }
}

/// Validated population with parent references resolved to indices.
///
/// Individuals keep their input order; that order defines bit positions for
/// [`Subset`] masks over the population.
#[derive(Debug, Clone)]
pub struct Pedigree {
    individuals: Vec<Individual>,
    parents: Vec<Parents>,
    index: HashMap<String, usize>,
}

impl Pedigree {
    /// Build a pedigree, rejecting duplicate names and dangling parent references
    pub fn new(individuals: Vec<Individual>) -> Result<Self> {
        if individuals.len() > Powerset::MAX_ITEMS {
            return Err(Error::invalid_input(format!(
                "pedigree has {} individuals, at most {} are supported",
                individuals.len(),
                Powerset::MAX_ITEMS
            )));
        }

        let mut index = HashMap::with_capacity(individuals.len());
        for (i, person) in individuals.iter().enumerate() {
            if person.name.is_empty() {
                return Err(Error::invalid_input(format!("individual #{} has an empty name", i + 1)));
            }
            if index.insert(person.name.clone(), i).is_some() {
                return Err(Error::invalid_input(format!("duplicate individual '{}'", person.name)));
            }
        }

        let resolve = |person: &Individual, parent: &Option<String>, role: &str| -> Result<Option<usize>> {
            match parent {
                None => Ok(None),
                Some(name) => match index.get(name) {
                    Some(&i) => Ok(Some(i)),
                    None => Err(Error::invalid_input(format!(
                        "{} '{}' of '{}' is not in the pedigree",
                        role, name, person.name
                    ))),
                },
            }
        };

        let mut parents = Vec::with_capacity(individuals.len());
        for person in &individuals {
            parents.push(Parents {
                mother: resolve(person, &person.mother, "mother")?,
                father: resolve(person, &person.father, "father")?,
            });
        }

        Ok(Self {
            individuals,
            parents,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn individual(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }

    pub fn parents(&self, index: usize) -> Parents {
        self.parents[index]
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.individuals.iter().map(|p| p.name.as_str())
    }

    /// Every individual as a subset mask
    pub fn everyone(&self) -> Subset {
        if self.individuals.is_empty() {
            Subset::EMPTY
        } else {
            Subset::from_bits((1u64 << self.individuals.len()) - 1)
        }
    }

    /// Build a subset mask from names
    pub fn subset_of<'a, I>(&self, names: I) -> Result<Subset>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut bits = 0u64;
        for name in names {
            let i = self
                .index_of(name)
                .ok_or_else(|| Error::invalid_input(format!("'{}' is not in the pedigree", name)))?;
            bits |= 1u64 << i;
        }
        Ok(Subset::from_bits(bits))
    }

    /// Whether a candidate has-trait set agrees with every observation
    pub fn is_consistent_with_evidence(&self, have_trait: Subset) -> bool {
        self.individuals.iter().enumerate().all(|(i, person)| match person.observed_trait {
            Some(observed) => observed == have_trait.contains(i),
            None => true,
        })
    }

    /// Number of individuals with an observed trait
    pub fn observed_count(&self) -> usize {
        self.individuals
            .iter()
            .filter(|p| p.observed_trait.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> Vec<Individual> {
        vec![
            Individual::new("Harry").with_parents("Lily", "James"),
            Individual::new("James").with_trait(true),
            Individual::new("Lily").with_trait(false),
        ]
    }

    #[test]
    fn test_parents_are_resolved() {
        let pedigree = Pedigree::new(family()).unwrap();
        assert_eq!(pedigree.len(), 3);
        let harry = pedigree.parents(0);
        assert_eq!(harry.mother, Some(2));
        assert_eq!(harry.father, Some(1));
        assert!(!harry.is_founder());
        assert!(pedigree.parents(1).is_founder());
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let people = vec![Individual::new("Harry").with_parents("Lily", "James")];
        let err = Pedigree::new(people).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("Lily"));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let people = vec![Individual::new("Harry"), Individual::new("Harry")];
        assert!(Pedigree::new(people).is_err());
    }

    #[test]
    fn test_evidence_consistency() {
        let pedigree = Pedigree::new(family()).unwrap();
        let james_only = pedigree.subset_of(["James"]).unwrap();
        let with_lily = pedigree.subset_of(["James", "Lily"]).unwrap();
        let with_harry = pedigree.subset_of(["James", "Harry"]).unwrap();

        assert!(pedigree.is_consistent_with_evidence(james_only));
        assert!(pedigree.is_consistent_with_evidence(with_harry));
        assert!(!pedigree.is_consistent_with_evidence(with_lily));
        assert!(!pedigree.is_consistent_with_evidence(Subset::EMPTY));
        assert_eq!(pedigree.observed_count(), 2);
    }

    #[test]
    fn test_everyone_mask() {
        let pedigree = Pedigree::new(family()).unwrap();
        assert_eq!(pedigree.everyone().bits(), 0b111);
        assert!(pedigree.subset_of(["Ron"]).is_err());
    }
}
