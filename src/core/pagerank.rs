// pagerank.rs - PageRank by random-surfer sampling and by iteration

use crate::data::Corpus;
use crate::error::{Error, Result};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Probability mass per page, in page-name order
pub type RankDistribution = BTreeMap<String, f64>;

/// Settings for both PageRank methods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Probability of following a link rather than jumping to a random page
    pub damping: f64,
    /// Pages visited by the sampler
    pub samples: usize,
    /// Largest per-page change that still counts as converged
    pub threshold: f64,
    /// Sweep cap for the iterative method (None = unbounded)
    pub max_iterations: Option<usize>,
    /// Sampler seed (None = entropy)
    pub seed: Option<u64>,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            threshold: 0.001,
            max_iterations: Some(10_000),
            seed: None,
        }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(Error::usage("sample count must be > 0"));
        }
        check_threshold(self.threshold)?;
        if self.max_iterations == Some(0) {
            return Err(Error::usage("max_iterations must be > 0"));
        }
        Ok(())
    }

    /// Random source for the sampler: seeded when a seed is configured
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn check_damping(damping: f64) -> Result<()> {
    if !(damping > 0.0 && damping < 1.0) {
        return Err(Error::usage(format!("damping factor must be in (0, 1), got {}", damping)));
    }
    Ok(())
}

fn check_threshold(threshold: f64) -> Result<()> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(Error::usage(format!("convergence threshold must be finite and > 0, got {}", threshold)));
    }
    Ok(())
}

fn check_corpus(corpus: &Corpus) -> Result<()> {
    if corpus.is_empty() {
        return Err(Error::invalid_input("corpus has no pages"));
    }
    Ok(())
}

/// Distribution over the next page to visit from `page`.
///
/// A page with no links is treated as linking to every page.
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> Result<RankDistribution> {
    check_corpus(corpus)?;
    check_damping(damping)?;
    let links = corpus.links(page)?;
    let n = corpus.len() as f64;

    if links.is_empty() {
        return Ok(corpus.pages().map(|p| (p.to_string(), 1.0 / n)).collect());
    }

    let jump = (1.0 - damping) / n;
    let follow = damping / links.len() as f64;
    Ok(corpus
        .pages()
        .map(|p| {
            let p_next = if links.contains(p) { follow + jump } else { jump };
            (p.to_string(), p_next)
        })
        .collect())
}

/// Estimate PageRank by visiting `n` pages of a damped random walk
pub fn sample_pagerank<R: Rng + ?Sized>(corpus: &Corpus, damping: f64, n: usize, rng: &mut R) -> Result<RankDistribution> {
    check_corpus(corpus)?;
    check_damping(damping)?;
    if n == 0 {
        return Err(Error::usage("sample count must be > 0"));
    }

    let pages: Vec<&str> = corpus.pages().collect();

    // One weighted sampler per page, built once
    let mut samplers = Vec::with_capacity(pages.len());
    for page in &pages {
        let model = transition_model(corpus, page, damping)?;
        let weights: Vec<f64> = model.values().copied().collect();
        let dist = WeightedIndex::new(&weights)
            .map_err(|e| Error::invalid_input(format!("transition model of '{}' is not a distribution: {}", page, e)))?;
        samplers.push(dist);
    }

    let mut visits = vec![0usize; pages.len()];
    let mut current = rng.gen_range(0..pages.len());
    visits[current] += 1;
    for _ in 1..n {
        current = samplers[current].sample(rng);
        visits[current] += 1;
    }

    debug!(samples = n, pages = pages.len(), "random walk sampled");
    Ok(pages
        .iter()
        .zip(visits)
        .map(|(p, count)| (p.to_string(), count as f64 / n as f64))
        .collect())
}

/// Compute PageRank by synchronous fixed-point iteration.
///
/// Stops once every page changed by at most `threshold` in one sweep. Pages
/// without links spread their rank over the whole corpus.
pub fn iterate_pagerank(
    corpus: &Corpus,
    damping: f64,
    threshold: f64,
    max_iterations: Option<usize>,
) -> Result<RankDistribution> {
    check_corpus(corpus)?;
    check_damping(damping)?;
    check_threshold(threshold)?;

    let pages: Vec<&str> = corpus.pages().collect();
    let n = pages.len();
    let position: BTreeMap<&str, usize> = pages.iter().enumerate().map(|(i, p)| (*p, i)).collect();

    // Incoming links by page position, with the linking page's out-degree
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut out_degree = vec![0usize; n];
    let mut dangling = Vec::new();
    for (i, page) in pages.iter().enumerate() {
        let links = corpus.links(page)?;
        out_degree[i] = links.len();
        if links.is_empty() {
            dangling.push(i);
        }
        for target in links {
            incoming[position[target.as_str()]].push(i);
        }
    }

    let base = (1.0 - damping) / n as f64;
    let mut ranks = vec![1.0 / n as f64; n];
    let mut iterations = 0usize;
    let mut last_delta = f64::INFINITY;

    loop {
        if let Some(cap) = max_iterations {
            if iterations >= cap {
                warn!(iterations, delta = last_delta, "PageRank iteration cap reached");
                return Err(Error::NonConvergence {
                    iterations,
                    delta: last_delta,
                });
            }
        }

        let dangling_share: f64 = dangling.iter().map(|&q| ranks[q]).sum::<f64>() / n as f64;
        let next: Vec<f64> = (0..n)
            .map(|p| {
                let linked: f64 = incoming[p]
                    .iter()
                    .map(|&q| ranks[q] / out_degree[q] as f64)
                    .sum();
                base + damping * (linked + dangling_share)
            })
            .collect();

        let delta = ranks
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        ranks = next;
        iterations += 1;
        last_delta = delta;

        debug!(iterations, delta, "PageRank sweep");
        if delta <= threshold {
            break;
        }
    }

    info!(iterations, pages = n, "PageRank converged");
    Ok(pages
        .iter()
        .zip(ranks)
        .map(|(p, r)| (p.to_string(), r))
        .collect())
}

/// Run the iterative method with the settings in `config`
pub fn iterate_with_config(corpus: &Corpus, config: &PageRankConfig) -> Result<RankDistribution> {
    config.validate()?;
    iterate_pagerank(corpus, config.damping, config.threshold, config.max_iterations)
}

/// Run the sampler with the settings in `config`
pub fn sample_with_config(corpus: &Corpus, config: &PageRankConfig) -> Result<RankDistribution> {
    config.validate()?;
    let mut rng = config.rng();
    sample_pagerank(corpus, config.damping, config.samples, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Corpus {
        Corpus::new([("a", vec!["b"]), ("b", vec!["a"])])
    }

    fn sample_corpus() -> Corpus {
        Corpus::new([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
    }

    fn total(ranks: &RankDistribution) -> f64 {
        ranks.values().sum()
    }

    #[test]
    fn test_transition_model_with_links() {
        let corpus = Corpus::new([("1", vec!["2", "3"]), ("2", vec!["3"]), ("3", vec!["2"])]);
        let model = transition_model(&corpus, "1", 0.85).unwrap();
        assert!((model["1"] - 0.05).abs() < 1e-12);
        assert!((model["2"] - 0.475).abs() < 1e-12);
        assert!((model["3"] - 0.475).abs() < 1e-12);
        assert!((total(&model) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transition_model_dangling_is_uniform() {
        let corpus = Corpus::new([("1", vec!["2"]), ("2", vec![]), ("3", vec!["1"])]);
        let model = transition_model(&corpus, "2", 0.85).unwrap();
        for p in model.values() {
            assert!((p - 1.0 / 3.0).abs() < 1e-12);
        }
        assert!(transition_model(&corpus, "missing", 0.85).is_err());
    }

    #[test]
    fn test_iterate_symmetric_pair() {
        for damping in [0.15, 0.5, 0.85, 0.99] {
            let ranks = iterate_pagerank(&pair(), damping, 0.001, Some(10_000)).unwrap();
            assert!((ranks["a"] - 0.5).abs() < 1e-3);
            assert!((ranks["b"] - 0.5).abs() < 1e-3);
        }
    }

    #[test]
    fn test_iterate_sums_to_one() {
        let ranks = iterate_pagerank(&sample_corpus(), 0.85, 0.001, None).unwrap();
        assert!((total(&ranks) - 1.0).abs() < 1e-3);
        assert!(ranks.values().all(|&r| r >= 0.0));
        // 2.html collects links from every other page
        assert!(ranks["2.html"] > ranks["1.html"]);
        assert!(ranks["2.html"] > ranks["4.html"]);
    }

    #[test]
    fn test_iterate_with_dangling_pages_conserves_mass() {
        let corpus = Corpus::new([("1", vec!["2"]), ("2", vec![]), ("3", vec!["1", "2"])]);
        let ranks = iterate_pagerank(&corpus, 0.85, 0.001, None).unwrap();
        assert!((total(&ranks) - 1.0).abs() < 1e-3);
        assert!(ranks.values().all(|&r| r >= 0.0));
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let err = iterate_pagerank(&sample_corpus(), 0.85, 1e-15, Some(2)).unwrap_err();
        assert!(matches!(err, Error::NonConvergence { iterations: 2, .. }));
    }

    #[test]
    fn test_unusable_threshold_rejected_before_iterating() {
        for threshold in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(iterate_pagerank(&pair(), 0.85, threshold, None), Err(Error::Usage(_))));
            assert!(matches!(iterate_pagerank(&pair(), 0.85, threshold, Some(50)), Err(Error::Usage(_))));
        }
    }

    #[test]
    fn test_sample_symmetric_pair() {
        let mut rng = StdRng::seed_from_u64(7);
        let ranks = sample_pagerank(&pair(), 0.85, 10_000, &mut rng).unwrap();
        assert!((total(&ranks) - 1.0).abs() < 1e-9);
        assert!((ranks["a"] - 0.5).abs() < 0.05);
        assert!((ranks["b"] - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_sample_agrees_with_iteration() {
        let corpus = sample_corpus();
        let mut rng = StdRng::seed_from_u64(42);
        let sampled = sample_pagerank(&corpus, 0.85, 20_000, &mut rng).unwrap();
        let iterated = iterate_pagerank(&corpus, 0.85, 0.0001, None).unwrap();
        for page in corpus.pages() {
            assert!((sampled[page] - iterated[page]).abs() < 0.05, "{}", page);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let empty = Corpus::default();
        assert!(matches!(iterate_pagerank(&empty, 0.85, 0.001, None), Err(Error::InvalidInput(_))));
        assert!(matches!(iterate_pagerank(&pair(), 1.0, 0.001, None), Err(Error::Usage(_))));

        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(sample_pagerank(&pair(), 0.85, 0, &mut rng), Err(Error::Usage(_))));

        let config = PageRankConfig {
            threshold: 0.0,
            ..PageRankConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let config = PageRankConfig {
            seed: Some(99),
            samples: 500,
            ..PageRankConfig::default()
        };
        let first = sample_with_config(&sample_corpus(), &config).unwrap();
        let second = sample_with_config(&sample_corpus(), &config).unwrap();
        assert_eq!(first, second);
    }
}
