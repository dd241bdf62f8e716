// corpus.rs - Link graph between pages

use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Pages and the set of corpus pages each one links to.
///
/// Self-links and links to pages outside the corpus are dropped on
/// construction. Pages iterate in name order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Corpus {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Build from raw link lists, keeping only links to other pages in the corpus
    pub fn new<I, P, L>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let raw: BTreeMap<String, BTreeSet<String>> = raw
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();

        let links = raw
            .iter()
            .map(|(page, targets)| {
                let kept = targets
                    .iter()
                    .filter(|t| *t != page && raw.contains_key(*t))
                    .cloned()
                    .collect();
                (page.clone(), kept)
            })
            .collect();

        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(|p| p.as_str())
    }

    pub fn links(&self, page: &str) -> Result<&BTreeSet<String>> {
        self.links
            .get(page)
            .ok_or_else(|| Error::invalid_input(format!("page '{}' is not in the corpus", page)))
    }

    /// Total number of links between pages
    pub fn link_count(&self) -> usize {
        self.links.values().map(|l| l.len()).sum()
    }

    /// Pages without outgoing links
    pub fn dangling_pages(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .filter(|(_, l)| l.is_empty())
            .map(|(p, _)| p.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_and_external_links_dropped() {
        let corpus = Corpus::new([
            ("1.html", vec!["1.html", "2.html", "https://example.com"]),
            ("2.html", vec!["1.html", "3.html"]),
        ]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.links("1.html").unwrap().len(), 1);
        assert!(corpus.links("1.html").unwrap().contains("2.html"));
        assert!(corpus.links("2.html").unwrap().contains("1.html"));
        assert_eq!(corpus.link_count(), 2);
    }

    #[test]
    fn test_pages_sorted_and_dangling_reported() {
        let corpus = Corpus::new([("b", vec!["a"]), ("a", Vec::<&str>::new())]);
        assert_eq!(corpus.pages().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(corpus.dangling_pages().collect::<Vec<_>>(), vec!["a"]);
        assert!(corpus.links("c").is_err());
    }
}
