// html.rs - Crawl a directory of HTML pages into a link corpus

use crate::data::corpus::Corpus;
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const LINK_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

pub fn link_regex() -> Result<Regex> {
    Regex::new(LINK_PATTERN).map_err(|e| Error::invalid_input(format!("Invalid link pattern: {}", e)))
}

/// Targets of every `<a href="...">` in a document
pub fn extract_links(re: &Regex, contents: &str) -> BTreeSet<String> {
    re.captures_iter(contents)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

impl Corpus {
    /// Read every `.html` file in `dir` and keep links between them
    pub fn from_directory(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|e| {
            Error::invalid_input(format!("Failed to read corpus directory '{}': {}", dir.display(), e))
        })?;

        let re = link_regex()?;
        let mut pages = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::invalid_input(format!("Failed to list '{}': {}", dir.display(), e)))?;
            let path = entry.path();
            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) if name.ends_with(".html") => name.to_string(),
                _ => continue,
            };

            let contents = fs::read_to_string(&path)
                .map_err(|e| Error::invalid_input(format!("Failed to read page '{}': {}", path.display(), e)))?;
            pages.push((filename, extract_links(&re, &contents)));
        }

        Ok(Corpus::new(pages))
    }
}
