// csv.rs - CSV loader for pedigree records

use crate::data::pedigree::{Individual, Pedigree};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One row as it appears in the file: `name,mother,father,trait`
#[derive(Debug, Deserialize)]
struct PedigreeRecord {
    name: String,
    #[serde(default)]
    mother: String,
    #[serde(default)]
    father: String,
    #[serde(rename = "trait", default)]
    trait_flag: String,
}

/// Parse a trait flag: "1" has the trait, "0" does not, blank is unknown
fn parse_trait(flag: &str) -> std::result::Result<Option<bool>, String> {
    match flag.trim() {
        "" => Ok(None),
        "1" => Ok(Some(true)),
        "0" => Ok(Some(false)),
        other => Err(format!("trait must be 0, 1 or blank, got '{}'", other)),
    }
}

fn optional_name(field: &str) -> Option<String> {
    let cleaned = field.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

impl Pedigree {
    /// Load a pedigree from a CSV file
    pub fn from_csv(file_path: &Path) -> Result<Self> {
        let file = std::fs::File::open(file_path).map_err(|e| {
            Error::invalid_input(format!("Failed to open pedigree file '{}': {}", file_path.display(), e))
        })?;
        Self::from_csv_reader(file)
    }

    /// Load a pedigree from any CSV source with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| Error::invalid_input(format!("Failed to read CSV header: {}", e)))?;
        if !headers.iter().any(|h| h == "name") {
            return Err(Error::invalid_input("CSV header must contain a 'name' column"));
        }

        let mut individuals = Vec::new();
        for (row, result) in rdr.deserialize::<PedigreeRecord>().enumerate() {
            let line = row + 2;
            let record = result.map_err(|e| Error::invalid_input(format!("CSV line {}: {}", line, e)))?;

            let name = record.name.trim().to_string();
            if name.is_empty() {
                return Err(Error::invalid_input(format!("CSV line {}: empty name", line)));
            }
            let observed_trait = parse_trait(&record.trait_flag)
                .map_err(|e| Error::invalid_input(format!("CSV line {} ('{}'): {}", line, name, e)))?;

            individuals.push(Individual {
                name,
                mother: optional_name(&record.mother),
                father: optional_name(&record.father),
                observed_trait,
            });
        }

        Pedigree::new(individuals)
    }
}
