// mod.rs - Output formatters module

use crate::core::{GeneCount, Posteriors, RankDistribution};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Supported result formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented listing, four decimals
    Text,
    Tsv,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::usage(format!("Unsupported output format: {}. Use: text, tsv, csv, json", s))),
        }
    }
}

impl OutputFormat {
    fn separator(self) -> &'static str {
        match self {
            OutputFormat::Csv => ",",
            _ => "\t",
        }
    }
}

/// One named PageRank result, e.g. from sampling or iteration
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub method: String,
    /// Heading shown in text output
    pub title: String,
    pub ranks: RankDistribution,
}

impl RankReport {
    pub fn sampled(samples: usize, ranks: RankDistribution) -> Self {
        Self {
            method: "sampling".to_string(),
            title: format!("PageRank Results from Sampling (n = {})", samples),
            ranks,
        }
    }

    pub fn iterated(ranks: RankDistribution) -> Self {
        Self {
            method: "iteration".to_string(),
            title: "PageRank Results from Iteration".to_string(),
            ranks,
        }
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn write_comment_header<W: Write>(writer: &mut W, command_line: &str) -> Result<()> {
    writeln!(writer, "# Command: {}", command_line)?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(writer, "# heredirank v{}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

fn trait_label(has_trait: bool) -> &'static str {
    if has_trait {
        "True"
    } else {
        "False"
    }
}

/// Render posteriors to any writer
pub fn render_posteriors<W: Write>(
    writer: &mut W,
    posteriors: &Posteriors,
    format: OutputFormat,
    command_line: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for person in posteriors.iter() {
                writeln!(writer, "{}:", person.name)?;
                writeln!(writer, "  Gene:")?;
                for (count, p) in person.gene.iter() {
                    writeln!(writer, "    {}: {:.4}", count, p)?;
                }
                writeln!(writer, "  Trait:")?;
                for (has_trait, p) in person.trait_.iter() {
                    writeln!(writer, "    {}: {:.4}", trait_label(has_trait), p)?;
                }
            }
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            let sep = format.separator();
            write_comment_header(writer, command_line)?;
            let columns = [
                "Person",
                "Gene_2",
                "Gene_1",
                "Gene_0",
                "Trait_True",
                "Trait_False",
            ];
            writeln!(writer, "{}", columns.join(sep))?;
            for person in posteriors.iter() {
                write!(writer, "{}", person.name)?;
                for count in [GeneCount::Two, GeneCount::One, GeneCount::Zero] {
                    write!(writer, "{}{:.6}", sep, person.gene.get(count))?;
                }
                for has_trait in [true, false] {
                    write!(writer, "{}{:.6}", sep, person.trait_.get(has_trait))?;
                }
                writeln!(writer)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, posteriors)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Render one or more PageRank results to any writer
pub fn render_ranks<W: Write>(
    writer: &mut W,
    reports: &[RankReport],
    format: OutputFormat,
    command_line: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(writer, "{}", report.title)?;
                for (page, rank) in &report.ranks {
                    writeln!(writer, "  {}: {:.4}", page, rank)?;
                }
            }
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            let sep = format.separator();
            write_comment_header(writer, command_line)?;
            writeln!(writer, "Method{}Page{}Rank", sep, sep)?;
            for report in reports {
                for (page, rank) in &report.ranks {
                    writeln!(writer, "{}{}{}{}{:.6}", report.method, sep, page, sep, rank)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, reports)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn create_output(file_path: &str) -> Result<BufWriter<File>> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)?;
    Ok(BufWriter::new(file))
}

/// Write posteriors to a file in the specified format
pub fn write_posteriors(
    file_path: &str,
    format: OutputFormat,
    posteriors: &Posteriors,
    command_line: &str,
) -> Result<()> {
    let mut writer = create_output(file_path)?;
    render_posteriors(&mut writer, posteriors, format, command_line)?;
    writer.flush()?;
    println!("✅ Posteriors written to: {}", file_path);
    Ok(())
}

/// Write PageRank results to a file in the specified format
pub fn write_ranks(
    file_path: &str,
    format: OutputFormat,
    reports: &[RankReport],
    command_line: &str,
) -> Result<()> {
    let mut writer = create_output(file_path)?;
    render_ranks(&mut writer, reports, format, command_line)?;
    writer.flush()?;
    println!("✅ PageRank results written to: {}", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{compute_posteriors, ModelParameters};
    use crate::data::{Individual, Pedigree};

    fn posteriors() -> Posteriors {
        let pedigree = Pedigree::new(vec![Individual::new("Harry")]).unwrap();
        compute_posteriors(&pedigree, &ModelParameters::default()).unwrap()
    }

    fn ranks() -> Vec<RankReport> {
        let mut ranks = RankDistribution::new();
        ranks.insert("1.html".to_string(), 0.25);
        ranks.insert("2.html".to_string(), 0.75);
        vec![RankReport::sampled(100, ranks.clone()), RankReport::iterated(ranks)]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("phylip".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_posteriors() {
        let mut out = Vec::new();
        render_posteriors(&mut out, &posteriors(), OutputFormat::Text, "heredity").unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "Harry:\n  Gene:\n    2: 0.0100\n    1: 0.0300\n    0: 0.9600\n  Trait:\n    True: 0.0329\n    False: 0.9671\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_csv_posteriors() {
        let mut out = Vec::new();
        render_posteriors(&mut out, &posteriors(), OutputFormat::Csv, "heredity data.csv").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# Command: heredity data.csv\n"));
        assert!(text.contains("Person,Gene_2,Gene_1,Gene_0,Trait_True,Trait_False\n"));
        assert!(text.contains("Harry,0.010000,0.030000,0.960000,"));
    }

    #[test]
    fn test_json_posteriors() {
        let mut out = Vec::new();
        render_posteriors(&mut out, &posteriors(), OutputFormat::Json, "").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let harry = &value["people"][0];
        assert_eq!(harry["name"], "Harry");
        assert!((harry["gene"]["zero"].as_f64().unwrap() - 0.96).abs() < 1e-9);
        assert!(harry["trait"]["present"].is_number());
    }

    #[test]
    fn test_text_ranks() {
        let mut out = Vec::new();
        render_ranks(&mut out, &ranks(), OutputFormat::Text, "pagerank").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("PageRank Results from Sampling (n = 100)\n  1.html: 0.2500\n  2.html: 0.7500\n"));
        assert!(text.contains("PageRank Results from Iteration\n"));
    }

    #[test]
    fn test_write_ranks_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ranks.tsv");
        let path_str = path.to_str().unwrap();
        write_ranks(path_str, OutputFormat::Tsv, &ranks(), "pagerank corpus").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Method\tPage\tRank\n"));
        assert!(content.contains("iteration\t2.html\t0.750000\n"));
    }
}
