// pagerank.rs - PageRank CLI entry point

use heredirank::cli::{init_logging, validate_pagerank_args, Config, PageRankArgs};
use heredirank::core::pagerank::{iterate_with_config, sample_with_config};
use heredirank::output::render_ranks;
use heredirank::prelude::*;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let mut args: PageRankArgs = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    init_logging(args.verbose);

    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
        if args.output.is_some() {
            println!("📄 Loaded configuration from: {}", config_path);
        }
    }

    let validation = validate_pagerank_args(&args)?;
    let corpus_dir = args.corpus.as_deref().ok_or_else(|| Error::usage("--corpus is required"))?;

    let status = args.output.is_some();
    if status {
        println!("🕸️  pagerank v{}", env!("CARGO_PKG_VERSION"));
    }

    let corpus = Corpus::from_directory(std::path::Path::new(corpus_dir))?;
    if status {
        println!(
            "✅ Corpus loaded: {} pages, {} links, {} without links",
            corpus.len(),
            corpus.link_count(),
            corpus.dangling_pages().count()
        );
    }

    let mut reports = Vec::new();
    if validation.method.samples() {
        let start = Instant::now();
        let ranks = sample_with_config(&corpus, &validation.config)?;
        if status {
            println!(
                "🎲 Sampled {} pages in {:.2}s",
                validation.config.samples,
                start.elapsed().as_secs_f64()
            );
        }
        reports.push(RankReport::sampled(validation.config.samples, ranks));
    }
    if validation.method.iterates() {
        let start = Instant::now();
        let ranks = iterate_with_config(&corpus, &validation.config)?;
        if status {
            println!("🔄 Iteration converged in {:.2}s", start.elapsed().as_secs_f64());
        }
        reports.push(RankReport::iterated(ranks));
    }

    match &args.output {
        Some(path) => write_ranks(path, validation.format, &reports, &command_line)?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            render_ranks(&mut handle, &reports, validation.format, &command_line)?;
        }
    }

    Ok(())
}
