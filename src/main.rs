// main.rs - heredity CLI entry point

use heredirank::cli::{init_logging, validate_args, Args, Config};
use heredirank::core::inference::trait_subset_count;
use heredirank::output::render_posteriors;
use heredirank::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Above this many people enumeration takes noticeably long
const LARGE_PEDIGREE: usize = 10;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    init_logging(args.verbose);

    // Load configuration file if specified
    let mut config = Config::new();
    if let Some(config_path) = args.config.clone() {
        let (merged, loaded) = args.with_config_file(&config_path)?;
        args = merged;
        config = loaded;
        if args.output.is_some() {
            println!("📄 Loaded configuration from: {}", config_path);
        }
    }

    let validation = validate_args(&args, config.model_parameters())?;
    let data = args.data.as_deref().ok_or_else(|| Error::usage("--data is required"))?;

    // Console results keep stdout clean for the listing itself
    let status = args.output.is_some();
    if status {
        println!("🧬 heredity v{}", env!("CARGO_PKG_VERSION"));
    }

    let pedigree = Pedigree::from_csv(std::path::Path::new(data))?;
    if status {
        println!(
            "✅ Pedigree loaded: {} individuals, {} with observed traits",
            pedigree.len(),
            pedigree.observed_count()
        );
    }
    if pedigree.len() > LARGE_PEDIGREE {
        eprintln!(
            "⚠️  {} individuals: enumerating 2^n × 3^n worlds may take a long time",
            pedigree.len()
        );
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    let start = Instant::now();
    let progress = if args.progress {
        let pb = ProgressBar::new(trait_subset_count(&pedigree));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}")
                .map_err(|e| Error::usage(format!("Invalid progress template: {}", e)))?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let posteriors = compute_posteriors_with_progress(&pedigree, &validation.model, progress.as_ref())?;

    match &args.output {
        Some(path) => {
            println!("✅ Posteriors computed in {:.2}s", start.elapsed().as_secs_f64());
            write_posteriors(path, validation.format, &posteriors, &command_line)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            render_posteriors(&mut handle, &posteriors, validation.format, &command_line)?;
        }
    }

    Ok(())
}
