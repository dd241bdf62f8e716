// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// heredity - Exact gene and trait posteriors for every member of a family
pub struct Args {
    /// path to pedigree CSV (name,mother,father,trait)
    #[argh(option)]
    pub data: Option<String>,

    /// output results file (default: print to console)
    #[argh(option)]
    pub output: Option<String>,

    /// output format: text, tsv, csv, json (default: text)
    #[argh(option)]
    pub format: Option<String>,

    /// mutation probability override (0.0-1.0)
    #[argh(option)]
    pub mutation: Option<f64>,

    /// show a progress bar during enumeration
    #[argh(switch)]
    pub progress: bool,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// load and validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

#[derive(FromArgs)]
/// pagerank - Rank the pages of an HTML corpus by sampling and by iteration
pub struct PageRankArgs {
    /// directory of .html pages
    #[argh(option)]
    pub corpus: Option<String>,

    /// damping factor in (0, 1) (default: 0.85)
    #[argh(option)]
    pub damping: Option<f64>,

    /// pages visited by the sampler (default: 10000)
    #[argh(option)]
    pub samples: Option<usize>,

    /// random seed for reproducible sampling
    #[argh(option)]
    pub seed: Option<u64>,

    /// convergence threshold for iteration (default: 0.001)
    #[argh(option)]
    pub threshold: Option<f64>,

    /// iteration cap before reporting non-convergence (default: 10000)
    #[argh(option)]
    pub max_iterations: Option<usize>,

    /// method: sample, iterate, both (default: both)
    #[argh(option)]
    pub method: Option<String>,

    /// output results file (default: print to console)
    #[argh(option)]
    pub output: Option<String>,

    /// output format: text, tsv, csv, json (default: text)
    #[argh(option)]
    pub format: Option<String>,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
