use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, span, Level};

use crate::config::{constant::SEED, Settings};
use crate::distance::generator::{format_matrix, generate_matrix};
use crate::distance::load_matrix_file;
use crate::domain::parishes;
use crate::interactive::Session;
use crate::logging::init_tracing_and_env;
use crate::orchestrator::Orchestrator;
use crate::render::{export_maps, print_comparison, print_results, save_legs_csv};

#[derive(Parser)]
#[command(name = "tsp-solver")]
#[command(about = "Shortest tour through the parishes of Jamaica")]
#[command(version)]
struct Cli {
    /// Largest matrix brute force may be run on (overrides TSP_BRUTE_FORCE_LIMIT)
    #[arg(long, global = true)]
    brute_force_limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a matrix file with one algorithm
    Solve {
        /// Distance matrix file (whitespace-separated rows)
        matrix: PathBuf,

        /// "Nearest Neighbor", "Greedy Best-First" or "Brute Force"
        #[arg(short, long, default_value = "Nearest Neighbor")]
        algorithm: String,

        /// Also write the tour legs as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Skip the SVG and HTML maps
        #[arg(long)]
        no_maps: bool,
    },

    /// Run every algorithm on the same matrix and compare
    Compare {
        matrix: PathBuf,
    },

    /// Write a parish distance matrix computed from coordinates
    Generate {
        #[arg(short, long, default_value = "parish_matrix.txt")]
        output: PathBuf,

        /// Random detour factor, e.g. 0.3 for up to 30% longer than straight line
        #[arg(long, default_value = "0.0")]
        jitter: f64,

        #[arg(long, default_value_t = SEED)]
        seed: u64,
    },

    /// Prompt for algorithm and matrix, and offer to run again
    Interactive {
        #[arg(long)]
        no_maps: bool,
    },
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;
    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    if let Some(limit) = cli.brute_force_limit {
        settings.brute_force_limit = limit;
    }
    let orchestrator = Orchestrator::for_parishes(&settings);

    match cli.command {
        Commands::Solve {
            matrix,
            algorithm,
            csv,
            no_maps,
        } => cmd_solve(&orchestrator, &settings, &matrix, &algorithm, csv.as_deref(), no_maps)?,
        Commands::Compare { matrix } => {
            let dm = load_matrix_file(&matrix)?;
            print_comparison(&orchestrator.compare(&dm));
        }
        Commands::Generate {
            output,
            jitter,
            seed,
        } => {
            let dm = generate_matrix(parishes(), jitter, seed)?;
            fs::write(&output, format_matrix(&dm))?;
            println!("Matrix written to {}", output.display());
        }
        Commands::Interactive { no_maps } => {
            let stdin = io::stdin();
            let mut session = Session::new(&orchestrator, &settings, stdin.lock(), io::stdout());
            if no_maps {
                session = session.without_export();
            }
            session.run()?;
        }
    }

    Ok(())
}

fn cmd_solve(
    orchestrator: &Orchestrator,
    settings: &Settings,
    matrix: &Path,
    algorithm: &str,
    csv: Option<&Path>,
    no_maps: bool,
) -> Result<(), Box<dyn Error>> {
    let solve_span = span!(Level::INFO, "cmd_solve", matrix = %matrix.display());
    let _guard = solve_span.enter();

    let dm = load_matrix_file(matrix)?;
    let report = orchestrator.run(algorithm, &dm)?;
    print_results(&report);

    if let Some(path) = csv {
        save_legs_csv(&report, orchestrator.locations(), &dm, path)?;
    }
    if !no_maps {
        let saved = export_maps(&report, &dm, orchestrator.locations(), settings)?;
        println!("Map saved at: {}", saved.display());
    }

    info!("Run complete");
    Ok(())
}
