//! BRKGA bin-packing driver.
//!
//! Reads an OR-Library instance, evolves for a fixed number of
//! generations, and prints the box count of the best packing found
//! together with the elapsed seconds.

use anyhow::Context;
use binpack_brkga::brkga::{BrkgaConfig, BrkgaEngine};
use binpack_brkga::packing::{read_instance, BinPackingDecoder, FitnessFunction};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "binpack",
    about = "BRKGA heuristic for one-dimensional bin packing"
)]
struct Args {
    /// Input file
    #[arg(short = 'i', value_name = "FILE")]
    instance: PathBuf,

    /// Size of population
    #[arg(short = 'p', default_value_t = 1000, value_name = "SIZE")]
    population: usize,

    /// Fraction of population to be elite
    #[arg(short = 'e', default_value_t = 0.2, value_name = "FRAC")]
    elite: f64,

    /// Fraction of population to be replaced by mutants
    #[arg(short = 'm', default_value_t = 0.1, value_name = "FRAC")]
    mutants: f64,

    /// Probability that offspring inherit an allele from elite parent
    #[arg(short = 'n', default_value_t = 0.7, value_name = "PROB")]
    elite_prob: f64,

    /// Number of independent populations
    #[arg(short = 'k', default_value_t = 1, value_name = "COUNT")]
    islands: usize,

    /// Random seed
    #[arg(short = 's', default_value_t = 0, value_name = "SEED")]
    seed: u64,

    /// Number of generations
    #[arg(short = 'g', default_value_t = 100, value_name = "COUNT")]
    generations: usize,

    /// Number of threads
    #[arg(short = 't', default_value_t = 1, value_name = "COUNT")]
    threads: usize,
}

fn main() -> ExitCode {
    // No arguments: print usage and exit cleanly.
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        let _ = cmd.print_help();
        return ExitCode::SUCCESS;
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let instance = read_instance(&args.instance)
        .with_context(|| format!("loading instance {}", args.instance.display()))?;
    let decoder = BinPackingDecoder::new(instance, FitnessFunction::Falkenauer);

    let config = BrkgaConfig::new(decoder.chromosome_length())
        .with_population_size(args.population)
        .with_elite_fraction(args.elite)
        .with_mutant_fraction(args.mutants)
        .with_elite_inheritance_prob(args.elite_prob)
        .with_num_islands(args.islands)
        .with_seed(args.seed)
        .with_num_threads(args.threads);

    let mut engine = BrkgaEngine::new(decoder, config).context("configuring engine")?;

    let start = Instant::now();
    for _ in 0..args.generations {
        engine.evolve();
    }
    let seconds = start.elapsed().as_secs_f64();

    let boxes = engine.decoder().boxes_used(engine.best_chromosome());
    println!("{boxes} {seconds:.3}");
    Ok(())
}
