//! Chesscribe CLI - synthetic chess-CLI transcript datasets.
//!
//! Two modes:
//!
//! 1. **`generate`**: build one of the named stage graphs, sample random
//!    walks into (prompt, completion) examples, and write them as newline-
//!    delimited JSON ready for upload to a fine-tuning service.
//! 2. **`demo`**: replay the program's built-in scripted session, printing
//!    each transcript line to stdout as it is emitted.
//!
//! Dataset files land in the artifacts directory (see [`config`]) unless an
//! explicit `--out` path is given.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use board::ChessProgram;
use generator::{generate_dataset, stage1, stage2, Example, HelperProbabilities};

mod config;

/// Top-level CLI arguments for chesscribe.
#[derive(Parser)]
#[command(name = "chesscribe", about = "Synthetic chess-CLI transcript generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a JSONL dataset from a stage preset.
    Generate {
        /// Stage preset: 1 (board probing) or 2 (probing plus pawn moves).
        #[arg(short, long, default_value_t = 1)]
        stage: u8,

        /// Number of examples to generate.
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,

        /// Output file. Defaults to `<artifacts>/stage<N>.jsonl`.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Seed for reproducible generation. Unseeded runs use the thread RNG.
        #[arg(long)]
        seed: Option<u64>,

        /// Discard examples whose prompt exceeds this many bytes.
        #[arg(long)]
        max_prompt_len: Option<usize>,

        /// Chance of each diagnostic print around a stage-2 move.
        #[arg(long, default_value_t = 0.25)]
        helper_probability: f64,
    },

    /// Replay the built-in scripted session, printing each line.
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            stage,
            count,
            out,
            seed,
            max_prompt_len,
            helper_probability,
        } => handle_generate(stage, count, out, seed, max_prompt_len, helper_probability),
        Commands::Demo => run_demo(),
    }
}

fn handle_generate(
    stage: u8,
    count: usize,
    out: Option<PathBuf>,
    seed: Option<u64>,
    max_prompt_len: Option<usize>,
    helper_probability: f64,
) -> anyhow::Result<()> {
    let helpers = HelperProbabilities {
        show_turn_before_move: helper_probability,
        probe_source_before_move: helper_probability,
        probe_source_after_move: helper_probability,
        probe_destination_after_move: helper_probability,
    };
    let graph = match stage {
        1 => stage1(),
        2 => stage2(helpers),
        other => bail!("unsupported stage: {other}"),
    }
    .context("failed to build stage graph")?;

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(SmallRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    let length_filter =
        max_prompt_len.map(|limit| move |example: &Example| example.prompt.len() <= limit);
    let filter = length_filter
        .as_ref()
        .map(|keep| keep as &dyn Fn(&Example) -> bool);

    tracing::info!(stage, count, "generating dataset");
    let examples = generate_dataset(&graph, count, filter, rng.as_mut())
        .context("dataset generation failed")?;

    let out = out.unwrap_or_else(|| config::artifacts_dir().join(format!("stage{stage}.jsonl")));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    finetune::write_jsonl(&out, &examples)
        .with_context(|| format!("failed to write {}", out.display()))?;

    tracing::info!(count = examples.len(), out = %out.display(), "dataset written");
    Ok(())
}

/// The scripted session the original program used as its self-test: set up
/// the standard position, probe, push a pawn, and probe again.
fn run_demo() -> anyhow::Result<()> {
    let mut program = ChessProgram::new();
    program.on_line(|line| print!("{line}"));
    for command in [
        "init standard",
        "print active color",
        "print square e2",
        "print square e3",
        "detailed move white pawn from e2 to e3",
        "print square e2",
        "print square e3",
    ] {
        program
            .handle_command(command)
            .with_context(|| format!("demo command failed: {command}"))?;
    }
    Ok(())
}
