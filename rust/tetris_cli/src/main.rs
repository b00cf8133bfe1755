// rust/tetris_cli/src/main.rs
#![forbid(unsafe_code)]

mod console;

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::console::ConsoleRunner;
use tetris_stack_engine::{DEFAULT_CAPACITY, PieceRuleKind, Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "tetris_stack", version, about = "Next-piece queue for a block-stacking game")]
struct Args {
    /// Number of upcoming pieces the queue holds (filled at startup), 1..=4096.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// RNG seed for the piece stream. If omitted, one is derived from the clock.
    #[arg(long, env = "TETRIS_STACK_SEED")]
    seed: Option<u64>,

    /// Piece rule: uniform | bag7
    #[arg(long, default_value = "uniform")]
    piece_rule: String,

    /**
     * Log filter (tracing EnvFilter syntax). Logs go to stderr.
     * Examples:
     *   --log debug
     *   --log tetris_stack_engine=trace
     */
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log: String,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&args.log).context("could not parse log filter")?)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cfg = SessionConfig {
        capacity: args.capacity,
        seed: args.seed.unwrap_or_else(clock_seed),
        rule_kind: PieceRuleKind::from_cli(&args.piece_rule),
    };
    info!(?cfg, "starting");

    let session = Session::new(&cfg)
        .with_context(|| format!("invalid --capacity {}", args.capacity))?;

    let mut runner = ConsoleRunner::new(session, io::stdin().lock(), io::stdout().lock());
    let report = runner.run().context("console I/O failed")?;

    info!(
        eof_exit = report.eof_exit,
        final_len = runner.session().queue().len(),
        "bye"
    );
    Ok(())
}
