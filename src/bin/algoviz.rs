//! Runs the algorithm demo and prints the final report.
//!
//! ```text
//! algoviz --seed 7 --no-delay -v
//! algoviz --quiet --format prometheus
//! ```

use std::io::{self, Write};
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use log::warn;

use algoviz::algorithms::StalePolicy;
use algoviz::driver::{self, RunConfig, RunSummary};
use algoviz::metrics::{MetricsExporter, PrometheusTextExporter};
use algoviz::render::{NullRenderer, TextRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Prometheus,
}

impl Format {
    /// Whether text frames share stdout with the report.
    fn frames_on_stdout(self) -> bool {
        match self {
            Format::Text => true,
            Format::Prometheus => false,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Stale {
    Revisit,
    Skip,
}

impl From<Stale> for StalePolicy {
    fn from(stale: Stale) -> Self {
        match stale {
            Stale::Revisit => StalePolicy::Revisit,
            Stale::Skip => StalePolicy::Skip,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Number of graph nodes.
    #[arg(long, value_name = "INT", default_value_t = driver::DEFAULT_NODE_COUNT)]
    nodes: usize,

    /// Probability that any pair of nodes is connected.
    #[arg(long, value_name = "FLOAT", default_value_t = driver::DEFAULT_EDGE_DENSITY)]
    density: f64,

    /// Recency cache capacity.
    #[arg(long, value_name = "INT", default_value_t = algoviz::context::DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// Length of the sort input.
    #[arg(long, value_name = "INT", default_value_t = driver::DEFAULT_SORT_LEN)]
    sort_len: usize,

    /// Length of the transform input (power of two).
    #[arg(long, value_name = "INT", default_value_t = driver::DEFAULT_SIGNAL_LEN)]
    signal_len: usize,

    /// Seed for graph generation and shuffling.
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Start node of the graph algorithms.
    #[arg(long, value_name = "INT", default_value_t = 0)]
    start: usize,

    /// Pause after each graph frame.
    #[arg(long, value_name = "MS", default_value_t = 120)]
    graph_delay_ms: u64,

    /// Pause after each array frame.
    #[arg(long, value_name = "MS", default_value_t = 20)]
    array_delay_ms: u64,

    /// Disable all pauses.
    #[arg(long)]
    no_delay: bool,

    /// Shuffle the sort input.
    #[arg(long)]
    shuffle: bool,

    /// What to do with outdated shortest-path queue entries.
    #[arg(long, value_enum, default_value_t = Stale::Revisit)]
    stale_policy: Stale,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Do not render frames.
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn level(&self) -> simplelog::LevelFilter {
        match self.verbose {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Info,
            2 => simplelog::LevelFilter::Debug,
            _ => simplelog::LevelFilter::Trace,
        }
    }

    fn config(&self) -> RunConfig {
        let (graph_delay, array_delay) = if self.no_delay {
            (Duration::ZERO, Duration::ZERO)
        } else {
            (
                Duration::from_millis(self.graph_delay_ms),
                Duration::from_millis(self.array_delay_ms),
            )
        };
        RunConfig {
            node_count: self.nodes,
            edge_density: self.density,
            cache_capacity: self.cache_capacity,
            sort_len: self.sort_len,
            signal_len: self.signal_len,
            seed: self.seed,
            start: self.start,
            graph_delay,
            array_delay,
            shuffle: self.shuffle,
            stale_policy: self.stale_policy.into(),
        }
    }
}

fn print_text(summary: &RunSummary) {
    for stats in &summary.phases {
        println!("{}", stats);
    }
    println!();
    println!("{}", summary.report);
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = args.config();
    config.validate()?;

    let summary = if args.quiet {
        driver::run(&config, NullRenderer)?
    } else {
        let frames: Box<dyn Write> = if args.format.frames_on_stdout() {
            Box::new(io::stdout())
        } else {
            Box::new(io::stderr())
        };
        let mut renderer = TextRenderer::new(frames);
        let summary = driver::run(&config, &mut renderer)?;
        if let Some(err) = renderer.take_error() {
            warn!("frames were lost: {}", err);
        }
        summary
    };

    match args.format {
        Format::Text => print_text(&summary),
        Format::Prometheus => {
            let exporter = PrometheusTextExporter::new("algoviz", io::stdout());
            exporter.export(&summary.report);
            exporter.finish()?;
        },
    }

    Ok(())
}
