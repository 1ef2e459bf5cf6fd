//! `lexgraphs` command line interface: reads an edge list and prints the Lex-BFS ordering,
//! the chordality or the interval verdict of the graph.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lexgraphs::{
    algo::*,
    io::{EdgeListReader, GraphReader, LabeledGraph},
    prelude::*,
    report::Report,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Classify an undirected graph given as an edge list
#[derive(Parser, Debug)]
#[command(name = "lexgraphs")]
#[command(version, about, long_about = None)]
struct Args {
    /// What to compute
    #[arg(value_enum)]
    task: Task,

    /// Edge list with one `u v` pair of integer node ids per line
    input: PathBuf,

    /// Skip lines starting with this prefix
    #[arg(long, value_name = "PREFIX")]
    comment: Option<String>,

    /// Reject malformed lines instead of skipping them
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Task {
    /// Print a Lex-BFS ordering of the nodes
    Lexbfs,
    /// Print whether the graph is chordal
    Chordal,
    /// Print whether the graph is an interval graph
    Interval,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut reader = EdgeListReader::new().strict(args.strict);
    if let Some(prefix) = &args.comment {
        reader = reader.comment_identifier(prefix.as_str());
    }

    let LabeledGraph { graph, labels }: LabeledGraph<AdjArrayUndir> = reader
        .try_read_graph_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    info!(
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        task = ?args.task,
        "read graph"
    );

    let report = match args.task {
        Task::Lexbfs => Report::ordering(&labels, &graph.lex_bfs_order()?),
        Task::Chordal => graph.is_chordal()?.into(),
        Task::Interval => graph.is_interval()?.into(),
    };

    println!("{report}");
    Ok(())
}
