use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(name = "costar", version, about = "Actor collaboration graph explorer")]
pub struct Cli {
    /// Movie dataset (tab-separated: id, title, ranking)
    #[arg(long, default_value = "movies.tsv", value_name = "FILE")]
    pub movies: PathBuf,
    /// Actor dataset (tab-separated: id, name, movie ids...)
    #[arg(long, default_value = "actors.tsv", value_name = "FILE")]
    pub actors: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a path between two actors (by nm id or exact name)
    Path {
        from: String,
        to: String,
        #[arg(long, short, value_enum, default_value_t = Algorithm::Bfs)]
        algorithm: Algorithm,
    },
    /// Count connected components by size
    Components,
    /// Print dataset statistics
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Single-ended breadth-first search (fewest hops)
    Bfs,
    /// Double-ended breadth-first search (fewest hops, smaller frontier)
    DoubleEnded,
    /// Dijkstra over movie weights (cheapest total cost)
    Dijkstra,
}

impl Algorithm {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::DoubleEnded => "double-ended",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}
