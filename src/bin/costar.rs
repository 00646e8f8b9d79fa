// src/bin/costar.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use costar_core::cli::{handlers, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let graph = handlers::load_graph(&cli.movies, &cli.actors)?;
    match &cli.command {
        Commands::Path {
            from,
            to,
            algorithm,
        } => handlers::handle_path(&graph, from, to, *algorithm, cli.format),
        Commands::Components => handlers::handle_components(&graph, cli.format),
        Commands::Stats => handlers::handle_stats(&graph, cli.format),
    }
}
