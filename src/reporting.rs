//! Console and JSON rendering of query reports.
//!
//! The graph engine only returns structured results; everything the
//! user sees is produced here.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;

use crate::types::{ComponentReport, DatasetStats, PathReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Prints a path query result in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_path_report(report: &PathReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Terminal => print_path_terminal(report),
    }
    Ok(())
}

fn print_path_terminal(report: &PathReport) {
    if !report.found {
        println!(
            "{} {} and {} are not connected",
            "no path:".yellow().bold(),
            report.from.bold(),
            report.to.bold()
        );
        print_elapsed(report.duration_ms);
        return;
    }

    println!(
        "{} {} to {} in {} {} ({})",
        "path:".green().bold(),
        report.from.bold(),
        report.to.bold(),
        report.hops(),
        if report.hops() == 1 { "hop" } else { "hops" },
        report.algorithm.dimmed()
    );
    for step in &report.steps {
        if let Some(movie) = &step.via_movie {
            println!(
                "      {}",
                format!("via {} ({:.1})", movie.title, movie.ranking).cyan()
            );
        }
        println!("  {}", step.actor_name.bold());
    }
    if let Some(cost) = report.total_cost {
        println!("{} {cost:.1}", "total cost:".green().bold());
    }
    print_elapsed(report.duration_ms);
}

/// Prints the component histogram in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_component_report(report: &ComponentReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Terminal => {
            println!("{}", "components:".green().bold());
            for bucket in &report.buckets {
                println!(
                    "  {:>8} {} x {}",
                    bucket.size,
                    if bucket.size == 1 { "actor " } else { "actors" },
                    bucket.count
                );
            }
            println!(
                "  {} actors across {} components",
                report.actor_count.to_string().bold(),
                report.component_count.to_string().bold()
            );
            print_elapsed(report.duration_ms);
        }
    }
    Ok(())
}

/// Prints dataset statistics in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_stats(stats: &DatasetStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Terminal => {
            println!("{}", "dataset:".green().bold());
            println!("  actors: {}", stats.actor_count);
            println!("  movies: {}", stats.movie_count);
            println!("  edges:  {}", stats.edge_count);
            print_elapsed(stats.duration_ms);
        }
    }
    Ok(())
}

fn print_elapsed(duration_ms: u128) {
    println!("{}", format!("({duration_ms} ms)").dimmed());
}
