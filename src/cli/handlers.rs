// src/cli/handlers.rs
//! Command handlers: resolve endpoints, run the query, time it, and
//! hand the structured result to reporting.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::cli::args::Algorithm;
use crate::error::CostarError;
use crate::graph::components::component_histogram;
use crate::graph::dijkstra::dijkstra;
use crate::graph::traverse::{bfs_path, double_ended_bfs};
use crate::graph::{ActorIx, CollabGraph};
use crate::loader;
use crate::reporting::{self, OutputFormat};
use crate::types::{
    ComponentBucket, ComponentReport, DatasetStats, MovieRef, PathReport, PathStep,
};

/// Loads both TSV files and builds the graph.
///
/// # Errors
/// Returns error if either file cannot be read or parsed.
pub fn load_graph(movies: &Path, actors: &Path) -> Result<CollabGraph> {
    let movie_records = loader::read_movies(movies)?;
    let actor_records = loader::read_actors(actors)?;
    Ok(CollabGraph::build(movie_records, actor_records))
}

/// Runs a path query. An unreachable pair is a valid outcome and is
/// reported as such, not treated as a failure.
///
/// # Errors
/// Returns error if an endpoint cannot be resolved or rendering fails.
pub fn handle_path(
    graph: &CollabGraph,
    from: &str,
    to: &str,
    algorithm: Algorithm,
    format: OutputFormat,
) -> Result<()> {
    let from_ix = resolve(graph, from)?;
    let to_ix = resolve(graph, to)?;

    let started = Instant::now();
    let (path, total_cost) = match algorithm {
        Algorithm::Bfs => (bfs_path(graph, from_ix, to_ix), None),
        Algorithm::DoubleEnded => (double_ended_bfs(graph, from_ix, to_ix), None),
        Algorithm::Dijkstra => match dijkstra(graph, from_ix, to_ix)? {
            Some((p, cost)) => (Some(p), Some(cost)),
            None => (None, None),
        },
    };
    let duration_ms = started.elapsed().as_millis();

    let report = build_path_report(graph, from_ix, to_ix, algorithm, path, total_cost, duration_ms)?;
    reporting::print_path_report(&report, format)
}

/// Runs component enumeration.
///
/// # Errors
/// Returns error if rendering fails.
pub fn handle_components(graph: &CollabGraph, format: OutputFormat) -> Result<()> {
    let started = Instant::now();
    let histogram = component_histogram(graph);
    let duration_ms = started.elapsed().as_millis();

    let buckets: Vec<ComponentBucket> = histogram
        .iter()
        .map(|(&size, &count)| ComponentBucket { size, count })
        .collect();
    let report = ComponentReport {
        component_count: histogram.values().sum(),
        buckets,
        actor_count: graph.actor_count(),
        duration_ms,
    };
    reporting::print_component_report(&report, format)
}

/// Prints dataset statistics.
///
/// # Errors
/// Returns error if rendering fails.
pub fn handle_stats(graph: &CollabGraph, format: OutputFormat) -> Result<()> {
    let started = Instant::now();
    let stats = DatasetStats {
        actor_count: graph.actor_count(),
        movie_count: graph.movie_count(),
        edge_count: graph.edge_count(),
        duration_ms: started.elapsed().as_millis(),
    };
    reporting::print_stats(&stats, format)
}

fn resolve(graph: &CollabGraph, query: &str) -> Result<ActorIx> {
    graph
        .resolve(query)
        .ok_or_else(|| CostarError::UnknownActor(query.to_string()).into())
}

fn build_path_report(
    graph: &CollabGraph,
    from: ActorIx,
    to: ActorIx,
    algorithm: Algorithm,
    path: Option<Vec<ActorIx>>,
    total_cost: Option<f64>,
    duration_ms: u128,
) -> Result<PathReport> {
    let steps = match &path {
        Some(p) => describe_path(graph, p)?,
        None => Vec::new(),
    };
    Ok(PathReport {
        from: graph.actor(from).name.clone(),
        to: graph.actor(to).name.clone(),
        algorithm: algorithm.label().to_string(),
        found: path.is_some(),
        steps,
        total_cost,
        duration_ms,
    })
}

/// Annotates a path with the connecting movie for each consecutive
/// pair, chosen by `best_movie`.
pub fn describe_path(graph: &CollabGraph, path: &[ActorIx]) -> Result<Vec<PathStep>> {
    let mut steps = Vec::with_capacity(path.len());
    let mut previous: Option<ActorIx> = None;
    for &ix in path {
        let via_movie = match previous {
            Some(prev) => {
                let movie = graph.movie(graph.best_movie(prev, ix)?);
                Some(MovieRef {
                    movie_id: movie.id.clone(),
                    title: movie.title.clone(),
                    ranking: movie.ranking,
                })
            }
            None => None,
        };
        let actor = graph.actor(ix);
        steps.push(PathStep {
            actor_id: actor.id.clone(),
            actor_name: actor.name.clone(),
            via_movie,
        });
        previous = Some(ix);
    }
    Ok(steps)
}
