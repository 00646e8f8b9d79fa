// src/types.rs
use serde::Serialize;

/// A movie shown on a path hop.
#[derive(Debug, Clone, Serialize)]
pub struct MovieRef {
    pub movie_id: String,
    pub title: String,
    pub ranking: f64,
}

/// One step of a rendered path: the actor reached, plus the movie
/// connecting it to the previous actor (`None` on the starting actor).
#[derive(Debug, Clone, Serialize)]
pub struct PathStep {
    pub actor_id: String,
    pub actor_name: String,
    pub via_movie: Option<MovieRef>,
}

/// Result of a path query.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub algorithm: String,
    pub found: bool,
    pub steps: Vec<PathStep>,
    pub total_cost: Option<f64>,
    pub duration_ms: u128,
}

impl PathReport {
    /// Number of edges on the path (0 when no path was found).
    #[must_use]
    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// One histogram bucket: how many components have a given size.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentBucket {
    pub size: usize,
    pub count: usize,
}

/// Result of component enumeration.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentReport {
    pub buckets: Vec<ComponentBucket>,
    pub component_count: usize,
    pub actor_count: usize,
    pub duration_ms: u128,
}

impl ComponentReport {
    /// Total actors across all buckets; equals `actor_count` when the
    /// enumeration covered everyone.
    #[must_use]
    pub fn accounted_actors(&self) -> usize {
        self.buckets.iter().map(|b| b.size * b.count).sum()
    }
}

/// Dataset-wide counts.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStats {
    pub actor_count: usize,
    pub movie_count: usize,
    pub edge_count: usize,
    pub duration_ms: u128,
}
