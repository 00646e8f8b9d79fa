// src/graph/components.rs
//! Connected-component enumeration.

use std::collections::{BTreeMap, VecDeque};

use crate::graph::{ActorIx, CollabGraph};

/// Histogram of component sizes: size -> how many components have it.
/// Every actor lands in exactly one component; actors with no
/// co-stars form components of size 1.
#[must_use]
pub fn component_histogram(graph: &CollabGraph) -> BTreeMap<usize, usize> {
    let mut visited = vec![false; graph.actor_count()];
    let mut histogram = BTreeMap::new();

    for start in 0..graph.actor_count() {
        if visited[start] {
            continue;
        }
        let size = flood_fill(graph, start, &mut visited);
        *histogram.entry(size).or_insert(0) += 1;
    }

    histogram
}

/// BFS flood fill with no target and no early stop; returns the size
/// of the component containing `start` and marks it visited.
fn flood_fill(graph: &CollabGraph, start: ActorIx, visited: &mut [bool]) -> usize {
    visited[start] = true;
    let mut size = 1;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(actor) = queue.pop_front() {
        for &other in graph.neighbors(actor).keys() {
            if !visited[other] {
                visited[other] = true;
                queue.push_back(other);
                size += 1;
            }
        }
    }

    size
}
