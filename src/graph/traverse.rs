// src/graph/traverse.rs
//! Unweighted shortest-path search: single-ended and double-ended BFS.

use std::collections::{HashMap, VecDeque};

use crate::graph::{ActorIx, CollabGraph};

/// Parent map produced by BFS: actor -> predecessor, `None` marking
/// the root. Presence in the map doubles as the visited set.
pub type ParentMap = HashMap<ActorIx, Option<ActorIx>>;

/// Level-order traversal from `from`, stopping the instant `to` is
/// discovered (not when it is dequeued). If `to` is unreachable the
/// map covers the whole component of `from`.
pub fn bfs_parents(graph: &CollabGraph, from: ActorIx, to: ActorIx) -> ParentMap {
    let mut parents = ParentMap::new();
    parents.insert(from, None);

    let mut queue = VecDeque::new();
    queue.push_back(from);

    while let Some(actor) = queue.pop_front() {
        for &other in graph.neighbors(actor).keys() {
            if parents.contains_key(&other) {
                continue;
            }
            parents.insert(other, Some(actor));
            queue.push_back(other);
            if other == to {
                return parents;
            }
        }
    }

    parents
}

/// Walks the parent map backward from `to` and reverses the result.
/// Returns `None` when `to` was never reached.
#[must_use]
pub fn build_path(parents: &ParentMap, to: ActorIx) -> Option<Vec<ActorIx>> {
    if !parents.contains_key(&to) {
        return None;
    }
    let mut path = vec![to];
    let mut current = to;
    while let Some(&Some(parent)) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    Some(path)
}

/// Shortest path by edge count, or `None` if the two actors are in
/// different components. When several shortest paths exist the one
/// found first in (deterministic) neighbor order is returned.
#[must_use]
pub fn bfs_path(graph: &CollabGraph, from: ActorIx, to: ActorIx) -> Option<Vec<ActorIx>> {
    if from == to {
        return Some(vec![from]);
    }
    let parents = bfs_parents(graph, from, to);
    build_path(&parents, to)
}

/// One side of the bidirectional search.
struct SearchSide {
    parents: ParentMap,
    dist: HashMap<ActorIx, usize>,
    frontier: Vec<ActorIx>,
}

impl SearchSide {
    fn new(root: ActorIx) -> Self {
        let mut parents = ParentMap::new();
        parents.insert(root, None);
        let mut dist = HashMap::new();
        dist.insert(root, 0);
        Self {
            parents,
            dist,
            frontier: vec![root],
        }
    }
}

/// Expands one full frontier level on `this` side. Every newly
/// discovered actor is checked against the other side's map; the
/// meeting with the smallest combined distance seen during the level
/// is returned. The level always runs to completion so an
/// earlier-but-worse meeting cannot shadow a cheaper one found later
/// in the same level, which keeps the result length equal to
/// single-ended BFS.
fn expand_level(
    graph: &CollabGraph,
    this: &mut SearchSide,
    other: &SearchSide,
) -> Option<ActorIx> {
    let mut best: Option<(ActorIx, usize)> = None;
    let mut next = Vec::new();

    for actor in std::mem::take(&mut this.frontier) {
        let depth = this.dist[&actor];
        for &discovered in graph.neighbors(actor).keys() {
            if this.parents.contains_key(&discovered) {
                continue;
            }
            this.parents.insert(discovered, Some(actor));
            this.dist.insert(discovered, depth + 1);
            next.push(discovered);

            if let Some(&other_depth) = other.dist.get(&discovered) {
                let total = depth + 1 + other_depth;
                if best.map_or(true, |(_, t)| total < t) {
                    best = Some((discovered, total));
                }
            }
        }
    }

    this.frontier = next;
    best.map(|(meeting, _)| meeting)
}

/// Bidirectional BFS: one frontier rooted at each endpoint, expanded
/// one level per side per round (source side first). Returns a path of
/// the same minimum edge count as [`bfs_path`], or `None` when both
/// frontiers exhaust without meeting.
#[must_use]
pub fn double_ended_bfs(graph: &CollabGraph, from: ActorIx, to: ActorIx) -> Option<Vec<ActorIx>> {
    if from == to {
        return Some(vec![from]);
    }

    let mut source = SearchSide::new(from);
    let mut target = SearchSide::new(to);

    // Once either side exhausts its component without a meeting, the
    // endpoints are disconnected.
    while !source.frontier.is_empty() && !target.frontier.is_empty() {
        if let Some(meeting) = expand_level(graph, &mut source, &target) {
            return splice(&source, &target, meeting);
        }
        if let Some(meeting) = expand_level(graph, &mut target, &source) {
            return splice(&source, &target, meeting);
        }
    }

    None
}

/// Joins the source-side path to the meeting actor with the reversed
/// target-side path, counting the meeting actor once.
fn splice(source: &SearchSide, target: &SearchSide, meeting: ActorIx) -> Option<Vec<ActorIx>> {
    let mut path = build_path(&source.parents, meeting)?;
    let mut current = meeting;
    while let Some(&Some(parent)) = target.parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    Some(path)
}
