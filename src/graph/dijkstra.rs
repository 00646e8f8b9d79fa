// src/graph/dijkstra.rs
//! Weighted shortest path: each hop costs the weight of the cheapest
//! movie shared by the pair.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::Result;
use crate::graph::{ActorIx, CollabGraph};

/// Frontier entry. Ordered as a min-heap on cost; the insertion
/// sequence number breaks ties so the comparator is total without
/// relying on actor ordering.
struct HeapEntry {
    cost: f64,
    seq: u64,
    actor: ActorIx,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we pop cheapest first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cheapest path from `from` to `to` and its total cost, or `Ok(None)`
/// when the target is unreachable. Requires non-negative edge weights,
/// which the ranking-to-weight derivation guarantees.
///
/// # Errors
/// Propagates `best_movie` failures; these cannot occur for actors
/// reached through the neighbor maps.
pub fn dijkstra(
    graph: &CollabGraph,
    from: ActorIx,
    to: ActorIx,
) -> Result<Option<(Vec<ActorIx>, f64)>> {
    if from == to {
        return Ok(Some((vec![from], 0.0)));
    }

    let mut heap = BinaryHeap::new();
    let mut best_cost: HashMap<ActorIx, f64> = HashMap::new();
    let mut predecessor: HashMap<ActorIx, ActorIx> = HashMap::new();
    let mut seq: u64 = 0;

    best_cost.insert(from, 0.0);
    heap.push(HeapEntry {
        cost: 0.0,
        seq,
        actor: from,
    });

    while let Some(HeapEntry { cost, actor, .. }) = heap.pop() {
        // Pop order is non-decreasing, so once the popped cost cannot
        // beat the target's best, the target is final.
        if let Some(&target_cost) = best_cost.get(&to) {
            if cost >= target_cost {
                break;
            }
        }

        for &other in graph.neighbors(actor).keys() {
            let movie_ix = graph.best_movie(actor, other)?;
            let candidate = cost + graph.movie(movie_ix).weight();
            let improved = best_cost.get(&other).map_or(true, |&c| candidate < c);
            if improved {
                best_cost.insert(other, candidate);
                predecessor.insert(other, actor);
                seq += 1;
                heap.push(HeapEntry {
                    cost: candidate,
                    seq,
                    actor: other,
                });
            }
        }
    }

    let Some(&total) = best_cost.get(&to) else {
        return Ok(None);
    };

    let mut path = vec![to];
    let mut current = to;
    while let Some(&parent) = predecessor.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();

    Ok(Some((path, total)))
}
