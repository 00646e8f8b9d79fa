// src/graph/adjacency.rs
//! Lazy neighbor maps and the per-pair best-movie cache.

use crate::error::{CostarError, Result};
use crate::graph::{ActorIx, Adjacency, CollabGraph, MovieIx};

impl CollabGraph {
    /// Returns the neighbor map for `a`, building it on first access.
    ///
    /// The map is computed once per actor and cached for the graph's
    /// lifetime; later calls are pure reads.
    pub fn neighbors(&self, a: ActorIx) -> &Adjacency {
        self.actors[a].adjacency.get_or_init(|| self.build_adjacency(a))
    }

    fn build_adjacency(&self, a: ActorIx) -> Adjacency {
        let mut adjacency = Adjacency::new();
        for &movie_ix in &self.actors[a].movies {
            for &other in &self.movies[movie_ix].cast {
                if other != a {
                    adjacency.entry(other).or_default().insert(movie_ix);
                }
            }
        }
        adjacency
    }

    /// Returns the cheapest movie shared by `a` and `b`.
    ///
    /// Shared movies are scanned in ascending arena index order and
    /// the first strict minimum wins, so ties resolve to the
    /// earliest-loaded movie. The result is memoized per neighbor.
    ///
    /// # Errors
    /// Returns `NotAdjacent` when the two actors share no movie. A
    /// failed call leaves the cache untouched.
    pub fn best_movie(&self, a: ActorIx, b: ActorIx) -> Result<MovieIx> {
        if let Some(&cached) = self.actors[a].best_edge.borrow().get(&b) {
            return Ok(cached);
        }

        let not_adjacent = || CostarError::NotAdjacent {
            a: self.actors[a].name.clone(),
            b: self.actors[b].name.clone(),
        };
        let shared = self.neighbors(a).get(&b).ok_or_else(not_adjacent)?;

        let mut candidates = shared.iter().copied();
        let mut best = candidates.next().ok_or_else(not_adjacent)?;
        let mut best_weight = self.movies[best].weight();
        for movie_ix in candidates {
            let weight = self.movies[movie_ix].weight();
            if weight < best_weight {
                best = movie_ix;
                best_weight = weight;
            }
        }

        self.actors[a].best_edge.borrow_mut().insert(b, best);
        Ok(best)
    }
}
