// src/graph/mod.rs
//! The collaboration graph: arena storage for movies and actors, plus
//! graph-wide queries.
//!
//! Actors are the nodes; two actors are adjacent when they co-starred
//! in at least one movie. Movies and actors live in index-addressed
//! arenas, and every cross-reference (casts, adjacency, caches) stores
//! arena indices rather than owned values.

pub mod adjacency;
pub mod components;
pub mod dijkstra;
pub mod traverse;

use std::cell::{OnceCell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::loader::{ActorRecord, MovieRecord};

/// Index into the movie arena.
pub type MovieIx = usize;

/// Index into the actor arena.
pub type ActorIx = usize;

/// Upper bound of the ranking scale. Edge weight is
/// `MAX_RANKING - ranking`, so weights are never negative.
pub const MAX_RANKING: f64 = 10.0;

/// Neighbor map for one actor: co-star index -> movies shared with
/// that co-star. BTree containers keep iteration order deterministic.
pub type Adjacency = BTreeMap<ActorIx, BTreeSet<MovieIx>>;

/// A movie record in the arena.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub ranking: f64,
    /// Everyone credited on this movie. Populated while actors load.
    pub cast: Vec<ActorIx>,
}

impl Movie {
    /// Edge cost contributed by this movie. Lower ranking means a
    /// heavier (worse) edge.
    #[must_use]
    pub fn weight(&self) -> f64 {
        MAX_RANKING - self.ranking
    }
}

/// An actor node.
///
/// `adjacency` is built once on first access and never mutated again;
/// `best_edge` grows one entry per queried neighbor and entries are
/// never invalidated. Both caches assume the graph is structurally
/// frozen after `CollabGraph::build`, which is why no mutation API
/// exists. The cells make the graph `!Sync`; concurrent use would need
/// a write-once lock per actor instead.
#[derive(Debug)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub movies: Vec<MovieIx>,
    pub(crate) adjacency: OnceCell<Adjacency>,
    pub(crate) best_edge: RefCell<HashMap<ActorIx, MovieIx>>,
}

/// The whole dataset as a graph.
pub struct CollabGraph {
    movies: Vec<Movie>,
    actors: Vec<Actor>,
    actor_ids: HashMap<String, ActorIx>,
    actor_names: HashMap<String, ActorIx>,
}

impl CollabGraph {
    /// Builds the graph from loader records.
    ///
    /// Movies enter the arena in record order. Actors enter in record
    /// order, with duplicate nm ids ignored (first record wins). Movie
    /// ids that are not present in the movie set are dropped silently,
    /// matching the dataset contract: actor rows may reference titles
    /// outside the loaded slice.
    #[must_use]
    pub fn build(movie_records: Vec<MovieRecord>, actor_records: Vec<ActorRecord>) -> Self {
        let mut movies: Vec<Movie> = Vec::with_capacity(movie_records.len());
        let mut movie_ids: HashMap<String, MovieIx> = HashMap::with_capacity(movie_records.len());

        for record in movie_records {
            if movie_ids.contains_key(&record.id) {
                continue;
            }
            movie_ids.insert(record.id.clone(), movies.len());
            movies.push(Movie {
                id: record.id,
                title: record.title,
                ranking: record.ranking,
                cast: Vec::new(),
            });
        }

        let mut actors: Vec<Actor> = Vec::with_capacity(actor_records.len());
        let mut actor_ids: HashMap<String, ActorIx> = HashMap::with_capacity(actor_records.len());
        let mut actor_names: HashMap<String, ActorIx> = HashMap::new();

        for record in actor_records {
            if actor_ids.contains_key(&record.id) {
                continue;
            }
            let ix = actors.len();
            let mut roles = Vec::with_capacity(record.movie_ids.len());
            for tt_id in &record.movie_ids {
                if let Some(&movie_ix) = movie_ids.get(tt_id) {
                    roles.push(movie_ix);
                    movies[movie_ix].cast.push(ix);
                }
            }
            actor_ids.insert(record.id.clone(), ix);
            actor_names.entry(record.name.clone()).or_insert(ix);
            actors.push(Actor {
                id: record.id,
                name: record.name,
                movies: roles,
                adjacency: OnceCell::new(),
                best_edge: RefCell::new(HashMap::new()),
            });
        }

        Self {
            movies,
            actors,
            actor_ids,
            actor_names,
        }
    }

    #[must_use]
    pub fn movie(&self, ix: MovieIx) -> &Movie {
        &self.movies[ix]
    }

    #[must_use]
    pub fn actor(&self, ix: ActorIx) -> &Actor {
        &self.actors[ix]
    }

    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of co-starring pairs summed over casts. Pairs sharing
    /// several movies are counted once per movie, like the source
    /// dataset's own statistic.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.movies
            .iter()
            .map(|m| {
                let n = m.cast.len();
                n * n.saturating_sub(1) / 2
            })
            .sum()
    }

    /// Resolves a query to an actor: nm id first, then exact name.
    /// On duplicate names the first-loaded actor wins.
    #[must_use]
    pub fn resolve(&self, query: &str) -> Option<ActorIx> {
        self.actor_ids
            .get(query)
            .or_else(|| self.actor_names.get(query))
            .copied()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::CollabGraph;
    use crate::loader::{ActorRecord, MovieRecord};

    pub fn movie(id: &str, title: &str, ranking: f64) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: title.to_string(),
            ranking,
        }
    }

    pub fn actor(id: &str, name: &str, movies: &[&str]) -> ActorRecord {
        ActorRecord {
            id: id.to_string(),
            name: name.to_string(),
            movie_ids: movies.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    /// X and Y share m1 (ranking 8.0), Y and Z share m2 (ranking 5.0).
    pub fn chain3() -> CollabGraph {
        CollabGraph::build(
            vec![movie("tt1", "M1", 8.0), movie("tt2", "M2", 5.0)],
            vec![
                actor("nm1", "X", &["tt1"]),
                actor("nm2", "Y", &["tt1", "tt2"]),
                actor("nm3", "Z", &["tt2"]),
            ],
        )
    }

    /// Chain of `n` actors, each consecutive pair sharing one movie
    /// (ranking 5.0).
    pub fn chain(n: usize) -> CollabGraph {
        let movies = (0..n.saturating_sub(1))
            .map(|i| movie(&format!("tt{i}"), &format!("M{i}"), 5.0))
            .collect();
        let actors = (0..n)
            .map(|i| {
                let mut roles = Vec::new();
                if i > 0 {
                    roles.push(format!("tt{}", i - 1));
                }
                if i + 1 < n {
                    roles.push(format!("tt{i}"));
                }
                let roles: Vec<&str> = roles.iter().map(String::as_str).collect();
                actor(&format!("nm{i}"), &format!("A{i}"), &roles)
            })
            .collect();
        CollabGraph::build(movies, actors)
    }

    /// Diamond: s connects to t through a (good movies) and through b
    /// (bad movies), plus a direct s-t movie with the worst ranking.
    ///
    ///   s -(9.5)- a -(9.5)- t      cost 0.5 + 0.5 = 1.0
    ///   s -(7.0)- b -(7.0)- t      cost 3.0 + 3.0 = 6.0
    ///   s -------(1.0)------ t     cost 9.0
    pub fn diamond() -> CollabGraph {
        CollabGraph::build(
            vec![
                movie("tt_sa", "SA", 9.5),
                movie("tt_at", "AT", 9.5),
                movie("tt_sb", "SB", 7.0),
                movie("tt_bt", "BT", 7.0),
                movie("tt_st", "ST", 1.0),
            ],
            vec![
                actor("nm_s", "S", &["tt_sa", "tt_sb", "tt_st"]),
                actor("nm_a", "A", &["tt_sa", "tt_at"]),
                actor("nm_b", "B", &["tt_sb", "tt_bt"]),
                actor("nm_t", "T", &["tt_at", "tt_bt", "tt_st"]),
            ],
        )
    }
}
