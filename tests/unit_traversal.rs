// tests/unit_traversal.rs
//! Path search behavior across both BFS variants and Dijkstra.

use costar_core::graph::dijkstra::dijkstra;
use costar_core::graph::traverse::{bfs_path, double_ended_bfs};
use costar_core::graph::CollabGraph;
use costar_core::loader::{ActorRecord, MovieRecord};

fn movie(id: &str, title: &str, ranking: f64) -> MovieRecord {
    MovieRecord {
        id: id.to_string(),
        title: title.to_string(),
        ranking,
    }
}

fn actor(id: &str, name: &str, movies: &[&str]) -> ActorRecord {
    ActorRecord {
        id: id.to_string(),
        name: name.to_string(),
        movie_ids: movies.iter().map(|m| (*m).to_string()).collect(),
    }
}

/// X-Y via M1 (8.0), Y-Z via M2 (5.0), plus isolated W.
fn scenario() -> CollabGraph {
    CollabGraph::build(
        vec![movie("tt1", "M1", 8.0), movie("tt2", "M2", 5.0)],
        vec![
            actor("nm_x", "X", &["tt1"]),
            actor("nm_y", "Y", &["tt1", "tt2"]),
            actor("nm_z", "Z", &["tt2"]),
            actor("nm_w", "W", &[]),
        ],
    )
}

/// A branchy graph: two routes from a hub to a sink (3 hops via A and
/// B, 2 hops via C), plus a pendant actor hanging off the sink.
fn branchy() -> CollabGraph {
    CollabGraph::build(
        vec![
            movie("tt_hub_a", "HA", 5.0),
            movie("tt_a_b", "AB", 5.0),
            movie("tt_b_sink", "BS", 5.0),
            movie("tt_hub_c", "HC", 5.0),
            movie("tt_c_sink", "CS", 5.0),
            movie("tt_sink_p", "SP", 5.0),
        ],
        vec![
            actor("nm_h", "Hub", &["tt_hub_a", "tt_hub_c"]),
            actor("nm_a", "A", &["tt_hub_a", "tt_a_b"]),
            actor("nm_b", "B", &["tt_a_b", "tt_b_sink"]),
            actor("nm_c", "C", &["tt_hub_c", "tt_c_sink"]),
            actor("nm_s", "Sink", &["tt_b_sink", "tt_c_sink", "tt_sink_p"]),
            actor("nm_p", "Pendant", &["tt_sink_p"]),
        ],
    )
}

#[test]
fn test_scenario_bfs_path() {
    let g = scenario();
    let (x, z) = (g.resolve("X").unwrap(), g.resolve("Z").unwrap());
    let path = bfs_path(&g, x, z).unwrap();
    let names: Vec<&str> = path.iter().map(|&ix| g.actor(ix).name.as_str()).collect();
    assert_eq!(names, vec!["X", "Y", "Z"]);
}

#[test]
fn test_scenario_dijkstra_cost() {
    let g = scenario();
    let (x, z) = (g.resolve("X").unwrap(), g.resolve("Z").unwrap());
    let (path, cost) = dijkstra(&g, x, z).unwrap().unwrap();
    assert_eq!(path.len(), 3);
    // weight(M1) + weight(M2) = 2.0 + 5.0 = 7.0
    assert!((cost - 7.0).abs() < 1e-9);
}

#[test]
fn test_scenario_isolated_actor_unreachable() {
    let g = scenario();
    let (w, x) = (g.resolve("W").unwrap(), g.resolve("X").unwrap());
    assert!(bfs_path(&g, w, x).is_none());
    assert!(double_ended_bfs(&g, w, x).is_none());
    assert!(dijkstra(&g, w, x).unwrap().is_none());
}

#[test]
fn test_bfs_directions_agree_on_length() {
    let g = branchy();
    for a in 0..g.actor_count() {
        for b in 0..g.actor_count() {
            let forward = bfs_path(&g, a, b).map(|p| p.len());
            let backward = bfs_path(&g, b, a).map(|p| p.len());
            assert_eq!(forward, backward, "pair ({a}, {b})");
        }
    }
}

#[test]
fn test_double_ended_equivalent_to_single_ended() {
    let g = branchy();
    for a in 0..g.actor_count() {
        for b in 0..g.actor_count() {
            let single = bfs_path(&g, a, b).map(|p| p.len());
            let double = double_ended_bfs(&g, a, b).map(|p| p.len());
            assert_eq!(single, double, "pair ({a}, {b})");
        }
    }
}

#[test]
fn test_paths_use_real_edges() {
    let g = branchy();
    let hub = g.resolve("Hub").unwrap();
    let pendant = g.resolve("Pendant").unwrap();
    for path in [
        bfs_path(&g, hub, pendant).unwrap(),
        double_ended_bfs(&g, hub, pendant).unwrap(),
        dijkstra(&g, hub, pendant).unwrap().unwrap().0,
    ] {
        assert_eq!(path.first(), Some(&hub));
        assert_eq!(path.last(), Some(&pendant));
        for pair in path.windows(2) {
            assert!(
                g.neighbors(pair[0]).contains_key(&pair[1]),
                "non-edge {:?}",
                pair
            );
        }
    }
}

#[test]
fn test_dijkstra_not_longer_than_alternatives() {
    // Dijkstra's cost must not exceed the cost of the BFS path.
    let g = branchy();
    let hub = g.resolve("Hub").unwrap();
    let sink = g.resolve("Sink").unwrap();

    let (_, best_cost) = dijkstra(&g, hub, sink).unwrap().unwrap();
    let bfs = bfs_path(&g, hub, sink).unwrap();
    let mut bfs_cost = 0.0;
    for pair in bfs.windows(2) {
        let m = g.best_movie(pair[0], pair[1]).unwrap();
        bfs_cost += g.movie(m).weight();
    }
    assert!(best_cost <= bfs_cost + 1e-9);
}
