// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the directory and route graph
//!
//! These tests verify:
//! 1. Names - the last name registered for an ID is the one returned
//! 2. Unknown IDs - every lookup on an unregistered ID fails the same way
//! 3. Adjacency - `is_adjacent` agrees with `adjacent_ids`
//! 4. Direction - distances in both directions are kept apart

use proptest::prelude::*;
use railnet::directory::StationDirectory;
use railnet::error::Error;
use railnet::graph::RouteGraph;
use railnet::types::{Station, StationId};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Strategies
// =============================================================================

fn station_ids() -> impl Strategy<Value = u32> {
    0u32..40
}

fn named_stations() -> impl Strategy<Value = Vec<(u32, String)>> {
    prop::collection::vec((station_ids(), "[A-Z][a-z]{1,8}"), 0..30)
}

fn tracks() -> impl Strategy<Value = Vec<(u32, u32, f64)>> {
    prop::collection::vec((station_ids(), station_ids(), 0.0f64..500.0), 0..80)
}

/// Graph with every ID in `0..20` registered, plus the given tracks from
/// registered sources
fn build_graph(tracks: &[(u32, u32, f64)]) -> RouteGraph {
    let mut graph = RouteGraph::new();
    for id in 0..20 {
        graph.add_station(StationId(id));
    }
    for &(source, target, distance) in tracks {
        if source < 20 {
            graph.add_track(StationId(source), StationId(target), distance).unwrap();
        }
    }
    graph
}

// =============================================================================
// Directory Invariants
// =============================================================================

proptest! {
    #[test]
    fn test_name_is_last_registered(stations in named_stations()) {
        let directory: StationDirectory = stations
            .iter()
            .map(|(id, name)| Station { id: StationId(*id), name: name.clone() })
            .collect();

        let expected: HashMap<u32, &String> = stations.iter().map(|(id, name)| (*id, name)).collect();
        prop_assert_eq!(directory.len(), expected.len());
        for (id, name) in expected {
            prop_assert_eq!(directory.name_of(StationId(id)), Ok(name.as_str()));
        }
    }

    #[test]
    fn test_unregistered_ids_are_unknown(stations in named_stations(), probe in 40u32..1000) {
        let directory: StationDirectory = stations
            .iter()
            .map(|(id, name)| Station { id: StationId(*id), name: name.clone() })
            .collect();
        let graph = build_graph(&[]);
        let id = StationId(probe);

        prop_assert_eq!(directory.name_of(id), Err(Error::UnknownStation(id)));
        prop_assert_eq!(graph.adjacent_ids(id), Err(Error::UnknownStation(id)));
        prop_assert_eq!(graph.is_adjacent(id, StationId(0)), Err(Error::UnknownStation(id)));
        prop_assert_eq!(graph.is_adjacent(StationId(0), id), Err(Error::UnknownStation(id)));
    }
}

// =============================================================================
// Graph Invariants
// =============================================================================

proptest! {
    #[test]
    fn test_is_adjacent_matches_adjacent_ids(tracks in tracks()) {
        let graph = build_graph(&tracks);

        for a in 0..20 {
            let adjacent: HashSet<StationId> = graph.adjacent_ids(StationId(a)).unwrap().into_iter().collect();
            for b in 0..20 {
                prop_assert_eq!(
                    graph.is_adjacent(StationId(a), StationId(b)).unwrap(),
                    adjacent.contains(&StationId(b))
                );
            }
        }
    }

    #[test]
    fn test_last_track_distance_wins(tracks in tracks()) {
        let graph = build_graph(&tracks);

        let mut expected = HashMap::new();
        for &(source, target, distance) in tracks.iter().filter(|t| t.0 < 20) {
            expected.insert((source, target), distance);
        }
        prop_assert_eq!(graph.track_count(), expected.len());
        for ((source, target), distance) in expected {
            prop_assert_eq!(graph.distance(StationId(source), StationId(target)), Some(distance));
        }
    }

    #[test]
    fn test_reregistration_reproduces_adjacency(tracks in tracks(), station in 0u32..20) {
        let once = build_graph(&tracks);

        let mut twice = build_graph(&tracks);
        twice.add_station(StationId(station));
        for &(source, target, distance) in tracks.iter().filter(|t| t.0 == station) {
            twice.add_track(StationId(source), StationId(target), distance).unwrap();
        }

        prop_assert_eq!(
            once.adjacent_ids(StationId(station)).unwrap(),
            twice.adjacent_ids(StationId(station)).unwrap()
        );
    }
}

#[test]
fn test_asymmetric_distances_preserved() {
    let mut graph = RouteGraph::new();
    graph.add_station(StationId(1));
    graph.add_station(StationId(2));
    graph.add_track(StationId(1), StationId(2), 10.0).unwrap();
    graph.add_track(StationId(2), StationId(1), 12.0).unwrap();

    assert!(graph.is_adjacent(StationId(1), StationId(2)).unwrap());
    assert!(graph.is_adjacent(StationId(2), StationId(1)).unwrap());
    assert_eq!(graph.distance(StationId(1), StationId(2)), Some(10.0));
    assert_eq!(graph.distance(StationId(2), StationId(1)), Some(12.0));
}
