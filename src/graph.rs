// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Directed route graph between stations

use crate::error::Error;
use crate::types::{StationId, Track};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Outgoing tracks of one station, in insertion order
type Adjacency = IndexMap<StationId, f64>;

/// The route graph: each registered station maps destinations to distances.
///
/// Distances are directed, so A→B and B→A are stored and reported
/// independently and may differ.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    stations: HashMap<StationId, Adjacency>,
}

impl RouteGraph {
    /// Create a new empty route graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station with no outgoing tracks.
    ///
    /// Registering an existing station clears its outgoing tracks.
    pub fn add_station(&mut self, id: StationId) {
        if self.stations.insert(id, Adjacency::new()).is_some() {
            tracing::debug!("Station {} registered again, outgoing tracks cleared", id);
        }
    }

    /// Add or overwrite the track `source → target`
    pub fn add_track(&mut self, source: StationId, target: StationId, distance: f64) -> Result<(), Error> {
        let adjacency = self
            .stations
            .get_mut(&source)
            .ok_or(Error::UnknownStation(source))?;

        if let Some(previous) = adjacency.insert(target, distance) {
            tracing::debug!(
                "Track {} -> {} overwritten ({} km -> {} km)",
                source,
                target,
                previous,
                distance
            );
        }
        Ok(())
    }

    /// Add a track value
    pub fn insert(&mut self, track: Track) -> Result<(), Error> {
        self.add_track(track.source, track.target, track.distance)
    }

    /// Destinations reachable by one direct track, in insertion order
    pub fn adjacent_ids(&self, id: StationId) -> Result<Vec<StationId>, Error> {
        Ok(self.adjacency(id)?.keys().copied().collect())
    }

    /// Outgoing tracks with their distances, in insertion order
    pub fn tracks_from(&self, id: StationId) -> Result<impl Iterator<Item = (StationId, f64)> + '_, Error> {
        Ok(self.adjacency(id)?.iter().map(|(target, distance)| (*target, *distance)))
    }

    /// Whether a direct track `a → b` exists
    pub fn is_adjacent(&self, a: StationId, b: StationId) -> Result<bool, Error> {
        let adjacency = self.adjacency(a)?;
        self.ensure_registered(b)?;
        Ok(adjacency.contains_key(&b))
    }

    /// Directed distance of the track `a → b`, if there is one
    #[must_use]
    pub fn distance(&self, a: StationId, b: StationId) -> Option<f64> {
        self.stations.get(&a)?.get(&b).copied()
    }

    /// Whether the station was registered
    #[must_use]
    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// Number of registered stations
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of distinct directed tracks
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.stations.values().map(IndexMap::len).sum()
    }

    fn adjacency(&self, id: StationId) -> Result<&Adjacency, Error> {
        self.stations.get(&id).ok_or(Error::UnknownStation(id))
    }

    fn ensure_registered(&self, id: StationId) -> Result<(), Error> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownStation(id))
        }
    }
}
