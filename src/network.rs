// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The rail network: directory and route graph built together

use crate::directory::StationDirectory;
use crate::error::Error;
use crate::graph::RouteGraph;
use crate::types::{Station, TrackRecord};
use indexmap::IndexSet;

/// Station directory plus route graph, built once and then only read
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    directory: StationDirectory,
    graph: RouteGraph,
}

impl RailNetwork {
    /// Build the network from station-to-station rows.
    ///
    /// Distinct `(source_id, source_name)` pairs are registered first, in
    /// the order they are first seen, then every row is added as a track.
    pub fn from_records(records: &[TrackRecord]) -> Result<Self, Error> {
        let stations: IndexSet<Station> = records.iter().map(TrackRecord::station).collect();

        let mut network = Self::default();
        for station in stations {
            network.graph.add_station(station.id);
            network.directory.insert(station.id, station.name);
        }

        for record in records {
            if record.distance < 0.0 {
                tracing::warn!(
                    "Negative distance {} km on track {} -> {}",
                    record.distance,
                    record.source_id,
                    record.target_id
                );
            }
            network.graph.insert(record.track())?;
        }

        tracing::debug!(
            "Built network: {} stations, {} tracks from {} rows",
            network.station_count(),
            network.track_count(),
            records.len()
        );
        Ok(network)
    }

    /// The ID to name mapping
    #[must_use]
    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    /// The route graph
    #[must_use]
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Number of stations in the directory
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.directory.len()
    }

    /// Number of distinct directed tracks
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.graph.track_count()
    }

    /// Whether the network has no stations at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }
}
