// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Read-only questions over the rail network

use crate::error::Error;
use crate::network::RailNetwork;
use crate::types::StationId;

/// A direct track out of a station
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<'a> {
    /// Destination station ID
    pub id: StationId,
    /// Destination name, if the destination is in the directory
    pub name: Option<&'a str>,
    /// Distance in kilometers
    pub distance: f64,
}

/// Result of checking whether two stations are adjacent
#[derive(Debug, Clone, PartialEq)]
pub struct Adjacency<'a> {
    /// First station
    pub from: StationId,
    /// Name of the first station
    pub from_name: &'a str,
    /// Second station
    pub to: StationId,
    /// Name of the second station
    pub to_name: &'a str,
    /// Distance of the track `from → to`
    pub forward: Option<f64>,
    /// Distance of the track `to → from`
    pub backward: Option<f64>,
}

impl Adjacency<'_> {
    /// Whether a direct track `from → to` exists
    #[must_use]
    pub fn is_adjacent(&self) -> bool {
        self.forward.is_some()
    }

    /// Whether a direct track `to → from` exists
    #[must_use]
    pub fn is_reverse_adjacent(&self) -> bool {
        self.backward.is_some()
    }

    /// Whether both directions exist with different distances
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_asymmetric(&self) -> bool {
        matches!((self.forward, self.backward), (Some(f), Some(b)) if f != b)
    }
}

/// The query service over a built network
#[derive(Debug, Clone, Copy)]
pub struct Queries<'a> {
    network: &'a RailNetwork,
}

impl<'a> Queries<'a> {
    /// Wrap a network
    #[must_use]
    pub fn new(network: &'a RailNetwork) -> Self {
        Self { network }
    }

    /// Name of a station
    pub fn identify(&self, id: StationId) -> Result<&'a str, Error> {
        self.network.directory().name_of(id)
    }

    /// Direct tracks out of a station, in insertion order
    pub fn connections(&self, id: StationId) -> Result<Vec<Connection<'a>>, Error> {
        let directory = self.network.directory();
        let connections = self
            .network
            .graph()
            .tracks_from(id)?
            .map(|(target, distance)| Connection {
                id: target,
                name: directory.name_of(target).ok(),
                distance,
            })
            .collect();
        Ok(connections)
    }

    /// Check both directions between two stations
    pub fn check_adjacency(&self, from: StationId, to: StationId) -> Result<Adjacency<'a>, Error> {
        let from_name = self.identify(from)?;
        let to_name = self.identify(to)?;
        let graph = self.network.graph();

        let forward = if graph.is_adjacent(from, to)? {
            graph.distance(from, to)
        } else {
            None
        };
        let backward = if graph.is_adjacent(to, from)? {
            graph.distance(to, from)
        } else {
            None
        };

        Ok(Adjacency {
            from,
            from_name,
            to,
            to_name,
            forward,
            backward,
        })
    }

    /// Smallest and largest station ID with their names
    #[must_use]
    pub fn id_range(&self) -> Option<((StationId, &'a str), (StationId, &'a str))> {
        let directory = self.network.directory();
        let (min, max) = directory.id_range()?;
        Some((
            (min.id, directory.name_of(min.id).ok()?),
            (max.id, directory.name_of(max.id).ok()?),
        ))
    }
}
