// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Station directory: ID to display name

use crate::error::Error;
use crate::types::{Station, StationId};
use std::collections::BTreeMap;

/// Mapping from station ID to display name
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    names: BTreeMap<StationId, String>,
}

impl StationDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name; a later insert for the same ID replaces it
    pub fn insert(&mut self, id: StationId, name: impl Into<String>) {
        let name = name.into();
        if let Some(previous) = self.names.insert(id, name) {
            tracing::debug!("Station {} renamed from {:?}", id, previous);
        }
    }

    /// Look up the display name of a station
    pub fn name_of(&self, id: StationId) -> Result<&str, Error> {
        self.names
            .get(&id)
            .map(String::as_str)
            .ok_or(Error::UnknownStation(id))
    }

    /// Whether the ID was registered
    #[must_use]
    pub fn contains(&self, id: StationId) -> bool {
        self.names.contains_key(&id)
    }

    /// Number of stations
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Smallest and largest registered station
    #[must_use]
    pub fn id_range(&self) -> Option<(Station, Station)> {
        let (min_id, min_name) = self.names.first_key_value()?;
        let (max_id, max_name) = self.names.last_key_value()?;
        Some((
            Station { id: *min_id, name: min_name.clone() },
            Station { id: *max_id, name: max_name.clone() },
        ))
    }
}

impl FromIterator<Station> for StationDirectory {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        let mut directory = Self::new();
        for station in iter {
            directory.insert(station.id, station.name);
        }
        directory
    }
}
