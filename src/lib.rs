// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Railnet library - question and answer console for a railway network
//!
//! This crate loads a directed, weighted graph of stations from a CSV
//! extract and answers three kinds of questions about it: which station
//! has a given ID, where can you go directly from a station, and are two
//! stations adjacent.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod graph;
pub mod loader;
pub mod network;
pub mod query;
pub mod session;

/// Core data types shared by the directory, graph and loader
pub mod types {
    use crate::error::Error;
    use serde::Deserialize;
    use std::fmt;
    use std::str::FromStr;

    // =========================================================================
    // Station Identifier
    // =========================================================================

    /// Externally assigned station identifier.
    ///
    /// IDs come from the data source: they are unique per station but
    /// neither contiguous nor in alphabetical order of the names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
    #[serde(transparent)]
    pub struct StationId(pub u32);

    impl FromStr for StationId {
        type Err = Error;

        /// Parse user input; surrounding whitespace is ignored.
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let trimmed = s.trim();
            if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::MalformedInput(trimmed.to_string()));
            }
            trimmed
                .parse::<u32>()
                .map(Self)
                .map_err(|_| Error::MalformedInput(trimmed.to_string()))
        }
    }

    impl fmt::Display for StationId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    // =========================================================================
    // Station and Track
    // =========================================================================

    /// A station with its display name
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Station {
        /// Unique identifier
        pub id: StationId,
        /// Display name (not necessarily unique)
        pub name: String,
    }

    /// A directed track between two stations
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Track {
        /// Source station ID
        pub source: StationId,
        /// Target station ID
        pub target: StationId,
        /// Distance in kilometers
        pub distance: f64,
    }

    /// One row of the station-to-station extract
    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct TrackRecord {
        /// Source station ID
        pub source_id: StationId,
        /// Source station name
        pub source_name: String,
        /// Target station ID
        pub target_id: StationId,
        /// Distance in kilometers
        pub distance: f64,
    }

    impl TrackRecord {
        /// The station described by the source columns
        #[must_use]
        pub fn station(&self) -> Station {
            Station {
                id: self.source_id,
                name: self.source_name.clone(),
            }
        }

        /// The track this row describes
        #[must_use]
        pub fn track(&self) -> Track {
            Track {
                source: self.source_id,
                target: self.target_id,
                distance: self.distance,
            }
        }
    }

}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::network::RailNetwork;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
