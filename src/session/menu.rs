// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Menu options

use crate::types::StationId;

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Look up a station name by ID
    Identify,
    /// Look up a station and list its direct tracks
    Connections,
    /// Check whether two stations are adjacent
    Adjacency,
    /// Leave the session
    Quit,
}

impl MenuChoice {
    /// All options in menu order
    pub const ALL: [Self; 4] = [Self::Identify, Self::Connections, Self::Adjacency, Self::Quit];

    /// Number shown in front of the option
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Self::Identify => 1,
            Self::Connections => 2,
            Self::Adjacency => 3,
            Self::Quit => 4,
        }
    }

    /// Parse the user's selection; only the exact option numbers match
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }

    /// Menu text, mentioning the ID range when there is one
    #[must_use]
    pub fn label(self, range: Option<(StationId, StationId)>) -> String {
        match (self, range) {
            (Self::Identify, Some((min, max))) => {
                format!("identify a station by its ID number - between {min} and {max}")
            }
            (Self::Identify, None) => "identify a station by its ID number".to_string(),
            (Self::Connections, _) => "identify a station, and list where to go from there".to_string(),
            (Self::Adjacency, _) => "are two stations adjacent in the rail network?".to_string(),
            (Self::Quit, _) => "quit".to_string(),
        }
    }
}
