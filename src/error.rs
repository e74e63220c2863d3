// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Query and input errors

use crate::types::StationId;

/// Errors produced by lookups and by parsing user input.
///
/// Both kinds are recoverable: the session reports them and shows the
/// menu again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The ID is not present in the directory or graph
    #[error("Sorry, there's no station with ID {0}")]
    UnknownStation(StationId),

    /// Text that is not a station ID was entered where one was expected
    #[error("Sorry, {0:?} is not a valid station ID")]
    MalformedInput(String),
}
