// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Menu command implementations

pub mod adjacency;
pub mod connections;
pub mod identify;

use crate::query::Queries;
use crate::session::{Console, Interrupt};
use crate::types::StationId;
use std::io::{BufRead, Write};

/// Prompt for a station ID and make sure the station exists
fn ask_known_station<'a, R: BufRead, W: Write>(
    queries: &Queries<'a>,
    console: &mut Console<R, W>,
) -> Result<(StationId, &'a str), Interrupt> {
    let id = console.ask_station()?;
    let name = queries.identify(id)?;
    Ok((id, name))
}
