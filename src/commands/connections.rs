// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! List where to go from a station

use super::ask_known_station;
use crate::query::Queries;
use crate::session::render::km;
use crate::session::{Console, Interrupt};
use std::io::{BufRead, Write};

/// Run connections command
pub fn run<R: BufRead, W: Write>(queries: &Queries<'_>, console: &mut Console<R, W>) -> Result<(), Interrupt> {
    let (id, name) = ask_known_station(queries, console)?;
    let connections = queries.connections(id)?;
    let style = console.style();

    console.say(format!(
        "\nFrom {} there are direct tracks (not necessarily trains) to:\n",
        style.station(name)
    ))?;

    if connections.is_empty() {
        console.say("nowhere, no tracks are recorded from here")?;
    }
    for connection in connections {
        let target = connection.name.unwrap_or("unnamed station");
        console.say(format!(
            "{} ({}) - {} km",
            style.station(target),
            connection.id,
            km(connection.distance)
        ))?;
    }
    Ok(())
}
