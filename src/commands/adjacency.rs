// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Check whether two stations are adjacent

use super::ask_known_station;
use crate::query::{Adjacency, Queries};
use crate::session::render::{km, Style};
use crate::session::{Console, Interrupt};
use std::io::{BufRead, Write};

/// Run adjacency command
pub fn run<R: BufRead, W: Write>(queries: &Queries<'_>, console: &mut Console<R, W>) -> Result<(), Interrupt> {
    let (from, _) = ask_known_station(queries, console)?;
    let (to, _) = ask_known_station(queries, console)?;
    let adjacency = queries.check_adjacency(from, to)?;

    for line in describe(&adjacency, console.style()) {
        console.say(line)?;
    }
    Ok(())
}

fn describe(adjacency: &Adjacency<'_>, style: Style) -> Vec<String> {
    let from = format!("{} ({})", style.station(adjacency.from_name), adjacency.from);
    let to = format!("{} ({})", style.station(adjacency.to_name), adjacency.to);

    let Some(forward) = adjacency.forward else {
        let mut lines = vec![format!("\n{from} and {to} are not adjacent stations.")];
        if let Some(backward) = adjacency.backward {
            lines.push(format!("There is a track the other way though, from {to} to {from} ({} km).", km(backward)));
        }
        return lines;
    };

    let mut lines = vec![format!("\n{from} and {to} are adjacent stations ({} km)", km(forward))];
    match adjacency.backward {
        Some(backward) if adjacency.is_asymmetric() => lines.push(format!(
            "hm, the distance is slightly different in the other direction: {} km",
            km(backward)
        )),
        Some(_) => {}
        None => lines.push(format!("but there is no track recorded from {to} back to {from}")),
    }
    lines.push("(mind you, there is not necessarily a direct train between them)".to_string());
    lines
}
