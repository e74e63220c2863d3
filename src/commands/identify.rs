// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Identify a station by its ID

use super::ask_known_station;
use crate::query::Queries;
use crate::session::{Console, Interrupt};
use std::io::{BufRead, Write};

/// Run identify command
pub fn run<R: BufRead, W: Write>(queries: &Queries<'_>, console: &mut Console<R, W>) -> Result<(), Interrupt> {
    let (_, name) = ask_known_station(queries, console)?;
    let name = console.style().station(name);
    console.say(name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::network::RailNetwork;
    use crate::session::Style;
    use crate::types::{StationId, TrackRecord};
    use std::io::Cursor;

    fn network() -> RailNetwork {
        RailNetwork::from_records(&[TrackRecord {
            source_id: StationId(455),
            source_name: "GENT-ST-P".into(),
            target_id: StationId(1),
            distance: 3.0,
        }])
        .unwrap()
    }

    #[test]
    fn test_identify() {
        let network = network();
        let mut console = Console::new(Cursor::new(b"455\n".to_vec()), Vec::new(), Style::plain());

        run(&Queries::new(&network), &mut console).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.ends_with("GENT-ST-P\n"));
    }

    #[test]
    fn test_identify_unknown() {
        let network = network();
        let mut console = Console::new(Cursor::new(b"1\n".to_vec()), Vec::new(), Style::plain());

        let result = run(&Queries::new(&network), &mut console);
        assert!(matches!(result, Err(Interrupt::Rejected(Error::UnknownStation(StationId(1))))));
    }
}
