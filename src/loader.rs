// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Loading the station-to-station extract from CSV

use crate::network::RailNetwork;
use crate::types::TrackRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read every track record from a CSV source with a header row.
///
/// Columns are matched by header name, so extra columns are ignored. A row
/// whose ID or distance fails to parse aborts the read.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TrackRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<TrackRecord>().enumerate() {
        // Header is line 1
        let record = row.with_context(|| format!("Invalid track record on line {}", index + 2))?;
        records.push(record);
    }

    Ok(records)
}

/// Load the network from a CSV file.
///
/// The file is closed again as soon as its rows are read.
pub fn load_network(path: &Path) -> Result<RailNetwork> {
    let records = {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        read_records(file).with_context(|| format!("Failed to parse {}", path.display()))?
    };

    let network = RailNetwork::from_records(&records)
        .with_context(|| format!("Failed to build network from {}", path.display()))?;

    tracing::info!(
        "Loaded {} stations and {} tracks from {}",
        network.station_count(),
        network.track_count(),
        path.display()
    );
    Ok(network)
}
