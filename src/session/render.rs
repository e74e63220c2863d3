// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Text shown by the session: banner, menu and distances

use super::menu::MenuChoice;
use crate::network::RailNetwork;
use crate::query::Queries;
use owo_colors::OwoColorize;

/// Whether output is decorated with ANSI colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    /// Colour enabled or not
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// No decoration at all
    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Headings and titles
    #[must_use]
    pub fn heading(self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Error and rejection messages
    #[must_use]
    pub fn error(self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    /// Station names in answers
    #[must_use]
    pub fn station(self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Distance in km, rounded to 2 decimals with trailing zeros dropped
#[must_use]
pub fn km(distance: f64) -> String {
    // Adding 0.0 turns a rounded -0 into 0
    let rounded = (distance * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}")
}

/// Welcome text with the network's size and ID range
#[must_use]
pub fn banner(network_name: &str, network: &RailNetwork, style: Style) -> Vec<String> {
    let stations = network.station_count();
    let tracks = network.track_count();
    let mut lines = vec![
        style.heading(&format!("Welcome to the {network_name}!")),
        String::new(),
        format!("There are {stations} stations in the database,"),
        format!("and {tracks} direct routes between them."),
        String::new(),
    ];

    if let Some(((min_id, min_name), (max_id, max_name))) = Queries::new(network).id_range() {
        lines.push(format!("Stations are identified by numbers between {min_id} and {max_id}"));
        lines.push(format!("where {min_id} is {min_name} and {max_id} is {max_name}"));
        lines.push("(No, the IDs are not assigned in alphabetical order.)".to_string());
        lines.push(String::new());
    }
    lines
}

/// The numbered menu
#[must_use]
pub fn menu(network: &RailNetwork, style: Style) -> Vec<String> {
    let range = Queries::new(network).id_range().map(|((min, _), (max, _))| (min, max));
    let mut lines = vec![style.heading("What you can ask for:"), String::new()];
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|choice| format!("{} : {}", choice.number(), choice.label(range))),
    );
    lines
}
