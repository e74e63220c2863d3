// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Line-oriented console over any reader and writer

use super::render::Style;
use super::Interrupt;
use crate::types::StationId;
use std::io::{self, BufRead, Write};

/// The text streams a session talks through
pub struct Console<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams
    pub fn new(input: R, output: W, style: Style) -> Self {
        Self { input, output, style }
    }

    /// Output styling
    pub fn style(&self) -> Style {
        self.style
    }

    /// Write one line of output
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Write a line in the error style
    pub fn complain(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        let line = self.style.error(text.as_ref());
        writeln!(self.output, "{line}")
    }

    /// Read one line without its line ending; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read,
    /// so such a line is rejected like any other unparseable answer.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print a prompt and read the answer
    pub fn ask(&mut self, prompt: &str) -> Result<String, Interrupt> {
        self.say(prompt)?;
        self.read_line()?.ok_or(Interrupt::Closed)
    }

    /// Prompt for a station ID
    pub fn ask_station(&mut self) -> Result<StationId, Interrupt> {
        let answer = self.ask("Which station? Specify its ID number:")?;
        Ok(answer.parse::<StationId>()?)
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
