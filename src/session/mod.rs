// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Interactive menu session
//!
//! The session is an explicit state machine driven by one loop:
//!
//! ```text
//! ShowingMenu -> AwaitingChoice -> Dispatching -> AwaitingContinue -> ShowingMenu
//!                      |               |                 |
//!                      +-> Invalid     +-> ShowingMenu   +-> Terminated
//!                      +-> Terminated      (on rejected input)
//! ```
//!
//! End of input at any read terminates the session.

pub mod console;
pub mod menu;
pub mod render;

pub use console::Console;
pub use menu::MenuChoice;
pub use render::Style;

use crate::commands;
use crate::error::Error;
use crate::network::RailNetwork;
use crate::query::Queries;
use std::io::{self, BufRead, Write};

/// Answers accepted as "yes" at the continue prompt, compared lowercase
const YES_ANSWERS: &[&str] = &["yes", "y", "ye", "yse", "ys", "zes"];

const FAREWELL: &str = "Thanks. Happy travels.";

/// Why a dispatched command stopped before completing
#[derive(Debug)]
pub enum Interrupt {
    /// The user's input was rejected; report it and return to the menu
    Rejected(Error),
    /// Input ended
    Closed,
    /// The console streams failed
    Io(io::Error),
}

impl From<Error> for Interrupt {
    fn from(err: Error) -> Self {
        Self::Rejected(err)
    }
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Print the menu
    ShowingMenu,
    /// Wait for a menu selection
    AwaitingChoice,
    /// Run the selected command
    Dispatching(MenuChoice),
    /// The selection was not a menu option
    Invalid,
    /// Ask whether to go on
    AwaitingContinue,
    /// Done
    Terminated,
}

/// Whether an answer to the continue prompt means yes
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    YES_ANSWERS.contains(&answer.as_str())
}

/// An interactive session over a built network
pub struct Session<'a, R, W> {
    network: &'a RailNetwork,
    network_name: String,
    console: Console<R, W>,
    state: State,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session in the `ShowingMenu` state
    pub fn new(network: &'a RailNetwork, network_name: impl Into<String>, console: Console<R, W>) -> Self {
        Self {
            network,
            network_name: network_name.into(),
            console,
            state: State::ShowingMenu,
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Print the welcome banner
    pub fn welcome(&mut self) -> io::Result<()> {
        let style = self.console.style();
        for line in render::banner(&self.network_name, self.network, style) {
            self.console.say(line)?;
        }
        Ok(())
    }

    /// Run until the session terminates
    pub fn run(&mut self) -> io::Result<()> {
        while self.state != State::Terminated {
            self.step()?;
        }
        Ok(())
    }

    /// Perform one transition
    pub fn step(&mut self) -> io::Result<()> {
        let next = match self.state {
            State::ShowingMenu => {
                let style = self.console.style();
                for line in render::menu(self.network, style) {
                    self.console.say(line)?;
                }
                State::AwaitingChoice
            }
            State::AwaitingChoice => self.await_choice()?,
            State::Dispatching(choice) => self.dispatch(choice)?,
            State::Invalid => {
                self.console.complain("Sorry, that's not in the menu.")?;
                self.console.say("")?;
                State::ShowingMenu
            }
            State::AwaitingContinue => self.await_continue()?,
            State::Terminated => State::Terminated,
        };

        if next != self.state {
            tracing::debug!("Session {:?} -> {:?}", self.state, next);
        }
        if next == State::Terminated && self.state != State::Terminated {
            self.console.say(FAREWELL)?;
        }
        self.state = next;
        Ok(())
    }

    fn await_choice(&mut self) -> io::Result<State> {
        let Some(line) = self.console.read_line()? else {
            return Ok(State::Terminated);
        };
        self.console.say(format!("You've selected: {}\n", line.trim()))?;

        Ok(match MenuChoice::parse(&line) {
            Some(MenuChoice::Quit) => State::Terminated,
            Some(choice) => State::Dispatching(choice),
            None => State::Invalid,
        })
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<State> {
        let queries = Queries::new(self.network);
        let result = match choice {
            MenuChoice::Identify => commands::identify::run(&queries, &mut self.console),
            MenuChoice::Connections => commands::connections::run(&queries, &mut self.console),
            MenuChoice::Adjacency => commands::adjacency::run(&queries, &mut self.console),
            MenuChoice::Quit => return Ok(State::Terminated),
        };

        match result {
            Ok(()) => Ok(State::AwaitingContinue),
            Err(Interrupt::Rejected(err)) => {
                tracing::debug!("Rejected input: {}", err);
                self.console.complain(err.to_string())?;
                self.console.say("")?;
                Ok(State::ShowingMenu)
            }
            Err(Interrupt::Closed) => Ok(State::Terminated),
            Err(Interrupt::Io(err)) => Err(err),
        }
    }

    fn await_continue(&mut self) -> io::Result<State> {
        self.console.say("\nDo you want to continue? yes / no")?;
        Ok(match self.console.read_line()? {
            Some(answer) if is_yes(&answer) => State::ShowingMenu,
            _ => State::Terminated,
        })
    }

    /// Give back the console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
