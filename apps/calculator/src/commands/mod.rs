//! # Commands Module
//!
//! The line protocol of a calculator session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (grammar + dispatch)
//! ├── component.rs  ◄─── add, remove, set
//! ├── params.rs     ◄─── params
//! └── view.rs       ◄─── text and JSON rendering
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "set 0 price 50.000"                                                   │
//! │         │                                                               │
//! │         │ split_whitespace + clap                                       │
//! │         ▼                                                               │
//! │  Command::Set { position: 0, field: "price", value: "50.000" }         │
//! │         │                                                               │
//! │         │ execute(&mut SessionState, ..)                                │
//! │         ▼                                                               │
//! │  ComponentStore::update_component(0, patch)                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Outcome::Render ──► DerivedView recomputed ──► text table / JSON      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod component;
pub mod params;
pub mod view;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::error::AppResult;
use crate::state::SessionState;

pub use view::render;

/// One input line.
#[derive(Parser, Debug)]
#[command(
    name = "command",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Commands accepted by the calculator, one per line"
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

/// Session commands. Positions are 0-based; the primary component is `0`.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Append an empty additional fabric component
    Add,

    /// Remove the component at POSITION (the primary cannot be removed)
    Remove {
        /// Position in the list
        position: usize,
    },

    /// Set a component field: quantity, unit, price, shipping or sewing
    Set {
        /// Position in the list
        position: usize,

        /// Field name
        field: String,

        /// New value in locale notation (1.234,5), or a unit name
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Set a pricing parameter: rnd, quantity or markup
    Params {
        /// Parameter name
        name: String,

        /// New value in locale notation
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show the current figures
    Show {
        /// Render as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start over with one empty primary component
    Reset,

    /// Leave the calculator
    #[command(alias = "exit")]
    Quit,
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Recompute and print the view.
    Render { json: bool },

    /// Print help text.
    Help(String),

    /// End the session.
    Quit,
}

/// Parses one input line into a command.
///
/// ## Example
/// ```rust
/// use hpp_calculator::commands::{parse_line, Command};
///
/// assert_eq!(parse_line("remove 2").unwrap(), Command::Remove { position: 2 });
/// assert_eq!(parse_line("exit").unwrap(), Command::Quit);
/// ```
pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
    CommandLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

/// Parses and executes one input line.
pub fn dispatch(session: &mut SessionState, line: &str) -> AppResult<Outcome> {
    match parse_line(line) {
        Ok(command) => execute(session, command),
        Err(err) if err.kind() == ErrorKind::DisplayHelp => Ok(Outcome::Help(err.to_string())),
        Err(err) => Err(err.into()),
    }
}

/// Executes a parsed command against the session.
pub fn execute(session: &mut SessionState, command: Command) -> AppResult<Outcome> {
    let json = session.config().json_output;

    match command {
        Command::Add => component::add_component(session)?,
        Command::Remove { position } => component::remove_component(session, position)?,
        Command::Set {
            position,
            field,
            value,
        } => component::set_field(session, position, &field, &value)?,
        Command::Params { name, value } => params::set_parameter(session, &name, &value)?,
        Command::Show { json: as_json } => {
            return Ok(Outcome::Render {
                json: json || as_json,
            })
        }
        Command::Reset => session.reset(),
        Command::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Render { json })
}
