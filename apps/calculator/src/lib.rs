//! # HPP Calculator Library
//!
//! The terminal front end of the HPP calculator. It owns one
//! [`ComponentStore`](hpp_core::ComponentStore), feeds it the commands typed
//! on stdin and prints the recomputed figures after every change.
//!
//! ## Module Organization
//! ```text
//! hpp_calculator/
//! ├── lib.rs           ◄─── You are here (logging, startup, session loop)
//! ├── cli.rs           ◄─── Startup flags
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── session.rs   ◄─── SessionState (the store)
//! │   └── config.rs    ◄─── CalculatorConfig
//! ├── commands/
//! │   ├── mod.rs       ◄─── Line grammar and dispatch
//! │   ├── component.rs ◄─── add, remove, set
//! │   ├── params.rs    ◄─── params
//! │   └── view.rs      ◄─── Text and JSON rendering
//! └── error.rs         ◄─── AppError for commands
//! ```
//!
//! ## Example Session
//! ```text
//! $ hpp-calc
//! hpp> set 0 quantity 10
//! hpp> set 0 price 50.000
//! hpp> set 0 shipping 20.000
//! hpp> set 0 sewing 30.000
//! ...
//! Final price        Rp 634.353
//! hpp> remove 0
//! error[BUSINESS_LOGIC]: The primary component at position 0 cannot be removed
//! hpp> quit
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use commands::Outcome;
use error::AppResult;
use state::{CalculatorConfig, SessionState};

/// Prompt printed before each line when stdin is a terminal.
pub const PROMPT: &str = "hpp> ";

/// Runs the calculator on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • flags > HPP_* environment > defaults                              │
/// │     • negative startup values are rejected                              │
/// │                                                                         │
/// │  3. Run the Session ──────────────────────────────────────────────────► │
/// │     • one command per line until quit or end of input                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = CalculatorConfig::from_cli(&cli)?;
    info!(
        rnd_cost = config.parameters.rnd_cost,
        quantity = config.parameters.quantity,
        markup_percent = config.parameters.markup_percent,
        currency = %config.currency_symbol,
        json = config.json_output,
        "Starting HPP calculator"
    );

    let mut session = SessionState::new(config);
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();

    run_session(&mut session, stdin.lock(), io::stdout().lock(), prompt)
}

/// Drives one session: renders the initial view, then executes each input
/// line until `quit` or end of input.
///
/// Rejected commands are printed as `error[CODE]: message` and the session
/// continues. Only I/O failures end it early.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut SessionState,
    input: R,
    mut output: W,
    prompt: bool,
) -> AppResult<()> {
    let json = session.config().json_output;
    commands::render(session, json, &mut output)?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match commands::dispatch(session, line) {
            Ok(Outcome::Render { json }) => commands::render(session, json, &mut output)?,
            Ok(Outcome::Help(text)) => write!(output, "{}", text)?,
            Ok(Outcome::Quit) => break,
            Err(err) => {
                info!(code = %err.code, reason = %err.message, line, "Command rejected");
                writeln!(output, "{}", err)?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only rendered output. Set
/// `RUST_LOG=hpp=debug` to see every store event.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
