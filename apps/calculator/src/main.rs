//! # HPP Calculator Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        hpp-calc                                         │
//! │                                                                         │
//! │  stdin ──► line ──► Command ──► ComponentStore ──► DerivedView ──► stdout│
//! │                                                                         │
//! │  main.rs ────► Exit code only                                          │
//! │  lib.rs ─────► Logging, configuration, session loop                    │
//! │  commands/ ──► add, remove, set, params, show, reset, quit             │
//! │  state/ ─────► SessionState, CalculatorConfig                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match hpp_calculator::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
