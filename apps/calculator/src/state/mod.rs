//! # State Module
//!
//! Session state for the calculator.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │        SessionState          │   │      CalculatorConfig        │   │
//! │  │                              │   │                              │   │
//! │  │  ComponentStore (mutable)    │◄──│  parameters (for reset)      │   │
//! │  │                              │   │  currency_symbol             │   │
//! │  │                              │   │  json_output                 │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  One session owns one store; commands borrow it mutably in turn.       │
//! │  Config is read-only after startup.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{CalculatorConfig, DEFAULT_CURRENCY_SYMBOL};
pub use session::SessionState;
