//! # Startup Flags
//!
//! Every flag can also come from the environment; clap resolves the
//! priority (flag, then environment variable, then default).
//!
//! ```text
//! hpp-calc --rnd-cost 250.000 --quantity 50 --markup 2,5
//! HPP_CURRENCY_SYMBOL=IDR hpp-calc --json
//! ```

use clap::Parser;

/// Garment production cost (HPP) calculator.
///
/// Reads commands from stdin, one per line, and prints the recomputed
/// figures after every change. Type `help` inside the session for the
/// list of commands.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "hpp-calc", version, about, long_about = None)]
pub struct Cli {
    /// Initial R&D cost, in locale notation (e.g. 125.000)
    #[arg(long, env = "HPP_RND_COST", allow_hyphen_values = true)]
    pub rnd_cost: Option<String>,

    /// Initial production quantity (the R&D divisor)
    #[arg(long, env = "HPP_QUANTITY", allow_hyphen_values = true)]
    pub quantity: Option<String>,

    /// Initial markup in percent, in locale notation (e.g. 2,5)
    #[arg(long = "markup", env = "HPP_MARKUP_PERCENT", allow_hyphen_values = true)]
    pub markup_percent: Option<String>,

    /// Currency symbol prefixed to money figures
    #[arg(long = "currency", env = "HPP_CURRENCY_SYMBOL")]
    pub currency_symbol: Option<String>,

    /// Render the derived view as JSON instead of a text table
    #[arg(long)]
    pub json: bool,
}
