//! # Configuration State
//!
//! Stores calculator configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--rnd-cost`, `--quantity`, `--markup`, `--currency`)
//! 2. Environment variables (`HPP_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use hpp_core::validation::check_amount;
use hpp_core::view::Figure;
use hpp_core::{parse_number, CoreResult, PricingParameters};
use serde::Serialize;

use crate::cli::Cli;

/// Default currency symbol for text output.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rp";

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Pricing parameters for a fresh store (also used by `reset`)
    pub parameters: PricingParameters,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Render JSON instead of text tables
    pub json_output: bool,
}

impl Default for CalculatorConfig {
    /// Returns the default configuration.
    ///
    /// ## Default Values
    /// - R&D cost: 125.000
    /// - Production quantity: 100
    /// - Markup: 2%
    /// - Currency: Rp
    /// - Output: text
    fn default() -> Self {
        CalculatorConfig {
            parameters: PricingParameters::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            json_output: false,
        }
    }
}

impl CalculatorConfig {
    /// Builds the configuration from resolved startup flags.
    ///
    /// Numbers use the locale parser, so `125.000` is one hundred
    /// twenty-five thousand. Unlike interactive edits, a negative startup
    /// value is rejected instead of being coerced to zero.
    pub fn from_cli(cli: &Cli) -> CoreResult<Self> {
        let mut config = CalculatorConfig::default();

        if let Some(text) = &cli.rnd_cost {
            config.parameters.rnd_cost = check_amount("rndCost", parse_number(text))?;
        }

        if let Some(text) = &cli.quantity {
            config.parameters.quantity = check_amount("quantity", parse_number(text))?;
        }

        if let Some(text) = &cli.markup_percent {
            config.parameters.markup_percent = check_amount("markupPercent", parse_number(text))?;
        }

        if let Some(symbol) = &cli.currency_symbol {
            let symbol = symbol.trim();
            if !symbol.is_empty() {
                config.currency_symbol = symbol.to_string();
            }
        }

        config.json_output = cli.json;

        Ok(config)
    }

    /// Formats a money figure with the currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use hpp_calculator::state::CalculatorConfig;
    /// use hpp_core::view::Figure;
    ///
    /// let config = CalculatorConfig::default();
    /// assert_eq!(config.format_currency(&Figure::money(550_000.0)), "Rp 550.000");
    /// assert_eq!(config.format_currency(&Figure::money(0.0)), "Rp -");
    /// ```
    pub fn format_currency(&self, figure: &Figure) -> String {
        if figure.is_blank() {
            format!("{} -", self.currency_symbol)
        } else {
            format!("{} {}", self.currency_symbol, figure.text)
        }
    }
}
