//! # View Rendering
//!
//! Prints a [`DerivedView`] as a text table or as JSON.
//!
//! ## Text Layout
//! ```text
//! #0 Primary component
//!    quantity        10,00 meter
//!    price/meter     Rp 50.000
//!    shipping        Rp 20.000
//!    sewing          Rp 30.000
//!    meters          10,00
//!    fabric cost     Rp 500.000
//!    subtotal        Rp 550.000
//!
//! Parameters: R&D Rp 125.000 | quantity 100 | markup 2,00%
//! ────────────────────────────────────────
//! Total HPP          Rp 550.000
//! R&D allocation     Rp 6.450
//! Markup             Rp 11.129
//! Tax (10%)          Rp 66.774
//! Final price        Rp 634.353
//! ```
//!
//! Blank figures (exact zeros) show as `-`.

use std::io::Write;

use hpp_core::view::Figure;
use hpp_core::{format_number, DerivedView, TAX_RATE};

use crate::error::AppResult;
use crate::state::{CalculatorConfig, SessionState};

const RULE_WIDTH: usize = 40;

/// Recomputes the session view and writes it to `out`.
pub fn render<W: Write>(session: &SessionState, json: bool, out: &mut W) -> AppResult<()> {
    let view = session.view();
    if json {
        render_json(&view, out)
    } else {
        render_text(&view, session.config(), out)
    }
}

/// Writes the view as pretty-printed JSON.
pub fn render_json<W: Write>(view: &DerivedView, out: &mut W) -> AppResult<()> {
    let json = serde_json::to_string_pretty(view)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Writes the view as a text table.
pub fn render_text<W: Write>(
    view: &DerivedView,
    config: &CalculatorConfig,
    out: &mut W,
) -> AppResult<()> {
    let money = |figure: &Figure| config.format_currency(figure);

    for component in &view.components {
        let inputs = &component.inputs;
        writeln!(out, "#{} {}", component.position, component.label)?;
        writeln!(
            out,
            "   {:<15} {} {}",
            "quantity",
            plain(&inputs.quantity),
            inputs.unit
        )?;
        writeln!(out, "   {:<15} {}", "price/meter", money(&inputs.price_per_meter))?;
        writeln!(out, "   {:<15} {}", "shipping", money(&inputs.shipping_cost))?;
        writeln!(out, "   {:<15} {}", "sewing", money(&inputs.sewing_cost))?;
        writeln!(out, "   {:<15} {}", "meters", plain(&component.meters))?;
        writeln!(out, "   {:<15} {}", "fabric cost", money(&component.fabric_cost))?;
        writeln!(out, "   {:<15} {}", "subtotal", money(&component.subtotal))?;
        writeln!(out)?;
    }

    let params = &view.parameters;
    writeln!(
        out,
        "Parameters: R&D {} | quantity {} | markup {}%",
        money(&params.rnd_cost),
        plain(&params.quantity),
        plain(&params.markup_percent)
    )?;
    writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;

    let totals = &view.totals;
    let tax_label = format!("Tax ({}%)", format_number(TAX_RATE * 100.0, 0));
    writeln!(out, "{:<18} {}", "Total HPP", money(&totals.total_cost))?;
    writeln!(out, "{:<18} {}", "R&D allocation", money(&totals.rnd_allocation))?;
    writeln!(out, "{:<18} {}", "Markup", money(&totals.markup))?;
    writeln!(out, "{:<18} {}", tax_label, money(&totals.tax))?;
    writeln!(out, "{:<18} {}", "Final price", money(&totals.final_price))?;
    writeln!(out)?;

    Ok(())
}

fn plain(figure: &Figure) -> &str {
    if figure.is_blank() {
        "-"
    } else {
        figure.text.as_str()
    }
}
