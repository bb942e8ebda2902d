//! # Derived View
//!
//! Display-ready figures for one snapshot of the store.
//!
//! ## What the View Layer Gets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Primary component                                                      │
//! │    quantity [10,00] meter   price [50.000]  shipping [20.000]  ...      │
//! │    meters 10,00   fabric cost 500.000   subtotal 550.000                │
//! │  Additional fabric 1                                                    │
//! │    quantity [     ] meter   price [      ]  ...    (blank = zero)       │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  Total HPP 550.000 │ R&D 6.450 │ Markup 11.129 │ Tax 66.774 │ 634.353   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every figure carries both the raw number and its formatted text, so a
//! view can render directly and tests can check either side.

use serde::Serialize;
use ts_rs::TS;

use crate::number::format_number;
use crate::pricing::{self, CostBreakdown};
use crate::store::ComponentStore;
use crate::types::{ComponentRole, FabricComponent, PricingParameters, Unit};

/// Fractional digits for fabric quantities and meters.
pub const LENGTH_DIGITS: u32 = 2;

/// Fractional digits for money figures.
pub const MONEY_DIGITS: u32 = 0;

/// Fractional digits for the production quantity.
pub const COUNT_DIGITS: u32 = 0;

/// Fractional digits for the markup percentage.
pub const PERCENT_DIGITS: u32 = 2;

/// A number together with its display text.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Figure {
    pub value: f64,
    pub text: String,
}

impl Figure {
    /// Formats `value` with `digits` fractional digits.
    pub fn new(value: f64, digits: u32) -> Self {
        Figure {
            value,
            text: format_number(value, digits),
        }
    }

    /// Money figure (no decimals).
    pub fn money(value: f64) -> Self {
        Self::new(value, MONEY_DIGITS)
    }

    /// Checks if the display text is blank (the value is exactly zero).
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// The editable fields of a component, as they should appear in inputs.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInputs {
    pub quantity: Figure,
    pub unit: Unit,
    pub price_per_meter: Figure,
    pub shipping_cost: Figure,
    pub sewing_cost: Figure,
}

/// Inputs and derived figures of one component.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComponentView {
    pub id: String,
    pub position: usize,
    pub role: ComponentRole,
    pub label: String,
    pub inputs: ComponentInputs,
    pub meters: Figure,
    pub fabric_cost: Figure,
    pub subtotal: Figure,
}

/// The pricing parameters as they should appear in inputs.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ParametersView {
    pub rnd_cost: Figure,
    pub quantity: Figure,
    pub markup_percent: Figure,
}

/// Whole-order figures.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TotalsView {
    pub total_cost: Figure,
    pub rnd_allocation: Figure,
    pub markup: Figure,
    pub tax: Figure,
    pub final_price: Figure,
}

impl From<CostBreakdown> for TotalsView {
    fn from(breakdown: CostBreakdown) -> Self {
        TotalsView {
            total_cost: Figure::money(breakdown.total_cost),
            rnd_allocation: Figure::money(breakdown.rnd_allocation),
            markup: Figure::money(breakdown.markup),
            tax: Figure::money(breakdown.tax),
            final_price: Figure::money(breakdown.final_price),
        }
    }
}

/// Everything a view needs to render one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    pub components: Vec<ComponentView>,
    pub parameters: ParametersView,
    pub totals: TotalsView,
}

impl DerivedView {
    /// Derives the view of the store's current snapshot.
    pub fn from_store(store: &ComponentStore) -> Self {
        Self::derive(store.components(), store.parameters())
    }

    /// Derives the view of an arbitrary snapshot. Pure; recomputes everything.
    pub fn derive(components: &[FabricComponent], params: &PricingParameters) -> Self {
        let mut additional_ordinal = 0;
        let views = components
            .iter()
            .enumerate()
            .map(|(position, component)| {
                let label = match component.role {
                    ComponentRole::Primary => "Primary component".to_string(),
                    ComponentRole::Additional => {
                        additional_ordinal += 1;
                        format!("Additional fabric {additional_ordinal}")
                    }
                };
                component_view(position, label, component)
            })
            .collect();

        DerivedView {
            components: views,
            parameters: ParametersView {
                rnd_cost: Figure::money(params.rnd_cost),
                quantity: Figure::new(params.quantity, COUNT_DIGITS),
                markup_percent: Figure::new(params.markup_percent, PERCENT_DIGITS),
            },
            totals: pricing::quote(components, params).into(),
        }
    }
}

fn component_view(position: usize, label: String, component: &FabricComponent) -> ComponentView {
    ComponentView {
        id: component.id.clone(),
        position,
        role: component.role,
        label,
        inputs: ComponentInputs {
            quantity: Figure::new(component.quantity, LENGTH_DIGITS),
            unit: component.unit,
            price_per_meter: Figure::money(component.price_per_meter),
            shipping_cost: Figure::money(component.shipping_cost),
            sewing_cost: Figure::money(component.sewing_cost),
        },
        meters: Figure::new(
            pricing::to_meters(component.quantity, component.unit),
            LENGTH_DIGITS,
        ),
        fabric_cost: Figure::money(pricing::fabric_cost(component)),
        subtotal: Figure::money(pricing::subtotal(component)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
