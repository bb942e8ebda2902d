//! # Pricing Engine
//!
//! The pure formula chain from fabric components to a final price.
//!
//! ## Formula Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  per component                                                          │
//! │    meters      = quantity × (1.1 if yard)                               │
//! │    fabric_cost = meters × price_per_meter                               │
//! │    subtotal    = fabric_cost + shipping_cost + sewing_cost              │
//! │                                                                         │
//! │  whole order                                                            │
//! │    total_cost  = Σ subtotal                               (HPP)         │
//! │    rnd         = (total_cost − primary.sewing_cost + rnd_cost)          │
//! │                  ÷ production quantity                                  │
//! │    markup      = (total_cost + rnd) × markup_percent ÷ 100              │
//! │    tax         = (total_cost + rnd) × 10% + markup                      │
//! │    final_price = total_cost + rnd + markup + tax                        │
//! │                                                                         │
//! │  total_cost = 0 short-circuits rnd, markup and tax to 0.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is deterministic and side-effect free. Nothing is
//! cached: callers recompute from the current snapshot on every change.
//!
//! ## Floating Point
//! Figures are `f64`. Sums run in list order so results are reproducible to
//! the last bit.
//! Rounding happens only at display time, in [`crate::number`].
//!
//! ## Overflow
//! Inputs are finite, but large enough inputs can still overflow a product
//! or a sum. Every figure that comes out non-finite is reported as `0`, the
//! same way an out-of-range input is, so no figure is ever `inf` or `NaN`.

use serde::Serialize;
use ts_rs::TS;

use crate::types::{FabricComponent, PricingParameters, Unit};
use crate::validation::normalize_amount;
use crate::{METERS_PER_YARD, TAX_RATE};

// =============================================================================
// Per-Component Figures
// =============================================================================

/// Converts a fabric quantity to meters.
///
/// ## Example
/// ```rust
/// use hpp_core::pricing::to_meters;
/// use hpp_core::Unit;
///
/// assert_eq!(to_meters(10.0, Unit::Yard), 11.0);
/// assert_eq!(to_meters(10.0, Unit::Meter), 10.0);
/// ```
#[inline]
pub fn to_meters(quantity: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Yard => quantity * METERS_PER_YARD,
        Unit::Meter => quantity,
    }
}

/// Fabric cost of one component: meters × price per meter.
#[inline]
pub fn fabric_cost(component: &FabricComponent) -> f64 {
    normalize_amount(to_meters(component.quantity, component.unit) * component.price_per_meter)
}

/// Fabric cost plus the flat shipping and sewing costs.
#[inline]
pub fn subtotal(component: &FabricComponent) -> f64 {
    normalize_amount(fabric_cost(component) + component.shipping_cost + component.sewing_cost)
}

// =============================================================================
// Aggregate Figures
// =============================================================================

/// Total HPP: the sum of every subtotal, in list order. `0` for no components.
pub fn total_cost(components: &[FabricComponent]) -> f64 {
    normalize_amount(
        components
            .iter()
            .fold(0.0, |acc, component| acc + subtotal(component)),
    )
}

/// Per-unit share of the R&D cost.
///
/// The primary component's sewing cost is left out of the base. Sewing costs
/// of additional fabrics stay in.
///
/// ## Zero Guards
/// - `total_cost = 0` → `0` (nothing entered yet)
/// - production quantity `0` → `0` (no allocation rather than a division
///   by zero)
pub fn rnd_allocation(components: &[FabricComponent], params: &PricingParameters) -> f64 {
    let total = total_cost(components);
    if total == 0.0 || params.quantity == 0.0 {
        return 0.0;
    }

    let primary_sewing = components
        .iter()
        .find(|c| c.is_primary())
        .map_or(0.0, |c| c.sewing_cost);

    normalize_amount((total - primary_sewing + params.rnd_cost) / params.quantity)
}

/// Markup on `total_cost + rnd_allocation`.
pub fn markup(total_cost: f64, rnd_allocation: f64, params: &PricingParameters) -> f64 {
    if total_cost == 0.0 {
        return 0.0;
    }
    normalize_amount((total_cost + rnd_allocation) * (params.markup_percent / 100.0))
}

/// Tax figure: 10% of `total_cost + rnd_allocation`, **plus the markup**.
///
/// ## Note
/// The markup is counted in the tax figure and again in the final price.
pub fn tax(total_cost: f64, rnd_allocation: f64, markup: f64) -> f64 {
    if total_cost == 0.0 {
        return 0.0;
    }
    normalize_amount((total_cost + rnd_allocation) * TAX_RATE + markup)
}

/// Sum of every stage. All terms are zero when HPP is.
#[inline]
pub fn final_price(total_cost: f64, rnd_allocation: f64, markup: f64, tax: f64) -> f64 {
    normalize_amount(total_cost + rnd_allocation + markup + tax)
}

// =============================================================================
// Cost Breakdown
// =============================================================================

/// Every aggregate figure of one snapshot, computed in chain order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub total_cost: f64,
    pub rnd_allocation: f64,
    pub markup: f64,
    pub tax: f64,
    pub final_price: f64,
}

/// Runs the whole chain once.
///
/// Identical to calling [`total_cost`], [`rnd_allocation`], [`markup`],
/// [`tax`] and [`final_price`] in order.
///
/// ## Example
/// ```rust
/// use hpp_core::pricing::quote;
/// use hpp_core::PricingParameters;
///
/// let breakdown = quote(&[], &PricingParameters::default());
/// assert_eq!(breakdown.final_price, 0.0);
/// ```
pub fn quote(components: &[FabricComponent], params: &PricingParameters) -> CostBreakdown {
    let total_cost = total_cost(components);
    let rnd_allocation = rnd_allocation(components, params);
    let markup = markup(total_cost, rnd_allocation, params);
    let tax = tax(total_cost, rnd_allocation, markup);
    let final_price = final_price(total_cost, rnd_allocation, markup, tax);

    CostBreakdown {
        total_cost,
        rnd_allocation,
        markup,
        tax,
        final_price,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComponentRole;

    const EPSILON: f64 = 1e-6;

    fn component(
        role: ComponentRole,
        quantity: f64,
        unit: Unit,
        price_per_meter: f64,
        shipping_cost: f64,
        sewing_cost: f64,
    ) -> FabricComponent {
        FabricComponent {
            quantity,
            unit,
            price_per_meter,
            shipping_cost,
            sewing_cost,
            ..FabricComponent::new(role)
        }
    }

    /// 10 m at 50.000/m, 20.000 shipping, 30.000 sewing.
    fn reference_primary() -> FabricComponent {
        component(ComponentRole::Primary, 10.0, Unit::Meter, 50_000.0, 20_000.0, 30_000.0)
    }

    #[test]
    fn test_to_meters() {
        assert_eq!(to_meters(10.0, Unit::Yard), 11.0);
        assert_eq!(to_meters(10.0, Unit::Meter), 10.0);
        assert_eq!(to_meters(0.0, Unit::Yard), 0.0);
    }

    #[test]
    fn test_fabric_cost_and_subtotal() {
        let c = reference_primary();
        assert_eq!(fabric_cost(&c), 500_000.0);
        assert_eq!(subtotal(&c), 550_000.0);

        let yards = component(ComponentRole::Additional, 2.0, Unit::Yard, 1000.0, 0.0, 0.0);
        assert!((fabric_cost(&yards) - 2200.0).abs() < EPSILON);
    }

    #[test]
    fn test_empty_list_is_all_zero() {
        let params = PricingParameters::default();
        assert_eq!(total_cost(&[]), 0.0);
        assert_eq!(rnd_allocation(&[], &params), 0.0);
        assert_eq!(quote(&[], &params), CostBreakdown::default());
    }

    #[test]
    fn test_untouched_primary_is_all_zero() {
        let breakdown = quote(&[FabricComponent::primary()], &PricingParameters::default());
        assert_eq!(breakdown.total_cost, 0.0);
        assert_eq!(breakdown.rnd_allocation, 0.0);
        assert_eq!(breakdown.markup, 0.0);
        assert_eq!(breakdown.tax, 0.0);
        assert_eq!(breakdown.final_price, 0.0);
    }

    #[test]
    fn test_reference_scenario() {
        let components = [reference_primary()];
        let params = PricingParameters::default();

        let total = total_cost(&components);
        assert_eq!(total, 550_000.0);

        // (550.000 − 30.000 + 125.000) / 100
        let rnd = rnd_allocation(&components, &params);
        assert_eq!(rnd, 6450.0);

        // 556.450 × 2%
        let markup = markup(total, rnd, &params);
        assert!((markup - 11_129.0).abs() < EPSILON);

        // 556.450 × 10% + 11.129
        let tax = tax(total, rnd, markup);
        assert!((tax - 66_774.0).abs() < EPSILON);

        let final_price = final_price(total, rnd, markup, tax);
        assert!((final_price - 634_353.0).abs() < EPSILON);

        let breakdown = quote(&components, &params);
        assert_eq!(breakdown.total_cost, total);
        assert_eq!(breakdown.rnd_allocation, rnd);
        assert_eq!(breakdown.markup, markup);
        assert_eq!(breakdown.tax, tax);
        assert_eq!(breakdown.final_price, final_price);
    }

    #[test]
    fn test_only_primary_sewing_is_excluded() {
        let components = [
            reference_primary(),
            component(ComponentRole::Additional, 0.0, Unit::Meter, 0.0, 0.0, 10_000.0),
        ];
        let params = PricingParameters::default();

        // 560.000 − 30.000 + 125.000 = 655.000; the additional sewing stays in
        assert_eq!(total_cost(&components), 560_000.0);
        assert_eq!(rnd_allocation(&components, &params), 6550.0);
    }

    #[test]
    fn test_primary_found_by_role_not_position() {
        let components = [
            component(ComponentRole::Additional, 0.0, Unit::Meter, 0.0, 0.0, 10_000.0),
            reference_primary(),
        ];
        assert_eq!(
            rnd_allocation(&components, &PricingParameters::default()),
            6550.0
        );
    }

    #[test]
    fn test_zero_production_quantity_is_guarded() {
        let components = [reference_primary()];
        let params = PricingParameters {
            quantity: 0.0,
            ..Default::default()
        };

        let rnd = rnd_allocation(&components, &params);
        assert_eq!(rnd, 0.0);

        let breakdown = quote(&components, &params);
        assert!(breakdown.final_price.is_finite());
        // 550.000 × 2% and 550.000 × 10% + markup
        assert!((breakdown.markup - 11_000.0).abs() < EPSILON);
        assert!((breakdown.tax - 66_000.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_markup() {
        let params = PricingParameters {
            markup_percent: 0.0,
            ..Default::default()
        };
        let breakdown = quote(&[reference_primary()], &params);
        assert_eq!(breakdown.markup, 0.0);
        assert!((breakdown.tax - 55_645.0).abs() < EPSILON);
    }

    #[test]
    fn test_overflowing_inputs_stay_finite() {
        let huge = component(ComponentRole::Primary, 1e200, Unit::Meter, 1e200, 0.0, 0.0);
        let params = PricingParameters {
            markup_percent: 0.0,
            ..Default::default()
        };

        assert_eq!(fabric_cost(&huge), 0.0);
        assert_eq!(subtotal(&huge), 0.0);
        assert_eq!(quote(&[huge], &params), CostBreakdown::default());
    }

    #[test]
    fn test_overflowing_sum_stays_finite() {
        let components = [
            component(ComponentRole::Primary, 0.0, Unit::Meter, 0.0, f64::MAX, 0.0),
            component(ComponentRole::Additional, 0.0, Unit::Meter, 0.0, f64::MAX, 0.0),
        ];
        let breakdown = quote(&components, &PricingParameters::default());

        assert_eq!(breakdown.total_cost, 0.0);
        assert_eq!(breakdown.final_price, 0.0);
    }

    #[test]
    fn test_tiny_production_quantity_stays_finite() {
        let params = PricingParameters {
            quantity: 1e-310,
            ..Default::default()
        };
        let breakdown = quote(&[reference_primary()], &params);

        // the allocation overflows and drops out; markup and tax use HPP alone
        assert_eq!(breakdown.rnd_allocation, 0.0);
        assert!((breakdown.markup - 11_000.0).abs() < EPSILON);
        assert!((breakdown.tax - 66_000.0).abs() < EPSILON);
        for figure in [
            breakdown.total_cost,
            breakdown.rnd_allocation,
            breakdown.markup,
            breakdown.tax,
            breakdown.final_price,
        ] {
            assert!(figure.is_finite());
        }
    }

    #[test]
    fn test_sewing_only_primary_still_allocates() {
        // HPP is nonzero even though the R&D base loses the whole of it
        let components = [component(ComponentRole::Primary, 0.0, Unit::Meter, 0.0, 0.0, 5000.0)];
        let rnd = rnd_allocation(&components, &PricingParameters::default());
        assert_eq!(rnd, 1250.0);
    }
}
