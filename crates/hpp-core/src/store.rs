//! # Component Store
//!
//! The only mutable state of the calculator: the ordered component list and
//! the pricing parameters.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  View Action              Store Method             List Change          │
//! │  ───────────              ────────────             ───────────          │
//! │                                                                         │
//! │  "+ Additional fabric" ──► add_component() ──────► push(additional)    │
//! │                                                                         │
//! │  Edit a field ───────────► update_component() ───► merge patch         │
//! │                                                                         │
//! │  Click Remove ───────────► remove_component() ───► remove(i)           │
//! │                            (primary → rejected, list untouched)         │
//! │                                                                         │
//! │  Edit R&D / qty / markup ► set_parameters() ─────► merge patch         │
//! │                                                                         │
//! │  Every change is followed by a full recompute in `pricing`/`view`.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Exactly one component has role `Primary`, and it sits at position 0
//! - Every numeric field is finite and non-negative
//! - A rejected operation (`Err`) leaves the store exactly as it was

use serde::Serialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::pricing::{self, CostBreakdown};
use crate::types::{ComponentPatch, FabricComponent, ParametersPatch, PricingParameters};
use crate::validation::{check_amount, normalize_amount};

/// Ordered fabric components plus the global pricing parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStore {
    components: Vec<FabricComponent>,
    parameters: PricingParameters,
}

impl ComponentStore {
    /// Creates a store holding one zero-valued primary component and the
    /// default parameters.
    pub fn new() -> Self {
        Self::with_parameters(PricingParameters::default())
    }

    /// Creates a store holding one zero-valued primary component.
    ///
    /// Parameters are normalized like any other write.
    pub fn with_parameters(parameters: PricingParameters) -> Self {
        let mut store = ComponentStore {
            components: vec![FabricComponent::primary()],
            parameters: PricingParameters::default(),
        };
        store.set_parameters(ParametersPatch {
            rnd_cost: Some(parameters.rnd_cost),
            quantity: Some(parameters.quantity),
            markup_percent: Some(parameters.markup_percent),
        });
        store
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// All components, primary first.
    pub fn components(&self) -> &[FabricComponent] {
        &self.components
    }

    /// The component at `position`, if any.
    pub fn component(&self, position: usize) -> Option<&FabricComponent> {
        self.components.get(position)
    }

    /// The permanent primary component, found by its role.
    ///
    /// The store creates it at position 0, only ever appends additional
    /// entries and refuses to remove it, so the lookup always succeeds.
    pub fn primary(&self) -> &FabricComponent {
        self.components
            .iter()
            .find(|c| c.is_primary())
            .unwrap_or(&self.components[0])
    }

    /// The current pricing parameters.
    pub fn parameters(&self) -> &PricingParameters {
        &self.parameters
    }

    /// Number of components, primary included. Never zero.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always `false`: the primary component cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Runs the pricing chain over the current snapshot.
    pub fn quote(&self) -> CostBreakdown {
        pricing::quote(&self.components, &self.parameters)
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Appends a zero-valued additional fabric component.
    ///
    /// ## Returns
    /// The position of the new component.
    pub fn add_component(&mut self) -> usize {
        let component = FabricComponent::additional();
        debug!(id = %component.id, position = self.components.len(), "component added");
        self.components.push(component);
        self.components.len() - 1
    }

    /// Removes the component at `position`.
    ///
    /// ## Rejections (store unchanged)
    /// - `PrimaryComponentPermanent` for the primary component
    /// - `ComponentNotFound` for a position past the end
    ///
    /// ## Example
    /// ```rust
    /// use hpp_core::{ComponentStore, CoreError};
    ///
    /// let mut store = ComponentStore::new();
    /// let position = store.add_component();
    /// assert!(store.remove_component(position).is_ok());
    ///
    /// assert_eq!(
    ///     store.remove_component(0),
    ///     Err(CoreError::PrimaryComponentPermanent { position: 0 })
    /// );
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn remove_component(&mut self, position: usize) -> CoreResult<FabricComponent> {
        let component = self.locate(position)?;
        if component.is_primary() {
            return Err(CoreError::PrimaryComponentPermanent { position });
        }

        let removed = self.components.remove(position);
        debug!(id = %removed.id, position, "component removed");
        Ok(removed)
    }

    /// Merges `patch` into the component at `position`.
    ///
    /// Fields left as `None` are untouched. Numbers are normalized: negative,
    /// NaN and infinite values are stored as `0`.
    pub fn update_component(&mut self, position: usize, patch: ComponentPatch) -> CoreResult<()> {
        self.locate(position)?;
        let component = &mut self.components[position];

        if let Some(quantity) = patch.quantity {
            component.quantity = normalized("quantity", quantity);
        }
        if let Some(unit) = patch.unit {
            component.unit = unit;
        }
        if let Some(price) = patch.price_per_meter {
            component.price_per_meter = normalized("pricePerMeter", price);
        }
        if let Some(shipping) = patch.shipping_cost {
            component.shipping_cost = normalized("shippingCost", shipping);
        }
        if let Some(sewing) = patch.sewing_cost {
            component.sewing_cost = normalized("sewingCost", sewing);
        }

        debug!(id = %component.id, position, role = ?component.role, "component updated");
        Ok(())
    }

    /// Merges `patch` into the pricing parameters, normalizing numbers.
    pub fn set_parameters(&mut self, patch: ParametersPatch) {
        if let Some(rnd_cost) = patch.rnd_cost {
            self.parameters.rnd_cost = normalized("rndCost", rnd_cost);
        }
        if let Some(quantity) = patch.quantity {
            self.parameters.quantity = normalized("quantity", quantity);
        }
        if let Some(markup_percent) = patch.markup_percent {
            self.parameters.markup_percent = normalized("markupPercent", markup_percent);
        }

        debug!(parameters = ?self.parameters, "parameters updated");
    }

    fn locate(&self, position: usize) -> CoreResult<&FabricComponent> {
        self.components
            .get(position)
            .ok_or(CoreError::ComponentNotFound {
                position,
                len: self.components.len(),
            })
    }
}

impl Default for ComponentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes one incoming number, noting why it was coerced.
fn normalized(field: &str, value: f64) -> f64 {
    if let Err(err) = check_amount(field, value) {
        debug!(%err, value, "coerced to zero");
    }
    normalize_amount(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentRole, Unit};

    fn reference_patch() -> ComponentPatch {
        ComponentPatch {
            quantity: Some(10.0),
            unit: Some(Unit::Meter),
            price_per_meter: Some(50_000.0),
            shipping_cost: Some(20_000.0),
            sewing_cost: Some(30_000.0),
        }
    }

    #[test]
    fn test_new_store_has_one_zero_primary() {
        let store = ComponentStore::new();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert!(store.primary().is_primary());
        assert_eq!(store.primary().quantity, 0.0);
        assert_eq!(*store.parameters(), PricingParameters::default());
    }

    #[test]
    fn test_add_appends_additional() {
        let mut store = ComponentStore::new();
        assert_eq!(store.add_component(), 1);
        assert_eq!(store.add_component(), 2);
        assert_eq!(store.len(), 3);
        assert_eq!(store.components()[1].role, ComponentRole::Additional);
        assert_eq!(store.components()[2].sewing_cost, 0.0);
        assert!(store.component(2).is_some());
        assert!(store.component(3).is_none());
    }

    #[test]
    fn test_remove_primary_is_rejected() {
        let mut store = ComponentStore::new();
        store.update_component(0, reference_patch()).unwrap();
        store.add_component();
        let before = store.clone();

        let result = store.remove_component(0);

        assert_eq!(result, Err(CoreError::PrimaryComponentPermanent { position: 0 }));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_missing_position_is_rejected() {
        let mut store = ComponentStore::new();
        let before = store.clone();

        let result = store.remove_component(3);

        assert_eq!(result, Err(CoreError::ComponentNotFound { position: 3, len: 1 }));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut store = ComponentStore::new();
        store.add_component();
        store.add_component();
        store.add_component();
        let primary_id = store.components()[0].id.clone();
        let kept_first = store.components()[1].id.clone();
        let removed_id = store.components()[2].id.clone();
        let kept_last = store.components()[3].id.clone();

        let removed = store.remove_component(2).unwrap();

        assert_eq!(removed.id, removed_id);
        let ids: Vec<_> = store.components().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![primary_id, kept_first, kept_last]);
    }

    #[test]
    fn test_add_then_remove_restores_total() {
        let mut store = ComponentStore::new();
        store.update_component(0, reference_patch()).unwrap();
        let before = store.quote().total_cost;

        let position = store.add_component();
        store
            .update_component(
                position,
                ComponentPatch {
                    quantity: Some(3.3),
                    unit: Some(Unit::Yard),
                    price_per_meter: Some(12_345.67),
                    shipping_cost: Some(1_000.1),
                    sewing_cost: Some(7_777.7),
                },
            )
            .unwrap();
        assert!(store.quote().total_cost > before);

        store.remove_component(position).unwrap();
        assert_eq!(store.quote().total_cost, before);
    }

    #[test]
    fn test_update_merges_only_given_fields() {
        let mut store = ComponentStore::new();
        store.update_component(0, reference_patch()).unwrap();

        store
            .update_component(
                0,
                ComponentPatch {
                    unit: Some(Unit::Yard),
                    ..Default::default()
                },
            )
            .unwrap();

        let primary = store.primary();
        assert_eq!(primary.unit, Unit::Yard);
        assert_eq!(primary.quantity, 10.0);
        assert_eq!(primary.price_per_meter, 50_000.0);
        assert_eq!(primary.shipping_cost, 20_000.0);
        assert_eq!(primary.sewing_cost, 30_000.0);
    }

    #[test]
    fn test_update_normalizes_bad_numbers() {
        let mut store = ComponentStore::new();
        store
            .update_component(
                0,
                ComponentPatch {
                    quantity: Some(-3.0),
                    price_per_meter: Some(f64::NAN),
                    shipping_cost: Some(f64::INFINITY),
                    sewing_cost: Some(-0.0),
                    ..Default::default()
                },
            )
            .unwrap();

        let primary = store.primary();
        assert_eq!(primary.quantity, 0.0);
        assert_eq!(primary.price_per_meter, 0.0);
        assert_eq!(primary.shipping_cost, 0.0);
        assert!(primary.sewing_cost.is_sign_positive());
    }

    #[test]
    fn test_update_missing_position_is_rejected() {
        let mut store = ComponentStore::new();
        let before = store.clone();

        let result = store.update_component(1, reference_patch());

        assert_eq!(result, Err(CoreError::ComponentNotFound { position: 1, len: 1 }));
        assert_eq!(store, before);
    }

    #[test]
    fn test_primary_is_found_by_role() {
        let mut store = ComponentStore::new();
        let primary_id = store.primary().id.clone();
        store.add_component();
        store.add_component();
        store.remove_component(1).unwrap();
        store.update_component(0, reference_patch()).unwrap();

        let primary = store.primary();
        assert!(primary.is_primary());
        assert_eq!(primary.id, primary_id);
        assert_eq!(primary.sewing_cost, 30_000.0);
        let by_role: Vec<_> = store.components().iter().filter(|c| c.is_primary()).collect();
        assert_eq!(by_role.len(), 1);
        assert_eq!(by_role[0].id, primary_id);
    }

    #[test]
    fn test_set_parameters_merges_and_normalizes() {
        let mut store = ComponentStore::new();
        store.set_parameters(ParametersPatch {
            markup_percent: Some(5.0),
            quantity: Some(-10.0),
            ..Default::default()
        });

        let params = store.parameters();
        assert_eq!(params.rnd_cost, 125_000.0);
        assert_eq!(params.quantity, 0.0);
        assert_eq!(params.markup_percent, 5.0);
    }

    #[test]
    fn test_with_parameters_normalizes() {
        let store = ComponentStore::with_parameters(PricingParameters {
            rnd_cost: -1.0,
            quantity: 50.0,
            markup_percent: f64::NAN,
        });
        assert_eq!(store.parameters().rnd_cost, 0.0);
        assert_eq!(store.parameters().quantity, 50.0);
        assert_eq!(store.parameters().markup_percent, 0.0);
    }

    #[test]
    fn test_quote_follows_edits() {
        let mut store = ComponentStore::new();
        assert_eq!(store.quote().final_price, 0.0);

        store.update_component(0, reference_patch()).unwrap();
        assert_eq!(store.quote().rnd_allocation, 6450.0);

        store.set_parameters(ParametersPatch {
            quantity: Some(0.0),
            ..Default::default()
        });
        assert_eq!(store.quote().rnd_allocation, 0.0);
    }
}
