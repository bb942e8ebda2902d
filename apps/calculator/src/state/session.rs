//! # Session State
//!
//! Owns the component store for the length of one calculator session.

use hpp_core::{ComponentStore, DerivedView};
use tracing::debug;

use super::CalculatorConfig;

/// One calculator session: a store plus the configuration it started from.
#[derive(Debug, Clone)]
pub struct SessionState {
    store: ComponentStore,
    config: CalculatorConfig,
}

impl SessionState {
    /// Starts a session with a fresh store seeded from `config`.
    pub fn new(config: CalculatorConfig) -> Self {
        SessionState {
            store: ComponentStore::with_parameters(config.parameters),
            config,
        }
    }

    /// Read access to the store.
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    /// Write access to the store.
    pub fn store_mut(&mut self) -> &mut ComponentStore {
        &mut self.store
    }

    /// Startup configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Recomputes every displayed figure from the current store.
    pub fn view(&self) -> DerivedView {
        DerivedView::from_store(&self.store)
    }

    /// Drops all edits: one zero primary component, configured parameters.
    pub fn reset(&mut self) {
        debug!(components = self.store.len(), "Resetting session");
        self.store = ComponentStore::with_parameters(self.config.parameters);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpp_core::{ComponentPatch, ParametersPatch, PricingParameters};

    #[test]
    fn test_new_session_uses_configured_parameters() {
        let config = CalculatorConfig {
            parameters: PricingParameters {
                rnd_cost: 250_000.0,
                quantity: 50.0,
                markup_percent: 5.0,
            },
            ..Default::default()
        };
        let session = SessionState::new(config);

        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().parameters().rnd_cost, 250_000.0);
        assert_eq!(session.store().parameters().quantity, 50.0);
    }

    #[test]
    fn test_reset_restores_fresh_store() {
        let mut session = SessionState::default();
        session
            .store_mut()
            .update_component(
                0,
                ComponentPatch {
                    quantity: Some(3.0),
                    ..Default::default()
                },
            )
            .unwrap();
        session.store_mut().add_component();
        session.store_mut().set_parameters(ParametersPatch {
            markup_percent: Some(10.0),
            ..Default::default()
        });
        let old_primary = session.store().primary().id.clone();

        session.reset();

        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().primary().quantity, 0.0);
        assert_ne!(session.store().primary().id, old_primary);
        assert_eq!(session.store().parameters(), &PricingParameters::default());
    }

    #[test]
    fn test_view_reflects_store() {
        let mut session = SessionState::default();
        session
            .store_mut()
            .update_component(
                0,
                ComponentPatch {
                    sewing_cost: Some(30_000.0),
                    ..Default::default()
                },
            )
            .unwrap();

        let view = session.view();
        assert_eq!(view.totals.total_cost.text, "30.000");
        assert_eq!(view.totals.rnd_allocation.text, "1.250");
    }
}
