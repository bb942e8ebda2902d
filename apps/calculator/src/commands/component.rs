//! # Component Commands
//!
//! Adding, removing and editing fabric components.
//!
//! ## Component Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────┐   add    ┌──────────────────────────────┐            │
//! │  │  #0 Primary  │ ───────► │  #0 Primary                  │            │
//! │  │  component   │          │  #1 Additional fabric 1      │            │
//! │  └──────────────┘ ◄─────── └──────────────────────────────┘            │
//! │                   remove 1                                              │
//! │                                                                         │
//! │  set <pos> <field> <value>   edits one field in place                   │
//! │  remove 0                    rejected, the primary is permanent         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hpp_core::ComponentField;
use tracing::debug;

use crate::error::AppResult;
use crate::state::SessionState;

/// Appends an empty additional fabric component.
pub fn add_component(session: &mut SessionState) -> AppResult<()> {
    let position = session.store_mut().add_component();
    debug!(position, "add command");
    Ok(())
}

/// Removes the component at `position`.
///
/// ## Errors
/// - `BUSINESS_LOGIC` when `position` holds the primary component
/// - `NOT_FOUND` when nothing sits at `position`
pub fn remove_component(session: &mut SessionState, position: usize) -> AppResult<()> {
    debug!(position, "remove command");
    session.store_mut().remove_component(position)?;
    Ok(())
}

/// Sets one field of the component at `position` from raw text.
///
/// Numbers are read with the locale parser, so unparseable text becomes
/// zero rather than an error. Only unknown field or unit names and missing
/// positions are rejected.
pub fn set_field(
    session: &mut SessionState,
    position: usize,
    field: &str,
    value: &str,
) -> AppResult<()> {
    debug!(position, field, value, "set command");
    let field: ComponentField = field.parse()?;
    let patch = field.patch_from_text(value)?;
    session.store_mut().update_component(position, patch)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use hpp_core::Unit;

    #[test]
    fn test_set_reference_inputs() {
        let mut session = SessionState::default();
        set_field(&mut session, 0, "quantity", "10").unwrap();
        set_field(&mut session, 0, "price", "50.000").unwrap();
        set_field(&mut session, 0, "shipping", "20.000").unwrap();
        set_field(&mut session, 0, "sewing", "30.000").unwrap();

        let primary = session.store().primary();
        assert_eq!(primary.quantity, 10.0);
        assert_eq!(primary.price_per_meter, 50_000.0);
        assert_eq!(session.view().totals.total_cost.text, "550.000");
    }

    #[test]
    fn test_set_unit() {
        let mut session = SessionState::default();
        set_field(&mut session, 0, "unit", "Yard").unwrap();
        assert_eq!(session.store().primary().unit, Unit::Yard);

        let err = set_field(&mut session, 0, "unit", "inch").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(session.store().primary().unit, Unit::Yard);
    }

    #[test]
    fn test_set_garbage_number_becomes_zero() {
        let mut session = SessionState::default();
        set_field(&mut session, 0, "sewing", "30.000").unwrap();
        set_field(&mut session, 0, "sewing", "abc").unwrap();
        assert_eq!(session.store().primary().sewing_cost, 0.0);
    }

    #[test]
    fn test_set_unknown_field() {
        let mut session = SessionState::default();
        let err = set_field(&mut session, 0, "color", "red").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Unknown field 'color'");
    }

    #[test]
    fn test_set_missing_position() {
        let mut session = SessionState::default();
        let err = set_field(&mut session, 3, "quantity", "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_remove_primary_rejected() {
        let mut session = SessionState::default();
        add_component(&mut session).unwrap();

        let err = remove_component(&mut session, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(session.store().len(), 2);

        remove_component(&mut session, 1).unwrap();
        assert_eq!(session.store().len(), 1);
    }
}
