//! # Parameter Commands
//!
//! Editing the global pricing parameters (R&D cost, production quantity,
//! markup percent).

use hpp_core::ParameterField;
use tracing::debug;

use crate::error::AppResult;
use crate::state::SessionState;

/// Sets one pricing parameter from raw text.
///
/// ```text
/// params rnd 250.000     R&D cost 250.000
/// params quantity 0      R&D allocation drops to 0
/// params markup 2,5      2,5% markup
/// ```
pub fn set_parameter(session: &mut SessionState, name: &str, value: &str) -> AppResult<()> {
    debug!(parameter = name, value, "params command");
    let field: ParameterField = name.parse()?;
    session.store_mut().set_parameters(field.patch_from_text(value));
    Ok(())
}
