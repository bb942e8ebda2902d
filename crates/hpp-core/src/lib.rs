//! # hpp-core: Pure Pricing Logic for the HPP Calculator
//!
//! This crate is the **heart** of the calculator. It turns an ordered list of
//! fabric components plus a handful of global pricing parameters into the
//! production cost (HPP), R&D allocation, markup, tax and final price.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      HPP Calculator Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View Layer (hpp-calc)                        │   │
//! │  │    text fields ──► edit events ──► rendered figures             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ add / remove / update / params        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hpp-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  number   │  │   store   │  │  pricing  │  │   view    │  │   │
//! │  │   │  parse    │  │ Component │  │ HPP, RND  │  │ Derived   │  │   │
//! │  │   │  format   │  │  Store    │  │ markup,tax│  │  View     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`number`] - Locale-aware parse/format (`1.234,56` ⇄ `1234.56`)
//! - [`types`] - Fabric components, units, pricing parameters, patches
//! - [`validation`] - Normalization of raw numeric input
//! - [`store`] - The component store (the only mutable state)
//! - [`pricing`] - The pure formula chain
//! - [`view`] - Derived, display-ready figures
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hpp_core::{ComponentPatch, ComponentStore, DerivedView, Unit};
//!
//! let mut store = ComponentStore::new();
//! store
//!     .update_component(
//!         0,
//!         ComponentPatch {
//!             quantity: Some(10.0),
//!             unit: Some(Unit::Meter),
//!             price_per_meter: Some(50_000.0),
//!             shipping_cost: Some(20_000.0),
//!             sewing_cost: Some(30_000.0),
//!         },
//!     )
//!     .unwrap();
//!
//! let view = DerivedView::from_store(&store);
//! assert_eq!(view.totals.total_cost.value, 550_000.0);
//! assert_eq!(view.totals.total_cost.text, "550.000");
//! assert_eq!(view.totals.rnd_allocation.text, "6.450");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod number;
pub mod pricing;
pub mod store;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use number::{format_number, parse_number};
pub use pricing::{quote, CostBreakdown};
pub use store::ComponentStore;
pub use types::*;
pub use view::DerivedView;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Meters per yard for fabric quantities.
///
/// A fixed trade factor, not the SI 0.9144. Not configurable.
pub const METERS_PER_YARD: f64 = 1.1;

/// Fixed tax rate applied to `HPP + R&D allocation`.
pub const TAX_RATE: f64 = 0.10;

/// Default R&D cost spread over a production run.
pub const DEFAULT_RND_COST: f64 = 125_000.0;

/// Default production quantity (the R&D divisor).
pub const DEFAULT_PRODUCTION_QUANTITY: f64 = 100.0;

/// Default markup in percentage points.
pub const DEFAULT_MARKUP_PERCENT: f64 = 2.0;
