//! # Domain Types
//!
//! Core domain types used throughout the calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │  FabricComponent    │   │      Unit       │   │ ComponentRole   │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)          │   │  Yard (×1.1)    │   │  Primary        │   │
//! │  │  role               │   │  Meter          │   │  Additional     │   │
//! │  │  quantity + unit    │   └─────────────────┘   └─────────────────┘   │
//! │  │  price_per_meter    │                                                │
//! │  │  shipping_cost      │   ┌─────────────────────┐                      │
//! │  │  sewing_cost        │   │ PricingParameters   │                      │
//! │  └─────────────────────┘   │  rnd_cost           │                      │
//! │                            │  quantity (divisor) │                      │
//! │  ComponentPatch /          │  markup_percent     │                      │
//! │  ParametersPatch           └─────────────────────┘                      │
//! │  (partial updates)                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::{DEFAULT_MARKUP_PERCENT, DEFAULT_PRODUCTION_QUANTITY, DEFAULT_RND_COST};

// =============================================================================
// Unit
// =============================================================================

/// Unit a fabric quantity was entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Yard,
    #[default]
    Meter,
}

impl Unit {
    /// Lowercase name as shown in the unit selector.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Yard => "yard",
            Unit::Meter => "meter",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses unit names case-insensitively.
///
/// ## Example
/// ```rust
/// use hpp_core::Unit;
///
/// assert_eq!("Yard".parse::<Unit>().unwrap(), Unit::Yard);
/// assert_eq!("m".parse::<Unit>().unwrap(), Unit::Meter);
/// assert!("inch".parse::<Unit>().is_err());
/// ```
impl FromStr for Unit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yard" | "yards" | "yd" | "y" => Ok(Unit::Yard),
            "meter" | "meters" | "metre" | "metres" | "m" => Ok(Unit::Meter),
            other => Err(CoreError::UnknownUnit(other.to_string())),
        }
    }
}

// =============================================================================
// Component Role
// =============================================================================

/// Whether a component is the permanent primary entry or an added fabric.
///
/// ## Why a Tag?
/// The primary component is both non-removable and excluded from the R&D
/// base (its sewing cost). Tagging it keeps those rules independent of where
/// the component happens to sit in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ComponentRole {
    Primary,
    Additional,
}

// =============================================================================
// Fabric Component
// =============================================================================

/// One fabric entry of a garment.
///
/// All amounts are non-negative; the store enforces it on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FabricComponent {
    /// Unique identifier (UUID v4), a stable row key for views.
    pub id: String,

    /// Primary or additional fabric.
    pub role: ComponentRole,

    /// Fabric needed, in `unit`.
    pub quantity: f64,

    /// Unit of `quantity`.
    pub unit: Unit,

    /// Fabric price per meter.
    pub price_per_meter: f64,

    /// Flat shipping cost.
    pub shipping_cost: f64,

    /// Flat sewing cost.
    pub sewing_cost: f64,
}

impl FabricComponent {
    /// Creates a zero-valued component with a fresh id.
    pub fn new(role: ComponentRole) -> Self {
        FabricComponent {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            quantity: 0.0,
            unit: Unit::default(),
            price_per_meter: 0.0,
            shipping_cost: 0.0,
            sewing_cost: 0.0,
        }
    }

    /// Zero-valued primary component.
    pub fn primary() -> Self {
        Self::new(ComponentRole::Primary)
    }

    /// Zero-valued additional fabric component.
    pub fn additional() -> Self {
        Self::new(ComponentRole::Additional)
    }

    /// Checks if this is the primary component.
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.role == ComponentRole::Primary
    }
}

/// Partial update for a [`FabricComponent`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPatch {
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
    pub price_per_meter: Option<f64>,
    pub shipping_cost: Option<f64>,
    pub sewing_cost: Option<f64>,
}

/// Names of the editable component fields, for text-driven edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentField {
    Quantity,
    Unit,
    PricePerMeter,
    ShippingCost,
    SewingCost,
}

impl ComponentField {
    /// Builds a single-field patch from raw text.
    ///
    /// Numeric fields go through [`crate::number::parse_number`] and so never
    /// fail; only an unknown unit name is rejected.
    ///
    /// ## Example
    /// ```rust
    /// use hpp_core::ComponentField;
    ///
    /// let patch = ComponentField::PricePerMeter.patch_from_text("50.000").unwrap();
    /// assert_eq!(patch.price_per_meter, Some(50_000.0));
    /// assert_eq!(patch.quantity, None);
    /// ```
    pub fn patch_from_text(&self, text: &str) -> Result<ComponentPatch, CoreError> {
        let number = || crate::number::parse_number(text);
        let patch = match self {
            ComponentField::Quantity => ComponentPatch {
                quantity: Some(number()),
                ..Default::default()
            },
            ComponentField::Unit => ComponentPatch {
                unit: Some(text.parse()?),
                ..Default::default()
            },
            ComponentField::PricePerMeter => ComponentPatch {
                price_per_meter: Some(number()),
                ..Default::default()
            },
            ComponentField::ShippingCost => ComponentPatch {
                shipping_cost: Some(number()),
                ..Default::default()
            },
            ComponentField::SewingCost => ComponentPatch {
                sewing_cost: Some(number()),
                ..Default::default()
            },
        };
        Ok(patch)
    }
}

impl FromStr for ComponentField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quantity" | "qty" | "amount" => Ok(ComponentField::Quantity),
            "unit" => Ok(ComponentField::Unit),
            "price" | "pricepermeter" | "price_per_meter" => Ok(ComponentField::PricePerMeter),
            "shipping" | "shippingcost" | "shipping_cost" => Ok(ComponentField::ShippingCost),
            "sewing" | "sewingcost" | "sewing_cost" => Ok(ComponentField::SewingCost),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}

// =============================================================================
// Pricing Parameters
// =============================================================================

/// Global pricing inputs, one set per session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingParameters {
    /// Fixed R&D cost spread over the run.
    pub rnd_cost: f64,

    /// Production quantity; the R&D divisor.
    pub quantity: f64,

    /// Markup in percentage points (2 = 2%).
    pub markup_percent: f64,
}

impl Default for PricingParameters {
    /// 125.000 R&D over 100 pieces with a 2% markup.
    fn default() -> Self {
        PricingParameters {
            rnd_cost: DEFAULT_RND_COST,
            quantity: DEFAULT_PRODUCTION_QUANTITY,
            markup_percent: DEFAULT_MARKUP_PERCENT,
        }
    }
}

/// Partial update for [`PricingParameters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ParametersPatch {
    pub rnd_cost: Option<f64>,
    pub quantity: Option<f64>,
    pub markup_percent: Option<f64>,
}

/// Names of the pricing parameters, for text-driven edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterField {
    RndCost,
    Quantity,
    MarkupPercent,
}

impl ParameterField {
    /// Builds a single-field patch from raw text.
    pub fn patch_from_text(&self, text: &str) -> ParametersPatch {
        let value = Some(crate::number::parse_number(text));
        match self {
            ParameterField::RndCost => ParametersPatch {
                rnd_cost: value,
                ..Default::default()
            },
            ParameterField::Quantity => ParametersPatch {
                quantity: value,
                ..Default::default()
            },
            ParameterField::MarkupPercent => ParametersPatch {
                markup_percent: value,
                ..Default::default()
            },
        }
    }
}

impl FromStr for ParameterField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rnd" | "rndcost" | "rnd_cost" => Ok(ParameterField::RndCost),
            "quantity" | "qty" => Ok(ParameterField::Quantity),
            "markup" | "markuppercent" | "markup_percent" => Ok(ParameterField::MarkupPercent),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
