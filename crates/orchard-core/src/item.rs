//! # Item Module
//!
//! The item catalog and the basket entry type.
//!
//! ## Catalog
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Item Catalog                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Apple       │   │   Strawberry    │   │     Mango       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  8.0 per unit   │   │  13.0 per unit  │   │  20.0 per unit  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  The catalog is a CLOSED set: each kind is bound to a constant          │
//! │  unit price. Promotion rules match on the kind tag.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orchard_core::{Item, ItemKind};
//!
//! // Ten units of apples at the catalog price
//! let apples = Item::new(ItemKind::Apple, 10);
//! assert_eq!(apples.amount(), 80.0);
//!
//! // The discount multiplier starts at 1.0 and only promotion
//! // rules overwrite it
//! assert_eq!(apples.discounted_amount(), apples.amount());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// =============================================================================
// Item Kind
// =============================================================================

/// The kind of a priced good.
///
/// ## Design Notes
/// - Closed enumeration: the catalog is fixed, each kind carries a constant
///   unit price via [`ItemKind::unit_price`]
/// - Promotion rules dispatch on this tag (see
///   [`StrawberryDiscount`](crate::promotion::StrawberryDiscount))
/// - Serialized as lowercase labels (`"apple"`, `"strawberry"`, `"mango"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// 8.0 per unit.
    Apple,
    /// 13.0 per unit. The only kind targeted by a bundled promotion.
    Strawberry,
    /// 20.0 per unit.
    Mango,
}

impl ItemKind {
    /// Every kind in the catalog, in display order.
    pub const ALL: [ItemKind; 3] = [ItemKind::Apple, ItemKind::Strawberry, ItemKind::Mango];

    /// Returns the constant catalog price for one unit of this kind.
    ///
    /// ## Example
    /// ```rust
    /// use orchard_core::ItemKind;
    ///
    /// assert_eq!(ItemKind::Strawberry.unit_price(), 13.0);
    /// ```
    #[inline]
    pub const fn unit_price(&self) -> f64 {
        match self {
            ItemKind::Apple => 8.0,
            ItemKind::Strawberry => 13.0,
            ItemKind::Mango => 20.0,
        }
    }

    /// Returns the stable lowercase label used for display, parsing,
    /// and serialization.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            ItemKind::Apple => "apple",
            ItemKind::Strawberry => "strawberry",
            ItemKind::Mango => "mango",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a catalog label, case-insensitively.
///
/// This is the only fallible operation in the crate: every pricing
/// computation is a total function, but an unknown label has no kind.
///
/// ## Example
/// ```rust
/// use orchard_core::ItemKind;
///
/// assert_eq!("mango".parse::<ItemKind>().unwrap(), ItemKind::Mango);
/// assert!("durian".parse::<ItemKind>().is_err());
/// ```
impl FromStr for ItemKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apple" => Ok(ItemKind::Apple),
            "strawberry" => Ok(ItemKind::Strawberry),
            "mango" => Ok(ItemKind::Mango),
            _ => Err(CoreError::UnknownKind(s.to_string())),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// One basket entry: a kind, a unit price, a quantity, and a discount
/// multiplier.
///
/// ## Invariants
/// - `unit_price` and `weight` are fixed at construction
/// - `discount_multiplier` starts at 1.0 and is only ever overwritten by a
///   promotion rule via [`Item::set_discount_multiplier`]
/// - No validation: negative or zero prices and weights are accepted and
///   simply propagate arithmetically
///
/// ## Kind Encapsulation
/// The kind tag is not a public field. Callers and promotion rules query it
/// through [`Item::kind`] or [`Item::is_kind`], keeping kind dispatch behind
/// an accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    kind: ItemKind,
    unit_price: f64,
    weight: i64,
    discount_multiplier: f64,
}

impl Item {
    /// Creates a basket entry at the catalog price for its kind.
    ///
    /// ## Example
    /// ```rust
    /// use orchard_core::{Item, ItemKind};
    ///
    /// let mangoes = Item::new(ItemKind::Mango, 10);
    /// assert_eq!(mangoes.unit_price(), 20.0);
    /// assert_eq!(mangoes.amount(), 200.0);
    /// ```
    pub fn new(kind: ItemKind, weight: i64) -> Self {
        Item::with_unit_price(kind, kind.unit_price(), weight)
    }

    /// Creates a basket entry with an explicit unit price.
    ///
    /// No range check is performed on either argument: a negative price or
    /// weight flows through the arithmetic unchanged.
    pub fn with_unit_price(kind: ItemKind, unit_price: f64, weight: i64) -> Self {
        Item {
            kind,
            unit_price,
            weight,
            discount_multiplier: 1.0,
        }
    }

    /// Returns the kind tag.
    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Checks whether this item is of the given kind.
    ///
    /// Promotion rules use this to decide eligibility.
    #[inline]
    pub fn is_kind(&self, kind: ItemKind) -> bool {
        self.kind == kind
    }

    /// Returns the unit price frozen at construction.
    #[inline]
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Returns the quantity frozen at construction.
    #[inline]
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Returns the current discount multiplier.
    #[inline]
    pub fn discount_multiplier(&self) -> f64 {
        self.discount_multiplier
    }

    /// Returns the undiscounted line amount: `unit_price * weight`.
    ///
    /// Pure, no side effect.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.unit_price * self.weight as f64
    }

    /// Overwrites the stored discount multiplier.
    ///
    /// Side effect: mutates the item. No range check on `m`. Reserved for
    /// promotion rules; the multiplier is never read before the same rule
    /// sets it.
    #[inline]
    pub fn set_discount_multiplier(&mut self, m: f64) {
        self.discount_multiplier = m;
    }

    /// Returns the discounted line amount:
    /// `unit_price * weight * discount_multiplier`.
    ///
    /// Pure given the current multiplier.
    #[inline]
    pub fn discounted_amount(&self) -> f64 {
        self.unit_price * self.weight as f64 * self.discount_multiplier
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prices() {
        assert_eq!(ItemKind::Apple.unit_price(), 8.0);
        assert_eq!(ItemKind::Strawberry.unit_price(), 13.0);
        assert_eq!(ItemKind::Mango.unit_price(), 20.0);
    }

    #[test]
    fn test_amount() {
        let item = Item::new(ItemKind::Apple, 10);
        assert!((item.amount() - 80.0).abs() < 1e-9);

        let item = Item::with_unit_price(ItemKind::Apple, 2.5, 4);
        assert!((item.amount() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_defaults_to_identity() {
        let item = Item::new(ItemKind::Strawberry, 10);
        assert_eq!(item.discount_multiplier(), 1.0);
        assert!((item.discounted_amount() - item.amount()).abs() < 1e-9);
    }

    #[test]
    fn test_set_discount_multiplier() {
        let mut item = Item::new(ItemKind::Strawberry, 10);
        item.set_discount_multiplier(0.8);

        assert_eq!(item.discount_multiplier(), 0.8);
        assert!((item.discounted_amount() - 104.0).abs() < 1e-9);
        // The undiscounted amount is unaffected
        assert!((item.amount() - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_values_propagate_unchecked() {
        // Permissive: no validation on construction
        let item = Item::with_unit_price(ItemKind::Mango, -5.0, 3);
        assert!((item.amount() + 15.0).abs() < 1e-9);

        let item = Item::with_unit_price(ItemKind::Mango, 5.0, -3);
        assert!((item.amount() + 15.0).abs() < 1e-9);

        let zero = Item::with_unit_price(ItemKind::Mango, 5.0, 0);
        assert_eq!(zero.amount(), 0.0);
    }

    #[test]
    fn test_kind_checks() {
        let item = Item::new(ItemKind::Strawberry, 1);
        assert_eq!(item.kind(), ItemKind::Strawberry);
        assert!(item.is_kind(ItemKind::Strawberry));
        assert!(!item.is_kind(ItemKind::Apple));
    }

    #[test]
    fn test_kind_labels_round_trip() {
        for kind in ItemKind::ALL {
            let parsed: ItemKind = kind.label().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("Apple".parse::<ItemKind>().unwrap(), ItemKind::Apple);
        assert_eq!(" MANGO ".parse::<ItemKind>().unwrap(), ItemKind::Mango);
    }

    #[test]
    fn test_kind_parse_rejects_unknown() {
        let err = "durian".parse::<ItemKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown item kind: durian");
    }

    #[test]
    fn test_kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&ItemKind::Strawberry).unwrap();
        assert_eq!(json, "\"strawberry\"");
    }
}
