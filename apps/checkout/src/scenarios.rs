//! # Scenarios
//!
//! Basket construction and rule selection for the checkout driver.
//!
//! The four demonstration scenarios reproduce the classic walkthrough:
//!
//! | Scenario | Basket                                  | Promotion  | Reduction | Total |
//! |----------|-----------------------------------------|------------|-----------|-------|
//! | A        | apple×10, strawberry×10                 | none       | none      | 210.0 |
//! | B        | apple×10, strawberry×10, mango×10       | none       | none      | 410.0 |
//! | C        | apple×10, strawberry×10, mango×10       | strawberry | none      | 384.0 |
//! | D        | apple×10, strawberry×10, mango×10       | strawberry | threshold | 374.0 |

use orchard_core::{
    BoxedDiscountStrategy, BoxedPromotionStrategy, Item, ItemKind, NoPromotion, NoReduction,
    PriceCalculator, Receipt, StrawberryDiscount, ThresholdReduction,
};

use crate::error::CliError;

// =============================================================================
// Scenario
// =============================================================================

/// One basket paired with the calculator that will price it.
pub struct Scenario {
    /// Short label shown in output ("A".."D", or "custom").
    pub name: String,

    /// Human-readable basket summary.
    pub description: String,

    basket: Vec<Item>,
    calculator: PriceCalculator,
}

impl Scenario {
    /// Builds a scenario from a basket and a rule pair.
    pub fn new(
        name: impl Into<String>,
        basket: Vec<Item>,
        calculator: PriceCalculator,
    ) -> Self {
        let description = describe_basket(&basket);
        Scenario {
            name: name.into(),
            description,
            basket,
            calculator,
        }
    }

    /// Name of the active promotion rule.
    pub fn promotion_name(&self) -> &'static str {
        self.calculator.promotion_name()
    }

    /// Name of the active reduction rule.
    pub fn reduction_name(&self) -> &'static str {
        self.calculator.discount_name()
    }

    /// Prices the basket and returns the breakdown.
    ///
    /// Takes `&mut self`: a kind-specific promotion sets discount
    /// multipliers on the scenario's own items.
    pub fn price(&mut self) -> Receipt {
        self.calculator.calculate_receipt(&mut self.basket)
    }
}

/// Renders a basket as `"apple×10, strawberry×10"`.
fn describe_basket(basket: &[Item]) -> String {
    if basket.is_empty() {
        return "empty basket".to_string();
    }

    basket
        .iter()
        .map(|item| format!("{}×{}", item.kind(), item.weight()))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Demonstration Scenarios
// =============================================================================

/// The four built-in demonstration scenarios, in order.
pub fn demo_scenarios() -> Vec<Scenario> {
    let small = || {
        vec![
            Item::new(ItemKind::Apple, 10),
            Item::new(ItemKind::Strawberry, 10),
        ]
    };
    let full = || {
        vec![
            Item::new(ItemKind::Apple, 10),
            Item::new(ItemKind::Strawberry, 10),
            Item::new(ItemKind::Mango, 10),
        ]
    };

    vec![
        Scenario::new("A", small(), PriceCalculator::new(NoReduction, NoPromotion)),
        Scenario::new("B", full(), PriceCalculator::new(NoReduction, NoPromotion)),
        Scenario::new(
            "C",
            full(),
            PriceCalculator::new(NoReduction, StrawberryDiscount),
        ),
        Scenario::new(
            "D",
            full(),
            PriceCalculator::new(ThresholdReduction::default(), StrawberryDiscount),
        ),
    ]
}

// =============================================================================
// Rule Selection
// =============================================================================

/// Resolves a promotion rule by its CLI name.
pub fn promotion_by_name(name: &str) -> Result<BoxedPromotionStrategy, CliError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "none" => Ok(Box::new(NoPromotion)),
        "strawberry" => Ok(Box::new(StrawberryDiscount)),
        _ => Err(CliError::UnknownPromotion(name.to_string())),
    }
}

/// Resolves a reduction rule by its CLI name.
pub fn reduction_by_name(name: &str) -> Result<BoxedDiscountStrategy, CliError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "none" => Ok(Box::new(NoReduction)),
        "threshold" => Ok(Box::new(ThresholdReduction::default())),
        _ => Err(CliError::UnknownReduction(name.to_string())),
    }
}

/// Parses a positional basket entry of the form `<kind>=<weight>`.
pub fn parse_basket_entry(entry: &str) -> Result<Item, CliError> {
    let (kind, weight) = entry
        .split_once('=')
        .ok_or_else(|| CliError::InvalidBasketEntry(entry.to_string()))?;

    let kind: ItemKind = kind.parse()?;
    let weight: i64 = weight
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidBasketEntry(entry.to_string()))?;

    Ok(Item::new(kind, weight))
}

// =============================================================================
// Unit Tests
// =============================================================================
