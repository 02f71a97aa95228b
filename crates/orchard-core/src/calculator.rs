//! # Price Calculator Module
//!
//! Composes one promotion rule and one order discount rule to reduce a
//! basket to a final price.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Price Calculation                                    │
//! │                                                                         │
//! │  [Item, Item, …] ──► apply_promotion(item) per line ──► Σ charged       │
//! │                                                            │            │
//! │                                                            ▼            │
//! │                                       apply_discount(Σ) exactly once    │
//! │                                                            │            │
//! │                                                            ▼            │
//! │                                                     final payable       │
//! │                                                                         │
//! │  Traversal order never changes the numeric result (addition is          │
//! │  commutative); it only decides which items get their multiplier set     │
//! │  first when a kind-specific promotion is active.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orchard_core::{
//!     Item, ItemKind, NoReduction, PriceCalculator, StrawberryDiscount,
//! };
//!
//! let calculator = PriceCalculator::new(NoReduction, StrawberryDiscount);
//! let mut basket = vec![
//!     Item::new(ItemKind::Apple, 10),
//!     Item::new(ItemKind::Strawberry, 10),
//!     Item::new(ItemKind::Mango, 10),
//! ];
//!
//! let total = calculator.calculate_price(&mut basket);
//! assert!((total - 384.0).abs() < 1e-9);
//! ```

use crate::discount::{BoxedDiscountStrategy, DiscountStrategy};
use crate::item::Item;
use crate::promotion::{BoxedPromotionStrategy, PromotionStrategy};
use crate::receipt::{Receipt, ReceiptLine};

// =============================================================================
// Price Calculator
// =============================================================================

/// Composes exactly one order discount rule and one promotion rule.
///
/// Both rules are fixed for the calculator's lifetime (no setters), and the
/// calculator keeps no state between baskets: pricing the same basket twice
/// with fresh items yields the same total.
///
/// ## Side Effects
/// Any item whose kind matches a kind-specific promotion has its discount
/// multiplier overwritten as part of the call. Callers sharing `Item` values
/// across calculators must expect that residual state.
pub struct PriceCalculator {
    discount: BoxedDiscountStrategy,
    promotion: BoxedPromotionStrategy,
}

impl PriceCalculator {
    /// Creates a calculator from an order discount rule and a promotion
    /// rule.
    pub fn new<D, P>(discount: D, promotion: P) -> Self
    where
        D: DiscountStrategy + Send + Sync + 'static,
        P: PromotionStrategy + Send + Sync + 'static,
    {
        PriceCalculator {
            discount: Box::new(discount),
            promotion: Box::new(promotion),
        }
    }

    /// Creates a calculator from already-boxed rules.
    ///
    /// Useful when the rules were selected at runtime, e.g. from CLI flags.
    pub fn from_boxed(discount: BoxedDiscountStrategy, promotion: BoxedPromotionStrategy) -> Self {
        PriceCalculator {
            discount,
            promotion,
        }
    }

    /// Name of the active order discount rule.
    #[inline]
    pub fn discount_name(&self) -> &'static str {
        self.discount.name()
    }

    /// Name of the active promotion rule.
    #[inline]
    pub fn promotion_name(&self) -> &'static str {
        self.promotion.name()
    }

    /// Reduces a basket to its final payable price.
    ///
    /// 1. Fold the promotion rule over the items, summing charged amounts.
    /// 2. Apply the order discount rule exactly once to the sum.
    ///
    /// An empty basket yields the discount rule applied to 0.0.
    pub fn calculate_price(&self, items: &mut [Item]) -> f64 {
        let mut total = 0.0;
        for item in items.iter_mut() {
            total += self.promotion.apply_promotion(item);
        }

        self.discount.apply_discount(total)
    }

    /// Prices a basket and returns the line-by-line breakdown.
    ///
    /// Same arithmetic as [`calculate_price`](Self::calculate_price); the
    /// breakdown never changes a number.
    pub fn calculate_receipt(&self, items: &mut [Item]) -> Receipt {
        let mut lines = Vec::with_capacity(items.len());
        let mut subtotal = 0.0;

        for item in items.iter_mut() {
            let base_amount = item.amount();
            let charged_amount = self.promotion.apply_promotion(item);
            subtotal += charged_amount;

            lines.push(ReceiptLine {
                kind: item.kind(),
                unit_price: item.unit_price(),
                weight: item.weight(),
                base_amount,
                charged_amount,
            });
        }

        let total = self.discount.apply_discount(subtotal);

        Receipt {
            lines,
            subtotal,
            reduction: subtotal - total,
            total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{NoReduction, ThresholdReduction};
    use crate::item::ItemKind;
    use crate::promotion::{NoPromotion, StrawberryDiscount};

    fn small_basket() -> Vec<Item> {
        vec![
            Item::new(ItemKind::Apple, 10),
            Item::new(ItemKind::Strawberry, 10),
        ]
    }

    fn full_basket() -> Vec<Item> {
        vec![
            Item::new(ItemKind::Apple, 10),
            Item::new(ItemKind::Strawberry, 10),
            Item::new(ItemKind::Mango, 10),
        ]
    }

    #[test]
    fn test_plain_total_small_basket() {
        // 8*10 + 13*10
        let calculator = PriceCalculator::new(NoReduction, NoPromotion);
        let total = calculator.calculate_price(&mut small_basket());
        assert!((total - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_plain_total_full_basket() {
        // 80 + 130 + 200
        let calculator = PriceCalculator::new(NoReduction, NoPromotion);
        let total = calculator.calculate_price(&mut full_basket());
        assert!((total - 410.0).abs() < 1e-9);
    }

    #[test]
    fn test_promotion_only() {
        // Strawberry line drops to 104.0
        let calculator = PriceCalculator::new(NoReduction, StrawberryDiscount);
        let total = calculator.calculate_price(&mut full_basket());
        assert!((total - 384.0).abs() < 1e-9);
    }

    #[test]
    fn test_promotion_and_threshold_reduction() {
        // 384.0 >= 100.0, so 10.0 comes off
        let calculator = PriceCalculator::new(ThresholdReduction::default(), StrawberryDiscount);
        let total = calculator.calculate_price(&mut full_basket());
        assert!((total - 374.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_basket() {
        let calculator = PriceCalculator::new(ThresholdReduction::default(), StrawberryDiscount);
        assert_eq!(calculator.calculate_price(&mut []), 0.0);

        let calculator = PriceCalculator::new(NoReduction, NoPromotion);
        assert_eq!(calculator.calculate_price(&mut []), 0.0);
    }

    #[test]
    fn test_promotion_mutates_matching_items() {
        let calculator = PriceCalculator::new(NoReduction, StrawberryDiscount);
        let mut basket = full_basket();
        calculator.calculate_price(&mut basket);

        assert_eq!(basket[0].discount_multiplier(), 1.0);
        assert_eq!(basket[1].discount_multiplier(), 0.8);
        assert_eq!(basket[2].discount_multiplier(), 1.0);
    }

    #[test]
    fn test_from_boxed_rules() {
        let calculator = PriceCalculator::from_boxed(
            Box::new(ThresholdReduction::default()),
            Box::new(StrawberryDiscount),
        );
        assert_eq!(calculator.discount_name(), "threshold");
        assert_eq!(calculator.promotion_name(), "strawberry");

        let total = calculator.calculate_price(&mut full_basket());
        assert!((total - 374.0).abs() < 1e-9);
    }

    #[test]
    fn test_receipt_agrees_with_calculate_price() {
        let calculator = PriceCalculator::new(ThresholdReduction::default(), StrawberryDiscount);
        let total = calculator.calculate_price(&mut full_basket());
        let receipt = calculator.calculate_receipt(&mut full_basket());

        assert!((receipt.total - total).abs() < 1e-9);

        let charged_sum: f64 = receipt.lines.iter().map(|l| l.charged_amount).sum();
        assert!((charged_sum - receipt.subtotal).abs() < 1e-9);
        assert!((receipt.subtotal - receipt.reduction - receipt.total).abs() < 1e-9);
    }

    #[test]
    fn test_receipt_breakdown() {
        let calculator = PriceCalculator::new(ThresholdReduction::default(), StrawberryDiscount);
        let receipt = calculator.calculate_receipt(&mut full_basket());

        assert_eq!(receipt.line_count(), 3);
        assert_eq!(receipt.total_weight(), 30);

        assert!((receipt.lines[0].charged_amount - 80.0).abs() < 1e-9);
        assert!((receipt.lines[1].base_amount - 130.0).abs() < 1e-9);
        assert!((receipt.lines[1].charged_amount - 104.0).abs() < 1e-9);
        assert!((receipt.lines[2].charged_amount - 200.0).abs() < 1e-9);

        assert!((receipt.subtotal - 384.0).abs() < 1e-9);
        assert!((receipt.reduction - 10.0).abs() < 1e-9);
        assert!((receipt.total - 374.0).abs() < 1e-9);
        assert!((receipt.promotion_savings() - 26.0).abs() < 1e-9);
    }

    #[test]
    fn test_receipt_empty_basket() {
        let calculator = PriceCalculator::new(NoReduction, NoPromotion);
        let receipt = calculator.calculate_receipt(&mut []);

        assert_eq!(receipt.line_count(), 0);
        assert_eq!(receipt.subtotal, 0.0);
        assert_eq!(receipt.reduction, 0.0);
        assert_eq!(receipt.total, 0.0);
    }

    #[test]
    fn test_calculator_is_stateless_across_baskets() {
        let calculator = PriceCalculator::new(ThresholdReduction::default(), StrawberryDiscount);

        let first = calculator.calculate_price(&mut full_basket());
        // A different basket in between must not leak into the next result
        calculator.calculate_price(&mut small_basket());
        let second = calculator.calculate_price(&mut full_basket());

        assert_eq!(first, second);
    }
}
