//! # Receipt Module
//!
//! Line-by-line pricing breakdown produced by the calculator.
//!
//! Each line freezes the kind, unit price, and weight it was priced from,
//! plus the base and charged amounts, so the breakdown stays consistent even
//! if the caller mutates the basket afterwards.

use serde::{Deserialize, Serialize};

use crate::item::ItemKind;

// =============================================================================
// Receipt Line
// =============================================================================

/// One priced basket line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Kind of the priced item.
    pub kind: ItemKind,

    /// Unit price frozen at pricing time.
    pub unit_price: f64,

    /// Quantity frozen at pricing time.
    pub weight: i64,

    /// Undiscounted line amount (`unit_price * weight`).
    pub base_amount: f64,

    /// Amount actually charged for the line, after the promotion rule.
    pub charged_amount: f64,
}

impl ReceiptLine {
    /// Returns how much the promotion took off this line.
    #[inline]
    pub fn savings(&self) -> f64 {
        self.base_amount - self.charged_amount
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Pricing breakdown for one basket: the lines, the subtotal after
/// promotions, the order-level reduction, and the final payable total.
///
/// The receipt is a pure report: its numbers always agree with
/// [`calculate_price`](crate::PriceCalculator::calculate_price) on the same
/// basket and strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Priced lines, in basket order.
    pub lines: Vec<ReceiptLine>,

    /// Sum of charged line amounts, before the order reduction.
    pub subtotal: f64,

    /// Amount the order discount rule took off the subtotal.
    pub reduction: f64,

    /// Final payable total.
    pub total: f64,
}

impl Receipt {
    /// Returns the number of priced lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_weight(&self) -> i64 {
        self.lines.iter().map(|l| l.weight).sum()
    }

    /// Returns how much the promotion rule saved across all lines.
    pub fn promotion_savings(&self) -> f64 {
        self.lines.iter().map(|l| l.savings()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_receipt() -> Receipt {
        Receipt {
            lines: vec![
                ReceiptLine {
                    kind: ItemKind::Apple,
                    unit_price: 8.0,
                    weight: 10,
                    base_amount: 80.0,
                    charged_amount: 80.0,
                },
                ReceiptLine {
                    kind: ItemKind::Strawberry,
                    unit_price: 13.0,
                    weight: 10,
                    base_amount: 130.0,
                    charged_amount: 104.0,
                },
            ],
            subtotal: 184.0,
            reduction: 10.0,
            total: 174.0,
        }
    }

    #[test]
    fn test_line_savings() {
        let receipt = sample_receipt();
        assert_eq!(receipt.lines[0].savings(), 0.0);
        assert!((receipt.lines[1].savings() - 26.0).abs() < 1e-9);
    }

    #[test]
    fn test_receipt_summaries() {
        let receipt = sample_receipt();
        assert_eq!(receipt.line_count(), 2);
        assert_eq!(receipt.total_weight(), 20);
        assert!((receipt.promotion_savings() - 26.0).abs() < 1e-9);
    }

    #[test]
    fn test_receipt_json_shape() {
        let receipt = sample_receipt();
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["lines"][1]["kind"], "strawberry");
        assert_eq!(json["lines"][1]["charged_amount"], 104.0);
        assert_eq!(json["subtotal"], 184.0);
        assert_eq!(json["reduction"], 10.0);
        assert_eq!(json["total"], 174.0);
    }
}
