//! # Order Discount Module
//!
//! Order-level reduction rules applied once to the aggregated subtotal.
//!
//! ## Rule Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Order Reduction Evaluation                             │
//! │                                                                         │
//! │  subtotal ──► apply_discount(subtotal) ──► final payable total          │
//! │                                                                         │
//! │  NoReduction:        identity, total unchanged                          │
//! │                                                                         │
//! │  ThresholdReduction: subtotal >= threshold? ──► subtotal - reduction    │
//! │                      otherwise            ──► subtotal unchanged        │
//! │                                                                         │
//! │  The comparison is INCLUSIVE: a subtotal exactly at the threshold       │
//! │  receives the reduction.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Discount Strategy Trait
// =============================================================================

/// A rule adjusting an aggregate subtotal into the final payable total.
///
/// Like promotion rules, implementations are stateless or
/// constant-parameterized, reusable across calculator invocations, and total
/// over all reals. Negative subtotals are not guarded against and pass
/// through the same arithmetic.
pub trait DiscountStrategy {
    /// Adjusts `total` into the final payable amount.
    fn apply_discount(&self, total: f64) -> f64;

    /// A short stable name for logs and receipt headers.
    fn name(&self) -> &'static str;
}

/// Owned order discount rule, as stored by the calculator.
pub type BoxedDiscountStrategy = Box<dyn DiscountStrategy + Send + Sync>;

// =============================================================================
// No Reduction
// =============================================================================

/// Identity rule: the subtotal is the total.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReduction;

impl DiscountStrategy for NoReduction {
    #[inline]
    fn apply_discount(&self, total: f64) -> f64 {
        total
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

// =============================================================================
// Threshold Reduction
// =============================================================================

/// Spend-threshold reduction: orders reaching the threshold get a flat
/// amount taken off.
///
/// The stock rule is "spend 100.0, save 10.0" ([`ThresholdReduction::default`]),
/// but both constants may be tuned at construction.
///
/// ## Example
/// ```rust
/// use orchard_core::{DiscountStrategy, ThresholdReduction};
///
/// let rule = ThresholdReduction::default();
/// assert_eq!(rule.apply_discount(99.5), 99.5);
/// assert_eq!(rule.apply_discount(100.0), 90.0); // inclusive at the threshold
/// assert_eq!(rule.apply_discount(384.0), 374.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ThresholdReduction {
    threshold: f64,
    reduction: f64,
}

impl ThresholdReduction {
    /// Stock threshold: orders of at least this much qualify.
    pub const DEFAULT_THRESHOLD: f64 = 100.0;

    /// Stock reduction taken off qualifying orders.
    pub const DEFAULT_REDUCTION: f64 = 10.0;

    /// Creates a reduction with explicit constants. No range check on
    /// either value.
    pub fn new(threshold: f64, reduction: f64) -> Self {
        ThresholdReduction {
            threshold,
            reduction,
        }
    }

    /// Returns the qualifying threshold.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the amount taken off qualifying orders.
    #[inline]
    pub fn reduction(&self) -> f64 {
        self.reduction
    }
}

impl Default for ThresholdReduction {
    fn default() -> Self {
        ThresholdReduction::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_REDUCTION)
    }
}

impl DiscountStrategy for ThresholdReduction {
    fn apply_discount(&self, total: f64) -> f64 {
        if total >= self.threshold {
            return total - self.reduction;
        }
        total
    }

    fn name(&self) -> &'static str {
        "threshold"
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
