//! # orchard-core: Pure Pricing Logic for Orchard POS
//!
//! This crate is the **heart** of Orchard POS. It contains the whole pricing
//! model as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Orchard POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   apps/checkout (driver)                        │   │
//! │  │   scenario selection ──► basket building ──► receipt printing   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ orchard-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   item    │  │ promotion │  │ discount  │  │calculator │   │   │
//! │  │   │ ItemKind  │  │ per-item  │  │ order-    │  │ fold +    │   │   │
//! │  │   │   Item    │  │   rules   │  │ level rule│  │ reduce    │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO IDS • PURE FUNCTIONS                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The item catalog ([`ItemKind`]) and basket entry ([`Item`])
//! - [`promotion`] - Per-item promotion rules
//! - [`discount`] - Order-level reduction rules
//! - [`calculator`] - The [`PriceCalculator`] composing one rule of each
//! - [`receipt`] - Line-by-line pricing breakdowns
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same basket
//!    and rules, same total
//! 2. **No I/O**: Filesystem, network, clock, and id generation are
//!    FORBIDDEN here - drivers stamp those at the edge
//! 3. **Permissive Arithmetic**: Plain `f64`; negative prices, weights, and
//!    totals flow through unvalidated
//! 4. **Open Rule Sets**: Promotions and reductions are trait objects so
//!    downstream code can add rules without touching this crate
//!
//! ## Example Usage
//!
//! ```rust
//! use orchard_core::{
//!     Item, ItemKind, PriceCalculator, StrawberryDiscount, ThresholdReduction,
//! };
//!
//! let calculator =
//!     PriceCalculator::new(ThresholdReduction::default(), StrawberryDiscount);
//!
//! let mut basket = vec![
//!     Item::new(ItemKind::Apple, 10),
//!     Item::new(ItemKind::Strawberry, 10),
//!     Item::new(ItemKind::Mango, 10),
//! ];
//!
//! // 80 + 104 + 200 = 384, then the spend-100-save-10 reduction
//! let total = calculator.calculate_price(&mut basket);
//! assert!((total - 374.0).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod discount;
pub mod error;
pub mod item;
pub mod promotion;
pub mod receipt;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orchard_core::Item` instead of
// `use orchard_core::item::Item`

pub use calculator::PriceCalculator;
pub use discount::{BoxedDiscountStrategy, DiscountStrategy, NoReduction, ThresholdReduction};
pub use error::{CoreError, CoreResult};
pub use item::{Item, ItemKind};
pub use promotion::{BoxedPromotionStrategy, NoPromotion, PromotionStrategy, StrawberryDiscount};
pub use receipt::{Receipt, ReceiptLine};
