//! # Receipt Output
//!
//! Rendering of priced scenarios, text and JSON.
//!
//! The driver wraps the core [`Receipt`] in a document carrying the edge
//! stamps the core deliberately never generates: a receipt id and the
//! pricing timestamp.
//!
//! ## Text Layout
//! ```text
//! Scenario D: apple×10, strawberry×10, mango×10
//!   promotion: strawberry   reduction: threshold
//!   ----------------------------------------------
//!   apple           10 @   8.00        80.00
//!   strawberry      10 @  13.00       104.00   (saved 26.00)
//!   mango           10 @  20.00       200.00
//!   ----------------------------------------------
//!   Subtotal                          384.00
//!   Reduction                         -10.00
//!   Total payable: 374.00
//! ```

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use orchard_core::Receipt;

use crate::scenarios::Scenario;

// =============================================================================
// Receipt Document
// =============================================================================

/// A rendered receipt: the core breakdown plus the driver's edge stamps.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptDocument {
    /// Receipt identifier, generated at rendering time.
    pub receipt_id: Uuid,

    /// Scenario label ("A".."D" or "custom").
    pub scenario: String,

    /// Basket summary.
    pub description: String,

    /// Active promotion rule name.
    pub promotion: &'static str,

    /// Active reduction rule name.
    pub reduction: &'static str,

    /// When the basket was priced.
    pub priced_at: DateTime<Utc>,

    /// The pricing breakdown from the core.
    pub receipt: Receipt,
}

impl ReceiptDocument {
    /// Prices the scenario and stamps the result.
    pub fn price(scenario: &mut Scenario) -> Self {
        let receipt = scenario.price();
        ReceiptDocument {
            receipt_id: Uuid::new_v4(),
            scenario: scenario.name.clone(),
            description: scenario.description.clone(),
            promotion: scenario.promotion_name(),
            reduction: scenario.reduction_name(),
            priced_at: Utc::now(),
            receipt,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders a receipt document as a text block for the terminal.
pub fn render_text(doc: &ReceiptDocument) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Scenario {}: {}", doc.scenario, doc.description);
    let _ = writeln!(
        out,
        "  promotion: {}   reduction: {}",
        doc.promotion, doc.reduction
    );
    let _ = writeln!(out, "  {}", "-".repeat(46));

    for line in &doc.receipt.lines {
        let _ = write!(
            out,
            "  {:<12} {:>5} @ {:>6.2}   {:>10.2}",
            line.kind.label(),
            line.weight,
            line.unit_price,
            line.charged_amount
        );
        if line.savings() > 0.0 {
            let _ = write!(out, "   (saved {:.2})", line.savings());
        }
        out.push('\n');
    }

    let _ = writeln!(out, "  {}", "-".repeat(46));
    let _ = writeln!(out, "  {:<26} {:>10.2}", "Subtotal", doc.receipt.subtotal);
    if doc.receipt.reduction != 0.0 {
        let _ = writeln!(
            out,
            "  {:<26} {:>10.2}",
            "Reduction",
            -doc.receipt.reduction
        );
    }
    let _ = writeln!(out, "  Total payable: {:.2}", doc.receipt.total);

    out
}

/// Renders a batch of receipt documents as pretty-printed JSON.
pub fn render_json(docs: &[ReceiptDocument]) -> String {
    // The document tree contains no map keys or non-string values that
    // could fail serialization
    serde_json::to_string_pretty(docs).expect("receipt documents serialize")
}

// =============================================================================
// Unit Tests
// =============================================================================
