//! # Error Types
//!
//! Domain error types for orchard-core.
//!
//! Pricing itself is a total function: every basket, every multiplier, and
//! every subtotal produces a number, so none of the arithmetic can fail.
//! The only fallible operation the crate exposes is turning a catalog label
//! back into an [`ItemKind`](crate::ItemKind).
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending label)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A label did not name any kind in the catalog.
    ///
    /// Raised by `ItemKind::from_str`, typically on user input from a
    /// driver (e.g. a mistyped basket entry on the command line).
    #[error("unknown item kind: {0}")]
    UnknownKind(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
