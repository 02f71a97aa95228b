//! # CLI Error Type
//!
//! Unified error type for the checkout driver.
//!
//! Mirrors the layering of the core crate: `orchard-core` raises typed
//! domain errors, and the driver wraps them together with its own parse
//! failures so `main` has a single error surface to report.

use thiserror::Error;

use orchard_core::CoreError;

/// Errors the checkout driver can report to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// A positional argument was not of the form `<kind>=<weight>`.
    #[error("invalid basket entry '{0}': expected <kind>=<weight>, e.g. apple=10")]
    InvalidBasketEntry(String),

    /// `--promotion` named a rule the driver does not know.
    #[error("unknown promotion rule '{0}' (expected: none, strawberry)")]
    UnknownPromotion(String),

    /// `--reduction` named a rule the driver does not know.
    #[error("unknown reduction rule '{0}' (expected: none, threshold)")]
    UnknownReduction(String),

    /// An option that takes a value was the last argument.
    #[error("missing value for option '{0}'")]
    MissingValue(String),

    /// An argument started with `-` but is not a known option.
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// Domain error bubbled up from the core (unknown catalog label).
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Unit Tests
// =============================================================================
