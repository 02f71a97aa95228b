//! # Orchard POS Checkout Driver
//!
//! Prices baskets of fruit and prints receipts.
//!
//! ## Usage
//! ```bash
//! # Run the four built-in demonstration scenarios (A-D)
//! cargo run -p orchard-checkout
//!
//! # Price an ad-hoc basket
//! cargo run -p orchard-checkout -- apple=10 strawberry=5 \
//!     --promotion strawberry --reduction threshold
//!
//! # Emit receipts as JSON
//! cargo run -p orchard-checkout -- --json
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse arguments into baskets and rule names
//! 3. Price each scenario through `orchard-core`
//! 4. Render receipts (text or JSON)
//!
//! All arithmetic lives in `orchard-core`; this binary only selects rules,
//! builds baskets, and formats output.

use std::env;
use std::process;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod error;
mod output;
mod scenarios;

use error::CliError;
use orchard_core::PriceCalculator;
use output::ReceiptDocument;
use scenarios::{demo_scenarios, parse_basket_entry, promotion_by_name, reduction_by_name, Scenario};

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        eprintln!("Run with --help for usage.");
        process::exit(2);
    }
}

/// Parses arguments, prices the requested scenarios, prints receipts.
fn run(args: &[String]) -> Result<(), CliError> {
    let mut entries: Vec<String> = Vec::new();
    let mut promotion = String::from("none");
    let mut reduction = String::from("none");
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--promotion" | "-p" => {
                promotion = take_value(args, &mut i)?;
            }
            "--reduction" | "-r" => {
                reduction = take_value(args, &mut i)?;
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::UnknownOption(flag.to_string()));
            }
            entry => {
                entries.push(entry.to_string());
            }
        }
        i += 1;
    }

    let mut scenarios = if entries.is_empty() {
        info!("pricing the built-in demonstration scenarios");
        demo_scenarios()
    } else {
        info!(entries = entries.len(), %promotion, %reduction, "pricing ad-hoc basket");
        vec![build_custom_scenario(&entries, &promotion, &reduction)?]
    };

    let docs: Vec<ReceiptDocument> = scenarios.iter_mut().map(ReceiptDocument::price).collect();
    for doc in &docs {
        debug!(
            scenario = %doc.scenario,
            total = doc.receipt.total,
            "scenario priced"
        );
    }

    if json {
        println!("{}", output::render_json(&docs));
    } else {
        for doc in &docs {
            println!("{}", output::render_text(doc));
        }
    }

    Ok(())
}

/// Builds the single scenario described on the command line.
fn build_custom_scenario(
    entries: &[String],
    promotion: &str,
    reduction: &str,
) -> Result<Scenario, CliError> {
    let basket = entries
        .iter()
        .map(|entry| parse_basket_entry(entry))
        .collect::<Result<Vec<_>, _>>()?;

    let calculator = PriceCalculator::from_boxed(
        reduction_by_name(reduction)?,
        promotion_by_name(promotion)?,
    );

    Ok(Scenario::new("custom", basket, calculator))
}

/// Consumes the value following an option flag.
fn take_value(args: &[String], i: &mut usize) -> Result<String, CliError> {
    if *i + 1 >= args.len() {
        return Err(CliError::MissingValue(args[*i].clone()));
    }
    *i += 1;
    Ok(args[*i].clone())
}

fn print_usage() {
    println!("Orchard POS Checkout");
    println!();
    println!("Usage: checkout [OPTIONS] [<kind>=<weight>...]");
    println!();
    println!("Without basket entries, the four demonstration scenarios (A-D) run.");
    println!();
    println!("Arguments:");
    println!("  <kind>=<weight>        Basket entry, e.g. apple=10 (kinds: apple, strawberry, mango)");
    println!();
    println!("Options:");
    println!("  -p, --promotion <RULE> Promotion rule: none, strawberry (default: none)");
    println!("  -r, --reduction <RULE> Reduction rule: none, threshold (default: none)");
    println!("      --json             Emit receipts as JSON");
    println!("  -h, --help             Show this help message");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=orchard=trace` - Show trace for orchard crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,orchard=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_custom_scenario() {
        let entries = args(&["apple=10", "strawberry=10", "mango=10"]);
        let mut scenario = build_custom_scenario(&entries, "strawberry", "threshold").unwrap();
        let receipt = scenario.price();
        assert!((receipt.total - 374.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_custom_scenario_rejects_bad_rule() {
        let entries = args(&["apple=10"]);
        assert!(matches!(
            build_custom_scenario(&entries, "bogus", "none"),
            Err(CliError::UnknownPromotion(_))
        ));
    }

    #[test]
    fn test_take_value() {
        let list = args(&["--promotion", "strawberry"]);
        let mut i = 0;
        assert_eq!(take_value(&list, &mut i).unwrap(), "strawberry");
        assert_eq!(i, 1);

        let list = args(&["--promotion"]);
        let mut i = 0;
        assert!(matches!(
            take_value(&list, &mut i),
            Err(CliError::MissingValue(_))
        ));
    }

    #[test]
    fn test_run_rejects_unknown_option() {
        assert!(matches!(
            run(&args(&["--bogus"])),
            Err(CliError::UnknownOption(_))
        ));
    }
}
