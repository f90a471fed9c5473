//! NA, NaN and infinities under each missing-value policy.
//!
//! Run with: cargo run --example missing_values

use shapejson::{from_str, to_string_with_options, Double, EncodeOptions, NaPolicy, RValue, Vector};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let x = RValue::from(Vector::Double(vec![
        Double::Finite(3.14),
        Double::NA,
        Double::NaN,
        Double::Finite(21.0),
        Double::Infinity,
        Double::NegativeInfinity,
    ]));
    let words = RValue::from(Vector::from(vec![Some("a"), None]));

    for (label, policy) in [
        ("default", NaPolicy::Default),
        ("null", NaPolicy::Null),
        ("string", NaPolicy::String),
    ] {
        let options = EncodeOptions::new().with_na(policy);
        println!(
            "{:>8}: {}  {}",
            label,
            to_string_with_options(&x, options.clone())?,
            to_string_with_options(&words, options)?
        );
    }

    // Under the default policy every state survives a round trip
    let json = to_string_with_options(&x, EncodeOptions::new())?;
    assert_eq!(from_str(&json)?, x);
    println!("✓ Round-trip successful");

    Ok(())
}
