//! Output formatting shared by `Print`, `Return` and value display.
//!
//! Booleans and nil never reach the output channel as host values: they are
//! replaced by the sentinel words below. Function results go through the same
//! conversion, which is why `filter` callbacks are tested against the truthy
//! sentinel string rather than `Bool(true)`.

use crate::value::Value;

/// Printed in place of nil.
pub const NIL_SENTINEL: &str = "waray";
/// Printed in place of `true`.
pub const TRUE_SENTINEL: &str = "tuod";
/// Printed in place of `false`.
pub const FALSE_SENTINEL: &str = "buwa";

/// Replace nil and booleans with their sentinel strings; other values pass
/// through unchanged (lists stay lists).
pub fn to_output(value: Value) -> Value {
    match value {
        Value::Nil => Value::string(NIL_SENTINEL),
        Value::Bool(true) => Value::string(TRUE_SENTINEL),
        Value::Bool(false) => Value::string(FALSE_SENTINEL),
        other => other,
    }
}

/// Whether `value` is exactly the truthy sentinel string.
#[inline]
pub fn is_truthy_sentinel(value: &Value) -> bool {
    value.as_str() == Some(TRUE_SENTINEL)
}

/// Magnitudes at or above this print in exponent form.
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitudes below this print in exponent form.
const EXPONENT_LOWER: f64 = 1e-6;

/// Render a number the way the language prints it: integral values have no
/// fractional part, `-0` prints as `0`, non-finite values by name. Very large
/// and very small magnitudes use exponent form with an explicit sign
/// (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= EXPONENT_UPPER || n.abs() < EXPONENT_LOWER {
        format_exponent(n)
    } else {
        format!("{n}")
    }
}

fn format_exponent(n: f64) -> String {
    let shortest = format!("{n:e}");
    match shortest.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => shortest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integral_numbers() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn exponent_form_at_extremes() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000_001), "0.000001");
    }

    #[test]
    fn fractional_numbers() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-1.25), "-1.25");
    }

    #[test]
    fn special_numbers() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn to_output_replaces_sentinel_values() {
        assert_eq!(to_output(Value::Nil), Value::string("waray"));
        assert_eq!(to_output(Value::Bool(true)), Value::string("tuod"));
        assert_eq!(to_output(Value::Bool(false)), Value::string("buwa"));
        assert_eq!(to_output(Value::Number(3.0)), Value::Number(3.0));
    }

    #[test]
    fn to_output_keeps_lists() {
        let list = Value::list(vec![Value::Bool(true)]);
        assert_eq!(to_output(list.clone()), list);
    }

    #[test]
    fn truthy_sentinel_is_string_only() {
        assert!(is_truthy_sentinel(&Value::string("tuod")));
        assert!(!is_truthy_sentinel(&Value::Bool(true)));
        assert!(!is_truthy_sentinel(&Value::string("buwa")));
    }
}
