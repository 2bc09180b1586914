//! Per-entry validation: field presence and shape only.
//!
//! Entry shape:
//! {
//!   "operator": "add",   // required, non-blank string
//!   "value1": 2,         // required, number or numeric string
//!   "value2": 3          // required unless operator is "sqrt"
//! }
//!
//! Whether the operator is actually supported is left to the evaluator.

use crate::error::{CalcError, CalcResult};
use crate::ops::load::json_kind;
use crate::ops::record::Operation;

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Operator that takes a single operand; `value2` is optional for it.
pub const UNARY_OPERATOR: &str = "sqrt";

// Decimal literal with optional sign and exponent. Rejects "inf", "NaN" and
// other spellings `f64::from_str` would otherwise accept.
static NUMERIC_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$"#)
        .expect("numeric literal regex is valid")
});

/// Turn one named entry of the input object into an [`Operation`].
pub fn parse_operation(name: &str, value: &Value) -> CalcResult<Operation> {
    let content = value
        .as_object()
        .ok_or_else(|| CalcError::invalid(format!("Invalid data in operation '{}'", name)))?;

    require_field(content, "operator")?;
    require_field(content, "value1")?;

    let operator = match content.get("operator") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => {
            return Err(CalcError::invalid(
                "The 'operator' field is empty or contains invalid data.",
            ));
        }
    };

    let value1 = read_number(content, "value1")?;

    let value2 = if operator == UNARY_OPERATOR {
        0.0
    } else {
        if !content.contains_key("value2") {
            return Err(CalcError::invalid(format!(
                "Missing 'value2' field in the operation for operator: {}",
                operator
            )));
        }
        read_number(content, "value2")?
    };

    Ok(Operation {
        name: name.to_string(),
        operator,
        value1,
        value2,
    })
}

fn require_field(content: &Map<String, Value>, field: &str) -> CalcResult<()> {
    content.get(field).map(|_| ()).ok_or_else(|| missing_field(field))
}

fn missing_field(field: &str) -> CalcError {
    CalcError::invalid(format!("Missing '{}' field in the operation.", field))
}

/// Read a field as f64. JSON numbers and strings holding a decimal literal
/// are accepted; literals that overflow to infinity are not.
fn read_number(content: &Map<String, Value>, field: &str) -> CalcResult<f64> {
    let raw = content.get(field).ok_or_else(|| missing_field(field))?;
    match raw {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            CalcError::invalid(format!("The '{}' field is out of range: {}", field, n))
        }),
        Value::String(s) if NUMERIC_LITERAL_RE.is_match(s.trim()) => {
            match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                Ok(_) => Err(CalcError::invalid(format!(
                    "The '{}' field is out of range: {:?}",
                    field, s
                ))),
                Err(_) => Err(CalcError::invalid(format!(
                    "The '{}' field is not a valid number: {:?}",
                    field, s
                ))),
            }
        }
        Value::String(s) => Err(CalcError::invalid(format!(
            "The '{}' field is not a valid number: {:?}",
            field, s
        ))),
        other => Err(CalcError::invalid(format!(
            "The '{}' field must be a number, found {}",
            field,
            json_kind(other)
        ))),
    }
}
