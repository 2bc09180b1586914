//! Processing model: evaluate every entry of the operations object and order
//! the results for reporting.

use crate::error::{CalcError, CalcResult};
use crate::eval::evaluate;
use crate::ops::parse_operation;

use serde_json::{Map, Value};
use std::cmp::Ordering;
use tracing::debug;

/// Computed value for one named operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub name: String,
    pub value: f64,
}

/// Parse and evaluate every entry, then sort ascending by value.
///
/// Entries are visited in document order and the first failure aborts the
/// whole batch. The sort is stable, so equal values keep document order.
pub fn process_operations(doc: &Map<String, Value>) -> CalcResult<Vec<ResultEntry>> {
    if doc.is_empty() {
        return Err(CalcError::invalid("The JSON object is empty."));
    }

    let mut results: Vec<ResultEntry> = Vec::with_capacity(doc.len());
    for (name, content) in doc {
        let op = parse_operation(name, content)?;
        let value = evaluate(&op.operator, op.value1, op.value2)?;
        debug!(name = %op.name, operator = %op.operator, value, "evaluated");

        results.push(ResultEntry {
            name: op.name,
            value,
        });
    }

    sort_by_value(&mut results);
    Ok(results)
}

fn sort_by_value(results: &mut [ResultEntry]) {
    // `sort_by` is stable; -0.0 and 0.0 compare equal and keep their order.
    results.sort_by(|a, b| compare_values(a.value, b.value));
}

/// Total order over f64: NaN sorts before every number and equals itself,
/// everything else compares numerically.
fn compare_values(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
