//! Shaping of raw upstream rows into displayed inspection records.
//!
//! Shaping runs in a fixed order:
//!
//! 1. drop rows missing any of the nine displayed fields
//! 2. project and relabel the nine fields
//! 3. keep critical violations in Manhattan
//! 4. stable sort by inspection date, newest first

use serde_json::{Map, Value};
use strum::EnumCount;
use tracing::debug;

use super::types::{Column, InspectionRecord};
use crate::error::ShapeError;

/// Shape an upstream JSON payload into the displayed record sequence.
pub fn shape(payload: &Value) -> Result<Vec<InspectionRecord>, ShapeError> {
    let rows = payload.as_array().ok_or(ShapeError::NotAnArray {
        found: json_type(payload),
    })?;

    let mut complete = 0usize;
    let mut records = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let object = row.as_object().ok_or(ShapeError::NotAnObject { index })?;

        let Some(record) = project(index, object)? else {
            continue;
        };
        complete += 1;

        if record.is_manhattan_critical() {
            records.push(record);
        }
    }

    sort_newest_first(&mut records);

    debug!(
        upstream = rows.len(),
        complete,
        kept = records.len(),
        "Shaped inspection rows"
    );

    Ok(records)
}

/// Sort by inspection date descending, keeping upstream order among equal dates.
pub fn sort_newest_first(records: &mut [InspectionRecord]) {
    records.sort_by(|a, b| b.inspection_date.cmp(&a.inspection_date));
}

/// Project one upstream object onto the displayed columns.
///
/// Returns `Ok(None)` when any displayed field is missing or empty, whatever the
/// other fields hold. Only a complete row with a nested field is an error.
fn project(
    index: usize,
    object: &Map<String, Value>,
) -> Result<Option<InspectionRecord>, ShapeError> {
    let mut values: [String; Column::COUNT] = std::array::from_fn(|_| String::new());
    let mut nested = None;

    for (slot, column) in values.iter_mut().zip(Column::all()) {
        let field = column.source_key();
        match scalar_text(object.get(field)) {
            Scalar::Present(text) => *slot = text,
            Scalar::Missing => return Ok(None),
            Scalar::Nested => {
                nested.get_or_insert(field);
            }
        }
    }

    if let Some(field) = nested {
        return Err(ShapeError::NonScalarField { index, field });
    }

    let [
        restaurant_name,
        borough,
        street,
        zipcode,
        inspection_date,
        critical_flag,
        cuisine_description,
        violation_description,
        grade,
    ] = values;

    Ok(Some(InspectionRecord {
        restaurant_name,
        borough,
        street,
        zipcode,
        inspection_date,
        critical_flag,
        cuisine_description,
        violation_description,
        grade,
    }))
}

enum Scalar {
    Present(String),
    Missing,
    Nested,
}

fn scalar_text(value: Option<&Value>) -> Scalar {
    match value {
        None | Some(Value::Null) => Scalar::Missing,
        Some(Value::String(s)) if s.is_empty() => Scalar::Missing,
        Some(Value::String(s)) => Scalar::Present(s.clone()),
        Some(Value::Number(n)) => Scalar::Present(n.to_string()),
        Some(Value::Bool(b)) => Scalar::Present(b.to_string()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Scalar::Nested,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
