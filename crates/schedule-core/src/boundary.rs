//! Boundary validation: loosely typed form JSON → schedule entities.
//!
//! Forms store circuits under either the short names (`number`,
//! `description`) or the schedule-of-tests names (`circuitNumber`,
//! `circuitDescription`, `liveSize`, `protectiveDeviceRating`). Both are
//! accepted. Anything that cannot identify a circuit is rejected here so the
//! rest of the crate can assume well-formed input.

use rustc_hash::FxHashSet;
use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::{ScheduleError, ScheduleResult};
use crate::types::{Circuit, CircuitId, CircuitNumber, ReadingStore, TestTypeId};

/// Convert a JSON array of circuit objects. Ids must be unique.
pub fn circuits_from_json(value: &Value) -> ScheduleResult<Vec<Circuit>> {
    let items = value.as_array().ok_or_else(|| ScheduleError::InvalidCircuit {
        position: 0,
        reason: "expected an array of circuits".to_string(),
    })?;

    let mut seen = FxHashSet::default();
    let mut circuits = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let circuit = circuit_from_json(item, position)?;
        if !seen.insert(circuit.id.clone()) {
            return Err(ScheduleError::DuplicateCircuit {
                id: circuit.id.to_string(),
            });
        }
        circuits.push(circuit);
    }
    Ok(circuits)
}

/// Convert one circuit object. `position` is only used in error messages
/// and as the fallback number.
pub fn circuit_from_json(value: &Value, position: usize) -> ScheduleResult<Circuit> {
    let invalid = |reason: &str| ScheduleError::InvalidCircuit {
        position,
        reason: reason.to_string(),
    };
    let obj = value.as_object().ok_or_else(|| invalid("expected an object"))?;

    let id = match obj.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => CircuitId::new(s.trim()),
        Some(Value::Number(n)) => CircuitId::new(n.to_string()),
        _ => return Err(invalid("missing or empty id")),
    };

    let number = match field(obj, &["number", "circuitNumber"]) {
        Some(Value::Number(n)) => match n.as_u64().and_then(|n| u32::try_from(n).ok()) {
            Some(n) => CircuitNumber::Numeric(n),
            None => CircuitNumber::Label(n.to_string()),
        },
        Some(Value::String(s)) if !s.trim().is_empty() => match s.trim().parse::<u32>() {
            Ok(n) => CircuitNumber::Numeric(n),
            Err(_) => CircuitNumber::Label(s.trim().to_string()),
        },
        _ => CircuitNumber::Numeric(position as u32 + 1),
    };

    Ok(Circuit {
        id,
        number,
        description: text(obj, &["description", "circuitDescription"]).unwrap_or_default(),
        cable_size: text(obj, &["cableSize", "liveSize"]).filter(|s| !s.is_empty()),
        device_rating: text(obj, &["deviceRating", "protectiveDeviceRating"])
            .filter(|s| !s.is_empty()),
    })
}

/// Convert a `{ circuitId: { testTypeId: value } }` object. Numbers and
/// booleans are stringified; nulls, arrays, and objects are dropped.
pub fn readings_from_json(value: &Value) -> ScheduleResult<ReadingStore> {
    let rows = match value {
        Value::Null => return Ok(ReadingStore::new()),
        Value::Object(rows) => rows,
        _ => {
            return Err(ScheduleError::InvalidReadings(
                "expected an object keyed by circuit id".to_string(),
            ))
        }
    };

    let mut store = ReadingStore::new();
    for (circuit_id, row) in rows {
        let Some(row) = row.as_object() else {
            warn!(circuit = %circuit_id, "Dropping non-object reading row");
            continue;
        };
        for (test_type, raw) in row {
            let value = match raw {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                _ => {
                    warn!(circuit = %circuit_id, test_type = %test_type, "Dropping non-scalar reading");
                    continue;
                }
            };
            store.set(CircuitId::new(circuit_id.as_str()), TestTypeId::new(test_type.as_str()), value);
        }
    }
    Ok(store)
}

fn field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| obj.get(*name).filter(|v| !v.is_null()))
}

fn text(obj: &Map<String, Value>, names: &[&str]) -> Option<String> {
    match field(obj, names)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
