//! Deep assignment of a value at a dotted path, creating intermediate
//! containers on demand.
//!
//! Rules:
//! - A missing intermediate becomes an array when the next segment parses
//!   as an index, an object otherwise
//! - An existing scalar intermediate is replaced by a fresh container; an
//!   existing container is kept whatever its kind
//! - Numeric segments under an object are ordinary string keys
//! - Array writes pad skipped indices with null
//! - Non-index segments under an array address no slot; the write is dropped
//! - Leaf writes always overwrite; sibling keys are never disturbed

use crate::value::Value;

pub(crate) fn deep_set(root: &mut Vec<(String, Value)>, path: &str, value: Value) {
    let segments: Vec<&str> = path.split('.').collect();
    set_in_object(root, &segments, value);
}

fn set_in_object(map: &mut Vec<(String, Value)>, segments: &[&str], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    match rest.first() {
        None => insert_entry(map, head, value),
        Some(next) => {
            let slot = child_slot(map, head, next);
            set_in_child(slot, rest, value);
        }
    }
}

fn set_in_array(arr: &mut Vec<Value>, segments: &[&str], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    let Ok(idx) = head.parse::<usize>() else {
        return;
    };
    if arr.len() <= idx {
        arr.resize(idx + 1, Value::Null);
    }
    match rest.first() {
        None => arr[idx] = value,
        Some(next) => {
            let slot = &mut arr[idx];
            ensure_container(slot, next);
            set_in_child(slot, rest, value);
        }
    }
}

fn set_in_child(target: &mut Value, segments: &[&str], value: Value) {
    match target {
        Value::Object(map) => set_in_object(map, segments, value),
        Value::Array(arr) => set_in_array(arr, segments, value),
        _ => {}
    }
}

fn insert_entry(map: &mut Vec<(String, Value)>, key: &str, value: Value) {
    if let Some(idx) = map.iter().position(|(k, _)| k == key) {
        map[idx].1 = value;
    } else {
        map.push((key.to_string(), value));
    }
}

/// Get-or-create the container under `key`, replacing a scalar occupant.
fn child_slot<'a>(map: &'a mut Vec<(String, Value)>, key: &str, next: &str) -> &'a mut Value {
    let idx = match map.iter().position(|(k, _)| k == key) {
        Some(idx) => idx,
        None => {
            map.push((key.to_string(), Value::Null));
            map.len() - 1
        }
    };
    let slot = &mut map[idx].1;
    ensure_container(slot, next);
    slot
}

fn ensure_container(slot: &mut Value, next: &str) {
    if !matches!(slot, Value::Object(_) | Value::Array(_)) {
        *slot = if next.parse::<usize>().is_ok() {
            Value::Array(Vec::new())
        } else {
            Value::Object(Vec::new())
        };
    }
}
