//! The entry fold: one linear pass over ordered (key, value) pairs.

pub(crate) mod key;
pub(crate) mod path;

use std::collections::HashMap;

use crate::entry::EntryValue;
use crate::number::coerce_number;
use crate::options::Options;
use crate::parse::key::{Cast, parse_key};
use crate::parse::path::deep_set;
use crate::value::Value;

/// Fold `entries` into a nested [`Value::Object`].
///
/// Keys repeat freely: `[]`-suffixed paths accumulate into arrays in
/// first-appearance order, everything else overwrites in write order.
pub fn parse_entries<I, K, V>(entries: I, options: &Options) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<EntryValue>,
{
    let mut result: Vec<(String, Value)> = Vec::new();
    let mut arrays: HashMap<String, Vec<Value>> = HashMap::new();

    for (key, value) in entries {
        let value = value.into();
        if options.omit_empty_strings && matches!(&value, EntryValue::Text(t) if t.is_empty()) {
            continue;
        }

        let parsed = parse_key(key.as_ref());
        let value = apply_cast(parsed.cast, value);

        if parsed.is_array {
            let acc = arrays.entry(parsed.path.to_string()).or_default();
            acc.push(value);
            // the accumulator stays authoritative for the whole pass; each
            // append re-installs its current contents at the path
            deep_set(&mut result, parsed.path, Value::Array(acc.clone()));
        } else {
            deep_set(&mut result, parsed.path, value);
        }
    }

    Value::Object(result)
}

/// Blobs pass through every marker unchanged; casts only read text.
fn apply_cast(cast: Cast, value: EntryValue) -> Value {
    let text = match value {
        EntryValue::Text(t) => t,
        EntryValue::Blob(b) => return Value::Blob(b),
    };
    match cast {
        Cast::None => Value::String(text),
        Cast::Number => Value::Number(coerce_number(&text)),
        Cast::Bool => {
            Value::Bool(text == "on" || text == "true" || coerce_number(&text) != 0.0)
        }
    }
}
