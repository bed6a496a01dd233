//! serde::Serialize for the result tree.
//!
//! Blobs serialize as empty maps, matching what browsers emit when a file
//! handle reaches JSON.stringify. Non-finite numbers are handed to the
//! serializer as-is; JSON backends render them as null.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::number::integer_safe;
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => match integer_safe(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Blob(_) => serializer.serialize_map(Some(0))?.end(),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
