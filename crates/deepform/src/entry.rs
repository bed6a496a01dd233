//! Input side of the parser: one form entry is a key paired with either
//! text or an opaque uploaded payload.

/// An opaque binary payload, as carried by a file input in a multipart
/// submission. The parser never inspects, casts, or splits it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Blob {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Blob {
            filename: None,
            content_type: None,
            data: data.into(),
        }
    }
}

/// The value half of a form entry: text or blob.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValue {
    Text(String),
    Blob(Blob),
}

impl From<&str> for EntryValue {
    fn from(s: &str) -> Self {
        EntryValue::Text(s.to_string())
    }
}

impl From<String> for EntryValue {
    fn from(s: String) -> Self {
        EntryValue::Text(s)
    }
}

impl From<Blob> for EntryValue {
    fn from(b: Blob) -> Self {
        EntryValue::Blob(b)
    }
}
