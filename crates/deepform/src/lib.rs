#![doc = include_str!("../README.md")]

pub mod entry;
pub mod error;
mod number;
pub mod options;
pub mod parse;
#[cfg(feature = "serde")]
pub mod ser;
pub mod value;

pub use crate::entry::{Blob, EntryValue};
pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::Value;

#[cfg(feature = "json")]
use serde::de::DeserializeOwned;

/// Parse an ordered sequence of form entries into a nested [`Value`].
///
/// Accepts anything iterable as (key, value) pairs: collected
/// `FormData`-style entry lists, decoded query-string parameters, plain
/// arrays of tuples.
pub fn parse<I, K, V>(entries: I, options: &Options) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<EntryValue>,
{
    crate::parse::parse_entries(entries, options)
}

/// Parse entries and extract a typed value out of the resulting tree.
#[cfg(feature = "json")]
pub fn parse_into<T, I, K, V>(entries: I, options: &Options) -> Result<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<EntryValue>,
{
    let value = crate::parse::parse_entries(entries, options);
    let typed = serde_json::from_value(value.into_json())?;
    Ok(typed)
}
