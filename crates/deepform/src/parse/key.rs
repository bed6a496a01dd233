//! Key marker grammar: `["+"|"&"] path ["[]"]`.
//!
//! The `[]` suffix is examined and stripped first, then the cast prefix on
//! whatever remains, so `+a.b[]` means "array of numeric-cast elements".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cast {
    None,
    Number,
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedKey<'a> {
    pub path: &'a str,
    pub cast: Cast,
    pub is_array: bool,
}

pub(crate) fn parse_key(key: &str) -> ParsedKey<'_> {
    let (path, is_array) = match key.strip_suffix("[]") {
        Some(stripped) => (stripped, true),
        None => (key, false),
    };
    if let Some(rest) = path.strip_prefix('+') {
        ParsedKey { path: rest, cast: Cast::Number, is_array }
    } else if let Some(rest) = path.strip_prefix('&') {
        ParsedKey { path: rest, cast: Cast::Bool, is_array }
    } else {
        ParsedKey { path, cast: Cast::None, is_array }
    }
}
