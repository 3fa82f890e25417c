//! String literal unescaping.
//!
//! Recognized escapes: `\n`, `\r`, `\t`, `\\`, `\"`, `\0`. Any other
//! escape rejects the whole literal.

/// Resolve a single escape character to its replacement.
#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Unescape a double-quoted string literal, quotes included.
///
/// Returns `None` if `raw` is not quoted, contains an unrecognized escape,
/// or ends with a dangling backslash.
pub fn unescape(raw: &str) -> Option<String> {
    let body = raw.strip_prefix('"')?.strip_suffix('"')?;
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push(resolve_escape(chars.next()?)?),
            '"' => return None,
            _ => result.push(c),
        }
    }

    Some(result)
}
