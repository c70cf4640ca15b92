//! String literal escape processing.

/// Decode the escapes in the body of a string literal (without quotes).
///
/// Unknown escapes are kept verbatim; the first one's character is returned
/// alongside the decoded text.
pub(crate) fn unescape_string(body: &str) -> (String, Option<char>) {
    let mut out = String::with_capacity(body.len());
    let mut invalid = None;
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => {
                invalid.get_or_insert(other);
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    (out, invalid)
}
