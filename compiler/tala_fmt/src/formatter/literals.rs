//! Literal rendering.

/// A float that re-lexes as a float: always has a fractional part.
pub(super) fn float(bits: u64) -> String {
    let text = format!("{:?}", f64::from_bits(bits));
    if text.contains('.') {
        return text;
    }
    match text.find('e') {
        Some(exp) => format!("{}.0{}", &text[..exp], &text[exp..]),
        None => format!("{text}.0"),
    }
}

/// A double-quoted string literal with `\n \t \\ \"` escaped.
pub(super) fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_keep_a_fraction() {
        assert_eq!(float(1.5f64.to_bits()), "1.5");
        assert_eq!(float(2.0f64.to_bits()), "2.0");
        assert_eq!(float(1e20f64.to_bits()), "1.0e20");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(quoted("a\"b\\c\n"), r#""a\"b\\c\n""#);
    }
}
