//! `tala parse`: print the parsed module in canonical form.

use tala_ir::StringInterner;

use super::{fail_with, read_file};

pub fn parse_file(path: &str) {
    let source = read_file(path);
    let interner = StringInterner::new();
    match talac::parse_source(&source, &interner) {
        Ok(parsed) => print!(
            "{}",
            tala_fmt::format_module(&parsed.arena, &interner, &parsed.module)
        ),
        Err(diagnostics) => fail_with(path, &source, &diagnostics),
    }
}
