//! `tala bindings`: reflection dump of every lambda's `where` clause.

use super::{fail_with, read_file};

pub fn print_bindings(path: &str) {
    let source = read_file(path);
    match talac::compile(&source) {
        Ok(compiled) => print!("{}", talac::bindings_report(&source, &compiled)),
        Err(diagnostics) => fail_with(path, &source, &diagnostics),
    }
}
