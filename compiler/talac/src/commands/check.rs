//! `tala check`: report every lexer, parser and validation error.

use super::{fail_with, read_file};

pub fn check_file(path: &str) {
    let source = read_file(path);
    match talac::compile(&source) {
        Ok(compiled) => {
            let lambdas = compiled.module.arena().lambda_count();
            println!("OK: {path} ({lambdas} lambda{})", if lambdas == 1 { "" } else { "s" });
        }
        Err(diagnostics) => fail_with(path, &source, &diagnostics),
    }
}
