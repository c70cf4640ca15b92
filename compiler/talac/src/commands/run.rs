//! `tala run`: check, evaluate, print the program's value.

use talac::{run_source, RunOptions};

use super::{fail_with, read_file};

pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    match run_source(&source, options) {
        Ok(value) if value.is_void() => {}
        Ok(value) => println!("{value}"),
        Err(diagnostics) => fail_with(path, &source, &diagnostics),
    }
}
