//! `tala explain`: one-line description of an error code.

use tala_diagnostic::ErrorCode;

pub fn explain_error(code_str: &str) {
    let Some(code) = ErrorCode::from_code_str(&code_str.to_ascii_uppercase()) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!("Codes have the format E followed by four digits, e.g. E2001.");
        std::process::exit(1);
    };
    println!("{code}: {}", code.description());
}
