//! Tala command-line tool.

mod commands;

use commands::{check_file, explain_error, parse_file, print_bindings, run_file};
use talac::RunOptions;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    match command {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: tala run <file.tala> [--max-depth=N] [--quiet]");
                std::process::exit(1);
            };
            let options = match RunOptions::from_args(&args[3..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(1);
                }
            };
            run_file(path, &options);
        }
        "check" | "parse" | "bindings" | "explain" => {
            let Some(arg) = args.get(2) else {
                let what = if command == "explain" { "<CODE>" } else { "<file.tala>" };
                eprintln!("Usage: tala {command} {what}");
                std::process::exit(1);
            };
            match command {
                "check" => check_file(arg),
                "parse" => parse_file(arg),
                "bindings" => print_bindings(arg),
                _ => explain_error(arg),
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("tala {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tala"))
            {
                run_file(command, &RunOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Install a subscriber when `RUST_LOG` is set.
///
/// `TALA_LOG_TREE=1` swaps the flat formatter for an indented tree that
/// follows call and `where`-binding nesting.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    let filter = EnvFilter::from_default_env();
    if std::env::var("TALA_LOG_TREE").is_ok_and(|v| v == "1") {
        tracing_subscriber::registry()
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    }
}

fn print_usage() {
    println!("Tala - expression lambdas with `where` clauses");
    println!();
    println!("Usage: tala <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.tala>       Check and evaluate a program, print its value");
    println!("  check <file.tala>     Lex, parse and validate (no evaluation)");
    println!("  parse <file.tala>     Print the parsed program in canonical form");
    println!("  bindings <file.tala>  List every lambda and its `where` bindings");
    println!("  explain <CODE>        Describe an error code (e.g. E2001)");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=N         Maximum lambda call depth (default 512)");
    println!("  --quiet, -q           Discard print and trace output");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=debug        Enable compiler tracing");
    println!("  TALA_LOG_TREE=1       Render tracing as a tree");
}
