//! CLI tool to tokenize source files or parse them into prefix-form
//! expressions.

use std::fs;
use std::process::ExitCode;

/// Exit status when the scanner reported any lexical error.
const LEX_ERROR_EXIT: u8 = 65;

fn usage() -> ExitCode {
    eprintln!("Usage: lox <command> <file>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokenize  Print every token, one per line");
    eprintln!("  parse     Print every expression in prefix form");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  lox tokenize test.lox");
    eprintln!("  lox parse test.lox");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 || args[1] == "--help" || args[1] == "-h" {
        return usage();
    }

    let command = args[1].as_str();
    let path = &args[2];

    if !matches!(command, "tokenize" | "parse") {
        eprintln!("Unknown command: {command}");
        return usage();
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let scanned = lox_front::scan(&content);

    if command == "tokenize" {
        for token in &scanned.tokens {
            println!("{token}");
        }
    } else {
        let parsed = lox_front::parse(&scanned.tokens);
        for expr in &parsed.expressions {
            println!("{expr}");
        }
        for err in &parsed.errors {
            eprintln!("{err}");
        }
    }

    for err in &scanned.errors {
        eprintln!("{err}");
    }

    // parse errors alone do not change the exit status
    if scanned.has_errors() {
        ExitCode::from(LEX_ERROR_EXIT)
    } else {
        ExitCode::SUCCESS
    }
}
