//! Command handlers for the `mini` CLI.
//!
//! Each handler reads a source file, drives the relevant part of the
//! pipeline, and prints results. Fatal problems exit with a nonzero
//! status after printing to stderr.

use mini_eval::{Interpreter, PrintHandler};
use mini_ir::Program;

use crate::{describe_at, lex_dump};

/// Read a source file, exiting with a readable message on failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Lex and parse, exiting with a positioned message on failure.
fn load_program(source: &str) -> Program {
    let result = mini_lexer::lex(source)
        .map_err(|err| describe_at(source, err.span.start, &err.to_string()))
        .and_then(|tokens| {
            mini_parse::parse(&tokens)
                .map_err(|err| describe_at(source, err.span.start, &err.to_string()))
        });
    match result {
        Ok(program) => program,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

/// Run a MiniScript program, printing as it executes.
pub fn run_file(path: &str) {
    let source = read_file(path);
    let program = load_program(&source);
    let mut interpreter = Interpreter::new(PrintHandler::Stdout);
    if let Err(err) = interpreter.run(&program) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Parse a file and display the parse tree. No execution happens.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let program = load_program(&source);
    print!("{}", mini_diagnostic::render_program(&program));
}

/// Tokenize a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    print!("{}", lex_dump(&source));
}
