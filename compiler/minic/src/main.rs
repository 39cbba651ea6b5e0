//! MiniScript CLI
//!
//! Tree-walking interpreter with token and parse-tree inspection.

use minic::commands::{lex_file, parse_file, run_file};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: mini run <file.mini>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: mini parse <file.mini>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: mini lex <file.mini>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("MiniScript {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, run it directly
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("mini"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("MiniScript interpreter");
    println!();
    println!("Usage: mini <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.mini>      Run a MiniScript program");
    println!("  parse <file.mini>    Parse and display the parse tree");
    println!("  lex <file.mini>      Tokenize and display the token stream");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("A bare path ending in .mini is shorthand for `mini run <path>`.");
}
