// pysub: lexer, parser and inspector for a small Python subset

use std::fs;
use std::path::Path;

use pysub::parser::{parse_source, tokenize, TreePrinter};
use pysub::repl::Repl;

fn print_usage(program_name: &str) {
    eprintln!("Usage:");
    eprintln!("  {}                    # Start the interactive shell", program_name);
    eprintln!("  {} <file.py>          # Inspect a file in the terminal UI", program_name);
    eprintln!("  {} --tokens <file.py> # Print the token stream", program_name);
    eprintln!("  {} --ast <file.py>    # Print the syntax tree", program_name);
    eprintln!();
    eprintln!("Try the sample program:");
    eprintln!("  {} demos/expressions.py", program_name);
}

fn read_source(path: &str) -> String {
    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        std::process::exit(1);
    }

    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Could not read '{}': {}", path, e);
            std::process::exit(1);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("pysub");

    match args.get(1..).unwrap_or_default() {
        [] => {
            Repl::new().run()?;
        }
        [flag] if flag == "--help" || flag == "-h" => {
            print_usage(program_name);
        }
        [flag, path] if flag == "--tokens" => {
            let source = read_source(path);
            let tokens = match tokenize(&source) {
                Ok(tokens) => tokens,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            for token in &tokens {
                println!("{}", token);
            }
        }
        [flag, path] if flag == "--ast" => {
            let source = read_source(path);

            eprintln!("Parsing {}...", path);
            let ast = match parse_source(&source) {
                Ok(ast) => ast,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            eprintln!("Parsed successfully. Found {} statement(s).", ast.len());

            for line in TreePrinter::outline(&ast) {
                println!("{}", line);
            }
        }
        [path] if !path.starts_with('-') => {
            let source = read_source(path);
            pysub::ui::inspect(path, &source)?;
        }
        _ => {
            eprintln!("Error: Unrecognized arguments");
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    }

    Ok(())
}
