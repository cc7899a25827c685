// itycheck: lexer and syntax checker for the Ity teaching language

mod parser;

use std::path::Path;

use parser::lexer::Lexer;
use parser::parse::Parser;

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("itycheck");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file>", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} demos/inherit.ity        # Check the class-inheritance demo",
            program_name
        );
        eprintln!(
            "  {} myprogram.ity            # Check your own source file",
            program_name
        );
        std::process::exit(1);
    }

    let input_file = &args[1];

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        eprintln!(
            "Usage: {} <file>",
            args.first().map(|s| s.as_str()).unwrap_or("itycheck")
        );
        std::process::exit(1);
    }

    // Scanning phase
    let mut lexer = Lexer::new();
    if let Err(e) = lexer.scan_file(input_file) {
        eprintln!("Error: Could not read '{}': {}", input_file, e);
        std::process::exit(1);
    }

    println!("=== Scanner Output ===");
    print!("{}", lexer.token_report());

    // Parsing phase
    let mut parser = Parser::new(lexer.into_tokens());
    parser.parse();

    println!();
    println!("=== Parser Output ===");
    print!("{}", parser.rule_report());
}
