//! Example demonstrating command-line argument compilation
//!
//! This example shows how to tokenize a raw argument string, configure a
//! compiler, and query the parsed result under the different error modes.

use cliargs::{Compiler, tokenize_arg_string};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Command-Line Argument Compiler Example ===\n");

    let compiler = Compiler::new()
        .with_keys(["input", "output"])
        .with_flags(["verbose", "force", "help"])
        .with_alias('v', "verbose")
        .with_alias('f', "force")
        .with_alias('h', "help")
        .with_alias('i', "input")
        .with_alias('o', "output");

    // Example 1: Compile an argument vector
    println!("Example 1: Compiling an argument vector");
    println!("----------------------------------------");

    let args = compiler.compile([
        "--verbose",
        "--input",
        "data.csv",
        "--output",
        "report.txt",
        "build",
        "deploy",
    ])?;

    println!("Flags:");
    for flag in args.flags() {
        println!("  --{}", flag);
    }
    println!("Values:");
    for (key, value) in args.values() {
        println!("  --{} = {}", key, value);
    }
    println!("Literals: {:?}", args.literals());

    // Example 2: Tokenize a raw argument string first
    println!("\n\nExample 2: Tokenizing a raw argument string");
    println!("--------------------------------------------");

    let raw = r#"--input "my data.csv" -v build"#;
    let tokens = tokenize_arg_string(raw);

    println!("Raw string: {}", raw);
    println!("Tokens: {:?}", tokens);

    let args = compiler.compile(tokens)?;
    println!("Value of 'input': {:?}", args.value("input"));
    println!("Verbose set: {}", args.has_flag("verbose"));

    // Example 3: Alias chains
    println!("\n\nExample 3: Alias chains");
    println!("------------------------");

    let args = compiler.compile(["-vfh"])?;
    println!("-vfh sets {} flags", args.flags().len());

    // The trailing alias of a chain may be a key consuming the next token.
    let args = compiler.compile(["-vi", "data.csv"])?;
    println!("-vi data.csv: verbose={}", args.has_flag("verbose"));
    println!("              input={:?}", args.value("input"));

    // Example 4: Strict error handling
    println!("\n\nExample 4: Strict error handling");
    println!("---------------------------------");

    for tokens in [
        vec!["--input"],
        vec!["--unknown"],
        vec!["-x"],
    ] {
        match compiler.compile(tokens.clone()) {
            Ok(_) => println!("{:?}: compiled", tokens),
            Err(e) => println!("{:?}: {}", tokens, e),
        }
    }

    // Example 5: Failsafe compilation with an error callback
    println!("\n\nExample 5: Failsafe compilation");
    println!("--------------------------------");

    let mut errors = Vec::new();
    let args = compiler.compile_failsafe_with(
        ["--input", "--verbose", "--unknown", "build"],
        |e| errors.push(e),
    );

    println!("Best-effort result:");
    println!("  verbose={}", args.has_flag("verbose"));
    println!("  literals={:?}", args.literals());
    println!("Reported errors:");
    for error in &errors {
        println!("  {}", error);
    }

    // Example 6: Storing unresolved elements as flags
    println!("\n\nExample 6: Storing unresolved elements as flags");
    println!("------------------------------------------------");

    let lenient = Compiler::new().store_unresolved_as_flag();
    let args = lenient.compile(["--experimental", "-ab"])?;

    println!("Flags stored without registration:");
    for flag in args.flags() {
        println!("  {}", flag);
    }

    // Example 7: Using actual command-line args (if provided)
    let cli: Vec<String> = env::args().skip(1).collect();
    if cli.is_empty() {
        println!("\n\nTip: Run this example with arguments to see compilation in action!");
        println!("Example:");
        println!(
            "  cargo run --example parse_cli_args -- --verbose --input data.csv build"
        );
    } else {
        println!("\n\nExample 7: Compiling actual command-line arguments");
        println!("---------------------------------------------------");
        println!("Provided args: {:?}", cli);

        match compiler.compile(&cli) {
            Ok(args) => {
                println!("\nFlags: {:?}", args.flags());
                println!("Values: {:?}", args.values());
                println!("Literals: {:?}", args.literals());
            }
            Err(e) => {
                println!("\nError compiling arguments: {}", e);
            }
        }
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
