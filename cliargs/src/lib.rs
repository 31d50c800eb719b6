//! A command-line argument compiler
//!
//! This crate turns raw command lines into a queryable result in two
//! stages. [`tokenize_arg_string`] splits a single string into tokens,
//! honoring double quotes and backslash escapes. [`Compiler`] then walks a
//! token vector left to right and sorts every token into one of three
//! buckets on the resulting [`CliArgs`]: flags, key/value pairs, and
//! positional literals.
//!
//! # Terminology
//!
//! - An *element* is a hyphen-prefixed token: `--name` in long form, or
//!   `-abc` as a chain of single-character aliases.
//! - A *flag* is an element registered as a boolean switch; it carries no
//!   value.
//! - A *key* is an element registered to consume the next token as its
//!   *value*.
//! - An *alias* is a single character mapped to one long-form name;
//!   `-vi` resolves `v` and `i` independently.
//! - A *literal* is any unprefixed token not consumed as a value; literals
//!   keep their relative order.
//!
//! Error handling comes in three modes: [`Compiler::compile`] aborts on
//! the first error, [`Compiler::compile_failsafe`] silently skips erroring
//! tokens, and [`Compiler::compile_failsafe_with`] skips them while
//! reporting each error to a callback.
//!
//! # Examples
//!
//! ```
//! use cliargs::{tokenize_arg_string, Compiler};
//!
//! let tokens = tokenize_arg_string(r#"--input "my file.txt" -v build"#);
//! assert_eq!(tokens, ["--input", "my file.txt", "-v", "build"]);
//!
//! let args = Compiler::new()
//!     .with_keys(["input"])
//!     .with_flags(["verbose"])
//!     .with_alias('v', "verbose")
//!     .compile(tokens)?;
//!
//! assert_eq!(args.value("input"), Some("my file.txt"));
//! assert!(args.has_flag("verbose"));
//! assert_eq!(args.literals(), ["build"]);
//! # Ok::<(), cliargs::CliArgsError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: derives `Serialize` and `Deserialize` for [`CliArgs`].

#![deny(
    unsafe_code,
    unused_must_use,
    unreachable_pub,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]

mod errors;
mod parser;
mod tokenizer;
mod types;

pub use errors::{CliArgsError, CliArgsResult};
pub use parser::Compiler;
pub use tokenizer::tokenize_arg_string;
pub use types::CliArgs;
