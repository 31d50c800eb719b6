//! Compiler for command-line argument vectors

use std::collections::{HashMap, HashSet};
use std::env;

use crate::{
    errors::{CliArgsError, CliArgsResult},
    types::CliArgs,
};

/// Configurable compiler turning argument tokens into [`CliArgs`]
///
/// A `Compiler` holds the registered keys, flags, and single-character
/// aliases. The configuration is built once through chained calls; every
/// compilation entry point takes `&self`, so one compiler may compile any
/// number of independent argument vectors, concurrently if desired.
///
/// The hyphen prefix is the sole discriminator: `--name` is a long-form
/// element, `-abc` is an alias chain resolved character by character, and
/// anything else is either the value of the preceding key or a positional
/// literal.
///
/// # Examples
///
/// ```
/// use cliargs::Compiler;
///
/// let compiler = Compiler::new()
///     .with_keys(["input", "output"])
///     .with_flags(["verbose", "force"])
///     .with_alias('v', "verbose")
///     .with_alias('i', "input");
///
/// let args = compiler.compile(["-vi", "in.txt", "--force", "build"])?;
/// assert!(args.has_flag("verbose"));
/// assert!(args.has_flag("force"));
/// assert_eq!(args.value("input"), Some("in.txt"));
/// assert_eq!(args.literal(0), Some("build"));
/// # Ok::<(), cliargs::CliArgsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    /// Key names that require a following value token
    keys: HashSet<String>,
    /// Flag names acting as boolean switches
    flags: HashSet<String>,
    /// Single-character shorthands, each mapped to one long-form name
    aliases: HashMap<char, String>,
    /// Store unknown elements as flags instead of reporting them
    store_unresolved_as_flag: bool,
}

impl Compiler {
    /// Create a compiler with an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register key names that expect an associated value token
    #[must_use]
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Register flag names that act as boolean switches
    #[must_use]
    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Register a single-character alias for a long-form key or flag
    ///
    /// Several characters may alias the same long form, but each character
    /// resolves to exactly one name.
    ///
    /// # Panics
    ///
    /// Panics if `alias` is already registered. Reusing a character is a
    /// configuration error and is reported before any compilation occurs.
    #[must_use]
    pub fn with_alias(mut self, alias: char, long_form: impl Into<String>) -> Self {
        assert!(
            !self.aliases.contains_key(&alias),
            "alias '{alias}' is already registered"
        );
        self.aliases.insert(alias, long_form.into());
        self
    }

    /// Store unresolved elements as flags instead of reporting errors
    ///
    /// With this mode enabled, an unknown long-form element is stored under
    /// its stripped name and an unknown (or stale) alias character is stored
    /// as a single-character flag; no [`UnknownElement`] or [`InvalidAlias`]
    /// error is produced.
    ///
    /// [`UnknownElement`]: CliArgsError::UnknownElement
    /// [`InvalidAlias`]: CliArgsError::InvalidAlias
    #[must_use]
    pub fn store_unresolved_as_flag(mut self) -> Self {
        self.store_unresolved_as_flag = true;
        self
    }

    /// Returns the registered key names
    #[must_use]
    pub fn keys(&self) -> &HashSet<String> {
        &self.keys
    }

    /// Returns the registered flag names
    #[must_use]
    pub fn flags(&self) -> &HashSet<String> {
        &self.flags
    }

    /// Returns the registered alias mappings
    #[must_use]
    pub fn aliases(&self) -> &HashMap<char, String> {
        &self.aliases
    }

    /// Returns whether unresolved elements are stored as flags
    #[must_use]
    pub fn stores_unresolved_as_flag(&self) -> bool {
        self.store_unresolved_as_flag
    }

    /// Compile an argument vector under strict error handling
    ///
    /// The first error aborts compilation and is returned; no partial
    /// result is produced.
    ///
    /// # Errors
    ///
    /// Returns the first [`CliArgsError`] encountered: a registered key
    /// without a following value token, an unknown long-form element, or an
    /// unmapped alias character.
    ///
    /// # Examples
    ///
    /// ```
    /// use cliargs::{CliArgsError, Compiler};
    ///
    /// let compiler = Compiler::new().with_keys(["input"]);
    ///
    /// let args = compiler.compile(["--input", "file.txt"])?;
    /// assert_eq!(args.value("input"), Some("file.txt"));
    ///
    /// let err = compiler.compile(["--input"]).unwrap_err();
    /// assert_eq!(err, CliArgsError::MissingValue("input".to_string()));
    /// # Ok::<(), cliargs::CliArgsError>(())
    /// ```
    pub fn compile<I, S>(&self, args: I) -> CliArgsResult<CliArgs>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.compile_internal(args, |_| {}, false)
    }

    /// Compile an argument vector, swallowing every error
    ///
    /// Compilation always succeeds and yields the best-effort result
    /// accumulated around erroring tokens, which are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cliargs::Compiler;
    ///
    /// let args = Compiler::new()
    ///     .with_flags(["verbose"])
    ///     .compile_failsafe(["--verbose", "--unknown", "build"]);
    ///
    /// assert!(args.has_flag("verbose"));
    /// assert!(!args.has_flag("unknown"));
    /// assert_eq!(args.literal(0), Some("build"));
    /// ```
    #[must_use]
    pub fn compile_failsafe<I, S>(&self, args: I) -> CliArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.compile_failsafe_with(args, |_| {})
    }

    /// Compile an argument vector, reporting every error to a callback
    ///
    /// Identical to [`Self::compile_failsafe`], except that each error is
    /// passed to `on_error` before compilation continues with the remaining
    /// tokens. Errors arrive in token order, once per erroring element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cliargs::{CliArgsError, Compiler};
    ///
    /// let mut errors = Vec::new();
    /// let args = Compiler::new()
    ///     .with_keys(["input"])
    ///     .compile_failsafe_with(["--input", "--bogus", "build"], |e| errors.push(e));
    ///
    /// assert_eq!(args.literal(0), Some("build"));
    /// assert_eq!(
    ///     errors,
    ///     vec![
    ///         CliArgsError::MissingValue("input".to_string()),
    ///         CliArgsError::UnknownElement("--bogus".to_string()),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn compile_failsafe_with<I, S, F>(&self, args: I, on_error: F) -> CliArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(CliArgsError),
    {
        // Failsafe compilation routes every error through the callback and
        // never returns Err.
        self.compile_internal(args, on_error, true).unwrap_or_default()
    }

    /// Compile the current process's command-line arguments
    ///
    /// Strict compilation of [`std::env::args`] with the program name
    /// (`argv[0]`) skipped.
    ///
    /// # Errors
    ///
    /// Returns the first [`CliArgsError`] encountered, as with
    /// [`Self::compile`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cliargs::Compiler;
    ///
    /// let args = Compiler::new()
    ///     .with_flags(["verbose"])
    ///     .with_keys(["input"])
    ///     .compile_env()?;
    ///
    /// if args.has_flag("verbose") {
    ///     println!("input: {:?}", args.value("input"));
    /// }
    /// # Ok::<(), cliargs::CliArgsError>(())
    /// ```
    pub fn compile_env(&self) -> CliArgsResult<CliArgs> {
        self.compile(env::args().skip(1))
    }

    /// Single left-to-right pass over the tokens with a pending-key register
    fn compile_internal<I, S, F>(
        &self,
        args: I,
        mut on_error: F,
        failsafe: bool,
    ) -> CliArgsResult<CliArgs>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(CliArgsError),
    {
        let mut parsed = CliArgs::default();
        let mut pending_key: Option<String> = None;

        // In strict mode the first error aborts through `?`; in failsafe
        // mode it is handed to the callback and compilation continues.
        let mut fail = |err: CliArgsError| -> CliArgsResult<()> {
            if failsafe {
                on_error(err);
                Ok(())
            } else {
                Err(err)
            }
        };

        for arg in args {
            let arg = arg.as_ref();

            // A hyphen-prefixed token can never serve as a value, so a key
            // still pending at this point is missing one.
            if arg.starts_with('-') {
                if let Some(key) = pending_key.take() {
                    fail(CliArgsError::MissingValue(key))?;
                }
            }

            if let Some(name) = arg.strip_prefix("--") {
                if self.flags.contains(name) {
                    parsed.flags.insert(name.to_string());
                } else if self.keys.contains(name) {
                    pending_key = Some(name.to_string());
                } else if self.store_unresolved_as_flag {
                    parsed.flags.insert(name.to_string());
                } else {
                    fail(CliArgsError::UnknownElement(arg.to_string()))?;
                }
            } else if let Some(chain) = arg.strip_prefix('-') {
                for c in chain.chars() {
                    // Only the trailing alias of a chain may be a key; a key
                    // resolved from an earlier character never receives a
                    // value.
                    if let Some(key) = pending_key.take() {
                        fail(CliArgsError::MissingValue(key))?;
                    }

                    let Some(long_form) = self.aliases.get(&c) else {
                        if self.store_unresolved_as_flag {
                            parsed.flags.insert(c.to_string());
                        } else {
                            fail(CliArgsError::InvalidAlias(c))?;
                        }
                        continue;
                    };

                    if self.flags.contains(long_form) {
                        parsed.flags.insert(long_form.clone());
                    } else if self.keys.contains(long_form) {
                        pending_key = Some(long_form.clone());
                    } else if self.store_unresolved_as_flag {
                        // Alias left pointing at a name registered as
                        // neither key nor flag; fall back to the character.
                        parsed.flags.insert(c.to_string());
                    } else {
                        fail(CliArgsError::UnknownElement(format!("--{long_form}")))?;
                    }
                }
            } else if let Some(key) = pending_key.take() {
                parsed.values.insert(key, arg.to_string());
            } else {
                parsed.literals.push(arg.to_string());
            }
        }

        // End of input acts like a hyphen-prefixed token for a pending key.
        if let Some(key) = pending_key.take() {
            fail(CliArgsError::MissingValue(key))?;
        }

        Ok(parsed)
    }
}
