#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end for the `generate-hash`
//! binary. It parses flags with [`clap`](https://docs.rs/clap/), configures
//! logging, and prints one lowercase hex digest per input.
//!
//! # Design
//!
//! [`run`] is the primary entry point. It accepts an iterator of arguments
//! together with handles for standard output and error, so tests drive the
//! whole front-end with in-memory buffers. [`run_with_input`] additionally
//! takes the reader used when no TEXT operands are given.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Digests go to stdout only. Diagnostics go to stderr prefixed with
//!   `generate-hash:`.
//! - Every operand is validated as UTF-8 before it is hashed.
//!
//! # Errors
//!
//! | Exit code | Meaning |
//! |---|---|
//! | `0` | every input was hashed |
//! | `1` | the command line could not be parsed |
//! | `2` | an input or algorithm name was rejected, or the digest provider failed |
//! | `3` | reading stdin or writing stdout failed |
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["generate-hash", "-a", "md5", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(stdout, b"900150983cd24fb0d6963f7d28e17f72\n");
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{self, Read, Write};

use checksums::{Algorithm, HashError, Hasher, LengthFieldPolicy};
use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use logging::VerbosityConfig;

/// Program name used in diagnostics and the version banner.
const PROGRAM_NAME: &str = "generate-hash";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Exit code for a fully successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for command-line syntax errors.
pub const EXIT_USAGE: i32 = 1;
/// Exit code when an input or algorithm is rejected or the provider fails.
pub const EXIT_REJECTED: i32 = 2;
/// Exit code for stdin or stdout I/O failures.
pub const EXIT_IO: i32 = 3;

/// Deterministic help text describing the CLI surface.
const HELP_TEXT: &str = concat!(
    "generate-hash: hash text with MD5 or SHA-256\n",
    "\n",
    "Usage: generate-hash [-h] [-V] [-v...] [-q] [-a ALGORITHM] [--strict-length] [TEXT...]\n",
    "\n",
    "Each TEXT operand is hashed and printed on its own line. With no operands\n",
    "the whole of standard input is hashed as a single message, trailing\n",
    "newline included.\n",
    "\n",
    "Options:\n",
    "  -a, --algorithm NAME  Digest algorithm: md5 or sha-256 (default sha-256).\n",
    "      --strict-length   Reject MD5 inputs of 512 MiB or more instead of\n",
    "                        wrapping the 32-bit length field.\n",
    "  -v, --verbose         Increase log verbosity (repeatable).\n",
    "  -q, --quiet           Only log errors.\n",
    "  -h, --help            Show this help message and exit.\n",
    "  -V, --version         Output version information and exit.\n",
    "\n",
    "Set RUST_LOG to override the log filter.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    verbose: u8,
    quiet: bool,
    algorithm: Option<String>,
    strict_length: bool,
    texts: Vec<OsString>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .value_name("NAME")
                .help("Digest algorithm: md5 or sha-256.")
                .num_args(1)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("strict-length")
                .long("strict-length")
                .help("Reject inputs that overflow the MD5 length field.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("text")
                .value_name("TEXT")
                .help("Text to hash.")
                .value_parser(OsStringValueParser::new())
                .num_args(1..)
                .action(ArgAction::Append),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        verbose: matches.get_count("verbose"),
        quiet: matches.get_flag("quiet"),
        algorithm: matches.remove_one::<String>("algorithm"),
        strict_length: matches.get_flag("strict-length"),
        texts: matches
            .remove_many::<OsString>("text")
            .map(|values| values.collect())
            .unwrap_or_default(),
    })
}

/// Returns the help text printed by `--help`.
fn render_help() -> String {
    HELP_TEXT.to_string()
}

/// Returns the banner printed by `--version`.
fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

/// Writes `generate-hash: <message>` to `stderr`, ignoring write failures.
fn report<Err: Write>(stderr: &mut Err, message: impl std::fmt::Display) {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Standard input of the current process is read when no TEXT operands are
/// given. The function returns the process exit code that should be used by
/// the caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with_input(arguments, &mut input, stdout, stderr)
}

/// Runs the CLI reading from `input` when no TEXT operands are given.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    input: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: Read,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, input, stdout, stderr),
        Err(error) => {
            report(stderr, error.render().to_string().trim_end());
            EXIT_USAGE
        }
    }
}

fn execute<In, Out, Err>(
    parsed: ParsedArgs,
    input: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    In: Read,
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        verbose,
        quiet,
        algorithm,
        strict_length,
        texts,
    } = parsed;

    if show_help {
        return match stdout.write_all(render_help().as_bytes()) {
            Ok(()) => EXIT_SUCCESS,
            Err(error) => {
                report(stderr, error);
                EXIT_IO
            }
        };
    }

    if show_version {
        return match stdout.write_all(render_version().as_bytes()) {
            Ok(()) => EXIT_SUCCESS,
            Err(error) => {
                report(stderr, error);
                EXIT_IO
            }
        };
    }

    if !logging::init_tracing(VerbosityConfig::from_flags(verbose, quiet)) {
        tracing::debug!(target: "cli", "tracing subscriber already installed");
    }

    let algorithm = match algorithm.as_deref().map(str::parse::<Algorithm>) {
        None => Algorithm::default(),
        Some(Ok(algorithm)) => algorithm,
        Some(Err(error)) => {
            report(stderr, &error);
            return EXIT_REJECTED;
        }
    };

    let policy = if strict_length {
        LengthFieldPolicy::Reject
    } else {
        LengthFieldPolicy::Wrap
    };
    let hasher = Hasher::new(algorithm).with_length_policy(policy);

    tracing::debug!(
        target: "cli",
        %algorithm,
        ?policy,
        operands = texts.len(),
        "starting"
    );

    if texts.is_empty() {
        let mut message = Vec::new();
        if let Err(error) = input.read_to_end(&mut message) {
            report(stderr, format_args!("failed to read standard input: {error}"));
            return EXIT_IO;
        }
        return emit(hasher.hash_bytes(&message), stdout, stderr);
    }

    let mut status = EXIT_SUCCESS;
    for text in &texts {
        let code = emit(hasher.hash_bytes(text.as_encoded_bytes()), stdout, stderr);
        if code == EXIT_IO {
            return code;
        }
        status = status.max(code);
    }
    status
}

/// Prints one digest or reports why it could not be produced.
fn emit<Out, Err>(result: Result<String, HashError>, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    match result {
        Ok(digest) => match writeln!(stdout, "{digest}") {
            Ok(()) => EXIT_SUCCESS,
            Err(error) => {
                report(stderr, format_args!("failed to write output: {error}"));
                EXIT_IO
            }
        },
        Err(error) => {
            report(stderr, &error);
            EXIT_REJECTED
        }
    }
}

/// Clamps `status` into the range a process can report.
#[must_use]
pub fn clamp_exit_status(status: i32) -> u8 {
    u8::try_from(status.clamp(0, MAX_EXIT_CODE)).unwrap_or(u8::MAX)
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    std::process::ExitCode::from(clamp_exit_status(status))
}
