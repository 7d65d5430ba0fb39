//! json-echo CLI.
//!
//! Reads a JSON request from stdin and writes the JSON response to stdout.
//! Diagnostics go to stderr.

use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use json_lite::echo::{self, DEFAULT_GENERATED_BY};
use json_lite::json::{self, Lexer, Limits};
use json_lite::JsonError;
use tracing::Level;

#[derive(Parser)]
#[command(name = "json-echo")]
#[command(about = "Echo worker built on json-lite", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    limits: LimitArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct LimitArgs {
    /// Reject input after the top-level value and use strict limits
    #[arg(long, global = true)]
    strict: bool,

    /// Maximum array/object nesting depth
    #[arg(long, global = true)]
    max_depth: Option<u64>,

    /// Maximum input size in bytes
    #[arg(long, global = true)]
    max_input_size: Option<u64>,
}

impl LimitArgs {
    fn to_limits(&self) -> Limits {
        let mut limits = if self.strict {
            Limits::strict()
        } else {
            Limits::compatible()
        };
        if let Some(depth) = self.max_depth {
            limits.max_nesting_depth = depth;
        }
        if let Some(size) = self.max_input_size {
            limits.max_input_size = size;
        }
        limits
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a request object with a greeting (default)
    Echo {
        /// Value of the X-Generated-By response header
        #[arg(long, default_value = DEFAULT_GENERATED_BY)]
        generated_by: String,
    },

    /// Parse stdin and print it back in canonical json-lite form
    Format,

    /// Print the token stream of stdin, one token per line
    Tokens,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_stdin() -> Result<String, ExitCode> {
    let mut input = String::new();
    match io::stdin().read_to_string(&mut input) {
        Ok(_) => Ok(input),
        Err(e) => {
            eprintln!("error: failed to read stdin as UTF-8: {}", e);
            Err(ExitCode::FAILURE)
        }
    }
}

fn fail(e: &JsonError) -> ExitCode {
    eprintln!("error[{}]: {}", e.code(), e);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let limits = cli.limits.to_limits();
    let input = match read_stdin() {
        Ok(input) => input,
        Err(code) => return code,
    };
    tracing::info!(bytes = input.len(), "read request");

    match cli.command {
        None => {
            println!("{}", echo::handle(&input, limits, DEFAULT_GENERATED_BY));
            ExitCode::SUCCESS
        }
        Some(Commands::Echo { generated_by }) => {
            println!("{}", echo::handle(&input, limits, &generated_by));
            ExitCode::SUCCESS
        }
        Some(Commands::Format) => match json::parse_with_limits(&input, limits) {
            Ok(node) => {
                println!("{}", json::stringify(&node));
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },
        Some(Commands::Tokens) => {
            let lexer = match Lexer::with_limits(&input, limits) {
                Ok(lexer) => lexer,
                Err(e) => return fail(&e),
            };
            for token in lexer {
                match token {
                    Ok(token) => println!("{} {}", token.token_type(), token.text()),
                    Err(e) => return fail(&e),
                }
            }
            ExitCode::SUCCESS
        }
    }
}
