//! typed-input CLI - ask for one typed value on the terminal.
//!
//! ```text
//! typed-input -t int -p "Port: " -d 8080
//! typed-input -t "enum:dev|staging|prod" --async --json
//! typed-input -t str -t int -p "> "
//! ```
//!
//! The accepted value is printed on stdout, so the tool composes with shell
//! scripts: `PORT=$(typed-input -t int -p "Port: ")`. Repeating `--type`
//! asks once per descriptor, in order, and prints one value per line.
//!
//! # Environment Variables
//!
//! - `TYPED_INPUT_TYPE`: type descriptor (same as `--type`)
//! - `TYPED_INPUT_PROMPT`: prompt message (same as `--prompt`)
//! - `TYPED_INPUT_DEFAULT`: default for empty answers (same as `--default`)
//! - `RUST_LOG`: log filter, overrides `--verbose`
//!
//! # Exit Status
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | value accepted, or the user typed `q` |
//! | 1 | input closed or terminal I/O error |
//! | 2 | invalid type descriptor |

use clap::Parser;
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use typed_input::utils::{PromptError, PromptOptions, Prompted, Terminal, Value};

/// Ask for one value of a given type, re-asking until it is valid.
#[derive(Parser, Debug)]
#[command(name = "typed-input")]
#[command(version, about, long_about = None)]
struct Args {
    /// Type descriptor, e.g. `int`, `array:email`, `tuple:int|str`, `enum:a|b`.
    /// Repeat to ask several values in a row.
    #[arg(short = 't', long = "type", env = "TYPED_INPUT_TYPE", default_value = "str")]
    descriptors: Vec<String>,

    /// Prompt message written before each read
    #[arg(short, long, env = "TYPED_INPUT_PROMPT", default_value = "> ")]
    prompt: String,

    /// Value returned as-is when the answer is empty
    #[arg(short, long, env = "TYPED_INPUT_DEFAULT")]
    default: Option<String>,

    /// Read with the Tokio (suspending) reader instead of blocking stdin
    #[arg(long = "async")]
    asynchronous: bool,

    /// Print the value as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> PromptOptions {
        PromptOptions {
            default_value: self.default.clone().map(Value::Str),
            is_async: self.asynchronous,
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), PromptError> {
    let mut runtime: Option<tokio::runtime::Runtime> = None;

    for descriptor in &args.descriptors {
        debug!(descriptor = %descriptor, asynchronous = args.asynchronous, "prompting");
        let value = match Terminal::prompt(descriptor, &args.prompt, args.options())? {
            Prompted::Ready(value) => value,
            Prompted::Pending(pending) => {
                let runtime = match &mut runtime {
                    Some(runtime) => runtime,
                    slot => slot.insert(tokio::runtime::Builder::new_current_thread().build()?),
                };
                runtime.block_on(pending)?
            }
        };
        print_value(&value, args.json)?;
    }
    Ok(())
}

fn print_value(value: &Value, json: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        let encoded = serde_json::to_string(value).map_err(io::Error::other)?;
        writeln!(stdout, "{}", encoded)?;
    } else {
        writeln!(stdout, "{}", value)?;
    }
    stdout.flush()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(code) = e.exit_code() {
                debug!("exit requested");
                return ExitCode::from(code as u8);
            }
            eprintln!("{}", e);
            match e {
                PromptError::Descriptor(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
