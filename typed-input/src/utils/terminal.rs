//! # Terminal Prompt Loop
//!
//! Asks for one value of a declared type and keeps asking until the answer
//! validates, the user types `q`, or the input ends.
//!
//! Every attempt goes through the same steps:
//!
//! 1. write the prompt message (any `{}` placeholder removed) and read a line;
//! 2. `q` / `Q` -> write `Exiting...`, return [`PromptError::ExitRequested`];
//! 3. blank line with a configured default -> return the default untouched;
//! 4. an invalid type descriptor -> return [`PromptError::Descriptor`];
//! 5. run the validator: on success return the [`Value`], on failure write
//!    `<reason> To exit, press Ctrl+C or type 'q'.` to the error stream and
//!    go back to 1.
//!
//! The blocking ([`Terminal::ask`]) and suspending ([`Terminal::ask_async`],
//! `tokio-dep` feature) modes share this logic and differ only in how a line
//! is read. Only one prompt should be waiting on stdin at a time.
//!
//! ## Usage
//!
//! ### Blocking
//! ```rust,no_run
//! use typed_input::utils::{PromptOptions, Terminal};
//!
//! let age = Terminal::ask("int", "Your age: ", &PromptOptions::new());
//! match age {
//!     Ok(value) => println!("The input: {}", value),
//!     Err(e) if e.exit_code().is_some() => std::process::exit(0),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ### With a default
//! ```rust,no_run
//! use typed_input::utils::{PromptOptions, Terminal};
//!
//! let color = Terminal::ask(
//!     "enum:red|green|blue",
//!     "Favourite color [red]: ",
//!     &PromptOptions::new().with_default("red"),
//! );
//! ```
//!
//! ### Scripted input
//! ```rust
//! use typed_input::utils::{PromptOptions, ScriptedLines, Terminal, Value};
//!
//! let mut terminal = Terminal::new(
//!     ScriptedLines::new(["abc", "42"]),
//!     Vec::<u8>::new(),
//!     Vec::<u8>::new(),
//! );
//! let value = terminal.read_value("int", "n: ", &PromptOptions::new()).unwrap();
//! assert_eq!(value, Value::Int(42));
//! ```
use crate::utils::{
    descriptor::{DescriptorError, TypeDescriptor},
    options::PromptOptions,
    sentinel::{EXIT_HINT, EXIT_NOTICE, is_exit_request},
    source::{LineSource, StdinLines},
    validators::{ValidationError, Value},
};
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, trace};

/// Why a prompt call ended without a value.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The type descriptor is malformed. A caller bug, never retried.
    #[error("invalid type descriptor: {0}")]
    Descriptor(#[from] DescriptorError),
    /// The user typed the exit token.
    #[error("exit requested by the user")]
    ExitRequested,
    /// Input ended before a valid answer was given.
    #[error("input closed before a valid value was entered")]
    InputClosed,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[cfg(not(feature = "tokio-dep"))]
    #[error("asynchronous prompts need the `tokio-dep` feature")]
    AsyncUnavailable,
}

impl PromptError {
    /// Process exit status the caller should use when it chooses to honour
    /// an exit request. `None` for every other error.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PromptError::ExitRequested => Some(0),
            _ => None,
        }
    }
}

/// What one line of input resolved to.
#[derive(Debug)]
enum Attempt {
    Exit,
    Accepted(Value),
    Rejected(ValidationError),
    Misconfigured(DescriptorError),
}

/// Everything fixed for the duration of one prompt call.
struct PromptCall<'a> {
    descriptor_text: &'a str,
    descriptor: Result<TypeDescriptor, DescriptorError>,
    message: String,
    options: &'a PromptOptions,
}

impl<'a> PromptCall<'a> {
    fn new(descriptor: &'a str, message: &str, options: &'a PromptOptions) -> Self {
        Self {
            descriptor_text: descriptor,
            descriptor: TypeDescriptor::parse(descriptor),
            message: message.replace("{}", ""),
            options,
        }
    }

    fn evaluate(&self, raw: &str) -> Attempt {
        if is_exit_request(raw) {
            return Attempt::Exit;
        }

        if raw.trim().is_empty() {
            if let Some(default) = &self.options.default_value {
                debug!(descriptor = self.descriptor_text, "empty answer, using default");
                return Attempt::Accepted(default.clone());
            }
        }

        let descriptor = match &self.descriptor {
            Ok(descriptor) => descriptor,
            Err(e) => return Attempt::Misconfigured(e.clone()),
        };

        match descriptor.validate(raw) {
            Ok(value) => Attempt::Accepted(value),
            Err(e) => {
                debug!(descriptor = self.descriptor_text, reason = %e, "answer rejected");
                Attempt::Rejected(e)
            }
        }
    }

    /// Writes whatever the attempt requires and returns `Some` once the call
    /// is over.
    fn settle<O: Write, E: Write>(
        &self,
        attempt: Attempt,
        out: &mut O,
        err: &mut E,
    ) -> Option<Result<Value, PromptError>> {
        let outcome = match attempt {
            Attempt::Accepted(value) => Ok(value),
            Attempt::Exit => match writeln!(out, "{}", EXIT_NOTICE).and_then(|_| out.flush()) {
                Ok(()) => Err(PromptError::ExitRequested),
                Err(io_err) => Err(PromptError::Io(io_err)),
            },
            Attempt::Misconfigured(e) => Err(PromptError::Descriptor(e)),
            Attempt::Rejected(e) => {
                return match writeln!(err, "{} {}", e, EXIT_HINT).and_then(|_| err.flush()) {
                    Ok(()) => None,
                    Err(io_err) => Some(Err(PromptError::Io(io_err))),
                };
            }
        };
        Some(outcome)
    }

    fn show<O: Write>(&self, out: &mut O) -> io::Result<()> {
        write!(out, "{}", self.message)?;
        out.flush()
    }
}

/// A prompt bound to a line source and two writers (normal output and
/// error output).
pub struct Terminal<S, O = io::Stdout, E = io::Stderr> {
    source: S,
    out: O,
    err: E,
}

impl<S, O, E> Terminal<S, O, E> {
    pub fn new(source: S, out: O, err: E) -> Self {
        Self { source, out, err }
    }

    /// Hands back the source and writers, e.g. to inspect captured output.
    pub fn into_parts(self) -> (S, O, E) {
        (self.source, self.out, self.err)
    }
}

impl Terminal<StdinLines> {
    /// Blocking prompt on stdin / stdout / stderr.
    pub fn ask(
        descriptor: &str,
        message: &str,
        options: &PromptOptions,
    ) -> Result<Value, PromptError> {
        Terminal::new(StdinLines::new(), io::stdout(), io::stderr())
            .read_value(descriptor, message, options)
    }

    /// The single entry point: blocks and returns [`Prompted::Ready`], or,
    /// when `options.is_async` is set, returns [`Prompted::Pending`] holding
    /// a future to be awaited on a Tokio runtime.
    pub fn prompt(
        descriptor: &str,
        message: &str,
        options: PromptOptions,
    ) -> Result<Prompted, PromptError> {
        if options.is_async {
            return pending(descriptor, message, options);
        }
        Terminal::ask(descriptor, message, &options).map(Prompted::Ready)
    }
}

impl<S: LineSource, O: Write, E: Write> Terminal<S, O, E> {
    /// Runs the prompt loop with blocking reads.
    pub fn read_value(
        &mut self,
        descriptor: &str,
        message: &str,
        options: &PromptOptions,
    ) -> Result<Value, PromptError> {
        let call = PromptCall::new(descriptor, message, options);

        loop {
            call.show(&mut self.out)?;
            let Some(raw) = self.source.read_line()? else {
                debug!(descriptor, "input closed");
                return Err(PromptError::InputClosed);
            };
            trace!(raw = raw.as_str(), "read line");

            if let Some(outcome) = call.settle(call.evaluate(&raw), &mut self.out, &mut self.err)
            {
                return outcome;
            }
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tokio-dep")] {
        use crate::utils::source::{AsyncLineSource, TokioStdinLines};
        use std::{future::Future, pin::Pin};

        /// Boxed future returned by [`Terminal::prompt`] in suspending mode.
        pub type PendingValue = Pin<Box<dyn Future<Output = Result<Value, PromptError>> + Send>>;

        /// Result of [`Terminal::prompt`].
        pub enum Prompted {
            Ready(Value),
            Pending(PendingValue),
        }

        impl Prompted {
            /// Awaits a pending prompt, or returns a ready value immediately.
            pub async fn resolve(self) -> Result<Value, PromptError> {
                match self {
                    Prompted::Ready(value) => Ok(value),
                    Prompted::Pending(pending) => pending.await,
                }
            }
        }

        fn pending(
            descriptor: &str,
            message: &str,
            options: PromptOptions,
        ) -> Result<Prompted, PromptError> {
            let descriptor = descriptor.to_string();
            let message = message.to_string();
            Ok(Prompted::Pending(Box::pin(async move {
                Terminal::ask_async(&descriptor, &message, &options).await
            })))
        }

        impl Terminal<TokioStdinLines> {
            /// Suspending prompt on Tokio's stdin. The stdin handle lives only
            /// for this call; buffered input is kept for the next prompt.
            pub async fn ask_async(
                descriptor: &str,
                message: &str,
                options: &PromptOptions,
            ) -> Result<Value, PromptError> {
                let mut terminal = Terminal::new(TokioStdinLines::new(), io::stdout(), io::stderr());
                let outcome = terminal.read_value_async(descriptor, message, options).await;
                drop(terminal);
                outcome
            }
        }

        impl<S: AsyncLineSource, O: Write + Send, E: Write + Send> Terminal<S, O, E> {
            /// Runs the prompt loop, yielding while waiting for a line.
            pub async fn read_value_async(
                &mut self,
                descriptor: &str,
                message: &str,
                options: &PromptOptions,
            ) -> Result<Value, PromptError> {
                let call = PromptCall::new(descriptor, message, options);

                loop {
                    call.show(&mut self.out)?;
                    let Some(raw) = self.source.read_line().await? else {
                        debug!(descriptor, "input closed");
                        return Err(PromptError::InputClosed);
                    };
                    trace!(raw = raw.as_str(), "read line");

                    if let Some(outcome) =
                        call.settle(call.evaluate(&raw), &mut self.out, &mut self.err)
                    {
                        return outcome;
                    }
                }
            }
        }
    } else {
        /// Result of [`Terminal::prompt`]. Without `tokio-dep` only the
        /// blocking variant exists.
        pub enum Prompted {
            Ready(Value),
        }

        fn pending(
            _descriptor: &str,
            _message: &str,
            _options: PromptOptions,
        ) -> Result<Prompted, PromptError> {
            Err(PromptError::AsyncUnavailable)
        }
    }
}
