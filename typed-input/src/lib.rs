//! # typed-input
//!
//! Type-validated terminal prompts for CLI applications: declare the type you
//! want, ask the user, and get back a checked value. Invalid answers are
//! explained on stderr and the question is asked again until the answer fits
//! or the user types `q`.
//!
//! ## Features
//!
//! ### Always available
//! - **Type descriptors** - `int`, `email`, `array:int`, `tuple:int|str`,
//!   `enum:a|b|c`, `regex:PATTERN` and more, parsed into a closed enum
//! - **Validators** - pure, stateless checks with user-facing messages
//! - **Blocking prompt loop** - [`utils::Terminal::ask`]
//! - **Defaults** - an empty answer returns the configured default untouched
//! - **Exit sentinel** - `q` ends the prompt with a distinct error the caller
//!   can turn into a process exit
//!
//! ### `tokio-dep` feature
//! - **Suspending prompt loop** - `Terminal::ask_async` yields to the Tokio
//!   scheduler while waiting for a line
//!
//! ### `serde` feature
//! - [`utils::Value`] implements `Serialize`
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! typed-input = { version = "0.1", features = ["tokio-dep"] }
//! ```
//!
//! ### Blocking
//!
//! ```rust,no_run
//! use typed_input::utils::{PromptOptions, PromptError, Terminal};
//!
//! match Terminal::ask("array:email", "Recipients: ", &PromptOptions::new()) {
//!     Ok(value) => println!("Sending to {}", value),
//!     Err(PromptError::ExitRequested) => std::process::exit(0),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ### Asynchronous (Tokio)
//!
//! ```rust,ignore
//! use typed_input::utils::{PromptOptions, Terminal};
//!
//! #[tokio::main]
//! async fn main() {
//!     let port = Terminal::ask_async("int", "Port: ", &PromptOptions::new().with_default(8080i64))
//!         .await;
//!     println!("{:?}", port);
//! }
//! ```
//!
//! ## Supported Types
//!
//! | Descriptor | Value |
//! |------------|-------|
//! | `str` | trimmed, non-empty string |
//! | `int` | `i64` |
//! | `float`, `num`, `positive`, `negative` | `f64` |
//! | `bool` | `true` / `false` (any case) |
//! | `date` | `DateTime<Utc>` |
//! | `email`, `url`, `uuid`, `time`, `ip`, `hexColor`, `creditCard` | checked string |
//! | `array[:T]`, `tuple:T1\|T2` | list of trimmed strings |
//! | `enum:a\|b`, `regex:PATTERN` | checked string |
//!
//! ## Error Handling
//!
//! Bad answers never reach the caller: they are reported to the user and the
//! prompt repeats. What does reach the caller is a
//! [`utils::PromptError`]:
//!
//! - `Descriptor` - the type descriptor is wrong (a programming error)
//! - `ExitRequested` - the user typed `q`
//! - `InputClosed` - stdin ended
//! - `Io` - the terminal could not be read or written
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod utils;
