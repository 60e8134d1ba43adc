//! Shared helpers for `typed-input` binary tests.

use std::time::Duration;

/// Upper bound for a single CLI run; prompts never wait on a timer.
pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variables that would override command-line defaults.
const CONFIG_VARS: &[&str] = &[
    "TYPED_INPUT_TYPE",
    "TYPED_INPUT_PROMPT",
    "TYPED_INPUT_DEFAULT",
    "RUST_LOG",
];

/// Build a Command for the `typed-input` binary with a clean environment.
pub fn typed_input_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("typed-input").expect("binary is built");
    cmd.timeout(TIMEOUT);
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}
