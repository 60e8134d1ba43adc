//! Exit sentinel: typing `q` (any case, surrounding blanks allowed) at any
//! prompt asks to leave, before the answer is looked at in any other way.

/// The reserved token, compared against the trimmed, lowercased input.
pub const EXIT_TOKEN: &str = "q";

/// Written to the output stream when the sentinel fires.
pub const EXIT_NOTICE: &str = "Exiting...";

/// Appended to every validation failure.
pub const EXIT_HINT: &str = "To exit, press Ctrl+C or type 'q'.";

pub fn is_exit_request(raw: &str) -> bool {
    raw.trim().to_lowercase() == EXIT_TOKEN
}
