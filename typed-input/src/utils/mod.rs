pub mod descriptor;
pub use descriptor::{DescriptorError, TypeDescriptor};

pub mod email;

pub mod options;
pub use options::PromptOptions;

pub mod sentinel;

pub mod source;
pub use source::{LineSource, ScriptedLines, StdinLines};

pub mod terminal;
pub use terminal::{PromptError, Prompted, Terminal};

pub mod validators;
pub use validators::{Scalar, Validate, ValidationError, Value};

cfg_if::cfg_if! {
    if #[cfg(feature = "tokio-dep")] {
        pub use source::{AsyncLineSource, TokioStdinLines};
        pub use terminal::PendingValue;
    }
}
