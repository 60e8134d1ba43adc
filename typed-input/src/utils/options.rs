use crate::utils::validators::Value;

/// Per-call prompt configuration.
///
/// ```rust
/// use typed_input::utils::{PromptOptions, Value};
///
/// let options = PromptOptions::new().with_default("N/A");
/// assert_eq!(options.default_value, Some(Value::Str("N/A".into())));
/// assert!(!options.is_async);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptOptions {
    /// Returned as-is when the user submits an empty line. Never validated.
    pub default_value: Option<Value>,
    /// Selects the suspending (Tokio) mode in [`crate::utils::Terminal::prompt`].
    pub is_async: bool,
}

impl PromptOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn asynchronous(mut self) -> Self {
        self.is_async = true;
        self
    }
}
