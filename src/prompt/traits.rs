//! Trait abstraction for user prompts to enable mocking in tests

/// Modal notifications and confirmations raised by the form
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Show a message the user has to acknowledge
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question, returning true when the user agreed
    fn confirm(&mut self, message: &str) -> bool;
}
