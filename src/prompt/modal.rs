//! Terminal prompter backed by modal dialogs
//!
//! A key handler cannot block waiting for the user, so confirmation is a
//! two-step exchange: the first `confirm` call raises a dialog and answers
//! `false`; once the user has picked an option the caller repeats the action
//! and `confirm` hands back that answer.

use super::traits::Prompter;
use std::collections::VecDeque;

/// Options offered by the confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmOption {
    #[default]
    No,
    Yes,
}

impl ConfirmOption {
    pub fn label(&self) -> &'static str {
        match self {
            Self::No => "No, keep editing",
            Self::Yes => "Yes, discard",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::No => Self::Yes,
            Self::Yes => Self::No,
        };
    }
}

/// A question waiting for the user's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub message: String,
    pub selected_option: ConfirmOption,
}

#[derive(Debug, Default)]
pub struct ModalPrompter {
    alerts: VecDeque<String>,
    pending_confirm: Option<PendingConfirm>,
    answer: Option<(String, bool)>,
}

impl ModalPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any dialog is blocking the form
    pub fn is_modal(&self) -> bool {
        !self.alerts.is_empty() || self.pending_confirm.is_some()
    }

    /// The alert currently on screen
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn pending_confirm(&self) -> Option<&PendingConfirm> {
        self.pending_confirm.as_ref()
    }

    pub fn pending_confirm_mut(&mut self) -> Option<&mut PendingConfirm> {
        self.pending_confirm.as_mut()
    }

    /// Close the confirmation dialog with the given answer.
    ///
    /// A `true` answer is kept for the next `confirm` call with the same
    /// question; a `false` answer is dropped since the action is abandoned.
    pub fn answer(&mut self, yes: bool) {
        if let Some(pending) = self.pending_confirm.take() {
            tracing::debug!("confirmation answered: {yes}");
            if yes {
                self.answer = Some((pending.message, true));
            }
        }
    }
}

impl Prompter for ModalPrompter {
    fn alert(&mut self, message: &str) {
        self.alerts.push_back(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.answer.take() {
            Some((question, yes)) if question == message => yes,
            _ => {
                self.pending_confirm = Some(PendingConfirm {
                    message: message.to_string(),
                    selected_option: ConfirmOption::default(),
                });
                false
            }
        }
    }
}
