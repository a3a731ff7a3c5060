//! Prompt module: the alert/confirm boundary between the form and the UI

mod modal;
mod traits;

pub use modal::{ConfirmOption, ModalPrompter, PendingConfirm};
pub use traits::Prompter;

#[cfg(test)]
pub use traits::MockPrompter;
