//! Form rendering module
//!
//! - `field_renderer`: labelled field groups with inline errors
//! - `enquiry_form`: the enquiry fields and the Submit/Cancel panel

mod enquiry_form;
mod field_renderer;

pub use enquiry_form::{draw_action_panel, draw_enquiry_form};
