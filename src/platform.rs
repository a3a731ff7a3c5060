//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the alternate submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+W/Ctrl+W also work as fallback)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Fallback submit shortcut shown in the status bar
#[cfg(target_os = "macos")]
pub const SUBMIT_HINT: &str = "Cmd+W:submit";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_HINT: &str = "^W:submit";
