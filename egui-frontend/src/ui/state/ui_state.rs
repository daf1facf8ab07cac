//! # UI State Module
//!
//! This module contains general UI state that affects the overall user experience
//! but is not specific to any particular component.
//!
//! ## Responsibilities:
//! - User feedback messages (validation errors)
//! - Refresh bookkeeping for logging

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UIState {
    /// Error message to display to the user
    pub error_message: Option<String>,

    /// Number of successful refresh cycles so far
    pub refresh_count: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear any error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }
}
