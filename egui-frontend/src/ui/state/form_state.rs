//! # Form State Module
//!
//! Text typed into the four dashboard inputs, plus the errors from the most
//! recent failed refresh so the offending fields can be highlighted.

use shared::{InputField, RawDashboardInputs};
use crate::backend::domain::InputErrors;

#[derive(Debug, Default)]
pub struct FormState {
    /// Raw field text, edited in place by the text inputs
    pub inputs: RawDashboardInputs,

    /// Errors from the last refresh attempt, if it failed
    pub errors: Option<InputErrors>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_invalid(&self, field: InputField) -> bool {
        self.errors
            .as_ref()
            .is_some_and(|errors| errors.has_error_for(field))
    }

    pub fn set_errors(&mut self, errors: InputErrors) {
        self.errors = Some(errors);
    }

    pub fn clear_errors(&mut self) {
        self.errors = None;
    }
}
