//! Dashboard input parsing for the finance dashboard.
//!
//! Turns the raw text of the four form fields into [`DashboardInputs`].
//!
//! ## Rules
//!
//! - Blank (or whitespace-only) fields take the configured default
//! - Currency decoration is tolerated: a leading `$` and well-formed thousands commas
//! - Anything else that fails to parse, or parses to a non-finite value, is an error
//! - Every field is checked so the user sees all problems at once

use log::debug;
use shared::{DashboardInputs, InputDefaults, InputField, RawDashboardInputs};
use std::fmt;

/// A single field that could not be turned into a number
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a number (got \"{input}\")")]
    NotANumber { field: InputField, input: String },
    #[error("{field} must be a finite number")]
    NotFinite { field: InputField },
}

impl InputError {
    pub fn field(&self) -> InputField {
        match self {
            InputError::NotANumber { field, .. } => *field,
            InputError::NotFinite { field } => *field,
        }
    }
}

/// All field errors found while parsing one form submission
#[derive(Debug, Clone, PartialEq)]
pub struct InputErrors(pub Vec<InputError>);

impl InputErrors {
    pub fn errors(&self) -> &[InputError] {
        &self.0
    }

    pub fn has_error_for(&self, field: InputField) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}

impl fmt::Display for InputErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for InputErrors {}

/// Parses dashboard form input, substituting defaults for blank fields
#[derive(Debug, Clone)]
pub struct InputService {
    defaults: InputDefaults,
}

impl InputService {
    pub fn new(defaults: InputDefaults) -> Self {
        Self { defaults }
    }

    /// Parse all four fields, collecting every error before giving up
    pub fn parse_inputs(&self, raw: &RawDashboardInputs) -> Result<DashboardInputs, InputErrors> {
        let mut errors = Vec::new();
        let mut values = [0.0; 4];

        for (slot, field) in values.iter_mut().zip(InputField::ALL) {
            match self.parse_field(field, raw.field(field)) {
                Ok(value) => *slot = value,
                Err(error) => errors.push(error),
            }
        }

        if !errors.is_empty() {
            return Err(InputErrors(errors));
        }

        let [balance, income, expenses, savings_goal] = values;
        Ok(DashboardInputs {
            balance,
            income,
            expenses,
            savings_goal,
        })
    }

    /// Parse one field; blank input yields the default for that field
    pub fn parse_field(&self, field: InputField, input: &str) -> Result<f64, InputError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            let value = self.defaults.value(field);
            debug!("{} left blank, using default {}", field, value);
            return Ok(value);
        }

        let value = clean_and_parse_amount(trimmed).ok_or_else(|| InputError::NotANumber {
            field,
            input: trimmed.to_string(),
        })?;

        if !value.is_finite() {
            return Err(InputError::NotFinite { field });
        }

        Ok(value)
    }
}

/// Strip currency decoration and parse what is left.
///
/// Accepts an optional sign, one leading `$` (on either side of the sign) and
/// comma separators in well-formed groups of three, e.g. `-$1,250.75`.
/// Interior whitespace or a stray `$` / `,` makes the whole input invalid.
fn clean_and_parse_amount(input: &str) -> Option<f64> {
    let (sign, rest) = split_sign(input.trim());
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let (sign, number) = if sign.is_empty() {
        split_sign(rest)
    } else {
        (sign, rest)
    };

    let number = if number.contains(',') {
        strip_thousands_separators(number)?
    } else {
        number.to_string()
    };

    if number
        .chars()
        .any(|c| c.is_whitespace() || c == '$' || c == ',')
    {
        return None;
    }

    format!("{}{}", sign, number).parse::<f64>().ok()
}

fn split_sign(input: &str) -> (&str, &str) {
    match input.as_bytes().first() {
        Some(b'-') | Some(b'+') => input.split_at(1),
        _ => ("", input),
    }
}

/// `1,234,567.89` -> `1234567.89`; `None` unless every group after the first has three digits
fn strip_thousands_separators(number: &str) -> Option<String> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (number, None),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let mut groups = whole.split(',');
    let first = groups.next().unwrap_or_default();
    if first.is_empty() || first.len() > 3 || !is_digits(first) {
        return None;
    }
    if !groups.all(|group| group.len() == 3 && is_digits(group)) {
        return None;
    }

    let mut cleaned = whole.replace(',', "");
    if let Some(fraction) = fraction {
        if !is_digits(fraction) {
            return None;
        }
        cleaned.push('.');
        cleaned.push_str(fraction);
    }
    Some(cleaned)
}
