use crate::application::outcome::FieldErrors;
use crate::domain::errors::DomainError;
use validator::{Validate, ValidationError, ValidationErrors};

/// A request body as delivered by the transport: decoded input, or the field
/// errors raised while decoding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<T> {
    Parsed(T),
    Malformed(FieldErrors),
}

impl<T> Payload<T> {
    /// The decoded input, with decode failures reported as field errors.
    ///
    /// # Errors
    ///
    /// Returns the collected field errors when the body could not be decoded.
    pub fn into_result(self) -> Result<T, FieldErrors> {
        match self {
            Self::Parsed(input) => Ok(input),
            Self::Malformed(errors) => Err(errors),
        }
    }
}

impl<T> From<T> for Payload<T> {
    fn from(input: T) -> Self {
        Self::Parsed(input)
    }
}

/// Runs the derived field checks of `input`, collecting failures per field.
///
/// # Errors
///
/// Returns every failed check keyed by field name.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), FieldErrors> {
    input.validate().map_err(|errors| collect_field_errors(&errors))
}

#[must_use]
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let messages = failures.iter().map(describe).collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Reports a value-object rejection against the field it was built from.
#[must_use]
pub fn field_error(field: &str, err: &DomainError) -> FieldErrors {
    let message = match err {
        DomainError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    };
    FieldErrors::from([(field.to_string(), vec![message])])
}

fn describe(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map_or_else(|| error.code.to_string(), ToString::to_string)
}
