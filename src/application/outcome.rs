use std::collections::BTreeMap;

/// Offending field name mapped to its validation messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result of a resource operation that completed without a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceOutcome<T> {
    Ok(T),
    Created(T),
    Deleted,
    NotFound,
    ValidationFailed(FieldErrors),
}

impl<T> ResourceOutcome<T> {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The carried resource for `Ok` and `Created`.
    #[must_use]
    pub fn into_resource(self) -> Option<T> {
        match self {
            Self::Ok(value) | Self::Created(value) => Some(value),
            _ => None,
        }
    }
}
