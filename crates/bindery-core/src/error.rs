use crate::serialize::SerializeError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// FieldError
///
/// Failures surfaced by field entry points that assert an outcome.
/// Not-applicability is normally signaled by `None`/`false`; it only becomes
/// an error through `Field::apply`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FieldError {
    #[error("field '{field}' is not applicable to {shape}")]
    NotApplicable { field: String, shape: &'static str },

    #[error("field '{field}' has no value in {shape}")]
    NoSuchValue { field: String, shape: &'static str },

    #[error("field '{field}' has no setter accepting {shape}")]
    Unsupported { field: String, shape: &'static str },
}

impl FieldError {
    pub(crate) fn not_applicable(field: &str, shape: &'static str) -> Self {
        Self::NotApplicable {
            field: field.to_string(),
            shape,
        }
    }

    pub(crate) fn no_such_value(field: &str, shape: &'static str) -> Self {
        Self::NoSuchValue {
            field: field.to_string(),
            shape,
        }
    }

    pub(crate) fn unsupported(field: &str, shape: &'static str) -> Self {
        Self::Unsupported {
            field: field.to_string(),
            shape,
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NotApplicable { .. } => ErrorClass::NotApplicable,
            Self::NoSuchValue { .. } => ErrorClass::NotFound,
            Self::Unsupported { .. } => ErrorClass::Unsupported,
        }
    }

    /// Name of the field that failed.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::NotApplicable { field, .. }
            | Self::NoSuchValue { field, .. }
            | Self::Unsupported { field, .. } => field,
        }
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    NotApplicable,
    NotFound,
    Unsupported,
    Serialize,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotApplicable => "not_applicable",
            Self::NotFound => "not_found",
            Self::Unsupported => "unsupported",
            Self::Serialize => "serialize",
        };
        write!(f, "{label}")
    }
}

impl SerializeError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        ErrorClass::Serialize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_variants() {
        let err = FieldError::no_such_value("name", "Row");
        assert_eq!(err.class(), ErrorClass::NotFound);
        assert_eq!(err.field(), "name");
        assert_eq!(err.to_string(), "field 'name' has no value in Row");

        let err = FieldError::unsupported("name", "Row");
        assert_eq!(err.class().to_string(), "unsupported");
    }
}
