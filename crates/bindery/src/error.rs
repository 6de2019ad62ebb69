use bindery_core::{
    error::{ErrorClass, FieldError},
    serialize::SerializeError,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<FieldError> for Error {
    fn from(err: FieldError) -> Self {
        Self::new(err.class().into(), err.to_string())
    }
}

impl From<SerializeError> for Error {
    fn from(err: SerializeError) -> Self {
        Self::new(err.class().into(), err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// No getter or setter recognises the object's shape.
    NotApplicable,

    /// The field applies but holds no value.
    NotFound,

    /// A raw write reached an object no setter accepts.
    Unsupported,

    /// Encoding or decoding a serialized container failed.
    Serialize,
}

impl From<ErrorClass> for ErrorKind {
    fn from(class: ErrorClass) -> Self {
        match class {
            ErrorClass::NotApplicable => Self::NotApplicable,
            ErrorClass::NotFound => Self::NotFound,
            ErrorClass::Unsupported => Self::Unsupported,
            ErrorClass::Serialize => Self::Serialize,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use bindery_core::{field::Field, object::UseDefaults};

    #[test]
    fn field_errors_map_to_stable_kinds() {
        let field: Field<i64> = Field::read_only(|n: &Option<i64>| *n);

        let absent = Error::from(field.apply(&None::<i64>).expect_err("absent"));
        let foreign = Error::from(field.apply(&UseDefaults).expect_err("not applicable"));

        assert_eq!(absent.kind, ErrorKind::NotFound);
        assert_eq!(foreign.kind, ErrorKind::NotApplicable);
        assert!(foreign.message.contains("UseDefaults"));
    }

    #[test]
    fn serialize_errors_map_to_serialize_kind() {
        let err = Error::from(SerializeError::Deserialize("truncated".into()));

        assert_eq!(err.kind, ErrorKind::Serialize);
        assert_eq!(err.to_string(), "deserialize error: truncated");
    }

    #[test]
    fn error_serializes_with_kind_label() {
        let err = Error::new(ErrorKind::Unsupported, "no setter");
        let json = serde_json::to_value(&err).expect("serialize error");

        assert_eq!(json["kind"], "Unsupported");
        assert_eq!(json["message"], "no setter");
        assert_eq!(ErrorKind::Unsupported.to_string(), "Unsupported");
    }
}
