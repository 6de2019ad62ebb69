mod encoding;

use serde::{Deserialize, Serialize};

// re-exports
pub use encoding::Encoding;

///
/// Value
///
/// Storage-primitive cell exchanged with storage adapters.
///
/// Null → the column or key holds no value (SQL NULL).
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Physical encoding of this cell, `None` for `Null`.
    #[must_use]
    pub const fn encoding(&self) -> Option<Encoding> {
        match self {
            Self::Null => None,
            Self::Integer(_) => Some(Encoding::Integer),
            Self::Real(_) => Some(Encoding::Real),
            Self::Text(_) => Some(Encoding::Text),
            Self::Blob(_) => Some(Encoding::Binary),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Self::Blob(v) => Some(v),
            _ => None,
        }
    }

    /// Real view of a numeric cell; integer cells widen.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_follows_variant() {
        assert_eq!(Value::Null.encoding(), None);
        assert_eq!(Value::from(3i64).encoding(), Some(Encoding::Integer));
        assert_eq!(Value::from(1.5f64).encoding(), Some(Encoding::Real));
        assert_eq!(Value::from("a").encoding(), Some(Encoding::Text));
        assert_eq!(Value::from(vec![1u8]).encoding(), Some(Encoding::Binary));
    }

    #[test]
    fn integers_widen_to_real() {
        assert_eq!(Value::Integer(2).as_real(), Some(2.0));
        assert_eq!(Value::Text("2".into()).as_real(), None);
    }

    #[test]
    fn none_becomes_null() {
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
    }
}
