use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Encoding
///
/// Physical encoding of a storage primitive.
/// Declarative only: storage adapters use it to declare schema, the core
/// never performs I/O with it.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Encoding {
    Text,
    Integer,
    Real,
    Binary,
}

impl Encoding {
    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Binary => "binary",
        }
    }

    /// Column type name for SQL-flavoured schema declarations.
    #[must_use]
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Binary => "BLOB",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
