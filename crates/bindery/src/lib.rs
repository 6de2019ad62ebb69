//! ## Crate layout
//! - `core`: fields, combination, traversal, conversion, formatting, paths,
//!   adapters, and observability.
//! - `error`: the public error type with a stable kind taxonomy.
//!
//! The `prelude` module carries the field-declaration vocabulary.

pub use bindery_core as core;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, ErrorKind};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        adapter::{
            display::bindable_elements,
            row::{column_names, column_schema},
        },
        prelude::*,
    };
    pub use crate::{Error, ErrorKind};
}
