//! Core runtime for Bindery: composable fields, their combination algebra,
//! structural traversal, type-directed conversion, formatting, and the
//! stock object shapes fields bind against.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod adapter;
pub mod bind;
pub mod convert;
pub mod error;
pub mod field;
pub mod format;
pub mod object;
pub mod obs;
pub mod path;
pub mod serialize;
pub mod traverse;
pub mod value;

///
/// Prelude
///
/// Prelude contains only field-declaration vocabulary.
/// No sinks, serializers, or metrics are re-exported here.
///

pub mod prelude {
    pub use crate::{
        adapter::{
            bundle::{Bundle, bundle_field},
            display::{ElementTree, element_field, element_text},
            map::{ValueMap, map_field},
            row::{Row, RowValues, persisted},
        },
        bind::Binder,
        convert::{Persist, PersistedType},
        field::{Field, FieldList, FieldNode},
        format::{BoolFormat, DateFormat, DateFormatError, FixedFormat, ParseFormat, ValueFormat},
        object::{Object, UseDefaults},
        path::{EntityPath, path_id},
        traverse::deep_collect,
        value::{Encoding, Value},
    };
}
