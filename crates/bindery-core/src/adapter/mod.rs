//! Stock object shapes and the field constructors bound to them.
//!
//! Each adapter is a plain in-memory representation; none performs I/O.
//!
//! - [`map`]: key → [`Value`](crate::value::Value) maps
//! - [`row`]: query-result rows and insert/update write sets
//! - [`bundle`]: serialized containers of encoded entries
//! - [`display`]: display-element text slots

pub mod bundle;
pub mod display;
pub mod map;
pub mod row;

use crate::{convert::PersistedType, field::FieldNode, value::Encoding};
use std::{any::Any, borrow::Cow};

///
/// Binding
///
/// Attribute key plus the conversion descriptor of a storage-backed leaf.
/// Cloned into each leaf closure.
///

struct Binding<T> {
    key: Cow<'static, str>,
    ty: PersistedType<T>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            ty: self.ty.clone(),
        }
    }
}

impl<T: 'static> Binding<T> {
    fn new(key: Cow<'static, str>, ty: PersistedType<T>) -> Self {
        Self { key, ty }
    }

    const fn encoding(&self) -> Encoding {
        self.ty.encoding()
    }
}

/// Key and encoding of a node writing into shape `W`, if it is a
/// storage-backed leaf.
fn bound_attribute<W: Any>(node: &dyn FieldNode) -> Option<(String, Encoding)> {
    let meta = node.meta();
    if !meta.writes_shape::<W>() {
        return None;
    }

    Some((meta.key()?.to_string(), meta.encoding?))
}
