use crate::{
    bind::Binder,
    field::{Field, FieldNode},
    object::Object,
    traverse,
};
use std::{fmt, sync::Arc};

///
/// AnyField
///
/// Type-erased field, so fields of different value types can share one
/// ordered schema list.
///

pub trait AnyField: FieldNode {
    fn label(&self) -> &str;

    fn is_readable(&self, from: &dyn Object) -> bool;

    fn is_writable(&self, to: &dyn Object) -> bool;

    fn copy_with(&self, binder: &Binder<'_>, from: &dyn Object, to: &mut dyn Object) -> bool;
}

impl<T: 'static> AnyField for Field<T> {
    fn label(&self) -> &str {
        Field::label(self)
    }

    fn is_readable(&self, from: &dyn Object) -> bool {
        Field::is_readable(self, from)
    }

    fn is_writable(&self, to: &dyn Object) -> bool {
        Field::is_writable(self, to)
    }

    fn copy_with(&self, binder: &Binder<'_>, from: &dyn Object, to: &mut dyn Object) -> bool {
        binder.copy(self, from, to)
    }
}

///
/// FieldList
///
/// Ordered schema list of fields with possibly different value types.
///

#[derive(Clone, Default)]
pub struct FieldList {
    fields: Vec<Arc<dyn AnyField>>,
}

impl FieldList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<T: 'static>(mut self, field: Field<T>) -> Self {
        self.push(field);
        self
    }

    pub fn push<T: 'static>(&mut self, field: Field<T>) {
        self.fields.push(Arc::new(field));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn AnyField> {
        self.fields.iter().map(|field| &**field)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(AnyField::label).collect()
    }

    /// Copy every field from `from` into `to`.
    /// Returns how many fields were readable from `from`.
    pub fn copy(&self, from: &dyn Object, to: &mut dyn Object) -> usize {
        self.copy_with(&Binder::silent(), from, to)
    }

    pub fn copy_with(&self, binder: &Binder<'_>, from: &dyn Object, to: &mut dyn Object) -> usize {
        let mut copied = 0;

        for field in &self.fields {
            if field.copy_with(binder, from, to) {
                copied += 1;
            }
        }

        copied
    }

    /// Traverse every field in declaration order; see [`traverse::deep_collect`].
    pub fn deep_collect<M, F>(&self, matcher: F) -> Vec<M>
    where
        F: FnMut(&dyn FieldNode) -> Option<Vec<M>>,
    {
        traverse::deep_collect_all(self.iter().map(as_node), matcher)
    }
}

fn as_node(field: &dyn AnyField) -> &dyn FieldNode {
    field
}

impl fmt::Debug for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.labels()).finish()
    }
}
