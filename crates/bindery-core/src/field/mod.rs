//! Composable typed fields.
//!
//! A [`Field`] is declared once per logical attribute and applies to any
//! object shape one of its leaves recognises. Fields merge with `+`:
//!
//! - reads are prioritized: operands are tried left to right and the first
//!   applicable one answers, even when its answer is "no value";
//! - writes fan out: every operand whose setter accepts the target is invoked
//!   with the same value.
//!
//! Operands are flattened on merge, so grouping never changes behaviour.

mod accessor;
mod list;
mod node;


use crate::{
    bind::Binder,
    error::FieldError,
    object::{Object, UseDefaults},
    traverse,
};
use std::{borrow::Cow, ops::Add, sync::Arc};

// re-exports
pub use accessor::{Accessor, Leaf};
pub use list::{AnyField, FieldList};
pub use node::{FieldNode, NodeKind, NodeMeta};

///
/// Field
///
/// Immutable composite accessor for a value of type `T`.
/// Cloning is cheap; clones share their operands.
///

pub struct Field<T> {
    inner: Arc<FieldInner<T>>,
}

struct FieldInner<T> {
    label: Option<Cow<'static, str>>,
    meta: NodeMeta,
    operands: Vec<Arc<dyn Accessor<T>>>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Field<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Wrap a single accessor.
    pub fn from_accessor(accessor: impl Accessor<T> + 'static) -> Self {
        let accessor: Arc<dyn Accessor<T>> = Arc::new(accessor);

        Self::from_operands(None, vec![accessor])
    }

    fn from_operands(
        label: Option<Cow<'static, str>>,
        operands: Vec<Arc<dyn Accessor<T>>>,
    ) -> Self {
        Self {
            inner: Arc::new(FieldInner {
                label,
                meta: NodeMeta::new::<T>(NodeKind::Composite),
                operands,
            }),
        }
    }

    /// Getter over objects of shape `R`; never writable.
    pub fn read_only<R, G>(getter: G) -> Self
    where
        R: std::any::Any,
        G: Fn(&R) -> Option<T> + Send + Sync + 'static,
    {
        Self::from_accessor(Leaf::new(NodeKind::ReadOnly).reading(getter))
    }

    /// Setter over objects of shape `W`; never readable.
    /// `clear` runs when an absent value is written.
    pub fn write_only<W, S, C>(setter: S, clear: C) -> Self
    where
        W: std::any::Any,
        S: Fn(&mut W, &T) + Send + Sync + 'static,
        C: Fn(&mut W) + Send + Sync + 'static,
    {
        Self::from_accessor(Leaf::new(NodeKind::WriteOnly).writing(setter, clear))
    }

    /// Getter over shape `R` paired with a setter over shape `W`.
    /// The value always travels as an intermediate; `R` and `W` may differ.
    pub fn flow<R, W, G, S, C>(getter: G, setter: S, clear: C) -> Self
    where
        R: std::any::Any,
        W: std::any::Any,
        G: Fn(&R) -> Option<T> + Send + Sync + 'static,
        S: Fn(&mut W, &T) + Send + Sync + 'static,
        C: Fn(&mut W) + Send + Sync + 'static,
    {
        Self::from_accessor(
            Leaf::new(NodeKind::Flow)
                .reading(getter)
                .writing(setter, clear),
        )
    }

    /// Yields `value` only when read from the [`UseDefaults`] sentinel.
    pub fn default_value(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::from_accessor(
            Leaf::new(NodeKind::Default).reading(move |_: &UseDefaults| Some(value.clone())),
        )
    }

    /// Name used in diagnostics and errors.
    #[must_use]
    pub fn labeled(self, label: impl Into<Cow<'static, str>>) -> Self {
        Self::from_operands(Some(label.into()), self.inner.operands.clone())
    }

    /// Merge `other` after `self`: reads prefer `self`, writes reach both.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let operands = self
            .inner
            .operands
            .iter()
            .chain(&other.inner.operands)
            .cloned()
            .collect();
        let label = self
            .inner
            .label
            .clone()
            .or_else(|| other.inner.label.clone());

        Self::from_operands(label, operands)
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Diagnostic name: explicit label, else the first keyed leaf, else the
    /// value type.
    #[must_use]
    pub fn label(&self) -> &str {
        if let Some(label) = &self.inner.label {
            return label;
        }

        self.inner
            .operands
            .iter()
            .find_map(|op| op.meta().key())
            .unwrap_or(self.inner.meta.value_type)
    }

    /// Number of leaf operands after flattening.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.inner.operands.len()
    }

    /// Collect metadata items from this field's tree; see [`traverse::deep_collect`].
    pub fn deep_collect<M, F>(&self, matcher: F) -> Vec<M>
    where
        F: FnMut(&dyn FieldNode) -> Option<Vec<M>>,
    {
        traverse::deep_collect(self, matcher)
    }

    // ------------------------------------------------------------------
    // Getter / setter
    // ------------------------------------------------------------------

    /// Whether any operand's getter recognises `from`.
    #[must_use]
    pub fn is_readable(&self, from: &dyn Object) -> bool {
        self.inner.operands.iter().any(|op| op.reads(from))
    }

    /// Whether any operand's setter recognises `to`.
    #[must_use]
    pub fn is_writable(&self, to: &dyn Object) -> bool {
        self.inner.operands.iter().any(|op| op.writes(to))
    }

    /// Prioritized read.
    ///
    /// `None` when no operand is applicable; `Some(None)` when the first
    /// applicable operand has no value.
    #[must_use]
    pub fn get(&self, from: &dyn Object) -> Option<Option<T>> {
        self.inner
            .operands
            .iter()
            .find(|op| op.reads(from))
            .map(|op| op.read(from))
    }

    /// Fan-out write of `value` (or a clear, when `None`) into every
    /// applicable operand. Returns how many operands accepted the write.
    pub fn set(&self, to: &mut dyn Object, value: Option<&T>) -> Result<usize, FieldError> {
        let mut writers = 0;

        for op in &self.inner.operands {
            if op.writes(to) {
                op.write(to, value);
                writers += 1;
            }
        }

        if writers == 0 {
            return Err(FieldError::unsupported(
                self.label(),
                Object::shape(&*to).name(),
            ));
        }

        Ok(writers)
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    /// Read a value that must be present.
    pub fn apply(&self, from: &dyn Object) -> Result<T, FieldError> {
        match self.get(from) {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(FieldError::no_such_value(
                self.label(),
                Object::shape(from).name(),
            )),
            None => Err(FieldError::not_applicable(
                self.label(),
                Object::shape(from).name(),
            )),
        }
    }

    /// Copy this field's value from `from` into `to`.
    /// Returns `false`, doing nothing else, when `from` is not readable.
    pub fn copy(&self, from: &dyn Object, to: &mut dyn Object) -> bool {
        Binder::silent().copy(self, from, to)
    }

    /// Write `value` into every applicable operand of `to`.
    /// Returns whether at least one operand accepted it.
    pub fn set_value(&self, to: &mut dyn Object, value: Option<T>) -> bool {
        Binder::silent().set_value(self, to, value)
    }
}

impl<T: 'static> FieldNode for Field<T> {
    fn meta(&self) -> &NodeMeta {
        match self.inner.operands.as_slice() {
            [single] => single.meta(),
            _ => &self.inner.meta,
        }
    }

    fn drive(&self, visit: &mut dyn FnMut(&dyn FieldNode)) {
        match self.inner.operands.as_slice() {
            [single] => single.drive(visit),
            operands => {
                for op in operands {
                    visit(&**op);
                }
            }
        }
    }
}

impl<T: 'static> Add for Field<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.merge(&rhs)
    }
}

impl<T: 'static> Add for &Field<T> {
    type Output = Field<T>;

    fn add(self, rhs: Self) -> Field<T> {
        self.merge(rhs)
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("label", &self.inner.label)
            .field("value_type", &self.inner.meta.value_type)
            .field("arity", &self.inner.operands.len())
            .finish()
    }
}
