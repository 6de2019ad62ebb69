use crate::{
    field::node::{FieldNode, NodeKind, NodeMeta},
    object::{Object, Shape},
    value::Encoding,
};
use std::{any::Any, borrow::Cow};

///
/// Accessor
///
/// One leaf of a field: a partial getter and a partial setter.
///
/// ## Contract
/// - `reads`/`writes` decide applicability; they must be side-effect-free
///   and must never panic.
/// - `read`/`write` are only invoked after the matching applicability check
///   returned `true`.
/// - `write` with `None` clears the target attribute.
///

pub trait Accessor<T>: FieldNode {
    fn reads(&self, _from: &dyn Object) -> bool {
        false
    }

    fn read(&self, _from: &dyn Object) -> Option<T> {
        None
    }

    fn writes(&self, _to: &dyn Object) -> bool {
        false
    }

    fn write(&self, _to: &mut dyn Object, _value: Option<&T>) {}
}

type ReadFn<T> = dyn Fn(&dyn Object) -> Option<T> + Send + Sync;
type WriteFn<T> = dyn Fn(&mut dyn Object, Option<&T>) + Send + Sync;

///
/// Leaf
///
/// Shape-gated accessor built from plain closures.
/// The getter recognises exactly one readable shape `R`, the setter exactly
/// one writable shape `W`; either side may be missing.
///

pub struct Leaf<T> {
    meta: NodeMeta,
    read: Option<Box<ReadFn<T>>>,
    write: Option<Box<WriteFn<T>>>,
}

impl<T: 'static> Leaf<T> {
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            meta: NodeMeta::new::<T>(kind),
            read: None,
            write: None,
        }
    }

    /// Attach a getter applicable to objects of shape `R`.
    #[must_use]
    pub fn reading<R, G>(mut self, getter: G) -> Self
    where
        R: Any,
        G: Fn(&R) -> Option<T> + Send + Sync + 'static,
    {
        self.meta.reads = Some(Shape::of::<R>());
        self.read = Some(Box::new(move |from: &dyn Object| {
            from.downcast_ref::<R>().and_then(&getter)
        }));
        self
    }

    /// Attach a setter applicable to objects of shape `W`.
    /// `clear` runs when the supplied value is absent.
    #[must_use]
    pub fn writing<W, S, C>(mut self, setter: S, clear: C) -> Self
    where
        W: Any,
        S: Fn(&mut W, &T) + Send + Sync + 'static,
        C: Fn(&mut W) + Send + Sync + 'static,
    {
        self.meta.writes = Some(Shape::of::<W>());
        self.write = Some(Box::new(move |to: &mut dyn Object, value: Option<&T>| {
            if let Some(target) = to.downcast_mut::<W>() {
                match value {
                    Some(value) => setter(target, value),
                    None => clear(target),
                }
            }
        }));
        self
    }

    /// Name the attribute this leaf binds in its representation.
    #[must_use]
    pub fn keyed(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.meta.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn encoded(mut self, encoding: Encoding) -> Self {
        self.meta.encoding = Some(encoding);
        self
    }
}

impl<T> FieldNode for Leaf<T> {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }
}

impl<T> Accessor<T> for Leaf<T> {
    fn reads(&self, from: &dyn Object) -> bool {
        self.read.is_some() && self.meta.reads.is_some_and(|shape| from.is_shape(shape))
    }

    fn read(&self, from: &dyn Object) -> Option<T> {
        self.read.as_ref().and_then(|read| read(from))
    }

    fn writes(&self, to: &dyn Object) -> bool {
        self.write.is_some() && self.meta.writes.is_some_and(|shape| to.is_shape(shape))
    }

    fn write(&self, to: &mut dyn Object, value: Option<&T>) {
        if let Some(write) = &self.write {
            write(to, value);
        }
    }
}
