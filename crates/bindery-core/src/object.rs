//! Runtime object shapes.
//!
//! Fields never require the objects they bind against to share an interface.
//! Applicability is decided by comparing an object's concrete type against the
//! shape a getter or setter was declared for.

use std::{
    any::{Any, TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
};

///
/// Shape
///
/// Concrete type identity of a bound object, plus its type name for
/// diagnostics. Equality and hashing use the type identity only.
///

#[derive(Clone, Copy)]
pub struct Shape {
    id: TypeId,
    name: &'static str,
}

impl Shape {
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Fully-qualified type name of this shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({})", self.name)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

///
/// Object
///
/// Anything a field can read from or write into.
/// Implemented for every `'static` type; pass boxed objects as `&*boxed`.
///

pub trait Object: Any {
    fn shape(&self) -> Shape;
}

impl<T: Any> Object for T {
    fn shape(&self) -> Shape {
        Shape::of::<T>()
    }
}

impl dyn Object {
    /// Whether this object's runtime shape is `shape`.
    #[must_use]
    pub fn is_shape(&self, shape: Shape) -> bool {
        Object::shape(self) == shape
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    #[must_use]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }
}

///
/// UseDefaults
///
/// Sentinel source meaning "no real source is available; populate defaults".
/// Only default fields are readable from it.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UseDefaults;

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    struct Left;
    struct Right;

    #[test]
    fn shape_equality_uses_type_identity() {
        assert_eq!(Shape::of::<Left>(), Shape::of::<Left>());
        assert_ne!(Shape::of::<Left>(), Shape::of::<Right>());
        assert!(Shape::of::<Left>().name().ends_with("Left"));
    }

    #[test]
    fn dyn_object_reports_concrete_shape() {
        let left = Left;
        let obj: &dyn Object = &left;

        assert!(obj.is_shape(Shape::of::<Left>()));
        assert!(!obj.is_shape(Shape::of::<Right>()));
        assert!(obj.downcast_ref::<Left>().is_some());
        assert!(obj.downcast_ref::<Right>().is_none());
    }

    #[test]
    fn dyn_object_downcasts_mutably() {
        let mut text = String::from("a");
        let obj: &mut dyn Object = &mut text;

        obj.downcast_mut::<String>().expect("string shape").push('b');
        assert_eq!(text, "ab");
    }

    #[test]
    fn boxed_objects_are_seen_through_a_reborrow() {
        let boxed: Box<dyn Object> = Box::new(Left);

        let outer: &dyn Object = &boxed;
        assert!(outer.is_shape(Shape::of::<Box<dyn Object>>()));
        assert!(!outer.is_shape(Shape::of::<Left>()));

        let inner: &dyn Object = &*boxed;
        assert!(inner.is_shape(Shape::of::<Left>()));
        assert!(inner.downcast_ref::<Left>().is_some());
    }
}
