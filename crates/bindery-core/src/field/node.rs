use crate::{object::Shape, value::Encoding};
use std::{any::Any, borrow::Cow};

///
/// NodeKind
///
/// Which construction primitive produced a field node.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Composite,
    ReadOnly,
    WriteOnly,
    Flow,
    Default,
    Formatted,
}

///
/// NodeMeta
///
/// Structural metadata for one field node.
/// Available to traversal consumers without evaluating any accessor.
///

#[derive(Clone, Debug)]
pub struct NodeMeta {
    pub kind: NodeKind,

    /// Type name of the value the node carries.
    pub value_type: &'static str,

    /// Shape the getter recognises, if the node has a single one.
    pub reads: Option<Shape>,

    /// Shape the setter recognises, if the node has a single one.
    pub writes: Option<Shape>,

    /// Attribute name in the bound representation (map key, column, element id).
    pub key: Option<Cow<'static, str>>,

    /// Physical encoding for storage-backed nodes.
    pub encoding: Option<Encoding>,
}

impl NodeMeta {
    #[must_use]
    pub fn new<T>(kind: NodeKind) -> Self {
        Self {
            kind,
            value_type: std::any::type_name::<T>(),
            reads: None,
            writes: None,
            key: None,
            encoding: None,
        }
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn reads_shape<O: Any>(&self) -> bool {
        self.reads == Some(Shape::of::<O>())
    }

    #[must_use]
    pub fn writes_shape<O: Any>(&self) -> bool {
        self.writes == Some(Shape::of::<O>())
    }
}

///
/// FieldNode
///
/// Object-safe structural view over a field tree.
/// `drive` visits direct constituents in declaration order; leaves have none.
///

pub trait FieldNode: Send + Sync {
    fn meta(&self) -> &NodeMeta;

    fn drive(&self, _visit: &mut dyn FnMut(&dyn FieldNode)) {}
}
