//! Structural traversal over field trees.
//!
//! Traversal never evaluates a getter or setter; it only consults node
//! metadata, so metadata-driven consumers (column extractors, layout
//! generators) can learn a schema's shape without any object at hand.

use crate::field::FieldNode;

/// Collect metadata items from a field tree, top-down.
///
/// When `matcher` is defined for a node (returns `Some`), its items are
/// emitted and the node's constituents are skipped. Otherwise traversal
/// descends into the constituents in declaration order. The result is
/// deterministic for an immutable tree.
pub fn deep_collect<M, F>(root: &dyn FieldNode, mut matcher: F) -> Vec<M>
where
    F: FnMut(&dyn FieldNode) -> Option<Vec<M>>,
{
    let mut out = Vec::new();
    walk(root, &mut matcher, &mut out);

    out
}

/// [`deep_collect`] over several roots, concatenated in order.
pub fn deep_collect_all<'a, M, F>(
    roots: impl IntoIterator<Item = &'a dyn FieldNode>,
    mut matcher: F,
) -> Vec<M>
where
    F: FnMut(&dyn FieldNode) -> Option<Vec<M>>,
{
    let mut out = Vec::new();
    for root in roots {
        walk(root, &mut matcher, &mut out);
    }

    out
}

fn walk<M>(
    node: &dyn FieldNode,
    matcher: &mut dyn FnMut(&dyn FieldNode) -> Option<Vec<M>>,
    out: &mut Vec<M>,
) {
    if let Some(items) = matcher(node) {
        out.extend(items);
        return;
    }

    node.drive(&mut |child: &dyn FieldNode| walk(child, matcher, out));
}

///
/// TESTS
///
