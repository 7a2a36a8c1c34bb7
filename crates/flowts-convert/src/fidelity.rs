//! Position and comment metadata carried onto replacement nodes.
//!
//! Comment lists hold `Arc<Comment>`, so moving or cloning a `NodeMeta`
//! shares the comment objects; no comment is duplicated or dropped.

use flowts_ast::{Node, NodeMeta};

/// Give `replacement` the metadata of the node it replaces.
#[must_use]
pub fn carry(meta: NodeMeta, mut replacement: Node) -> Node {
    replacement.meta = meta;
    replacement
}

/// Fold the metadata of a dissolved wrapper (a `: T` annotation, an object
/// spread) into the node that takes its place.
///
/// The wrapper's comments surround the node's own. Position fields are
/// filled from the wrapper only where the node has none.
pub fn absorb(wrapper: NodeMeta, node: &mut Node) {
    let NodeMeta {
        start,
        end,
        loc,
        mut leading_comments,
        trailing_comments,
        inner_comments,
    } = wrapper;
    let meta = &mut node.meta;

    meta.start = meta.start.or(start);
    meta.end = meta.end.or(end);
    meta.loc = meta.loc.or(loc);

    if !leading_comments.is_empty() {
        leading_comments.append(&mut meta.leading_comments);
        meta.leading_comments = leading_comments;
    }
    meta.trailing_comments.extend(trailing_comments);
    meta.inner_comments.extend(inner_comments);
}

#[cfg(test)]
#[path = "../tests/fidelity.rs"]
mod tests;
