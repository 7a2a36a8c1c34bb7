//! `@flow` pragma removal.

use std::sync::Arc;

use flowts_ast::{Node, NodeKind};
use flowts_common::Comment;
use flowts_common::comments::remove_shared;

/// Remove the `@flow` pragma from the leading comments of the first
/// statement.
///
/// On a `File`, the same comment object is also removed from the file-level
/// comment list. An empty program is left alone. Returns whether a pragma
/// was removed.
pub fn strip_flow_pragma(root: &mut Node) -> bool {
    if matches!(root.kind, NodeKind::Program { .. }) {
        return take_pragma(root).is_some();
    }
    let NodeKind::File { program, comments, .. } = &mut root.kind else {
        return false;
    };
    let Some(pragma) = take_pragma(program) else {
        return false;
    };
    remove_shared(comments, &pragma);
    true
}

fn take_pragma(program: &mut Node) -> Option<Arc<Comment>> {
    let NodeKind::Program { body, .. } = &mut program.kind else {
        return None;
    };
    let leading = &mut body.first_mut()?.meta.leading_comments;
    let index = leading.iter().position(|comment| comment.is_flow_pragma())?;
    Some(leading.remove(index))
}

#[cfg(test)]
#[path = "../tests/pragma.rs"]
mod tests;
