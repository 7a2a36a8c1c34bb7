//! Babel-shaped JSON in and out.
//!
//! Babel writes each comment twice: once in the file-level `comments` list
//! and again in the `leadingComments`/`trailingComments`/`innerComments` of
//! the node it is attached to. After reading, both places point at the same
//! `Arc<Comment>`, so identity-based edits (pragma removal) see one object.

use flowts_common::Comment;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::node::{Node, NodeKind};

/// Parse a node (usually a `File` or `Program`) from Babel AST JSON.
pub fn from_json_str(text: &str) -> serde_json::Result<Node> {
    let mut node: Node = serde_json::from_str(text)?;
    share_file_comments(&mut node);
    Ok(node)
}

/// Serialize a node back to Babel AST JSON.
pub fn to_json_string(node: &Node, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string(node)
    }
}

type CommentKey = (u32, u32, String);

fn comment_key(comment: &Comment) -> Option<CommentKey> {
    Some((comment.start?, comment.end?, comment.value.clone()))
}

/// Point attached comments at the matching entry of the file's `comments`.
///
/// Comments without byte offsets cannot be matched and keep their own `Arc`.
/// Returns the number of attachments that were linked.
pub fn share_file_comments(file: &mut Node) -> usize {
    let NodeKind::File { comments, .. } = &file.kind else {
        return 0;
    };
    let index: FxHashMap<CommentKey, Arc<Comment>> = comments
        .iter()
        .filter_map(|comment| Some((comment_key(comment)?, Arc::clone(comment))))
        .collect();
    if index.is_empty() {
        return 0;
    }
    link_comments(file, &index)
}

fn link_comments(node: &mut Node, index: &FxHashMap<CommentKey, Arc<Comment>>) -> usize {
    let mut linked = 0;
    let meta = &mut node.meta;
    for list in [
        &mut meta.leading_comments,
        &mut meta.trailing_comments,
        &mut meta.inner_comments,
    ] {
        for comment in list.iter_mut() {
            if let Some(shared) = comment_key(comment).and_then(|key| index.get(&key)) {
                *comment = Arc::clone(shared);
                linked += 1;
            }
        }
    }
    for child in node.children_mut() {
        linked += link_comments(child, index);
    }
    linked
}
