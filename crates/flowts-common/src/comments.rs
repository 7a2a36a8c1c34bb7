//! Comments attached to nodes.
//!
//! The parser attaches every comment to the leading, trailing, or inner
//! comment list of some node, and also lists all of them on the file node.
//! Lists hold `Arc<Comment>` so one comment object can be referenced from
//! several places; translation copies the `Arc`, never the comment.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::position::SourceLocation;

/// Comment syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentKind {
    /// `// ...`
    CommentLine,
    /// `/* ... */`
    CommentBlock,
}

/// A comment from the source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    /// Comment text without the delimiters
    pub value: String,
    #[serde(default)]
    pub start: Option<u32>,
    #[serde(default)]
    pub end: Option<u32>,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
}

impl Comment {
    pub fn line(value: impl Into<String>) -> Self {
        Comment {
            kind: CommentKind::CommentLine,
            value: value.into(),
            start: None,
            end: None,
            loc: None,
        }
    }

    pub fn block(value: impl Into<String>) -> Self {
        Comment {
            kind: CommentKind::CommentBlock,
            value: value.into(),
            start: None,
            end: None,
            loc: None,
        }
    }

    /// True for the `// @flow` (or `/* @flow */`) file pragma.
    #[must_use]
    pub fn is_flow_pragma(&self) -> bool {
        self.value.trim() == "@flow"
    }
}

/// Remove every comment in `list` that is the same object as `target`.
///
/// Identity, not equality, decides: two distinct comments with the same text
/// are left alone.
pub fn remove_shared(list: &mut Vec<Arc<Comment>>, target: &Arc<Comment>) -> usize {
    let before = list.len();
    list.retain(|comment| !Arc::ptr_eq(comment, target));
    before - list.len()
}
