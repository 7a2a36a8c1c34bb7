//! Common types and utilities for the flowts translator.
//!
//! This crate provides foundational types used across all flowts crates:
//! - Source positions (`Position`, `SourceLocation`)
//! - Comments attached to nodes (`Comment`, `CommentKind`)
//! - Translation diagnostics (`Limitation`, `Diagnostic`, `Warnings`)
//! - Fresh identifier synthesis (`NameSet`)
//! - Traversal limits

// Position/Range types for line/column source locations
pub mod position;
pub use position::{At, Position, SourceLocation};

// Comments attached to nodes
pub mod comments;
pub use comments::{Comment, CommentKind};

// Warnings collected while translating a program
pub mod diagnostics;
pub use diagnostics::{Diagnostic, Limitation, Warnings};

// Collision-free identifier synthesis
pub mod names;
pub use names::NameSet;

// Centralized limits and thresholds
pub mod limits;
