//! Centralized limits for the translator.

/// Maximum nesting depth the converter and the tree rewriter descend before
/// giving up.
///
/// Exceeding this depth is a fatal translation error. The recursive passes
/// grow their stack on demand (see `STACK_RED_ZONE`), so the limit holds on
/// small thread stacks too.
///
/// # Flow example
///
/// ```js
/// // Hundreds of nested object types:
/// type T = { a: { a: { a: { /* ... */ } } } };
/// ```
pub const MAX_TRAVERSAL_DEPTH: u32 = 500;

/// Remaining stack below which a recursive pass continues on a new segment.
pub const STACK_RED_ZONE: usize = 256 * 1024;

/// Size of each stack segment allocated by a recursive pass.
pub const STACK_SEGMENT_SIZE: usize = 4 * 1024 * 1024;

/// Default base name for synthesized function-type parameters.
pub const PARAM_NAME_BASE: &str = "arg";

/// Default base name for synthesized index-signature keys.
pub const INDEXER_NAME_BASE: &str = "key";
