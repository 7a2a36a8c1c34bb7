//! Fatal translation errors.
//!
//! Any of these aborts translation of the whole program: no output tree is
//! produced. Lossy but expressible constructs are warnings instead (see
//! `flowts_common::Warnings`).

use flowts_common::At;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("support for '{kind}' is not implemented yet (at {at})")]
    Unsupported { kind: String, at: At },

    #[error("spreads in interfaces are unsupported (at {at})")]
    SpreadInInterface { at: At },

    #[error("type parameter has no name (at {at})")]
    MissingTypeParameterName { at: At },

    #[error("rest parameter must have a name (at {at})")]
    MissingRestParameterName { at: At },

    #[error("'{kind}' cannot appear in type position (at {at})")]
    UnexpectedNode { kind: String, at: At },

    #[error("typeof query must reference an identifier, got '{kind}' (at {at})")]
    TypeofWithoutIdentifier { kind: String, at: At },

    #[error("nesting deeper than {limit} levels (at {at})")]
    NestingTooDeep { limit: u32, at: At },
}

impl ConvertError {
    /// Where the offending node starts, if known.
    pub fn at(&self) -> At {
        match self {
            ConvertError::Unsupported { at, .. }
            | ConvertError::SpreadInInterface { at }
            | ConvertError::MissingTypeParameterName { at }
            | ConvertError::MissingRestParameterName { at }
            | ConvertError::UnexpectedNode { at, .. }
            | ConvertError::TypeofWithoutIdentifier { at, .. }
            | ConvertError::NestingTooDeep { at, .. } => *at,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
