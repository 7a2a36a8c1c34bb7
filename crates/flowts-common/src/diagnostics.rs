//! Translation warnings.
//!
//! A warning records a construct that was translated with unavoidable loss:
//! the output is the closest TypeScript equivalent, and the warning tells the
//! user what could not be expressed and where to read more.
//!
//! # Components
//!
//! - `Limitation` - the closed set of known lossy constructs
//! - `Diagnostic` - one warning with message, reference URL and position
//! - `Warnings` - the append-only collector threaded through a translation

use serde::Serialize;
use std::fmt;

use crate::position::SourceLocation;

// =============================================================================
// Limitations
// =============================================================================

/// A Flow construct with no exact TypeScript counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Limitation {
    /// Property marked `+`
    Contravariance,
    /// `{| ... |}` object type
    ExactObject,
    /// `$Exact<T>` utility
    ExactUtility,
    /// `opaque type`
    OpaqueType,
    /// `+T` / `-T` on a type parameter
    TypeParameterVariance,
}

impl Limitation {
    /// Human-readable message for this limitation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Limitation::Contravariance => "Contravariance can't be expressed in TypeScript",
            Limitation::ExactObject => "Exact types can't be expressed in TypeScript",
            Limitation::ExactUtility => "$Exact types can't be expressed in TypeScript",
            Limitation::OpaqueType => "Opaque types can't be expressed in TypeScript",
            Limitation::TypeParameterVariance => {
                "Variance annotations on type parameters can't be expressed in TypeScript"
            }
        }
    }

    /// Stable URL describing the limitation.
    #[must_use]
    pub const fn reference_url(self) -> &'static str {
        match self {
            Limitation::Contravariance | Limitation::TypeParameterVariance => {
                "https://github.com/Microsoft/TypeScript/issues/1394"
            }
            Limitation::ExactObject | Limitation::ExactUtility => {
                "https://github.com/Microsoft/TypeScript/issues/12936"
            }
            Limitation::OpaqueType => "https://github.com/Microsoft/TypeScript/issues/202",
        }
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A warning about a lossy translation.
///
/// `line` and `column` are 1-based; both are 0 only when the offending node
/// carried no position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub limitation: Limitation,
    pub message_text: String,
    pub reference_url: String,
    pub line: u32,
    pub column: u32,
}

impl Diagnostic {
    /// Create a warning for `limitation` at the start of `loc`.
    #[must_use]
    pub fn new(limitation: Limitation, loc: Option<&SourceLocation>) -> Self {
        let (line, column) = match loc {
            Some(loc) => (loc.start.line, loc.start.display_column()),
            None => (0, 0),
        };
        Diagnostic {
            limitation,
            message_text: limitation.message().to_string(),
            reference_url: limitation.reference_url().to_string(),
            line,
            column,
        }
    }

    /// Whether the offending node had a recorded position.
    #[must_use]
    pub const fn has_position(&self) -> bool {
        self.line != 0
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {}, column {}). See {}",
            self.message_text, self.line, self.column, self.reference_url
        )
    }
}

// =============================================================================
// Warnings
// =============================================================================

/// Append-only collector of translation warnings.
///
/// One collector is shared, by mutable reference, by every layer translating
/// a program. Order is detection order.
#[derive(Clone, Debug, Default)]
pub struct Warnings {
    diagnostics: Vec<Diagnostic>,
}

impl Warnings {
    pub fn new() -> Self {
        Warnings {
            diagnostics: Vec::new(),
        }
    }

    /// Record `limitation` at `loc`.
    pub fn report(&mut self, limitation: Limitation, loc: Option<&SourceLocation>) {
        let diagnostic = Diagnostic::new(limitation, loc);
        tracing::debug!(
            limitation = ?limitation,
            line = diagnostic.line,
            column = diagnostic.column,
            "lossy translation"
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of warnings recorded for `limitation`.
    pub fn count_of(&self, limitation: Limitation) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.limitation == limitation)
            .count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics.rs"]
mod tests;
