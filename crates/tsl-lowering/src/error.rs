//! Internal consistency failures.
//!
//! Elision is never an error. Every variant here reports a tree the
//! checker should not have produced, so messages are prefixed with
//! `internal error:` rather than phrased as user diagnostics.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoweringError {
    #[error("internal error: unexpected class member kind {kind}")]
    UnexpectedClassMember { kind: &'static str },

    #[error("internal error: unexpected literal type kind {kind}")]
    UnexpectedLiteralType { kind: &'static str },

    #[error("internal error: namespace name must be an identifier, found {kind}")]
    NonIdentifierNamespaceName { kind: &'static str },

    #[error("internal error: class declaration without a name")]
    MissingClassName,

    #[error("internal error: unexpected {kind} in {context}")]
    UnexpectedNode {
        kind: &'static str,
        context: &'static str,
    },

    #[error("internal error: lowering exceeded the maximum depth of {limit}")]
    DepthExceeded { limit: u32 },

    #[error("internal error: node index {index} does not exist")]
    InvalidNode { index: u32 },
}

impl LoweringError {
    /// Log the failure where it is detected and hand it back for `Err(..)`.
    pub(crate) fn report(self) -> LoweringError {
        tracing::error!(error = %self, "lowering failed");
        self
    }
}

pub type Result<T> = std::result::Result<T, LoweringError>;
