//! Error types for the apiref system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Lookup misses are never errors; they surface as `Option::None`.

use std::fmt;

use thiserror::Error;

/// The main error type for apiref operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported node kind error.
    #[must_use]
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedKind(kind.into()))
    }

    /// Creates an error for a structural kind used where a record kind is required.
    #[must_use]
    pub fn structural_kind(kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::StructuralKind(kind.into()))
    }

    /// Creates a missing owner error.
    #[must_use]
    pub fn missing_owner(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingOwner {
            kind: kind.into(),
            name: name.into(),
        })
    }

    /// Creates a duplicate id error.
    #[must_use]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateId(id.into()))
    }

    /// Returns true if this error signals a declaration kind the code does not handle.
    #[must_use]
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedKind(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A declaration kind outside the closed kind set was encountered.
    #[error("unsupported declaration kind: {0}")]
    UnsupportedKind(String),

    /// A structural kind reached an operation that needs a record-bearing kind.
    #[error("structural kind {0} has no reference segment or record kind")]
    StructuralKind(String),

    /// A node that needs an owning declaration has no parent.
    #[error("{kind} '{name}' has no owning declaration")]
    MissingOwner {
        /// The kind of the orphaned node.
        kind: String,
        /// The display name of the orphaned node.
        name: String,
    },

    /// Two records produced the same canonical id.
    #[error("duplicate canonical id: {0}")]
    DuplicateId(String),

    /// A serialized declaration tree could not be decoded.
    #[error("deserialization error: {0}")]
    Deserialize(String),

    /// A record snapshot could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Scoped display path of the node being processed.
    pub node: Option<String>,
    /// Enclosing declarations, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node the error is attributed to.
    #[must_use]
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    /// Adds an enclosing frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(node) = &self.node {
            write!(f, "at {node}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
