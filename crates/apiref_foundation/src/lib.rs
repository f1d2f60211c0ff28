//! Core types shared by every apiref layer.
//!
//! This crate provides:
//! - [`ReleaseTag`] - Ordered visibility/maturity markers
//! - [`Kind`] - The record kinds a documentation entity can have
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod kind;
pub mod release;

pub use error::{Error, ErrorContext, ErrorKind};
pub use kind::Kind;
pub use release::ReleaseTag;

/// Result type alias using the apiref [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
