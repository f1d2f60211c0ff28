//! Tree walking, canonical ids, and flat records for apiref.
//!
//! This crate provides:
//! - [`Walker`] - Depth-first traversal filtered by release tag
//! - [`canonical_id`] - Reference-syntax identifiers for declarations
//! - [`RecordMapper`] - Conversion of nodes into [`RawRecord`]s
//! - [`MarkupRenderer`] - The documentation rendering seam
//! - [`WalkConfig`] - Walk configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod id;
pub mod mapper;
pub mod record;
pub mod render;
pub mod walker;

pub use config::{CustomBlockTags, WalkConfig};
pub use id::{canonical_id, parameter_id, parent_id, reference_segment};
pub use mapper::RecordMapper;
pub use record::{DocMarkup, MethodDetail, RawRecord, RecordDetail};
pub use render::{MarkupRenderer, PlainTextRenderer};
pub use walker::{WalkStats, Walker, walk};
