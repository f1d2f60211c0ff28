//! apiref - Canonical ids, flat records, and name resolution for API documentation trees
//!
//! This crate re-exports all layers of the apiref system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: apiref_index       - Record index, resolver, snapshots
//! Layer 2: apiref_walker      - Tree walker, canonical ids, record mapping
//! Layer 1: apiref_model       - Declaration tree, capabilities, doc comments
//! Layer 0: apiref_foundation  - Core types (ReleaseTag, Kind, Error)
//! ```

pub use apiref_foundation as foundation;
pub use apiref_index as index;
pub use apiref_model as model;
pub use apiref_walker as walker;
