//! Integration tests for the apiref_index crate.
//!
//! Builds an index from the shared example tree and covers:
//! - Exact and legacy id lookup
//! - Name resolution strategies and kind hints
//! - Snapshots

#[path = "../fixture.rs"]
mod fixture;

mod get;
mod resolve;
mod snapshot;
