//! Record index and name resolution for apiref.
//!
//! This crate provides:
//! - [`ModelIndex`] - Records of one snapshot keyed by canonical id
//! - [`Resolver`] - Id, dotted-path, and bare-name lookup with kind hints
//! - [`Selector`] - Query normalization and legacy id aliases
//!
//! With the `serde` feature, [`snapshot`] encodes an index as `MessagePack`.
//!
//! # Example
//!
//! ```
//! use apiref_index::ModelIndex;
//! use apiref_model::{Declaration, MethodDecl, FunctionDecl, ModelBuilder};
//! use apiref_walker::WalkConfig;
//!
//! let mut builder = ModelBuilder::new(Declaration::package("pkg"));
//! let class = builder.add(builder.root(), Declaration::class("MyClass"));
//! builder.add(
//!     class,
//!     Declaration::method(
//!         "myMethod",
//!         MethodDecl::instance(FunctionDecl::new("void").with_overload_index(1)),
//!     ),
//! );
//! let index = ModelIndex::from_model(&builder.build(), &WalkConfig::default()).unwrap();
//!
//! let record = index.resolve("MyClass.myMethod()", None).unwrap();
//! assert_eq!(record.id, "(myclass:class).(mymethod:instance,1)");
//! assert_eq!(index.get("(MyClass:class).(myMethod:instance)"), Some(record));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod index;
pub mod resolver;
pub mod selector;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use index::ModelIndex;
pub use resolver::{Resolution, Resolver, Strategy};
pub use selector::{Selector, legacy_segment, split_segments};
