//! Read-only declaration tree for apiref.
//!
//! This crate provides:
//! - [`ApiModel`] - An immutable arena of [`DeclarationNode`]s addressed by [`NodeId`]
//! - [`NodeRef`] - A borrowed cursor for parent/member traversal
//! - [`NodeKind`] - The closed set of declaration kinds and their payloads
//! - Capability traits ([`ReleaseTagged`], [`ParameterList`], [`StaticMember`], [`ReturnTyped`])
//! - [`DocComment`] - Structured documentation comments
//! - [`ModelBuilder`] - Programmatic tree construction
//!
//! With the `serde` feature, [`ApiModel::from_json_str`] loads a nested JSON tree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod capability;
pub mod decl;
pub mod doc;
#[cfg(feature = "serde")]
pub mod json;
pub mod node;

pub use builder::{Declaration, ModelBuilder};
pub use capability::{ParameterList, ReleaseTagged, ReturnTyped, StaticMember};
pub use decl::{
    ConstructorDecl, ContainerDecl, EnumMemberDecl, FunctionDecl, MethodDecl, Parameter,
    PropertyDecl, TypeAliasDecl, TypedDecl,
};
pub use doc::{CustomBlock, DocComment, DocNode, DocSection, ParamBlock};
pub use node::{ApiModel, DeclarationNode, NodeId, NodeKind, NodeRef};
