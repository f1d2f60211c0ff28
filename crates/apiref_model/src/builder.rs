//! Programmatic construction of declaration trees.
//!
//! # Example
//!
//! ```
//! use apiref_model::{Declaration, FunctionDecl, MethodDecl, ModelBuilder, Parameter};
//!
//! let mut builder = ModelBuilder::new(Declaration::package("my-package"));
//! let entry = builder.add(builder.root(), Declaration::entry_point(""));
//! let class = builder.add(entry, Declaration::class("MyClass"));
//! builder.add(
//!     class,
//!     Declaration::method(
//!         "myMethod",
//!         MethodDecl::instance(
//!             FunctionDecl::new("void").with_parameter(Parameter::new("a", "number")),
//!         ),
//!     ),
//! );
//! let model = builder.build();
//! assert_eq!(model.len(), 4);
//! ```

use apiref_foundation::ReleaseTag;

use crate::decl::{
    ConstructorDecl, ContainerDecl, EnumMemberDecl, FunctionDecl, MethodDecl, PropertyDecl,
    TypeAliasDecl, TypedDecl,
};
use crate::doc::DocComment;
use crate::node::{ApiModel, DeclarationNode, NodeId, NodeKind};

/// Display name given to constructors and construct signatures.
pub const CONSTRUCTOR_NAME: &str = "constructor";

// =============================================================================
// Declaration
// =============================================================================

/// A node description waiting to be attached to a tree.
#[derive(Clone, Debug)]
pub struct Declaration {
    /// Kind and payload.
    pub kind: NodeKind,
    /// Display name.
    pub name: String,
    /// Declaration excerpt.
    pub excerpt: Option<String>,
    /// Documentation comment.
    pub docs: Option<DocComment>,
}

impl Declaration {
    /// Creates a declaration of any kind.
    #[must_use]
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            excerpt: None,
            docs: None,
        }
    }

    /// A model root.
    #[must_use]
    pub fn model() -> Self {
        Self::new(NodeKind::Model, "")
    }

    /// A package.
    #[must_use]
    pub fn package(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Package, name)
    }

    /// A package entry point.
    #[must_use]
    pub fn entry_point(name: impl Into<String>) -> Self {
        Self::new(NodeKind::EntryPoint, name)
    }

    /// A class.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Class(ContainerDecl::new()), name)
    }

    /// An interface.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Interface(ContainerDecl::new()), name)
    }

    /// A namespace.
    #[must_use]
    pub fn namespace(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Namespace(ContainerDecl::new()), name)
    }

    /// An enum.
    #[must_use]
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Enum(ContainerDecl::new()), name)
    }

    /// An enum member with its literal initializer.
    #[must_use]
    pub fn enum_member(name: impl Into<String>, initializer: impl Into<String>) -> Self {
        Self::new(NodeKind::EnumMember(EnumMemberDecl::new(initializer)), name)
    }

    /// A type alias.
    #[must_use]
    pub fn type_alias(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self::new(NodeKind::TypeAlias(TypeAliasDecl::new(type_text)), name)
    }

    /// A free function.
    #[must_use]
    pub fn function(name: impl Into<String>, decl: FunctionDecl) -> Self {
        Self::new(NodeKind::Function(decl), name)
    }

    /// A class method.
    #[must_use]
    pub fn method(name: impl Into<String>, decl: MethodDecl) -> Self {
        Self::new(NodeKind::Method(decl), name)
    }

    /// An interface method.
    #[must_use]
    pub fn method_signature(name: impl Into<String>, decl: FunctionDecl) -> Self {
        Self::new(NodeKind::MethodSignature(decl), name)
    }

    /// A class constructor.
    #[must_use]
    pub fn constructor(decl: ConstructorDecl) -> Self {
        Self::new(NodeKind::Constructor(decl), CONSTRUCTOR_NAME)
    }

    /// An interface construct signature.
    #[must_use]
    pub fn construct_signature(decl: FunctionDecl) -> Self {
        Self::new(NodeKind::ConstructSignature(decl), CONSTRUCTOR_NAME)
    }

    /// An interface call signature.
    #[must_use]
    pub fn call_signature(decl: FunctionDecl) -> Self {
        Self::new(NodeKind::CallSignature(decl), "")
    }

    /// An interface index signature.
    #[must_use]
    pub fn index_signature(decl: FunctionDecl) -> Self {
        Self::new(NodeKind::IndexSignature(decl), "")
    }

    /// A class property.
    #[must_use]
    pub fn property(name: impl Into<String>, decl: PropertyDecl) -> Self {
        Self::new(NodeKind::Property(decl), name)
    }

    /// An interface property.
    #[must_use]
    pub fn property_signature(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self::new(NodeKind::PropertySignature(TypedDecl::new(type_text)), name)
    }

    /// A variable.
    #[must_use]
    pub fn variable(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self::new(NodeKind::Variable(TypedDecl::new(type_text)), name)
    }

    /// Sets the release tag, if the kind carries one.
    #[must_use]
    pub fn with_release_tag(mut self, tag: ReleaseTag) -> Self {
        self.kind.set_release_tag(tag);
        self
    }

    /// Sets the declaration excerpt.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Sets the documentation comment.
    #[must_use]
    pub fn with_docs(mut self, docs: DocComment) -> Self {
        self.docs = Some(docs);
        self
    }
}

// =============================================================================
// ModelBuilder
// =============================================================================

/// Builds an [`ApiModel`] node by node.
///
/// Members keep the order in which they are added.
#[derive(Debug)]
pub struct ModelBuilder {
    nodes: Vec<DeclarationNode>,
}

impl ModelBuilder {
    /// Creates a builder whose root is `root`.
    #[must_use]
    pub fn new(root: Declaration) -> Self {
        let mut builder = Self { nodes: Vec::new() };
        builder.push(None, root);
        builder
    }

    /// The root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends `decl` as the last member of `parent` and returns its id.
    pub fn add(&mut self, parent: NodeId, decl: Declaration) -> NodeId {
        let id = self.push(Some(parent), decl);
        if let Some(parent) = self.nodes.get_mut(parent.index()) {
            parent.members.push(id);
        }
        id
    }

    /// Finishes the tree.
    #[must_use]
    pub fn build(self) -> ApiModel {
        ApiModel {
            nodes: self.nodes,
            root: NodeId(0),
        }
    }

    fn push(&mut self, parent: Option<NodeId>, decl: Declaration) -> NodeId {
        // Trees are limited to u32::MAX nodes.
        #[allow(clippy::cast_possible_truncation)]
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(DeclarationNode {
            kind: decl.kind,
            name: decl.name,
            excerpt: decl.excerpt,
            docs: decl.docs,
            parent,
            members: Vec::new(),
        });
        id
    }
}
