//! Declaration nodes and the immutable model arena.
//!
//! An [`ApiModel`] is a snapshot: once built it is never mutated, so any
//! number of walkers may traverse it concurrently through [`NodeRef`]s.

use apiref_foundation::{Kind, ReleaseTag};

use crate::capability::{ParameterList, ReleaseTagged, ReturnTyped, StaticMember};
use crate::decl::{
    ConstructorDecl, ContainerDecl, EnumMemberDecl, FunctionDecl, MethodDecl, PropertyDecl,
    TypeAliasDecl, TypedDecl,
};
use crate::doc::DocComment;

// =============================================================================
// NodeId
// =============================================================================

/// Index of a node within its [`ApiModel`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// NodeKind
// =============================================================================

/// The closed set of declaration kinds.
///
/// Record-bearing variants carry a payload implementing the capability
/// traits that kind supports. Structural variants carry nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The top-level model. Structural.
    Model,
    /// A package. Structural.
    Package,
    /// A package entry point. Structural.
    EntryPoint,
    /// Placeholder kind. Structural.
    None,
    /// A class.
    Class(ContainerDecl),
    /// An interface.
    Interface(ContainerDecl),
    /// A namespace.
    Namespace(ContainerDecl),
    /// An enum.
    Enum(ContainerDecl),
    /// An enum member.
    EnumMember(EnumMemberDecl),
    /// A type alias.
    TypeAlias(TypeAliasDecl),
    /// A class method.
    Method(MethodDecl),
    /// An interface method.
    MethodSignature(FunctionDecl),
    /// A free function.
    Function(FunctionDecl),
    /// A class constructor.
    Constructor(ConstructorDecl),
    /// An interface construct signature.
    ConstructSignature(FunctionDecl),
    /// An interface call signature. Never produces a record.
    CallSignature(FunctionDecl),
    /// An interface index signature. Never produces a record.
    IndexSignature(FunctionDecl),
    /// A class property.
    Property(PropertyDecl),
    /// An interface property.
    PropertySignature(TypedDecl),
    /// A variable.
    Variable(TypedDecl),
}

impl NodeKind {
    /// Returns the kind name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Package => "Package",
            Self::EntryPoint => "EntryPoint",
            Self::None => "None",
            Self::Class(_) => "Class",
            Self::Interface(_) => "Interface",
            Self::Namespace(_) => "Namespace",
            Self::Enum(_) => "Enum",
            Self::EnumMember(_) => "EnumMember",
            Self::TypeAlias(_) => "TypeAlias",
            Self::Method(_) => "Method",
            Self::MethodSignature(_) => "MethodSignature",
            Self::Function(_) => "Function",
            Self::Constructor(_) => "Constructor",
            Self::ConstructSignature(_) => "ConstructSignature",
            Self::CallSignature(_) => "CallSignature",
            Self::IndexSignature(_) => "IndexSignature",
            Self::Property(_) => "Property",
            Self::PropertySignature(_) => "PropertySignature",
            Self::Variable(_) => "Variable",
        }
    }

    /// Returns true for kinds above module level that never appear in ids.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Model | Self::Package | Self::EntryPoint | Self::None
        )
    }

    /// Returns the record kind this node maps to, or `None` for kinds that
    /// produce no record.
    #[must_use]
    pub const fn record_kind(&self) -> Option<Kind> {
        match self {
            Self::Model
            | Self::Package
            | Self::EntryPoint
            | Self::None
            | Self::CallSignature(_)
            | Self::IndexSignature(_) => None,
            Self::Class(_) => Some(Kind::Class),
            Self::Interface(_) => Some(Kind::Interface),
            Self::Namespace(_) => Some(Kind::Namespace),
            Self::Enum(_) => Some(Kind::Enum),
            Self::EnumMember(_) => Some(Kind::EnumMember),
            Self::TypeAlias(_) => Some(Kind::TypeAlias),
            Self::Method(_) => Some(Kind::Method),
            Self::MethodSignature(_) => Some(Kind::MethodSignature),
            Self::Function(_) => Some(Kind::Function),
            Self::Constructor(_) => Some(Kind::Constructor),
            Self::ConstructSignature(_) => Some(Kind::ConstructSignature),
            Self::Property(_) => Some(Kind::Property),
            Self::PropertySignature(_) => Some(Kind::PropertySignature),
            Self::Variable(_) => Some(Kind::Variable),
        }
    }

    /// The release tag capability.
    #[must_use]
    pub fn as_release_tagged(&self) -> Option<&dyn ReleaseTagged> {
        match self {
            Self::Model | Self::Package | Self::EntryPoint | Self::None => None,
            Self::Class(d) | Self::Interface(d) | Self::Namespace(d) | Self::Enum(d) => Some(d),
            Self::EnumMember(d) => Some(d),
            Self::TypeAlias(d) => Some(d),
            Self::Method(d) => Some(d),
            Self::MethodSignature(d)
            | Self::Function(d)
            | Self::ConstructSignature(d)
            | Self::CallSignature(d)
            | Self::IndexSignature(d) => Some(d),
            Self::Constructor(d) => Some(d),
            Self::Property(d) => Some(d),
            Self::PropertySignature(d) | Self::Variable(d) => Some(d),
        }
    }

    /// The parameter list capability.
    #[must_use]
    pub fn as_parameter_list(&self) -> Option<&dyn ParameterList> {
        match self {
            Self::Method(d) => Some(d),
            Self::MethodSignature(d)
            | Self::Function(d)
            | Self::ConstructSignature(d)
            | Self::CallSignature(d)
            | Self::IndexSignature(d) => Some(d),
            Self::Constructor(d) => Some(d),
            _ => None,
        }
    }

    /// The static member capability.
    #[must_use]
    pub fn as_static(&self) -> Option<&dyn StaticMember> {
        match self {
            Self::Method(d) => Some(d),
            Self::Property(d) => Some(d),
            _ => None,
        }
    }

    /// The return type capability. Constructors have none.
    #[must_use]
    pub fn as_return_typed(&self) -> Option<&dyn ReturnTyped> {
        match self {
            Self::Method(d) => Some(d),
            Self::MethodSignature(d)
            | Self::Function(d)
            | Self::ConstructSignature(d)
            | Self::CallSignature(d)
            | Self::IndexSignature(d) => Some(d),
            _ => None,
        }
    }

    /// The declared release tag, if this kind carries one.
    #[must_use]
    pub fn release_tag(&self) -> Option<ReleaseTag> {
        self.as_release_tagged().map(ReleaseTagged::release_tag)
    }

    /// The overload index, if this kind carries a parameter list.
    #[must_use]
    pub fn overload_index(&self) -> Option<u32> {
        self.as_parameter_list().map(ParameterList::overload_index)
    }

    /// Declared type text for properties, variables, and type aliases.
    #[must_use]
    pub fn type_text(&self) -> Option<&str> {
        match self {
            Self::Property(d) => Some(&d.typed.type_text),
            Self::PropertySignature(d) | Self::Variable(d) => Some(&d.type_text),
            Self::TypeAlias(d) => Some(&d.type_text),
            _ => None,
        }
    }

    /// Sets the release tag on kinds that carry one. Structural kinds are left alone.
    pub fn set_release_tag(&mut self, tag: ReleaseTag) {
        match self {
            Self::Model | Self::Package | Self::EntryPoint | Self::None => {}
            Self::Class(d) | Self::Interface(d) | Self::Namespace(d) | Self::Enum(d) => {
                d.release_tag = tag;
            }
            Self::EnumMember(d) => d.release_tag = tag,
            Self::TypeAlias(d) => d.release_tag = tag,
            Self::Method(d) => d.function.release_tag = tag,
            Self::MethodSignature(d)
            | Self::Function(d)
            | Self::ConstructSignature(d)
            | Self::CallSignature(d)
            | Self::IndexSignature(d) => d.release_tag = tag,
            Self::Constructor(d) => d.release_tag = tag,
            Self::Property(d) => d.typed.release_tag = tag,
            Self::PropertySignature(d) | Self::Variable(d) => d.release_tag = tag,
        }
    }
}

// =============================================================================
// DeclarationNode
// =============================================================================

/// One node of the declaration tree.
#[derive(Clone, Debug)]
pub struct DeclarationNode {
    /// Kind and kind-specific payload.
    pub kind: NodeKind,
    /// Display name.
    pub name: String,
    /// Declaration text with modifiers, when known.
    pub excerpt: Option<String>,
    /// Parsed documentation comment.
    pub docs: Option<DocComment>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) members: Vec<NodeId>,
}

// =============================================================================
// ApiModel
// =============================================================================

/// An immutable declaration tree snapshot.
#[derive(Clone, Debug)]
pub struct ApiModel {
    pub(crate) nodes: Vec<DeclarationNode>,
    pub(crate) root: NodeId,
}

impl ApiModel {
    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            model: self,
            id: self.root,
        }
    }

    /// Returns the node with the given id, if it belongs to this model.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then_some(NodeRef { model: self, id })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the model has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds the first node, in depth-first declaration order, whose scoped
    /// name equals `scoped_name`.
    #[must_use]
    pub fn find(&self, scoped_name: &str) -> Option<NodeRef<'_>> {
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            if !node.kind().is_structural() && node.scoped_name() == scoped_name {
                return Some(node);
            }
            let members: Vec<_> = node.members().collect();
            stack.extend(members.into_iter().rev());
        }
        None
    }
}

// =============================================================================
// NodeRef
// =============================================================================

/// A borrowed handle to one node of an [`ApiModel`].
#[derive(Copy, Clone)]
pub struct NodeRef<'a> {
    model: &'a ApiModel,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// The node's id.
    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// The model this node belongs to.
    #[must_use]
    pub fn model(self) -> &'a ApiModel {
        self.model
    }

    /// The underlying node.
    #[must_use]
    pub fn node(self) -> &'a DeclarationNode {
        &self.model.nodes[self.id.index()]
    }

    /// The node's kind.
    #[must_use]
    pub fn kind(self) -> &'a NodeKind {
        &self.node().kind
    }

    /// The node's display name.
    #[must_use]
    pub fn name(self) -> &'a str {
        &self.node().name
    }

    /// The declaration excerpt, if any.
    #[must_use]
    pub fn excerpt(self) -> Option<&'a str> {
        self.node().excerpt.as_deref()
    }

    /// The documentation comment, if any.
    #[must_use]
    pub fn docs(self) -> Option<&'a DocComment> {
        self.node().docs.as_ref()
    }

    /// The parent node, if any.
    #[must_use]
    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| NodeRef {
            model: self.model,
            id,
        })
    }

    /// Direct members in declaration order.
    pub fn members(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let model = self.model;
        self.node()
            .members
            .iter()
            .map(move |&id| NodeRef { model, id })
    }

    /// Display names from the outermost non-structural ancestor down to this
    /// node, joined with `.`.
    #[must_use]
    pub fn scoped_name(self) -> String {
        let mut names = vec![self.name()];
        let mut current = self.parent();
        while let Some(node) = current {
            if node.kind().is_structural() {
                break;
            }
            names.push(node.name());
            current = node.parent();
        }
        names.reverse();
        names.join(".")
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind().name())
            .field("name", &self.name())
            .finish()
    }
}
