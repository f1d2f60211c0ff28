//! Loading declaration trees from nested JSON.
//!
//! Each JSON node names its `kind` with the declaration kind name used by
//! [`NodeKind::name`]. A kind outside that closed set aborts the load with
//! [`ErrorKind::UnsupportedKind`]: an unfamiliar kind means the producer's
//! schema moved ahead of this code, and a partial tree would silently drop
//! documentation.
//!
//! ```json
//! {
//!   "kind": "Package", "name": "my-package",
//!   "members": [{
//!     "kind": "EntryPoint",
//!     "members": [
//!       { "kind": "Function", "name": "animate", "overloadIndex": 1,
//!         "returnType": "void",
//!         "parameters": [{ "name": "value", "type": "number" }] }
//!     ]
//!   }]
//! }
//! ```
//!
//! [`ErrorKind::UnsupportedKind`]: apiref_foundation::ErrorKind::UnsupportedKind

use serde::Deserialize;

use apiref_foundation::{Error, ErrorKind, ReleaseTag, Result};

use crate::builder::{CONSTRUCTOR_NAME, Declaration, ModelBuilder};
use crate::decl::{
    ConstructorDecl, ContainerDecl, EnumMemberDecl, FunctionDecl, MethodDecl, Parameter,
    PropertyDecl, TypeAliasDecl, TypedDecl,
};
use crate::doc::DocComment;
use crate::node::{ApiModel, NodeId, NodeKind};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonNode {
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    members: Vec<JsonNode>,
    release_tag: Option<ReleaseTag>,
    #[serde(default)]
    is_static: bool,
    #[serde(default)]
    overload_index: u32,
    return_type: Option<String>,
    #[serde(rename = "type")]
    type_text: Option<String>,
    initializer: Option<String>,
    #[serde(default)]
    parameters: Vec<JsonParameter>,
    excerpt: Option<String>,
    docs: Option<DocComment>,
}

#[derive(Debug, Deserialize)]
struct JsonParameter {
    name: String,
    #[serde(rename = "type", default)]
    type_text: String,
}

impl ApiModel {
    /// Loads a model from a nested JSON document.
    ///
    /// Declarations without a `releaseTag` are treated as public.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Deserialize`] for malformed JSON and
    /// [`ErrorKind::UnsupportedKind`] for a node kind outside the closed set.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: JsonNode = serde_json::from_str(json)
            .map_err(|e| Error::new(ErrorKind::Deserialize(e.to_string())))?;
        from_root(&root)
    }

    /// Loads a model from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`ApiModel::from_json_str`].
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let root: JsonNode = serde_json::from_value(value)
            .map_err(|e| Error::new(ErrorKind::Deserialize(e.to_string())))?;
        from_root(&root)
    }
}

fn from_root(root: &JsonNode) -> Result<ApiModel> {
    let mut builder = ModelBuilder::new(declaration(root)?);
    let root_id = builder.root();
    add_members(&mut builder, root_id, root)?;
    Ok(builder.build())
}

fn add_members(builder: &mut ModelBuilder, parent: NodeId, node: &JsonNode) -> Result<()> {
    for member in &node.members {
        let id = builder.add(parent, declaration(member)?);
        add_members(builder, id, member)?;
    }
    Ok(())
}

fn declaration(node: &JsonNode) -> Result<Declaration> {
    let kind = match node.kind.as_str() {
        "Model" => NodeKind::Model,
        "Package" => NodeKind::Package,
        "EntryPoint" => NodeKind::EntryPoint,
        "None" => NodeKind::None,
        "Class" => NodeKind::Class(ContainerDecl::new()),
        "Interface" => NodeKind::Interface(ContainerDecl::new()),
        "Namespace" => NodeKind::Namespace(ContainerDecl::new()),
        "Enum" => NodeKind::Enum(ContainerDecl::new()),
        "EnumMember" => NodeKind::EnumMember(EnumMemberDecl::new(
            node.initializer.clone().unwrap_or_default(),
        )),
        "TypeAlias" => NodeKind::TypeAlias(TypeAliasDecl::new(type_text(node))),
        "Method" => NodeKind::Method(MethodDecl {
            function: function(node),
            is_static: node.is_static,
        }),
        "MethodSignature" => NodeKind::MethodSignature(function(node)),
        "Function" => NodeKind::Function(function(node)),
        "Constructor" => NodeKind::Constructor(ConstructorDecl {
            release_tag: ReleaseTag::Public,
            overload_index: node.overload_index,
            parameters: parameters(node),
        }),
        "ConstructSignature" => NodeKind::ConstructSignature(function(node)),
        "CallSignature" => NodeKind::CallSignature(function(node)),
        "IndexSignature" => NodeKind::IndexSignature(function(node)),
        "Property" => NodeKind::Property(PropertyDecl {
            typed: TypedDecl::new(type_text(node)),
            is_static: node.is_static,
        }),
        "PropertySignature" => NodeKind::PropertySignature(TypedDecl::new(type_text(node))),
        "Variable" => NodeKind::Variable(TypedDecl::new(type_text(node))),
        other => return Err(Error::unsupported_kind(other)),
    };

    let name = if node.name.is_empty()
        && matches!(kind, NodeKind::Constructor(_) | NodeKind::ConstructSignature(_))
    {
        CONSTRUCTOR_NAME.to_string()
    } else {
        node.name.clone()
    };

    let mut decl = Declaration::new(kind, name)
        .with_release_tag(node.release_tag.unwrap_or(ReleaseTag::Public));
    decl.excerpt.clone_from(&node.excerpt);
    decl.docs.clone_from(&node.docs);
    Ok(decl)
}

fn type_text(node: &JsonNode) -> String {
    node.type_text.clone().unwrap_or_default()
}

fn parameters(node: &JsonNode) -> Vec<Parameter> {
    node.parameters
        .iter()
        .map(|p| Parameter::new(p.name.clone(), p.type_text.clone()))
        .collect()
}

fn function(node: &JsonNode) -> FunctionDecl {
    FunctionDecl {
        release_tag: ReleaseTag::Public,
        overload_index: node.overload_index,
        parameters: parameters(node),
        return_type: node.return_type.clone().unwrap_or_else(|| "void".to_string()),
    }
}
