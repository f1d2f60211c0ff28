//! Canonical identifiers.
//!
//! Ids follow the declaration reference syntax authors use in inline
//! links: one parenthesized segment per ancestor, joined with `.` and
//! lowercased.
//!
//! | Kind | Segment |
//! |---|---|
//! | Class, Interface, Enum, Namespace | `(name:class)` etc. |
//! | Constructor | `(Owner:constructor)` or `(Owner:constructor,N)` |
//! | Function | `(name:function)` or `(name:N)` |
//! | Method | `(name:instance)` / `(name:static)`, `,N` when overloaded |
//! | MethodSignature | `(name:N)` |
//! | Property | `(name:instance)` / `(name:static)` |
//! | PropertySignature, EnumMember, TypeAlias | `name` |
//! | Variable | `(name:variable)` |
//! | Construct/Call/Index signature | `(:new,N)` / `(:call,N)` / `(:index,N)` |
//!
//! The chain stops before the first structural ancestor. A constructor's
//! segment already names its class, so the class is skipped when moving
//! up from a constructor.

use apiref_foundation::{Error, Result};
use apiref_model::{NodeKind, NodeRef, StaticMember};

/// Returns the reference segment for a single node.
///
/// # Errors
///
/// Returns `StructuralKind` for kinds that never appear in ids and
/// `MissingOwner` for a constructor without a parent.
pub fn reference_segment(node: NodeRef<'_>) -> Result<String> {
    let name = node.name();
    let segment = match node.kind() {
        NodeKind::Model | NodeKind::Package | NodeKind::EntryPoint | NodeKind::None => {
            return Err(Error::structural_kind(node.kind().name()));
        }
        NodeKind::Class(_) => format!("({name}:class)"),
        NodeKind::Interface(_) => format!("({name}:interface)"),
        NodeKind::Enum(_) => format!("({name}:enum)"),
        NodeKind::Namespace(_) => format!("({name}:namespace)"),
        NodeKind::Constructor(decl) => {
            let owner = node
                .parent()
                .ok_or_else(|| Error::missing_owner(node.kind().name(), name))?;
            match decl.overload_index {
                0 => format!("({}:constructor)", owner.name()),
                n => format!("({}:constructor,{n})", owner.name()),
            }
        }
        NodeKind::Function(decl) => match decl.overload_index {
            0 => format!("({name}:function)"),
            n => format!("({name}:{n})"),
        },
        NodeKind::Method(decl) => {
            let scope = static_word(decl);
            match decl.function.overload_index {
                0 => format!("({name}:{scope})"),
                n => format!("({name}:{scope},{n})"),
            }
        }
        NodeKind::MethodSignature(decl) => format!("({name}:{})", decl.overload_index),
        NodeKind::Property(decl) => format!("({name}:{})", static_word(decl)),
        NodeKind::PropertySignature(_) | NodeKind::EnumMember(_) | NodeKind::TypeAlias(_) => {
            name.to_string()
        }
        NodeKind::Variable(_) => format!("({name}:variable)"),
        NodeKind::ConstructSignature(decl) => format!("(:new,{})", decl.overload_index),
        NodeKind::CallSignature(decl) => format!("(:call,{})", decl.overload_index),
        NodeKind::IndexSignature(decl) => format!("(:index,{})", decl.overload_index),
    };
    Ok(segment)
}

/// Computes the canonical id of a record-bearing node.
///
/// # Errors
///
/// Returns `StructuralKind` when `node` itself is structural, or any error
/// raised by [`reference_segment`] for a node on the ancestor chain.
pub fn canonical_id(node: NodeRef<'_>) -> Result<String> {
    if node.kind().is_structural() {
        return Err(Error::structural_kind(node.kind().name()));
    }

    let mut segments = Vec::new();
    let mut current = Some(node);
    while let Some(n) = current {
        if n.kind().is_structural() {
            break;
        }
        segments.push(reference_segment(n)?);
        current = match n.kind() {
            NodeKind::Constructor(_) => n.parent().and_then(NodeRef::parent),
            _ => n.parent(),
        };
    }

    segments.reverse();
    Ok(segments.join(".").to_lowercase())
}

/// Computes the id of a node's parent record, or `None` when the parent is
/// structural or absent.
///
/// # Errors
///
/// Propagates errors from [`canonical_id`] for the parent.
pub fn parent_id(node: NodeRef<'_>) -> Result<Option<String>> {
    match node.parent() {
        Some(parent) if !parent.kind().is_structural() => canonical_id(parent).map(Some),
        _ => Ok(None),
    }
}

/// Builds the id of a parameter record from its owner's id.
#[must_use]
pub fn parameter_id(owner_id: &str, parameter: &str) -> String {
    format!("{owner_id}.({parameter}:parameter)").to_lowercase()
}

fn static_word(member: &dyn StaticMember) -> &'static str {
    if member.is_static() { "static" } else { "instance" }
}
