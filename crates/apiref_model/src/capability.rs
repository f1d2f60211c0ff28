//! Capability traits implemented by declaration payloads.
//!
//! Not every declaration carries every facet. Callers ask a [`NodeKind`]
//! for the capability they need (see [`NodeKind::as_release_tagged`] and
//! friends) and handle its absence at the point of use.
//!
//! [`NodeKind`]: crate::NodeKind
//! [`NodeKind::as_release_tagged`]: crate::NodeKind::as_release_tagged

use apiref_foundation::ReleaseTag;

use crate::decl::Parameter;

/// A declaration that carries a release tag.
pub trait ReleaseTagged {
    /// The declared release tag.
    fn release_tag(&self) -> ReleaseTag;
}

/// A declaration that carries an ordered parameter list.
pub trait ParameterList {
    /// Parameters in declaration order.
    fn parameters(&self) -> &[Parameter];

    /// Position of this declaration among same-named overloads.
    fn overload_index(&self) -> u32;
}

/// A member that may be declared `static`.
pub trait StaticMember {
    /// Whether the member is static.
    fn is_static(&self) -> bool;
}

/// A callable with a declared return type.
pub trait ReturnTyped {
    /// The return type text.
    fn return_type(&self) -> &str;
}
