//! Release tags marking the visibility and maturity of a declaration.

use std::fmt;

/// Visibility/maturity marker attached to a declaration.
///
/// Variants are declared in ascending order, so the derived `Ord` gives
/// `None < Internal < Alpha < Beta < Public`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReleaseTag {
    /// No release tag was declared.
    #[default]
    None,
    /// Internal to the package.
    Internal,
    /// Early preview.
    Alpha,
    /// Feature complete, may still change.
    Beta,
    /// Stable public API.
    Public,
}

impl ReleaseTag {
    /// All tags in ascending order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Internal,
        Self::Alpha,
        Self::Beta,
        Self::Public,
    ];

    /// Returns the lowercase visibility word for this tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Internal => "internal",
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Public => "public",
        }
    }

    /// Returns true if a declaration with this tag is visible at `minimum`.
    #[must_use]
    pub fn is_visible_at(self, minimum: Self) -> bool {
        self >= minimum
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
