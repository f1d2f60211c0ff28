//! Record kinds.

use std::fmt;

/// The kind of a flat documentation record.
///
/// Structural tree kinds (package, entry point, call signatures, ...) never
/// materialize as records and therefore have no variant here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// A class declaration.
    Class,
    /// An interface declaration.
    Interface,
    /// A namespace declaration.
    Namespace,
    /// An enum declaration.
    Enum,
    /// A member of an enum.
    EnumMember,
    /// A class method.
    Method,
    /// An interface method.
    MethodSignature,
    /// A free function.
    Function,
    /// A class constructor.
    Constructor,
    /// An interface construct signature.
    ConstructSignature,
    /// A class property.
    Property,
    /// An interface property.
    PropertySignature,
    /// A variable.
    Variable,
    /// A type alias.
    TypeAlias,
    /// A parameter of a function-like declaration.
    Parameter,
}

impl Kind {
    /// Returns the kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::Namespace => "Namespace",
            Self::Enum => "Enum",
            Self::EnumMember => "EnumMember",
            Self::Method => "Method",
            Self::MethodSignature => "MethodSignature",
            Self::Function => "Function",
            Self::Constructor => "Constructor",
            Self::ConstructSignature => "ConstructSignature",
            Self::Property => "Property",
            Self::PropertySignature => "PropertySignature",
            Self::Variable => "Variable",
            Self::TypeAlias => "TypeAlias",
            Self::Parameter => "Parameter",
        }
    }

    /// Returns true for kinds that declare a callable with parameters.
    #[must_use]
    pub const fn is_function_like(self) -> bool {
        matches!(
            self,
            Self::Method
                | Self::MethodSignature
                | Self::Function
                | Self::Constructor
                | Self::ConstructSignature
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
