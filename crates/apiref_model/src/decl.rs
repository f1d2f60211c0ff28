//! Payloads carried by record-bearing declaration kinds.
//!
//! New payloads default to [`ReleaseTag::Public`].

use apiref_foundation::ReleaseTag;

use crate::capability::{ParameterList, ReleaseTagged, ReturnTyped, StaticMember};

// =============================================================================
// Parameter
// =============================================================================

/// A parameter of a function-like declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name as declared.
    pub name: String,
    /// Declared type text.
    pub type_text: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
        }
    }
}

// =============================================================================
// Containers
// =============================================================================

/// Payload for classes, interfaces, namespaces, and enums.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerDecl {
    /// Declared release tag.
    pub release_tag: ReleaseTag,
}

impl ContainerDecl {
    /// Creates a public container payload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            release_tag: ReleaseTag::Public,
        }
    }
}

impl Default for ContainerDecl {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseTagged for ContainerDecl {
    fn release_tag(&self) -> ReleaseTag {
        self.release_tag
    }
}

/// Payload for enum members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumMemberDecl {
    /// Declared release tag.
    pub release_tag: ReleaseTag,
    /// Literal initializer text, e.g. `"a"` or `2`.
    pub initializer: String,
}

impl EnumMemberDecl {
    /// Creates an enum member payload with the given initializer.
    #[must_use]
    pub fn new(initializer: impl Into<String>) -> Self {
        Self {
            release_tag: ReleaseTag::Public,
            initializer: initializer.into(),
        }
    }
}

impl ReleaseTagged for EnumMemberDecl {
    fn release_tag(&self) -> ReleaseTag {
        self.release_tag
    }
}

/// Payload for type aliases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAliasDecl {
    /// Declared release tag.
    pub release_tag: ReleaseTag,
    /// The aliased type text.
    pub type_text: String,
}

impl TypeAliasDecl {
    /// Creates a type alias payload.
    #[must_use]
    pub fn new(type_text: impl Into<String>) -> Self {
        Self {
            release_tag: ReleaseTag::Public,
            type_text: type_text.into(),
        }
    }
}

impl ReleaseTagged for TypeAliasDecl {
    fn release_tag(&self) -> ReleaseTag {
        self.release_tag
    }
}

// =============================================================================
// Function-like
// =============================================================================

/// Payload for functions, method signatures, and call/construct/index signatures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Declared release tag.
    pub release_tag: ReleaseTag,
    /// Position among same-named overloads.
    pub overload_index: u32,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Declared return type text.
    pub return_type: String,
}

impl FunctionDecl {
    /// Creates a function payload with the given return type and no parameters.
    #[must_use]
    pub fn new(return_type: impl Into<String>) -> Self {
        Self {
            release_tag: ReleaseTag::Public,
            overload_index: 0,
            parameters: Vec::new(),
            return_type: return_type.into(),
        }
    }

    /// Sets the overload index.
    #[must_use]
    pub fn with_overload_index(mut self, index: u32) -> Self {
        self.overload_index = index;
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

impl ReleaseTagged for FunctionDecl {
    fn release_tag(&self) -> ReleaseTag {
        self.release_tag
    }
}

impl ParameterList for FunctionDecl {
    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn overload_index(&self) -> u32 {
        self.overload_index
    }
}

impl ReturnTyped for FunctionDecl {
    fn return_type(&self) -> &str {
        &self.return_type
    }
}

/// Payload for class methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDecl {
    /// The callable part of the method.
    pub function: FunctionDecl,
    /// Whether the method is static.
    pub is_static: bool,
}

impl MethodDecl {
    /// Creates an instance method payload.
    #[must_use]
    pub fn instance(function: FunctionDecl) -> Self {
        Self {
            function,
            is_static: false,
        }
    }

    /// Creates a static method payload.
    #[must_use]
    pub fn static_method(function: FunctionDecl) -> Self {
        Self {
            function,
            is_static: true,
        }
    }
}

impl ReleaseTagged for MethodDecl {
    fn release_tag(&self) -> ReleaseTag {
        self.function.release_tag
    }
}

impl ParameterList for MethodDecl {
    fn parameters(&self) -> &[Parameter] {
        &self.function.parameters
    }

    fn overload_index(&self) -> u32 {
        self.function.overload_index
    }
}

impl ReturnTyped for MethodDecl {
    fn return_type(&self) -> &str {
        &self.function.return_type
    }
}

impl StaticMember for MethodDecl {
    fn is_static(&self) -> bool {
        self.is_static
    }
}

/// Payload for class constructors. Constructors declare no return type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorDecl {
    /// Declared release tag.
    pub release_tag: ReleaseTag,
    /// Position among constructor overloads.
    pub overload_index: u32,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

impl ConstructorDecl {
    /// Creates a constructor payload with no parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            release_tag: ReleaseTag::Public,
            overload_index: 0,
            parameters: Vec::new(),
        }
    }

    /// Sets the overload index.
    #[must_use]
    pub fn with_overload_index(mut self, index: u32) -> Self {
        self.overload_index = index;
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

impl Default for ConstructorDecl {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseTagged for ConstructorDecl {
    fn release_tag(&self) -> ReleaseTag {
        self.release_tag
    }
}

impl ParameterList for ConstructorDecl {
    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn overload_index(&self) -> u32 {
        self.overload_index
    }
}

// =============================================================================
// Typed members
// =============================================================================

/// Payload for property signatures and variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedDecl {
    /// Declared release tag.
    pub release_tag: ReleaseTag,
    /// Declared type text.
    pub type_text: String,
}

impl TypedDecl {
    /// Creates a typed payload.
    #[must_use]
    pub fn new(type_text: impl Into<String>) -> Self {
        Self {
            release_tag: ReleaseTag::Public,
            type_text: type_text.into(),
        }
    }
}

impl ReleaseTagged for TypedDecl {
    fn release_tag(&self) -> ReleaseTag {
        self.release_tag
    }
}

/// Payload for class properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDecl {
    /// The typed part of the property.
    pub typed: TypedDecl,
    /// Whether the property is static.
    pub is_static: bool,
}

impl PropertyDecl {
    /// Creates an instance property payload.
    #[must_use]
    pub fn instance(type_text: impl Into<String>) -> Self {
        Self {
            typed: TypedDecl::new(type_text),
            is_static: false,
        }
    }

    /// Creates a static property payload.
    #[must_use]
    pub fn static_property(type_text: impl Into<String>) -> Self {
        Self {
            typed: TypedDecl::new(type_text),
            is_static: true,
        }
    }
}

impl ReleaseTagged for PropertyDecl {
    fn release_tag(&self) -> ReleaseTag {
        self.typed.release_tag
    }
}

impl StaticMember for PropertyDecl {
    fn is_static(&self) -> bool {
        self.is_static
    }
}
