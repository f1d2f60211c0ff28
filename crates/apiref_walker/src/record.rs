//! Flat documentation records.
//!
//! A [`RawRecord`] stands alone: container kinds list the ids of their
//! members rather than nesting them, and consumers rebuild hierarchy by
//! looking ids up in an index.

use apiref_foundation::{Kind, ReleaseTag};

/// Rendered documentation fields of a record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DocMarkup {
    /// Rendered summary section.
    pub summary: Option<String>,
    /// Rendered `@remarks` block.
    pub remarks: Option<String>,
    /// Rendered `@deprecated` block.
    pub deprecated: Option<String>,
    /// Rendered prototype audience block.
    pub prototype: Option<String>,
    /// Rendered production audience block.
    pub production: Option<String>,
}

impl DocMarkup {
    /// Returns true if no documentation field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.remarks.is_none()
            && self.deprecated.is_none()
            && self.prototype.is_none()
            && self.production.is_none()
    }
}

/// Fields shared by constructors, methods, and functions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MethodDetail {
    /// Position among same-named overloads.
    pub overload_index: u32,
    /// Ids of the other overloads, in declaration order.
    pub overloads: Vec<String>,
    /// Ids of the parameter records, in declaration order.
    pub parameters: Vec<String>,
    /// Whether the member is static.
    pub is_static: bool,
    /// Declared return type, `void` when the kind declares none.
    pub return_type: String,
    /// Rendered `@returns` block.
    pub return_markup: Option<String>,
}

/// Kind-specific record fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RecordDetail {
    /// Classes and interfaces.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Container {
        /// Id of the first constructor or construct signature.
        constructor: Option<String>,
        /// Ids of property members.
        properties: Vec<String>,
        /// Ids of primary method overloads.
        methods: Vec<String>,
    },
    /// Constructors, methods, and functions.
    Method(MethodDetail),
    /// Enums.
    Enum {
        /// Ids of the enum members.
        fields: Vec<String>,
    },
    /// Namespaces.
    Namespace {
        /// Ids of every direct member.
        members: Vec<String>,
    },
    /// Properties, variables, enum members, and parameters.
    Typed {
        /// Declared type, or an enum member's initializer.
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        type_text: String,
    },
    /// Type aliases.
    Plain,
}

/// One flattened documentation entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawRecord {
    /// Canonical lowercase id.
    pub id: String,
    /// Id of the enclosing record.
    pub parent_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Dotted display path.
    pub fullname: String,
    /// Record kind.
    pub kind: Kind,
    /// Declared release tag, [`ReleaseTag::None`] when the kind carries none.
    pub release_tag: ReleaseTag,
    /// Lowercase visibility word, `public` when the kind carries no tag.
    pub visibility: String,
    /// Formatted signature.
    pub signature: Option<String>,
    /// Rendered documentation.
    pub docs: DocMarkup,
    /// Kind-specific fields.
    pub detail: RecordDetail,
}

impl RawRecord {
    /// Method details for function-like records.
    #[must_use]
    pub fn method(&self) -> Option<&MethodDetail> {
        match &self.detail {
            RecordDetail::Method(detail) => Some(detail),
            _ => None,
        }
    }

    /// Ids of the other overloads. Empty for non-function records.
    #[must_use]
    pub fn overloads(&self) -> &[String] {
        self.method()
            .map(|m| m.overloads.as_slice())
            .unwrap_or_default()
    }

    /// The overload index of function-like records.
    #[must_use]
    pub fn overload_index(&self) -> Option<u32> {
        self.method().map(|m| m.overload_index)
    }

    /// Declared type text of typed records.
    #[must_use]
    pub fn type_text(&self) -> Option<&str> {
        match &self.detail {
            RecordDetail::Typed { type_text } => Some(type_text),
            _ => None,
        }
    }

    /// Ids this record lists as its members, in declaration order.
    ///
    /// Covers container constructors, properties, methods, enum fields,
    /// namespace members, and method parameters.
    #[must_use]
    pub fn member_ids(&self) -> Vec<&str> {
        match &self.detail {
            RecordDetail::Container {
                constructor,
                properties,
                methods,
            } => constructor
                .iter()
                .chain(properties)
                .chain(methods)
                .map(String::as_str)
                .collect(),
            RecordDetail::Method(m) => m.parameters.iter().map(String::as_str).collect(),
            RecordDetail::Enum { fields } => fields.iter().map(String::as_str).collect(),
            RecordDetail::Namespace { members } => members.iter().map(String::as_str).collect(),
            RecordDetail::Typed { .. } | RecordDetail::Plain => Vec::new(),
        }
    }
}
