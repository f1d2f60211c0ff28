//! Structured documentation comments.
//!
//! A [`DocComment`] holds the already-parsed sections of a declaration's
//! comment. Turning sections into markup is the job of a renderer supplied
//! by the caller.

/// One inline piece of documentation content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum DocNode {
    /// Plain text.
    Text {
        /// The text content.
        text: String,
    },
    /// An inline code span.
    Code {
        /// The code content.
        code: String,
    },
    /// An inline reference, e.g. `{@link MyClass.myMethod | the method}`.
    Link {
        /// The reference target as written by the author.
        target: String,
        /// Optional link text.
        #[cfg_attr(feature = "serde", serde(default))]
        text: Option<String>,
    },
    /// A paragraph break.
    Paragraph,
}

/// An ordered run of documentation content.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(from = "SectionRepr"))]
pub struct DocSection {
    /// Content nodes in order.
    pub nodes: Vec<DocNode>,
}

impl DocSection {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a section holding a single text node, or an empty section for empty text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::new();
        }
        Self {
            nodes: vec![DocNode::Text { text }],
        }
    }

    /// Appends a node.
    #[must_use]
    pub fn with_node(mut self, node: DocNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Returns true if the section has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl From<&str> for DocSection {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

/// Sections may be written in JSON either as a plain string or as a node list.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum SectionRepr {
    Text(String),
    Nodes(Vec<DocNode>),
    Struct { nodes: Vec<DocNode> },
}

#[cfg(feature = "serde")]
impl From<SectionRepr> for DocSection {
    fn from(repr: SectionRepr) -> Self {
        match repr {
            SectionRepr::Text(text) => Self::text(text),
            SectionRepr::Nodes(nodes) | SectionRepr::Struct { nodes } => Self { nodes },
        }
    }
}

/// A `@param` block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ParamBlock {
    /// The parameter name as parsed from the block.
    ///
    /// A block missing the `-` delimiter yields a name that does not match
    /// any parameter.
    pub name: String,
    /// The block content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: DocSection,
}

impl ParamBlock {
    /// Creates a new param block.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<DocSection>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A custom block tag such as `@motion`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CustomBlock {
    /// Tag name including the leading `@`.
    pub tag: String,
    /// The block content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: DocSection,
}

impl CustomBlock {
    /// Creates a new custom block.
    #[must_use]
    pub fn new(tag: impl Into<String>, content: impl Into<DocSection>) -> Self {
        Self {
            tag: tag.into(),
            content: content.into(),
        }
    }

    /// Returns true if this block's tag matches `tag` ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.to_uppercase() == tag.to_uppercase()
    }
}

/// A parsed documentation comment.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DocComment {
    /// Summary section.
    pub summary: DocSection,
    /// `@remarks` block.
    pub remarks: Option<DocSection>,
    /// `@deprecated` block.
    pub deprecated: Option<DocSection>,
    /// `@returns` block.
    pub returns: Option<DocSection>,
    /// `@param` blocks in comment order.
    pub params: Vec<ParamBlock>,
    /// Custom blocks in comment order.
    pub custom_blocks: Vec<CustomBlock>,
}

impl DocComment {
    /// Creates a comment with only a summary.
    #[must_use]
    pub fn new(summary: impl Into<DocSection>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Sets the remarks block.
    #[must_use]
    pub fn with_remarks(mut self, remarks: impl Into<DocSection>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Sets the deprecated block.
    #[must_use]
    pub fn with_deprecated(mut self, deprecated: impl Into<DocSection>) -> Self {
        self.deprecated = Some(deprecated.into());
        self
    }

    /// Sets the returns block.
    #[must_use]
    pub fn with_returns(mut self, returns: impl Into<DocSection>) -> Self {
        self.returns = Some(returns.into());
        self
    }

    /// Appends a `@param` block.
    #[must_use]
    pub fn with_param(mut self, block: ParamBlock) -> Self {
        self.params.push(block);
        self
    }

    /// Appends a custom block.
    #[must_use]
    pub fn with_custom_block(mut self, block: CustomBlock) -> Self {
        self.custom_blocks.push(block);
        self
    }

    /// Returns the first custom block whose upper-cased tag equals `tag` upper-cased.
    #[must_use]
    pub fn custom_block(&self, tag: &str) -> Option<&CustomBlock> {
        self.custom_blocks.iter().find(|b| b.has_tag(tag))
    }

    /// Returns the `@param` block documenting `name`, if it has content.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamBlock> {
        self.params
            .iter()
            .find(|b| b.name == name && !b.content.is_empty())
    }
}
