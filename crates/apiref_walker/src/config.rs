//! Configuration for a walk.

use apiref_foundation::ReleaseTag;

/// The two custom block tags rendered into audience-specific markup.
///
/// Tags are compared by their upper-cased form, so `@Motion` and `@MOTION`
/// both match the default production tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomBlockTags {
    /// Tag whose content fills `prototype_markup`.
    pub prototype: String,
    /// Tag whose content fills `production_markup`.
    pub production: String,
}

impl Default for CustomBlockTags {
    fn default() -> Self {
        Self {
            prototype: "@library".to_string(),
            production: "@motion".to_string(),
        }
    }
}

impl CustomBlockTags {
    /// Creates a tag pair.
    #[must_use]
    pub fn new(prototype: impl Into<String>, production: impl Into<String>) -> Self {
        Self {
            prototype: prototype.into(),
            production: production.into(),
        }
    }
}

/// Configuration for the tree walker.
///
/// Controls which declarations are visited and which custom blocks are
/// picked out of documentation comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkConfig {
    /// Declarations tagged below this are skipped along with their subtree.
    pub minimum_release_tag: ReleaseTag,

    /// Custom block tags recognized in documentation comments.
    pub custom_blocks: CustomBlockTags,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            minimum_release_tag: ReleaseTag::Public,
            custom_blocks: CustomBlockTags::default(),
        }
    }
}

impl WalkConfig {
    /// Creates a configuration that visits public declarations only.
    #[must_use]
    pub fn public() -> Self {
        Self::default()
    }

    /// Creates a configuration that visits every declaration.
    #[must_use]
    pub fn all() -> Self {
        Self {
            minimum_release_tag: ReleaseTag::None,
            ..Self::default()
        }
    }

    /// Builder method to set the minimum release tag.
    #[must_use]
    pub fn with_minimum_release_tag(mut self, tag: ReleaseTag) -> Self {
        self.minimum_release_tag = tag;
        self
    }

    /// Builder method to set the custom block tags.
    #[must_use]
    pub fn with_custom_blocks(mut self, tags: CustomBlockTags) -> Self {
        self.custom_blocks = tags;
        self
    }
}
