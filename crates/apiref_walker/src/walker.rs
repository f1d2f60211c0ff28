//! Depth-first traversal of a declaration tree.
//!
//! Nodes are visited in pre-order following declaration order. For each
//! visited node the walker emits its record (if its kind has one), then the
//! records of its members, then one record per parameter. A node tagged
//! below the configured minimum is skipped together with its subtree.

use tracing::{debug, trace};

use apiref_foundation::{Error, ErrorContext, ReleaseTag, Result};
use apiref_model::NodeRef;

use crate::config::WalkConfig;
use crate::mapper::RecordMapper;
use crate::record::RawRecord;
use crate::render::{MarkupRenderer, PlainTextRenderer};

/// Counters reported at the end of a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Records passed to the emitter, parameters included.
    pub records: usize,
    /// Subtrees skipped for being below the minimum release tag.
    pub skipped: usize,
}

/// Walks declaration trees and emits flat records.
#[derive(Clone, Debug)]
pub struct Walker<R = PlainTextRenderer> {
    config: WalkConfig,
    renderer: R,
}

impl Walker {
    /// Creates a walker that renders documentation as plain text.
    #[must_use]
    pub fn new(config: WalkConfig) -> Self {
        Self::with_renderer(config, PlainTextRenderer)
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new(WalkConfig::default())
    }
}

impl<R: MarkupRenderer> Walker<R> {
    /// Creates a walker with a custom documentation renderer.
    #[must_use]
    pub fn with_renderer(config: WalkConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// The walk configuration.
    #[must_use]
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Walks the subtree rooted at `root`, passing each record to `emit`.
    ///
    /// # Errors
    ///
    /// Aborts on the first node whose record cannot be built. The error
    /// carries the node's display path and its enclosing declarations.
    pub fn walk(&self, root: NodeRef<'_>, mut emit: impl FnMut(RawRecord)) -> Result<WalkStats> {
        let mapper = RecordMapper::new(&self.config.custom_blocks, &self.renderer);
        let mut stats = WalkStats::default();
        self.visit(&mapper, root, &mut emit, &mut stats)?;
        debug!(
            records = stats.records,
            skipped = stats.skipped,
            minimum = %self.config.minimum_release_tag,
            "walk finished"
        );
        Ok(stats)
    }

    /// Walks the subtree rooted at `root` and returns the records in walk order.
    ///
    /// # Errors
    ///
    /// Same as [`Walker::walk`].
    pub fn collect(&self, root: NodeRef<'_>) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();
        self.walk(root, |record| records.push(record))?;
        Ok(records)
    }

    fn visit(
        &self,
        mapper: &RecordMapper<'_>,
        node: NodeRef<'_>,
        emit: &mut dyn FnMut(RawRecord),
        stats: &mut WalkStats,
    ) -> Result<()> {
        if let Some(tag) = node.kind().release_tag() {
            if !tag.is_visible_at(self.config.minimum_release_tag) {
                trace!(name = node.name(), tag = %tag, "skipping subtree");
                stats.skipped += 1;
                return Ok(());
            }
        }

        if let Some(record) = mapper.map(node).map_err(|e| attach_context(e, node))? {
            trace!(id = %record.id, "emit");
            stats.records += 1;
            emit(record);
        }

        for member in node.members() {
            self.visit(mapper, member, emit, stats)?;
        }

        for record in mapper
            .map_parameters(node)
            .map_err(|e| attach_context(e, node))?
        {
            trace!(id = %record.id, "emit parameter");
            stats.records += 1;
            emit(record);
        }
        Ok(())
    }
}

/// Walks `root` with the default renderer and custom block tags.
///
/// # Errors
///
/// Same as [`Walker::walk`].
pub fn walk(
    root: NodeRef<'_>,
    minimum: ReleaseTag,
    emit: impl FnMut(RawRecord),
) -> Result<WalkStats> {
    Walker::new(WalkConfig::default().with_minimum_release_tag(minimum)).walk(root, emit)
}

fn attach_context(err: Error, node: NodeRef<'_>) -> Error {
    if err.context.is_some() {
        return err;
    }
    let mut context = ErrorContext::new().with_node(node.scoped_name());
    let mut current = node.parent();
    while let Some(ancestor) = current {
        context = context.with_frame(format!("{} '{}'", ancestor.kind().name(), ancestor.name()));
        current = ancestor.parent();
    }
    err.with_context(context)
}
