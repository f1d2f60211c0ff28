//! Name resolution against a [`ModelIndex`].
//!
//! Strategies are tried in order and the first one that yields a candidate
//! wins:
//!
//! 1. Canonical or legacy id, as accepted by [`ModelIndex::get`]
//! 2. Dotted path matched against the tail of a record's full name
//! 3. Bare display name
//!
//! Queries are trimmed and lose one trailing `()` first. Within a strategy
//! candidates keep walk order with primary overloads moved to the front,
//! so `myFunction` finds the first overload. A kind hint filters each
//! strategy; when nothing of that kind matches, the next strategy runs.

use std::fmt;

use tracing::{debug, trace};

use apiref_foundation::Kind;
use apiref_walker::RawRecord;

use crate::index::{Entry, ModelIndex};
use crate::selector::Selector;

/// The strategy that produced a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Canonical or legacy id.
    Id,
    /// Dotted path suffix of the full name.
    Path,
    /// Bare display name.
    Name,
}

impl Strategy {
    /// All strategies in the order they are attempted.
    pub const ALL: [Self; 3] = [Self::Id, Self::Path, Self::Name];

    /// Returns the strategy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Path => "path",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every candidate found by the first successful strategy.
#[derive(Clone, Debug)]
pub struct Resolution<'a> {
    /// The strategy that matched.
    pub strategy: Strategy,
    /// Candidates, best first.
    pub candidates: Vec<&'a RawRecord>,
}

impl<'a> Resolution<'a> {
    /// The best candidate.
    #[must_use]
    pub fn best(&self) -> Option<&'a RawRecord> {
        self.candidates.first().copied()
    }

    /// Returns true if more than one candidate matched.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}

/// Resolves author-written names to records.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    index: &'a ModelIndex,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over `index`.
    #[must_use]
    pub fn new(index: &'a ModelIndex) -> Self {
        Self { index }
    }

    /// Resolves `query` to a single record.
    ///
    /// A kind hint also filters exact id matches, so an id paired with a
    /// hint of a different kind is a miss.
    #[must_use]
    pub fn resolve(&self, query: &str, kind_hint: Option<Kind>) -> Option<&'a RawRecord> {
        self.resolve_all(query, kind_hint)
            .and_then(|resolution| resolution.best())
    }

    /// Resolves `query` and returns every candidate of the first strategy
    /// that matched.
    #[must_use]
    pub fn resolve_all(&self, query: &str, kind_hint: Option<Kind>) -> Option<Resolution<'a>> {
        let selector = Selector::parse(query);
        if selector.is_empty() {
            return None;
        }

        for strategy in Strategy::ALL {
            let mut entries = self.candidates(strategy, &selector);
            if let Some(kind) = kind_hint {
                entries.retain(|e| e.record.kind == kind);
            }
            if entries.is_empty() {
                continue;
            }

            // Stable, so walk order holds among primaries and among the rest.
            entries.sort_by_key(|e| !e.primary);
            trace!(
                query,
                strategy = %strategy,
                candidates = entries.len(),
                id = %entries[0].record.id,
                "resolved"
            );
            return Some(Resolution {
                strategy,
                candidates: entries.into_iter().map(|e| &e.record).collect(),
            });
        }

        debug!(query, hint = ?kind_hint, "no record matches");
        None
    }

    fn candidates(&self, strategy: Strategy, selector: &Selector) -> Vec<&'a Entry> {
        let query = selector.as_str();
        match strategy {
            Strategy::Id => self.index.get_entry(query).into_iter().collect(),
            Strategy::Path => self
                .index
                .entries()
                .filter(|e| is_path_suffix(&e.fullname_key, query))
                .collect(),
            Strategy::Name => self
                .index
                .entries()
                .filter(|e| e.name_key == query)
                .collect(),
        }
    }
}

impl ModelIndex {
    /// Resolves `query` to a single record. See [`Resolver::resolve`].
    #[must_use]
    pub fn resolve(&self, query: &str, kind_hint: Option<Kind>) -> Option<&RawRecord> {
        Resolver::new(self).resolve(query, kind_hint)
    }
}

/// Returns true if `path` equals `suffix` or ends with `.` followed by it.
fn is_path_suffix(path: &str, suffix: &str) -> bool {
    path.strip_suffix(suffix)
        .is_some_and(|head| head.is_empty() || head.ends_with('.'))
}
