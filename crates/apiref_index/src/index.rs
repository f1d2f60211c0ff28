//! The id-keyed record index.
//!
//! A [`ModelIndex`] is built once from the records of a walk and never
//! changes afterwards. Records live behind [`Arc`] in persistent `im`
//! collections, so cloning an index is cheap and clones can be handed to
//! other threads.

use std::sync::Arc;

use tracing::{debug, warn};

use apiref_foundation::{Error, Result};
use apiref_model::ApiModel;
use apiref_walker::{RawRecord, WalkConfig, Walker};

use crate::selector::{legacy_segment, split_segments};

/// A record plus the lowercased keys used by name resolution.
#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) record: RawRecord,
    pub(crate) fullname_key: String,
    pub(crate) name_key: String,
    pub(crate) primary: bool,
}

/// Records of one snapshot, addressable by canonical id.
#[derive(Clone, Debug, Default)]
pub struct ModelIndex {
    entries: im::Vector<Arc<Entry>>,
    by_id: im::HashMap<String, usize>,
}

impl ModelIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from records in walk order.
    ///
    /// When two records share an id the first one wins and the duplicate is
    /// logged.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = RawRecord>) -> Self {
        let mut kept = Vec::new();
        let mut by_id = im::HashMap::new();
        for record in records {
            if by_id.contains_key(&record.id) {
                warn!(id = %record.id, "dropping record with duplicate id");
                continue;
            }
            by_id.insert(record.id.clone(), kept.len());
            kept.push(record);
        }
        Self::assemble(kept, by_id)
    }

    /// Builds an index from records in walk order, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` naming the first repeated id.
    pub fn try_from_records(records: impl IntoIterator<Item = RawRecord>) -> Result<Self> {
        let mut kept = Vec::new();
        let mut by_id = im::HashMap::new();
        for record in records {
            if by_id.contains_key(&record.id) {
                return Err(Error::duplicate_id(record.id));
            }
            by_id.insert(record.id.clone(), kept.len());
            kept.push(record);
        }
        Ok(Self::assemble(kept, by_id))
    }

    /// Walks `model` with `config` and indexes the result.
    ///
    /// # Errors
    ///
    /// Propagates walk errors.
    pub fn from_model(model: &ApiModel, config: &WalkConfig) -> Result<Self> {
        let records = Walker::new(config.clone()).collect(model.root())?;
        Ok(Self::from_records(records))
    }

    fn assemble(records: Vec<RawRecord>, by_id: im::HashMap<String, usize>) -> Self {
        let overload_index = |id: &String| {
            by_id
                .get(id)
                .and_then(|&i| records.get(i))
                .and_then(RawRecord::overload_index)
        };
        let primaries: Vec<bool> = records
            .iter()
            .map(|r| match r.overload_index() {
                Some(own) => r
                    .overloads()
                    .iter()
                    .filter_map(overload_index)
                    .all(|other| other >= own),
                None => true,
            })
            .collect();

        let entries: im::Vector<Arc<Entry>> = records
            .into_iter()
            .zip(primaries)
            .map(|(record, primary)| {
                Arc::new(Entry {
                    fullname_key: record.fullname.to_lowercase(),
                    name_key: record.name.to_lowercase(),
                    record,
                    primary,
                })
            })
            .collect();

        debug!(records = entries.len(), "index built");
        Self { entries, by_id }
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates records in walk order.
    pub fn iter(&self) -> impl Iterator<Item = &RawRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().map(AsRef::as_ref)
    }

    /// Looks up an exact, already-lowercased id.
    pub(crate) fn lookup(&self, id: &str) -> Option<&Entry> {
        self.by_id
            .get(id)
            .and_then(|&i| self.entries.get(i))
            .map(AsRef::as_ref)
    }

    /// Returns the record with the given canonical id.
    ///
    /// The id is compared lowercased. Legacy spellings are accepted for
    /// segments whose exact form is not indexed: `(name:instance)`,
    /// `(name:static)` and `(name:constructor)` stand for their `,1`
    /// overload, and `(name:function)` stands for `(name:1)`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RawRecord> {
        self.get_entry(id).map(|e| &e.record)
    }

    pub(crate) fn get_entry(&self, id: &str) -> Option<&Entry> {
        let id = id.trim().to_lowercase();
        if let Some(entry) = self.lookup(&id) {
            return Some(entry);
        }

        let mut prefix = String::new();
        for segment in split_segments(&id) {
            let exact = join(&prefix, segment);
            if self.by_id.contains_key(&exact) {
                prefix = exact;
                continue;
            }
            prefix = legacy_segment(segment)
                .map(|alias| join(&prefix, &alias))
                .filter(|aliased| self.by_id.contains_key(aliased))
                .unwrap_or(exact);
        }
        self.lookup(&prefix)
    }

    /// Records whose parent id is `id`, in walk order.
    #[must_use]
    pub fn children(&self, id: &str) -> Vec<&RawRecord> {
        let id = id.to_lowercase();
        self.iter()
            .filter(|r| r.parent_id.as_deref() == Some(id.as_str()))
            .collect()
    }

    /// Ids starting with `prefix` (compared lowercased), in walk order.
    #[must_use]
    pub fn completions(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.iter()
            .map(|r| r.id.as_str())
            .filter(|id| id.starts_with(&prefix))
            .collect()
    }
}

impl FromIterator<RawRecord> for ModelIndex {
    fn from_iter<I: IntoIterator<Item = RawRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}
