//! The immutable model façade: wires the normalizer, DC3 builder, and owner
//! index together at construction time, and answers queries by delegating
//! to [`crate::query`].

use std::collections::HashMap;

use crate::config::IndexConfig;
use crate::dc3;
use crate::error::Error;
use crate::normalize::{self, Normalized};
use crate::owner::OwnerIndex;
use crate::query;
use crate::record::{Record, RecordBatch};

/// An immutable substring autocomplete index over a `Vec<R>`.
///
/// Built eagerly from the full record list; `insert` and `remove` return a
/// freshly built `Model<R>` rather than mutating the receiver.
pub struct Model<R> {
    records: Vec<R>,
    stream: Vec<u32>,
    ranks: HashMap<char, u32>,
    sa: Vec<u32>,
    suffix_owner: Vec<u32>,
    config: IndexConfig,
}

impl<R: Record> Model<R> {
    /// Builds a model over `records` using the default [`IndexConfig`].
    pub fn build(records: Vec<R>) -> Result<Self, Error> {
        Self::build_with_config(records, IndexConfig::default())
    }

    pub(crate) fn build_with_config(records: Vec<R>, config: IndexConfig) -> Result<Self, Error> {
        let Normalized {
            stream,
            sentinel_positions,
            ranks,
            ..
        } = normalize::normalize(&records)?;

        let sa = dc3::build_suffix_array_with_threshold(&stream, config.radix_sort_threshold);

        let suffix_owner = if sentinel_positions.is_empty() {
            Vec::new()
        } else {
            OwnerIndex::build(&sentinel_positions).suffix_to_owner(&sa)
        };

        Ok(Self {
            records,
            stream,
            ranks,
            sa,
            suffix_owner,
            config,
        })
    }

    /// Returns every record whose (lowercased) text contains `query` as a
    /// substring, case-insensitively, each at most once, in `SA` order.
    ///
    /// An empty `query` matches every record exactly once.
    pub fn matches(&self, query: &str) -> Vec<&R> {
        let encoded = normalize::encode_query(query, &self.ranks);

        let owners = query::matching_owners(
            &self.stream,
            &self.sa,
            &self.suffix_owner,
            &encoded,
            self.records.len(),
        );

        owners
            .into_iter()
            .map(|owner| &self.records[owner as usize])
            .collect()
    }

    /// Returns the number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record + Clone> Model<R> {
    /// Builds a new model from the current records followed by `records`,
    /// accepting either a single record or a `Vec<R>` via [`RecordBatch`],
    /// so the caller picks the right overload at the type level rather than
    /// this method guessing at runtime.
    pub fn insert(&self, records: impl Into<RecordBatch<R>>) -> Result<Self, Error> {
        let mut all = self.records.clone();
        all.extend(records.into().0);
        Self::build_with_config(all, self.config)
    }

    /// Builds a new model retaining every record that survives `criteria`:
    /// a record is dropped unless every added filter returns `true` for it
    /// (vacuously kept if no filters were added), and is also dropped if its
    /// text is in `criteria.strings`, or it equals (via `PartialEq`) any
    /// record in `criteria.records`.
    pub fn remove(&self, criteria: RemoveCriteria<R>) -> Result<Self, Error>
    where
        R: PartialEq,
    {
        let retained = self
            .records
            .iter()
            .filter(|record| !criteria.removes(record))
            .cloned()
            .collect();

        Self::build_with_config(retained, self.config)
    }
}

/// Criteria for [`Model::remove`], built up via its fluent methods.
///
/// All three lists start empty; a record is retained iff it satisfies every
/// added filter (vacuously true with no filters), its text is absent from
/// `strings`, and it is not `PartialEq`-equal to any of `records`. No
/// criteria at all yields a content-identical model.
pub struct RemoveCriteria<R> {
    filters: Vec<Box<dyn Fn(&R) -> bool>>,
    strings: Vec<String>,
    records: Vec<R>,
}

impl<R> RemoveCriteria<R> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            strings: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Adds a predicate; a record is retained only if `filter` returns
    /// `true` for it. Multiple filters may be added and are AND'd together
    /// (a record must satisfy every one to survive), the same semantics as
    /// chaining multiple `.filter()` calls.
    pub fn filter(mut self, filter: impl Fn(&R) -> bool + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Removes any record whose `text()` equals one of `strings`.
    pub fn strings(mut self, strings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.strings.extend(strings.into_iter().map(Into::into));
        self
    }

    /// Removes any record `PartialEq`-equal to one of `records`.
    pub fn records(mut self, records: impl IntoIterator<Item = R>) -> Self {
        self.records.extend(records);
        self
    }
}

impl<R: Record> RemoveCriteria<R> {
    /// A record is removed unless it passes every filter (no filters means
    /// every record passes), or if its text is in `strings`, or if it
    /// equals any of `records`.
    fn removes(&self, record: &R) -> bool
    where
        R: PartialEq,
    {
        let fails_a_filter = !self.filters.iter().all(|filter| filter(record));

        fails_a_filter
            || self.strings.iter().any(|s| s == record.text())
            || self.records.iter().any(|r| r == record)
    }
}

impl<R> Default for RemoveCriteria<R> {
    fn default() -> Self {
        Self::new()
    }
}
