/*! This library implements a substring autocomplete index over an array of
 * caller-supplied records.
 *
 * Each record carries a searchable text field plus arbitrary payload; a
 * query string — any substring, not just a prefix — returns every record
 * whose text contains it, case-insensitively. The index is a generalized
 * suffix array over the concatenation of every record's (lowercased) text,
 * built in linear expected time via the DC3 (difference cover modulo 3,
 * a.k.a. skew) construction algorithm, plus two binary searches to locate
 * the range of matching suffixes.
 *
 * ## Usage
 *
 * ```
 * use suffixdex::Model;
 *
 * let model = Model::build(vec![
 *     "test".to_string(),
 *     "complete".to_string(),
 *     "suffix".to_string(),
 * ]).unwrap();
 *
 * assert_eq!(model.matches("es"), vec!["test"]);
 * ```
 *
 * Records can be any type implementing [`Record`] (a required `text()`
 * method plus arbitrary opaque payload), not just `String`:
 *
 * ```
 * use suffixdex::{Model, Record, RemoveCriteria};
 *
 * #[derive(Clone, PartialEq)]
 * struct Entry { string: String, id: u32 }
 *
 * impl Record for Entry {
 *     fn text(&self) -> &str { &self.string }
 * }
 *
 * let model = Model::build(vec![
 *     Entry { string: "test".into(), id: 2 },
 *     Entry { string: "auto".into(), id: 5 },
 *     Entry { string: "module".into(), id: 1 },
 * ]).unwrap();
 *
 * let model = model.remove(
 *     RemoveCriteria::new().filter(|e: &Entry| e.id < 5).strings(["module"])
 * ).unwrap();
 *
 * assert_eq!(model.matches("").len(), 1);
 * ```
 *
 * ## Construction knobs
 *
 * [`IndexConfig`] mirrors the builder-with-defaults shape most callers never
 * need to touch; it only exposes the radix sort's bucket-strategy
 * threshold (see [`config::IndexConfig::radix_sort_threshold`]).
 *
 * ## Immutability
 *
 * A [`Model`] is built eagerly and is immutable afterwards. `insert` and
 * `remove` both rebuild the index from a derived record list and return a
 * fresh `Model`, leaving the receiver untouched.
 */

mod config;
mod dc3;
mod error;
mod model;
mod normalize;
mod owner;
mod query;
mod radix;
mod record;

#[doc(inline)]
pub use config::IndexConfig;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use model::{Model, RemoveCriteria};
#[doc(inline)]
pub use record::{Record, RecordBatch};

/// Builds a [`Model`] over `records` using the default [`IndexConfig`].
///
/// Equivalent to [`Model::build`]; provided as a free function so callers
/// can write `suffixdex::build(records)` without naming `Model` directly.
pub fn build<R: Record>(records: Vec<R>) -> Result<Model<R>, Error> {
    Model::build(records)
}
