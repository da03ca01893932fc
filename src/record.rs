/// A type that can be indexed by [`crate::Model`].
///
/// The indexed text is whatever `text` returns; everything else about `R` is
/// opaque payload as far as this crate is concerned.
pub trait Record {
    /// The text this record is searched by.
    fn text(&self) -> &str;
}

impl Record for String {
    fn text(&self) -> &str {
        self
    }
}

impl Record for &str {
    fn text(&self) -> &str {
        self
    }
}

/// A single record or a list of records, accepted by [`crate::Model::insert`].
///
/// This exists so that `insert` cannot mis-guard a lone record as a
/// one-element list versus an actual list the way an untyped caller-language
/// implementation might: the two cases are distinct types here, chosen by
/// the caller at the call site, not guessed at by the callee.
pub struct RecordBatch<R>(pub(crate) Vec<R>);

impl<R> From<R> for RecordBatch<R> {
    fn from(record: R) -> Self {
        RecordBatch(vec![record])
    }
}

impl<R> From<Vec<R>> for RecordBatch<R> {
    fn from(records: Vec<R>) -> Self {
        RecordBatch(records)
    }
}
