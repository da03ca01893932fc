/// Errors that can be returned by [`crate::Model::build`] and the operations
/// that rebuild a model (`insert`, `remove`).
///
/// Internal invariant violations (an ambiguous DC3 merge comparator, a rank
/// table inconsistency) are not represented here: they indicate a bug in
/// this crate and surface as panics rather than recoverable errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The concatenated symbol stream for the given records would need more
    /// positions than fit into a `u32`, which this crate uses as its suffix
    /// array element type.
    #[error(
        "concatenated record text stream has {0} symbols, which exceeds the maximum indexable length of {max}",
        max = u32::MAX
    )]
    InvalidInput(usize),
}
