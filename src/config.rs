use crate::Model;
use crate::error::Error;
use crate::record::Record;

/// A builder-like API to configure and construct a [`Model`].
///
/// Most callers never need this: [`crate::build`] and [`Model::build`] use
/// [`IndexConfig::default`] internally. It exists for the rare caller tuning
/// construction for an unusually large or diverse alphabet.
#[derive(Debug, Clone, Copy)]
pub struct IndexConfig {
    pub(crate) radix_sort_threshold: usize,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Above this many distinct bucket values, a radix sort pass switches
    /// from a flat `Vec`-of-buckets counting sort to a `BTreeMap`-keyed
    /// bucketing, trading some speed for bounded memory use. The default
    /// is [`crate::radix::DEFAULT_THRESHOLD`], which comfortably covers any
    /// realistic lowercased-text alphabet.
    pub fn radix_sort_threshold(self, radix_sort_threshold: usize) -> Self {
        assert!(radix_sort_threshold > 0);

        Self {
            radix_sort_threshold,
        }
    }

    /// Constructs a [`Model`] over `records` using this configuration.
    pub fn build<R: Record>(self, records: Vec<R>) -> Result<Model<R>, Error> {
        Model::build_with_config(records, self)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            radix_sort_threshold: crate::radix::DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_config() {
        let records = vec!["test".to_string(), "complete".to_string()];

        let model = IndexConfig::new()
            .radix_sort_threshold(4)
            .build(records)
            .unwrap();

        assert_eq!(model.matches("es").len(), 1);
    }
}
