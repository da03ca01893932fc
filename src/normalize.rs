//! Lower-cases record text and flattens it into a single dense-symbol stream
//! separated by sentinels, ready for [`crate::dc3`].

use std::collections::HashMap;

use crate::error::Error;
use crate::record::Record;

/// Symbol reserved to terminate every record's run of symbols in the stream.
///
/// Strictly smaller than every symbol produced for actual text, because
/// dense ranks are assigned starting at `1`.
pub(crate) const SENTINEL: u32 = 0;

/// The concatenated symbol stream plus the bookkeeping needed to map a
/// stream position back to its owning record (see [`crate::owner`]), and the
/// `char -> rank` table used to encode later queries consistently.
pub(crate) struct Normalized {
    pub(crate) stream: Vec<u32>,
    pub(crate) record_starts: Vec<u32>,
    pub(crate) sentinel_positions: Vec<u32>,
    pub(crate) ranks: HashMap<char, u32>,
}

/// Assigns dense ranks to lowercased `char`s and flattens `records` into one
/// symbol stream, one sentinel-terminated run per record, in input order.
pub(crate) fn normalize<R: Record>(records: &[R]) -> Result<Normalized, Error> {
    let mut ranks: HashMap<char, u32> = HashMap::new();
    let mut stream = Vec::new();
    let mut record_starts = Vec::with_capacity(records.len());
    let mut sentinel_positions = Vec::with_capacity(records.len());

    for record in records {
        let start = stream.len();
        record_starts.push(u32::try_from(start).map_err(|_| Error::InvalidInput(start))?);

        for c in record.text().chars().flat_map(char::to_lowercase) {
            let next_rank = ranks.len() as u32 + 1;
            let symbol = *ranks.entry(c).or_insert(next_rank);
            stream.push(symbol);
        }

        sentinel_positions
            .push(u32::try_from(stream.len()).map_err(|_| Error::InvalidInput(stream.len()))?);
        stream.push(SENTINEL);
    }

    if u32::try_from(stream.len()).is_err() {
        return Err(Error::InvalidInput(stream.len()));
    }

    Ok(Normalized {
        stream,
        record_starts,
        sentinel_positions,
        ranks,
    })
}

/// Encodes a query string the same way `normalize` encodes record text, using
/// the dense ranks already assigned during construction.
///
/// A code point never seen while indexing cannot occur in any record's
/// lowercased text, so it is encoded as a rank that is guaranteed not to
/// match anything (`u32::MAX`) rather than growing the alphabet.
pub(crate) fn encode_query(query: &str, ranks: &HashMap<char, u32>) -> Vec<u32> {
    query
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| *ranks.get(&c).unwrap_or(&u32::MAX))
        .collect()
}
