//! # Storage Adapters
//!
//! Ordered key-value store implementations backing the directory:
//!
//! - `memory` - BTreeMap-backed store for unit tests and light embedding
//! - `file` - file-backed store with atomic snapshot persistence

pub mod file;
pub mod memory;

pub use file::FileBackedKvStore;
pub use memory::InMemoryKvStore;

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::ports::outbound::ScanDirection;

/// Iterate the entries of an ordered map whose keys start with `prefix`,
/// in the requested direction.
///
/// Both stores keep their data in a `BTreeMap`, so a prefix scan is a
/// range query: from the prefix itself up to (exclusive) the next byte
/// string that is not an extension of it. A prefix of all-0xFF bytes has
/// no such upper bound and the range runs to the end of the keyspace.
pub(crate) fn scan_map_prefix<'a>(
    data: &'a BTreeMap<Vec<u8>, Vec<u8>>,
    prefix: &[u8],
    direction: ScanDirection,
) -> Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a> {
    let lower = Bound::Included(prefix.to_vec());
    let upper = match prefix_upper_bound(prefix) {
        Some(upper) => Bound::Excluded(upper),
        None => Bound::Unbounded,
    };

    let range = data.range((lower, upper)).map(|(k, v)| (k.clone(), v.clone()));
    match direction {
        ScanDirection::Ascending => Box::new(range),
        ScanDirection::Descending => Box::new(range.rev()),
    }
}

/// The smallest byte string greater than every extension of `prefix`, or
/// `None` when the prefix is empty or all 0xFF.
fn prefix_upper_bound(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut upper = prefix.to_vec();
    while let Some(last) = upper.last_mut() {
        if *last == u8::MAX {
            upper.pop();
        } else {
            *last += 1;
            return Some(upper);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_upper_bound_increments_last_byte() {
        assert_eq!(prefix_upper_bound(b"g:"), Some(b"g;".to_vec()));
    }

    #[test]
    fn test_prefix_upper_bound_carries_past_max_bytes() {
        assert_eq!(prefix_upper_bound(&[0x61, 0xFF]), Some(vec![0x62]));
        assert_eq!(prefix_upper_bound(&[0xFF, 0xFF]), None);
        assert_eq!(prefix_upper_bound(b""), None);
    }
}
