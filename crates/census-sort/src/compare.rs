//! Column comparison and the stable multi-key sort.

use std::cmp::Ordering;

use census_model::{Column, Record, SortKeys};

/// Ascending comparison of two records on one column.
///
/// Length of stay compares numerically, room by its prefix/number key, and
/// every other column lexicographically.
pub fn compare_column(a: &Record, b: &Record, column: Column) -> Ordering {
    match column {
        Column::LengthOfStay => a.length_of_stay.total_cmp(&b.length_of_stay),
        Column::Room => a.room.sort_key().cmp(&b.room.sort_key()),
        text => a.text(text).cmp(&b.text(text)),
    }
}

/// Compare on each key in turn; the first non-equal result decides.
pub fn compare(a: &Record, b: &Record, keys: &SortKeys) -> Ordering {
    keys.iter()
        .map(|key| key.direction.apply(compare_column(a, b, key.column)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable in-place sort; ties on every key keep their original order.
pub fn sort_records(records: &mut [Record], keys: &SortKeys) {
    if keys.is_empty() {
        return;
    }
    records.sort_by(|a, b| compare(a, b, keys));
}
