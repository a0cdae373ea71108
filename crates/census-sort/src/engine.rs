use tracing::{debug, info_span};

use census_model::{Record, SortKeys};

use crate::compare::sort_records;
use crate::partition::PartitionRule;

/// Ordered records plus the keys that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    pub records: Vec<Record>,
    pub keys: SortKeys,
    /// Number of leading records that satisfied the partition rule.
    /// Zero when no rule was given.
    pub priority_len: usize,
}

/// Sort `records` by `keys`, optionally moving the partition's priority
/// group to the front first. Each group is sorted independently with the
/// same comparator and keeps encounter order on ties.
pub fn arrange(
    records: Vec<Record>,
    keys: SortKeys,
    partition: Option<&dyn PartitionRule>,
) -> Arrangement {
    let span = info_span!("arrange", records = records.len(), keys = %keys);
    let _guard = span.enter();

    let Some(rule) = partition else {
        let mut records = records;
        sort_records(&mut records, &keys);
        return Arrangement {
            records,
            keys,
            priority_len: 0,
        };
    };

    let (mut priority, mut rest): (Vec<Record>, Vec<Record>) =
        records.into_iter().partition(|record| rule.is_priority(record));
    sort_records(&mut priority, &keys);
    sort_records(&mut rest, &keys);
    debug!(
        priority = priority.len(),
        remainder = rest.len(),
        "partitioned records"
    );

    let priority_len = priority.len();
    priority.append(&mut rest);
    Arrangement {
        records: priority,
        keys,
        priority_len,
    }
}
