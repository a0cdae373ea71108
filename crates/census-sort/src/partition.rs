//! Priority partition rules.

use census_model::Record;

/// Pure predicate choosing the records that go first.
pub trait PartitionRule {
    fn is_priority(&self, record: &Record) -> bool;
}

impl<F> PartitionRule for F
where
    F: Fn(&Record) -> bool,
{
    fn is_priority(&self, record: &Record) -> bool {
        self(record)
    }
}

/// Records with a length of stay strictly below the threshold go first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LosBelow(pub f64);

impl PartitionRule for LosBelow {
    fn is_priority(&self, record: &Record) -> bool {
        record.length_of_stay.days() < self.0
    }
}
