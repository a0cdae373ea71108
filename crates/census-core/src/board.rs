use tracing::info;

use census_model::{Column, ReportVariant, SortKeys};
use census_parse::{LineParser, ParserProfile, ProfileError};
use census_sort::{LosBelow, PartitionRule, arrange};

use crate::view::{CensusRow, CensusView, ParseStats};

/// Parser, column set and partition setting for one deployment.
#[derive(Debug, Clone)]
pub struct CensusBoard {
    variant: ReportVariant,
    parser: LineParser,
    partition_below: Option<f64>,
}

impl CensusBoard {
    pub fn new(variant: ReportVariant) -> Self {
        Self {
            variant,
            parser: LineParser::for_variant(variant),
            partition_below: None,
        }
    }

    /// Board with a custom parser profile for the variant's columns.
    pub fn with_profile(
        variant: ReportVariant,
        profile: ParserProfile,
    ) -> Result<Self, ProfileError> {
        Ok(Self {
            variant,
            parser: LineParser::new(profile)?,
            partition_below: None,
        })
    }

    /// Put records with a length of stay strictly below `days` first.
    #[must_use]
    pub fn with_partition_below(mut self, days: Option<f64>) -> Self {
        self.partition_below = days;
        self
    }

    pub fn variant(&self) -> ReportVariant {
        self.variant
    }

    pub fn parser(&self) -> &LineParser {
        &self.parser
    }

    pub fn columns(&self) -> &'static [Column] {
        self.variant.columns()
    }

    pub fn default_keys(&self) -> SortKeys {
        self.variant.default_sort_keys()
    }

    /// Parse `text` and arrange the records by `keys`.
    pub fn build(&self, text: &str, keys: SortKeys) -> CensusView {
        let outcome = self.parser.parse_text(text);
        let parsed = outcome.records.len();

        let rule = self.partition_below.map(LosBelow);
        let partition = rule.as_ref().map(|rule| rule as &dyn PartitionRule);
        let arrangement = arrange(outcome.records, keys, partition);

        let rows: Vec<CensusRow> = arrangement
            .records
            .into_iter()
            .map(CensusRow::new)
            .collect();
        let marked = rows.iter().filter(|row| row.marked).count();
        info!(
            variant = %self.variant,
            rows = rows.len(),
            marked,
            priority = arrangement.priority_len,
            "census view built"
        );

        CensusView {
            rows,
            keys: arrangement.keys,
            columns: self.columns().to_vec(),
            priority_len: arrangement.priority_len,
            stats: ParseStats {
                lines_seen: outcome.lines_seen,
                parsed,
                rejected: outcome.rejections.total(),
                marked,
            },
        }
    }
}

impl Default for CensusBoard {
    fn default() -> Self {
        Self::new(ReportVariant::default())
    }
}
