//! Line parser and batch helper.

use regex::Regex;
use tracing::{debug, info, info_span};

use census_model::{Record, ReportVariant, Room};

use crate::error::{ProfileError, Rejection};
use crate::profile::ParserProfile;
use crate::rules;
use crate::tokens::tokenize;

/// A compiled [`ParserProfile`].
#[derive(Debug, Clone)]
pub struct LineParser {
    profile: ParserProfile,
    room_shapes: Vec<Regex>,
}

/// Records parsed from a block of text, plus counts for reporting.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<Record>,
    pub lines_seen: usize,
    /// Blank and comment lines.
    pub skipped: usize,
    pub rejections: RejectionCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub missing_length_of_stay: usize,
    pub invalid_length_of_stay: usize,
    pub missing_room: usize,
}

impl RejectionCounts {
    pub fn total(&self) -> usize {
        self.missing_length_of_stay + self.invalid_length_of_stay + self.missing_room
    }

    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::MissingLengthOfStay => self.missing_length_of_stay += 1,
            Rejection::InvalidLengthOfStay => self.invalid_length_of_stay += 1,
            Rejection::MissingRoom => self.missing_room += 1,
            Rejection::Blank | Rejection::Comment => {}
        }
    }
}

impl LineParser {
    pub fn new(profile: ParserProfile) -> Result<Self, ProfileError> {
        if profile.room_shapes.is_empty() {
            return Err(ProfileError::NoRoomShapes);
        }
        if profile.patient_number_width == 0 {
            return Err(ProfileError::InvalidPatientNumberWidth);
        }
        let room_shapes = profile
            .room_shapes
            .iter()
            .map(rules::compile_shape)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            profile,
            room_shapes,
        })
    }

    /// Parser for a built-in variant preset.
    ///
    /// # Panics
    ///
    /// Panics if a preset fails [`LineParser::new`]; presets only use
    /// built-in room shapes and a non-zero patient-number width.
    pub fn for_variant(variant: ReportVariant) -> Self {
        Self::new(ParserProfile::for_variant(variant)).expect("Invalid built-in parser preset")
    }

    pub fn profile(&self) -> &ParserProfile {
        &self.profile
    }

    /// Parse one line, or `None` if it is blank, a comment, or malformed.
    pub fn parse(&self, line: &str) -> Option<Record> {
        self.inspect(line).ok()
    }

    /// Parse one line, reporting why it was rejected.
    pub fn inspect(&self, line: &str) -> Result<Record, Rejection> {
        let line = line.trim();
        if line.is_empty() {
            return Err(Rejection::Blank);
        }
        let marker = self.profile.comment_marker.as_str();
        if !marker.is_empty() && line.starts_with(marker) {
            return Err(Rejection::Comment);
        }

        let days = rules::length_of_stay(line)?;
        let tokens = tokenize(line);
        let room_index = rules::room_index(
            &tokens,
            &self.room_shapes,
            self.profile.shape_priority,
            days.span(),
        )
        .ok_or(Rejection::MissingRoom)?;
        let room = Room::new(tokens[room_index].text).map_err(|_| Rejection::MissingRoom)?;

        Ok(Record {
            raw_name: rules::name(line, &tokens, room_index, &self.profile.name_rule),
            unit: rules::unit(&tokens, room_index, &self.profile.unit_rule),
            room,
            bed: rules::bed(
                &tokens,
                room_index,
                days.start,
                &self.profile.non_bed_markers,
            )
            .to_string(),
            patient_number: rules::patient_number(&tokens, self.profile.patient_number_width)
                .to_string(),
            length_of_stay: days.length_of_stay,
            trailing_text: rules::trailing_text(line, &days),
        })
    }

    /// Parse every line of `text`, keeping encounter order and dropping
    /// lines that do not parse.
    pub fn parse_text(&self, text: &str) -> ParseOutcome {
        let span = info_span!("parse");
        let _guard = span.enter();

        let mut outcome = ParseOutcome::default();
        for (idx, line) in text.lines().enumerate() {
            outcome.lines_seen += 1;
            match self.inspect(line) {
                Ok(record) => outcome.records.push(record),
                Err(rejection) if rejection.is_skip() => outcome.skipped += 1,
                Err(rejection) => {
                    debug!(line_number = idx + 1, reason = %rejection, "line rejected");
                    outcome.rejections.record(rejection);
                }
            }
        }
        info!(
            lines = outcome.lines_seen,
            parsed = outcome.records.len(),
            skipped = outcome.skipped,
            rejected = outcome.rejections.total(),
            "parse complete"
        );
        outcome
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::for_variant(ReportVariant::default())
    }
}
