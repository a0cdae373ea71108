//! End-to-end tests for the census pipeline.

use census_core::{CensusBoard, Column, ParserProfile, ReportVariant, SortKeys};

const CENSUS: &str = "\
# pasted 10/19
ZENNER, ALEX NURS N TR N29 D 72 years Other 875005902  0.4 Days Orion Vale MD
BRAVO, CARA NURS N TR N3 A 80 years Other 875005903  5.4 Days Orion Vale MD
COOPER, DAN NURS S TR S12 B 45 years Other 875005904  3.1 Days Ivy Park DO
ADLER, EVE NURS N TR N29 A 33 years Other 875005905  1.7 Days Orion Vale MD
garbage line with no stay
";

fn board() -> CensusBoard {
    CensusBoard::new(ReportVariant::Nursing)
}

fn los(view: &census_core::CensusView) -> Vec<f64> {
    view.records().map(|r| r.length_of_stay.days()).collect()
}

#[test]
fn default_keys_sort_by_stay() {
    let board = board();
    let view = board.build(CENSUS, board.default_keys());
    assert_eq!(los(&view), vec![0.4, 1.7, 3.1, 5.4]);
    assert_eq!(view.stats.lines_seen, 6);
    assert_eq!(view.stats.parsed, 4);
    assert_eq!(view.stats.rejected, 1);
    assert_eq!(view.stats.marked, 2);
    assert_eq!(view.priority_len, 0);
}

#[test]
fn marked_rows_follow_length_of_stay() {
    let board = board();
    let view = board.build(CENSUS, board.default_keys());
    let marked: Vec<bool> = view.rows.iter().map(|row| row.marked).collect();
    assert_eq!(marked, vec![false, true, true, false]);
}

#[test]
fn partition_runs_before_sort() {
    let board = board().with_partition_below(Some(1.0));
    let keys = SortKeys::new(vec!["-los".parse().unwrap()]).unwrap();
    let view = board.build(CENSUS, keys);
    assert_eq!(los(&view), vec![0.4, 5.4, 3.1, 1.7]);
    assert_eq!(view.priority_len, 1);
}

#[test]
fn toggling_room_then_resetting() {
    let board = board();
    let keys = board.default_keys().toggled(Column::Room);
    let view = board.build(CENSUS, keys);
    assert_eq!(view.keys.to_string(), "los, unit, -room, bed");

    let view = board.build(CENSUS, SortKeys::reset(board.variant()));
    assert_eq!(view.keys, board.default_keys());
}

#[test]
fn room_key_sorts_numerically() {
    let board = board();
    let keys = SortKeys::empty().toggled(Column::Bed).toggled(Column::Room);
    let view = board.build(CENSUS, keys);
    let rooms: Vec<String> = view
        .records()
        .map(|r| format!("{}{}", r.room, r.bed))
        .collect();
    assert_eq!(rooms, vec!["N3A", "N29A", "N29D", "S12B"]);
}

#[test]
fn cells_follow_variant_columns() {
    let board = board();
    let view = board.build(CENSUS, board.default_keys());
    assert_eq!(
        view.headers(),
        vec![
            "Name",
            "Unit",
            "Room",
            "Bed",
            "LOS",
            "Patient #",
            "Physician / Notes"
        ]
    );
    let first = view.cells().remove(0).join("|");
    insta::assert_snapshot!(first, @"ZENNER, ALEX|NURS|N29|D|0.4|875005902|Orion Vale MD");
}

#[test]
fn ward_board_hides_unit() {
    let board = CensusBoard::new(ReportVariant::Ward);
    let view = board.build("SMITH, ANA 412 B 3.3 Days Lee MD", board.default_keys());
    assert!(!view.columns.contains(&Column::Unit));
    assert_eq!(view.cells(), vec![vec![
        "SMITH, ANA".to_string(),
        "412".to_string(),
        "B".to_string(),
        "3.3".to_string(),
        String::new(),
        "Lee MD".to_string(),
    ]]);
}

#[test]
fn custom_profile_is_applied() {
    let profile = ParserProfile {
        comment_marker: "//".to_string(),
        ..ParserProfile::for_variant(ReportVariant::Nursing)
    };
    let board = CensusBoard::with_profile(ReportVariant::Nursing, profile).unwrap();
    let view = board.build(
        "// DOE NURS N1 A 2 Days\n# ROE NURS N2 A 2 Days",
        board.default_keys(),
    );
    assert_eq!(view.stats.parsed, 1);
    assert_eq!(view.records().next().unwrap().raw_name, "# ROE");
}

#[test]
fn empty_text_yields_empty_view() {
    let board = board();
    let view = board.build("", board.default_keys());
    assert!(view.rows.is_empty());
    assert_eq!(view.stats, Default::default());
}

#[test]
fn view_serializes_for_presentation() {
    let board = board();
    let view = board.build(CENSUS, board.default_keys());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["keys"], serde_json::json!(["los", "unit", "room", "bed"]));
    assert_eq!(json["rows"][1]["marked"], serde_json::json!(true));
    assert_eq!(json["rows"][0]["record"]["room"], serde_json::json!("N29"));
}
