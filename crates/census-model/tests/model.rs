//! Tests for census-model types.

use census_model::{
    Column, LengthOfStay, ModelError, ReportVariant, SortDirection, SortKey, SortKeys,
};
use proptest::prelude::*;

fn keys(spec: &[&str]) -> SortKeys {
    SortKeys::new(spec.iter().map(|s| s.parse().unwrap()).collect()).unwrap()
}

#[test]
fn nursing_defaults() {
    let defaults = ReportVariant::Nursing.default_sort_keys();
    assert_eq!(defaults, keys(&["los", "unit", "room", "bed"]));
    assert_eq!(SortKeys::reset(ReportVariant::Nursing), defaults);
}

#[test]
fn ward_defaults_skip_unit() {
    let defaults = ReportVariant::Ward.default_sort_keys();
    assert_eq!(defaults, keys(&["los", "room", "bed"]));
    assert!(!ReportVariant::Ward.columns().contains(&Column::Unit));
}

#[test]
fn toggle_present_column_flips_in_place() {
    let before = keys(&["los", "unit", "room", "bed"]);
    let after = before.clone().toggled(Column::Room);

    assert_eq!(after.len(), before.len());
    assert_eq!(after.as_slice()[2], SortKey::descending(Column::Room));
    for idx in [0, 1, 3] {
        assert_eq!(after.as_slice()[idx], before.as_slice()[idx]);
    }

    let back = after.toggled(Column::Room);
    assert_eq!(back, before);
}

#[test]
fn toggle_absent_column_becomes_primary() {
    let before = keys(&["los", "-unit"]);
    let after = before.clone().toggled(Column::Name);

    assert_eq!(after.as_slice()[0], SortKey::ascending(Column::Name));
    assert_eq!(&after.as_slice()[1..], before.as_slice());
}

#[test]
fn duplicate_columns_are_rejected() {
    let result = SortKeys::new(vec![
        SortKey::ascending(Column::Room),
        SortKey::descending(Column::Room),
    ]);
    assert_eq!(
        result,
        Err(ModelError::DuplicateSortColumn("room".to_string()))
    );
}

#[test]
fn sort_keys_use_dash_notation() {
    let value = keys(&["los", "-room"]);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"["los","-room"]"#);
    let back: SortKeys = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
    assert_eq!(value.to_string(), "los, -room");
}

#[test]
fn sort_keys_deserialize_rejects_duplicates() {
    let result = serde_json::from_str::<SortKeys>(r#"["los","-los"]"#);
    assert!(result.is_err());
}

#[test]
fn sort_keys_in_toml() {
    #[derive(serde::Deserialize)]
    struct Doc {
        sort: SortKeys,
    }
    let doc: Doc = toml::from_str("sort = [\"-bed\", \"patient\"]").unwrap();
    assert_eq!(
        doc.sort.as_slice(),
        &[
            SortKey {
                column: Column::Bed,
                direction: SortDirection::Descending
            },
            SortKey::ascending(Column::PatientNumber),
        ]
    );
}

#[test]
fn variant_parses() {
    assert_eq!(
        "Ward".parse::<ReportVariant>().unwrap(),
        ReportVariant::Ward
    );
    assert!("icu".parse::<ReportVariant>().is_err());
}

fn any_column() -> impl Strategy<Value = Column> {
    prop::sample::select(Column::ALL.to_vec())
}

proptest! {
    #[test]
    fn marked_matches_closed_interval(days in 0.0f64..10.0) {
        let los = LengthOfStay::new(days).unwrap();
        prop_assert_eq!(los.is_marked(), (1.0..=3.3).contains(&days));
    }

    #[test]
    fn toggle_preserves_other_positions(
        columns in prop::sample::subsequence(Column::ALL.to_vec(), 0..=7),
        target in any_column(),
    ) {
        let before = SortKeys::new(columns.into_iter().map(SortKey::ascending).collect()).unwrap();
        let after = before.clone().toggled(target);
        match before.position(target) {
            Some(idx) => {
                prop_assert_eq!(after.len(), before.len());
                for (pos, (old, new)) in before.iter().zip(after.iter()).enumerate() {
                    if pos == idx {
                        prop_assert_eq!(new.column, old.column);
                        prop_assert_eq!(new.direction, old.direction.flipped());
                    } else {
                        prop_assert_eq!(new, old);
                    }
                }
            }
            None => {
                prop_assert_eq!(after.as_slice()[0], SortKey::ascending(target));
                prop_assert_eq!(&after.as_slice()[1..], before.as_slice());
            }
        }
    }
}
