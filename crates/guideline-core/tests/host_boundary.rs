//! Serialization across the host boundary: parsed guideline sets must
//! survive a JSON round-trip with invariants intact.

use guideline_core::conventions::parse_guidelines;
use guideline_core::{Guideline, GuidelineSet};
use pretty_assertions::assert_eq;

#[test]
fn guideline_set_json_roundtrip() {
    let style = guideline_core::conventions::parse_stroke_style("2px dashed 80FF0000");
    let set = parse_guidelines("40, 80 1px solid red, 120", style.as_ref());

    let json = serde_json::to_string(&set).expect("serialize");
    let back: GuidelineSet = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(set, back);

    // Insertion order survives the wire too.
    let columns: Vec<i32> = back.columns().collect();
    assert_eq!(columns, vec![40, 80, 120]);
}

#[test]
fn deserialization_enforces_column_range() {
    let err = serde_json::from_str::<Guideline>(r#"{"column": 99999, "stroke": null}"#)
        .expect_err("out-of-range column must not deserialize");
    assert!(err.to_string().contains("out of range"));

    let ok: Guideline = serde_json::from_str(r#"{"column": 0, "stroke": null}"#).unwrap();
    assert_eq!(ok.column(), 0);
    assert!(ok.stroke().is_none());
}

#[test]
fn duplicate_wire_entries_collapse() {
    let json = r#"[
        {"column": 80, "stroke": null},
        {"column": 80, "stroke": null},
        {"column": 40, "stroke": null}
    ]"#;
    let set: GuidelineSet = serde_json::from_str(json).unwrap();
    assert_eq!(set.len(), 2);
}
