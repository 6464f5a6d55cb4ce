//! End-to-end checks of the convention grammars, mirroring the strings a
//! real `.editorconfig` would carry.

use guideline_core::conventions::{
    guidelines_from_conventions, parse_guidelines, parse_stroke_style,
};
use guideline_core::{Color, GuidelineSet, LineStyle, StrokeParameters};
use pretty_assertions::assert_eq;

fn columns(set: &GuidelineSet) -> Vec<i32> {
    let mut columns: Vec<i32> = set.columns().collect();
    columns.sort_unstable();
    columns
}

#[test]
fn position_lists() {
    let cases: &[(&str, &[i32])] = &[
        ("", &[]),
        ("0", &[0]),
        ("0 1", &[0, 1]),
        ("0,1", &[0, 1]),
        ("0 1,2    3", &[0, 1, 2, 3]),
        ("132:80, 40,50,60 4 8", &[4, 8, 40, 50, 60, 80, 132]),
        ("80,80,80", &[80]),
        ("-1, 99999, 80", &[80]),
        ("ABC, 3.14, 80", &[80]),
    ];

    for (value, expected) in cases {
        let set = parse_guidelines(value, None);
        assert_eq!(&columns(&set), expected, "input {value:?}");
        assert!(set.iter().all(|g| g.stroke().is_none()));
    }
}

#[test]
fn style_strings() {
    // (input, thickness, line style, ARGB)
    let accepted: &[(&str, f64, LineStyle, (u8, u8, u8, u8))] = &[
        ("1px", 1.0, LineStyle::Dotted, (0xFF, 0, 0, 0)),
        ("0.5px", 0.5, LineStyle::Dotted, (0xFF, 0, 0, 0)),
        ("3px dashed", 3.0, LineStyle::Dashed, (0xFF, 0, 0, 0)),
        (
            "1.9px solid red",
            1.9,
            LineStyle::Solid,
            (0xFF, 0xFF, 0x00, 0x00),
        ),
        (
            "2.00px dashed A0553201",
            2.0,
            LineStyle::Dashed,
            (0xA0, 0x55, 0x32, 0x01),
        ),
        (
            "1px solid FEDCBA",
            1.0,
            LineStyle::Solid,
            (0xFF, 0xFE, 0xDC, 0xBA),
        ),
        ("5px, unknown-style", 5.0, LineStyle::Dotted, (0xFF, 0, 0, 0)),
        (
            "5px, unknown-style, green",
            5.0,
            LineStyle::Dotted,
            (0xFF, 0x00, 0x80, 0x00),
        ),
        (
            "1px;solid;Not-a-real-color",
            1.0,
            LineStyle::Solid,
            (0xFF, 0, 0, 0),
        ),
        (
            "4px:dotted:blue:ignored",
            4.0,
            LineStyle::Dotted,
            (0xFF, 0x00, 0x00, 0xFF),
        ),
    ];

    for &(value, thickness, line_style, (a, r, g, b)) in accepted {
        let stroke = parse_stroke_style(value)
            .unwrap_or_else(|| panic!("expected {value:?} to parse"));
        assert_eq!(stroke.thickness, thickness, "input {value:?}");
        assert_eq!(stroke.line_style, line_style, "input {value:?}");
        assert_eq!(
            stroke.effective_color(),
            Color::argb(a, r, g, b),
            "input {value:?}"
        );
    }

    for value in ["", ",", "2", "-2px", "51px", "abpx"] {
        assert!(parse_stroke_style(value).is_none(), "input {value:?}");
    }
}

#[test]
fn styled_guidelines_honored_exactly() {
    let fallback = parse_stroke_style("1px dotted 80FF0000").unwrap();
    let set = parse_guidelines("40 1px solid red, 80, 100 2px", Some(&fallback));
    assert_eq!(columns(&set), vec![40, 80, 100]);

    let by_column = |c: i32| set.iter().find(|g| g.column() == c).unwrap();
    assert_eq!(by_column(40).stroke().unwrap().line_style, LineStyle::Solid);
    assert_eq!(by_column(80).stroke(), Some(&fallback));
    assert_eq!(by_column(100).stroke().unwrap().thickness, 2.0);
}

#[test]
fn full_convention_resolution() {
    // A typical .editorconfig trio.
    let set = guidelines_from_conventions(
        Some("80 2px dashed, 100"),
        Some("1px solid 40FFA500"),
        Some("120"),
    )
    .unwrap();
    assert_eq!(columns(&set), vec![80, 100, 120]);

    let fallback = StrokeParameters {
        color: Some(Color::argb(0x40, 0xFF, 0xA5, 0x00)),
        thickness: 1.0,
        line_style: LineStyle::Solid,
    };
    let by_column = |c: i32| set.iter().find(|g| g.column() == c).unwrap();
    assert_eq!(by_column(80).stroke().unwrap().line_style, LineStyle::Dashed);
    assert_eq!(by_column(100).stroke(), Some(&fallback));
    assert_eq!(by_column(120).stroke(), Some(&fallback));
}

#[test]
fn reparse_equality_drives_rerendering() {
    // The host re-renders only when the parsed set changes; textual noise
    // that parses identically must compare equal.
    let a = parse_guidelines("80, 120", None);
    let b = parse_guidelines("120,   80", None);
    assert_eq!(a, b);

    let c = parse_guidelines("80, 120 1px", None);
    assert_ne!(a, c);
}
