//! Parsing of editorconfig-style convention values into guideline sets.
//!
//! The `guidelines` value is tried against two grammars in order:
//!
//! 1. **Structured**: comma-separated entries, each a column optionally
//!    followed by an inline style (`40 1px solid red, 80 2px dashed blue`).
//!    The style part is optional but, if present, must be well-formed; a
//!    malformed style fails the whole string.
//! 2. **Loose**: the whole string split into integer tokens, keeping every
//!    valid column and silently dropping the rest (`132:80, 40,50,60 4 8`).
//!
//! The split keeps simple column lists working even when they superficially
//! resemble a malformed structured entry, while honoring styling intent
//! exactly when it is well-formed. None of these functions ever error:
//! malformed convention input degrades to fewer (or no) guidelines.

use crate::color::Color;
use crate::guideline::{Guideline, GuidelineSet, is_valid_column};
use crate::stroke::{LineStyle, MAX_THICKNESS, StrokeParameters};

/// Convention key holding the guideline columns (and optional inline styles).
pub const GUIDELINES_KEY: &str = "guidelines";

/// Convention key holding the fallback style for entries without one.
pub const GUIDELINES_STYLE_KEY: &str = "guidelines_style";

/// Convention key for the standard editorconfig maximum line length,
/// honored as one extra guideline.
pub const MAX_LINE_LENGTH_KEY: &str = "max_line_length";

/// Separators for the loose grammar.
///
/// Semicolon is not a separator because it introduces comments in
/// `.editorconfig`; `80 ; my note` must not turn the note into columns.
const LOOSE_SEPARATORS: [char; 3] = [',', ':', ' '];

/// Separators inside a standalone style string, where comment collision is
/// not a concern.
const STYLE_SEPARATORS: [char; 4] = [',', ':', ';', ' '];

/// Separator between the tokens of one structured-grammar entry.
const SPACE: [char; 1] = [' '];

/// Parse one token as a guideline column: a valid integer within
/// `0..=10000`.
pub fn parse_position(token: &str) -> Option<i32> {
    token.parse().ok().filter(|&column| is_valid_column(column))
}

/// Parse a `guidelines` convention value into a guideline set.
///
/// `fallback` is applied to every entry that carries no inline style; it is
/// normally the parsed `guidelines_style` value, or `None` to let the
/// renderer pick its themed default.
pub fn parse_guidelines(value: &str, fallback: Option<&StrokeParameters>) -> GuidelineSet {
    if let Some(set) = parse_structured(value, fallback) {
        return set;
    }

    // Loose fallback: keep every token that is a valid column.
    let mut set = GuidelineSet::new();
    for token in tokens(value, &LOOSE_SEPARATORS) {
        if let Some(column) = parse_position(token)
            && let Ok(guideline) = Guideline::new(column, fallback.cloned())
        {
            set.insert(guideline);
        }
    }

    set
}

/// Try the structured grammar. Returns `None` when any non-empty entry
/// fails to parse, signalling fallback to the loose grammar.
fn parse_structured(value: &str, fallback: Option<&StrokeParameters>) -> Option<GuidelineSet> {
    let mut set = GuidelineSet::new();
    for entry in value.split(',') {
        // Entry tokens are space-separated only; `132:80` is not a
        // structured entry and pushes the whole string to the loose grammar.
        let mut parts = tokens(entry, &SPACE);
        let Some(first) = parts.next() else {
            // Empty entry (e.g. trailing comma). Ignore and continue.
            continue;
        };

        let column = parse_position(first)?;
        let stroke = match parts.next() {
            None => fallback.cloned(),
            Some(token) => Some(parse_stroke_tokens(token, &mut parts)?),
        };

        set.insert(Guideline::new(column, stroke).ok()?);
    }

    Some(set)
}

/// Parse a standalone `guidelines_style` convention value, e.g.
/// `1px dotted 80FF0000`.
///
/// The thickness token is required and strict; the line-style and color
/// tokens are optional and degrade individually (an unrecognized token is
/// ignored without failing the parse). Returns `None` only when the
/// thickness token is missing or malformed, in which case the caller keeps
/// its prior style.
pub fn parse_stroke_style(value: &str) -> Option<StrokeParameters> {
    let mut parts = tokens(value, &STYLE_SEPARATORS);
    let first = parts.next()?;
    parse_stroke_tokens(first, &mut parts)
}

/// Shared token-level style parser for both the standalone style string and
/// structured-grammar inline styles. `first` must be the thickness token;
/// `rest` supplies the optional line-style and color tokens.
fn parse_stroke_tokens<'a>(
    first: &str,
    rest: &mut impl Iterator<Item = &'a str>,
) -> Option<StrokeParameters> {
    let thickness: f64 = first.strip_suffix("px")?.parse().ok()?;
    // Also rejects NaN and infinities from exotic float spellings.
    if !(0.0..=MAX_THICKNESS).contains(&thickness) {
        return None;
    }

    let mut stroke = StrokeParameters {
        color: None,
        thickness,
        line_style: LineStyle::default(),
    };

    let Some(token) = rest.next() else {
        return Some(stroke);
    };
    if let Some(line_style) = LineStyle::parse(token) {
        stroke.line_style = line_style;
    }

    let Some(token) = rest.next() else {
        return Some(stroke);
    };
    if let Some(color) = Color::parse(token) {
        stroke.color = Some(color);
    }

    // Trailing tokens are ignored.
    Some(stroke)
}

/// Resolve the three convention keys into one guideline set.
///
/// `max_line_length`, when valid, is appended as one extra guideline with
/// the fallback style regardless of which grammar parsed `guidelines`.
/// Returns `None` when the conventions say nothing about guidelines at all,
/// so a host can distinguish "no opinion" from "explicitly none".
pub fn guidelines_from_conventions(
    guidelines: Option<&str>,
    guidelines_style: Option<&str>,
    max_line_length: Option<&str>,
) -> Option<GuidelineSet> {
    let fallback = guidelines_style.and_then(parse_stroke_style);

    let mut set = guidelines.map(|value| parse_guidelines(value, fallback.as_ref()));

    if let Some(column) = max_line_length.and_then(parse_position)
        && let Ok(guideline) = Guideline::new(column, fallback.clone())
    {
        set.get_or_insert_with(GuidelineSet::new).insert(guideline);
    }

    set
}

/// Split on any of `separators`, skipping empty tokens.
fn tokens<'a>(text: &'a str, separators: &'a [char]) -> impl Iterator<Item = &'a str> {
    text.split(separators).filter(|token| !token.is_empty())
}
