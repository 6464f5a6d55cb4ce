//! Codec for the legacy persisted settings string.
//!
//! Hosts that predate convention files persist guidelines as a single
//! string of the form `RGB(r,g,b) c1, c2, c3` under an opaque key in a
//! key/value store. This module serializes and parses that format. The
//! codec never errors: an absent, empty or corrupt string parses as "no
//! columns, default color", so a damaged store can only ever cost the user
//! their guidelines, never their editor.

use crate::color::Color;
use std::fmt::Write as _;

/// Most guidelines the legacy settings string will hold.
pub const MAX_SETTINGS_GUIDELINES: usize = 12;

/// Color parsed out of a settings string without a valid `RGB(...)` prefix.
pub const DEFAULT_SETTINGS_COLOR: Color = Color::DARK_RED;

/// Serialize a color and ordered columns into the persisted form.
///
/// The `RGB(r,g,b)` prefix is always emitted, even with no columns, so an
/// explicit "no guidelines" state still round-trips the chosen color.
pub fn compose_settings(color: Color, columns: &[i32]) -> String {
    let mut out = String::new();
    let _ = write!(out, "RGB({},{},{})", color.r, color.g, color.b);

    let mut columns = columns.iter();
    if let Some(first) = columns.next() {
        let _ = write!(out, " {first}");
        for column in columns {
            let _ = write!(out, ", {column}");
        }
    }

    out
}

/// Parse the color out of a persisted settings string.
///
/// Only a string starting exactly with `RGB(` is recognized; the first
/// three comma-separated tokens before the closing paren must parse as
/// bytes. Anything else yields [`DEFAULT_SETTINGS_COLOR`].
pub fn parse_settings_color(value: &str) -> Color {
    parse_prefix_color(value).unwrap_or(DEFAULT_SETTINGS_COLOR)
}

fn parse_prefix_color(value: &str) -> Option<Color> {
    let inner = rgb_prefix_interior(value)?;
    let mut channels = inner.split(',');
    let mut channel = || channels.next()?.trim().parse::<u8>().ok();
    Some(Color::rgb(channel()?, channel()?, channel()?))
}

/// Parse the guideline columns out of a persisted settings string, in
/// order, up to [`MAX_SETTINGS_GUIDELINES`].
///
/// Columns are only scanned when the color prefix is recognizable.
/// Non-numeric or negative tokens are skipped without counting toward the
/// cap; valid columns beyond the cap are dropped. Zero is allowed. The
/// legacy format predates the 10000 column bound, so no upper bound is
/// applied here.
pub fn parse_settings_columns(value: &str) -> Vec<i32> {
    let Some(interior) = rgb_prefix_interior(value) else {
        return Vec::new();
    };

    // The interior ends right before ')'; the columns follow it.
    let rest = &value[4 + interior.len() + 1..];

    let mut columns = Vec::new();
    for token in rest.split(',') {
        if let Ok(column) = token.trim().parse::<i32>()
            && column >= 0
        {
            columns.push(column);
            if columns.len() >= MAX_SETTINGS_GUIDELINES {
                break;
            }
        }
    }

    columns
}

/// The text between `RGB(` and the first `)`, when the string starts with
/// the literal prefix and the interior is non-empty.
fn rgb_prefix_interior(value: &str) -> Option<&str> {
    let interior = value.strip_prefix("RGB(")?;
    let close = interior.find(')')?;
    if close == 0 {
        return None;
    }

    Some(&interior[..close])
}
