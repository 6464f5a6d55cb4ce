//! Stroke styling for guidelines: line style, thickness and color.
//!
//! A `StrokeParameters` value is what the host's renderer needs to draw one
//! vertical line. The kernel never draws anything; it only guarantees that
//! every value it hands out is renderable (finite thickness in range, a
//! deterministic dash pattern per line style).

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Default stroke thickness in pixels when a style does not specify one.
pub const DEFAULT_THICKNESS: f64 = 1.0;

/// Largest stroke thickness in pixels the style grammar accepts.
pub const MAX_THICKNESS: f64 = 50.0;

/// Dash style of a guideline stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStyle {
    /// A 1:3 dotted line.
    #[default]
    Dotted,
    /// A 3:1 dashed line.
    Dashed,
    /// A continuous line.
    Solid,
}

impl LineStyle {
    /// The on/off dash pattern for this style, in thickness units.
    ///
    /// Empty means a continuous stroke.
    pub fn dash_pattern(self) -> &'static [f64] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dotted => &[1.0, 3.0],
            LineStyle::Dashed => &[3.0, 1.0],
        }
    }

    /// Parse a style-grammar token (`dotted`, `dashed`, `solid`),
    /// case-insensitively. Unrecognized tokens yield `None`; the style
    /// grammar ignores them rather than failing.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("dotted") {
            Some(LineStyle::Dotted)
        } else if token.eq_ignore_ascii_case("dashed") {
            Some(LineStyle::Dashed)
        } else if token.eq_ignore_ascii_case("solid") {
            Some(LineStyle::Solid)
        } else {
            None
        }
    }
}

/// Drawing parameters for one guideline stroke.
///
/// `color: None` means "no explicit color": the renderer should fall back
/// to its themed guideline brush, and equality treats it the same as an
/// explicit opaque black (see [`StrokeParameters::effective_color`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeParameters {
    /// Explicit stroke color, if the style specified one.
    pub color: Option<Color>,
    /// Stroke thickness in pixels. The parser only produces values in
    /// `0.0..=50.0`; the value is always finite.
    pub thickness: f64,
    /// Dash style.
    pub line_style: LineStyle,
}

impl Default for StrokeParameters {
    fn default() -> Self {
        Self {
            color: None,
            thickness: DEFAULT_THICKNESS,
            line_style: LineStyle::default(),
        }
    }
}

impl StrokeParameters {
    /// Create parameters with an explicit color and the defaults otherwise.
    pub fn from_color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// The color a renderer without a theme would use: the explicit color,
    /// or opaque black when none was specified.
    pub fn effective_color(&self) -> Color {
        self.color.unwrap_or(Color::BLACK)
    }
}

/// Equality is over the renderer-visible triple (effective color,
/// thickness, line style); an unset color equals an explicit opaque black.
impl PartialEq for StrokeParameters {
    fn eq(&self, other: &Self) -> bool {
        self.effective_color() == other.effective_color()
            && self.thickness == other.thickness
            && self.line_style == other.line_style
    }
}

impl Eq for StrokeParameters {}

impl Hash for StrokeParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.effective_color().hash(state);
        self.thickness.to_bits().hash(state);
        self.line_style.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_patterns() {
        assert_eq!(LineStyle::Solid.dash_pattern(), &[] as &[f64]);
        assert_eq!(LineStyle::Dotted.dash_pattern(), &[1.0, 3.0]);
        assert_eq!(LineStyle::Dashed.dash_pattern(), &[3.0, 1.0]);
    }

    #[test]
    fn test_parse_line_style() {
        assert_eq!(LineStyle::parse("solid"), Some(LineStyle::Solid));
        assert_eq!(LineStyle::parse("DASHED"), Some(LineStyle::Dashed));
        assert_eq!(LineStyle::parse("Dotted"), Some(LineStyle::Dotted));
        assert_eq!(LineStyle::parse("wavy"), None);
    }

    #[test]
    fn test_default_is_one_pixel_dotted() {
        let stroke = StrokeParameters::default();
        assert_eq!(stroke.thickness, 1.0);
        assert_eq!(stroke.line_style, LineStyle::Dotted);
        assert_eq!(stroke.color, None);
    }

    #[test]
    fn unset_color_equals_explicit_black() {
        let unset = StrokeParameters::default();
        let black = StrokeParameters::from_color(Color::BLACK);
        assert_eq!(unset, black);

        let red = StrokeParameters::from_color(Color::rgb(0xFF, 0, 0));
        assert_ne!(unset, red);
    }

    #[test]
    fn test_equality_over_all_fields() {
        let a = StrokeParameters {
            color: Some(Color::rgb(0, 0, 0xFF)),
            thickness: 2.0,
            line_style: LineStyle::Dashed,
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.thickness = 2.5;
        assert_ne!(a, b);

        b = a.clone();
        b.line_style = LineStyle::Solid;
        assert_ne!(a, b);
    }
}
