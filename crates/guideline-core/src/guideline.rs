//! The guideline value type and its collections.
//!
//! A [`Guideline`] pairs a character column with an optional stroke style.
//! Guidelines are produced fresh on every parse and handed to the host's
//! renderer; they have no identity beyond one parse cycle, so the host
//! decides whether to re-render by comparing whole [`GuidelineSet`]s.

use crate::stroke::StrokeParameters;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest legal guideline column.
///
/// Realistic convention files stay well under this; anything larger is a
/// typo rather than intent.
pub const MAX_COLUMN: i32 = 10_000;

/// Check if the given column is a legal guideline position.
///
/// Zero is allowed: it places the guideline to the left of the first
/// character column. Negative values are never allowed.
pub fn is_valid_column(column: i32) -> bool {
    (0..=MAX_COLUMN).contains(&column)
}

/// Errors produced by direct guideline construction.
///
/// Parsing never surfaces this error; malformed convention input degrades
/// silently instead. It reaches callers only through explicit APIs such as
/// a host's "add guideline" command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuidelineError {
    /// The column is outside `0..=10000`.
    #[error("guideline column {0} is out of range (must be between 0 and {MAX_COLUMN})")]
    InvalidColumn(i32),
}

/// The position and style of a single guideline.
///
/// The editor convention numbers the leftmost text column as 1, and the
/// guideline is drawn to the right of its column: a guideline at column 80
/// leaves room for 80 characters to its left.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GuidelineRepr")]
pub struct Guideline {
    column: i32,
    stroke: Option<StrokeParameters>,
}

impl Guideline {
    /// Construct a guideline at `column`, failing with
    /// [`GuidelineError::InvalidColumn`] when the column is out of range.
    ///
    /// `stroke: None` means the renderer should use its own default (themed)
    /// stroke; it is distinct from any explicit stroke, including one whose
    /// fields all hold default values.
    pub fn new(column: i32, stroke: Option<StrokeParameters>) -> Result<Self, GuidelineError> {
        if !is_valid_column(column) {
            return Err(GuidelineError::InvalidColumn(column));
        }

        Ok(Self { column, stroke })
    }

    /// The guideline's character column.
    pub fn column(&self) -> i32 {
        self.column
    }

    /// The guideline's stroke style, if it carries one.
    pub fn stroke(&self) -> Option<&StrokeParameters> {
        self.stroke.as_ref()
    }
}

/// Serde-facing shape of [`Guideline`]; deserialization funnels through
/// [`Guideline::new`] so the column invariant survives the wire.
#[derive(Deserialize)]
struct GuidelineRepr {
    column: i32,
    stroke: Option<StrokeParameters>,
}

impl TryFrom<GuidelineRepr> for Guideline {
    type Error = GuidelineError;

    fn try_from(repr: GuidelineRepr) -> Result<Self, Self::Error> {
        Guideline::new(repr.column, repr.stroke)
    }
}

/// A set of guidelines keyed by the full (column, stroke) pair.
///
/// Insertion order of first-seen entries is preserved so rendering stays
/// stable for the ordered textual forms, but equality is order-insensitive:
/// two sets are equal when they contain the same guidelines, which is
/// exactly the comparison a host makes to decide whether to re-render.
///
/// Two entries with the same column but different strokes are distinct
/// members; uniqueness is never by column alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Guideline>", into = "Vec<Guideline>")]
pub struct GuidelineSet {
    items: Vec<Guideline>,
}

impl GuidelineSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a guideline, returning `false` if an equal one is already
    /// present.
    pub fn insert(&mut self, guideline: Guideline) -> bool {
        if self.items.contains(&guideline) {
            return false;
        }

        self.items.push(guideline);
        true
    }

    /// Whether an equal guideline is present.
    pub fn contains(&self, guideline: &Guideline) -> bool {
        self.items.contains(guideline)
    }

    /// Whether any member sits at `column`, regardless of stroke.
    pub fn contains_column(&self, column: i32) -> bool {
        self.items.iter().any(|g| g.column() == column)
    }

    /// Number of guidelines in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in first-seen insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Guideline> {
        self.items.iter()
    }

    /// The member columns, in insertion order (duplicates possible when two
    /// differently-styled guidelines share a column).
    pub fn columns(&self) -> impl Iterator<Item = i32> + '_ {
        self.items.iter().map(Guideline::column)
    }
}

impl PartialEq for GuidelineSet {
    fn eq(&self, other: &Self) -> bool {
        // Members are deduplicated, so mutual containment reduces to a
        // length check plus one-way containment.
        self.items.len() == other.items.len()
            && self.items.iter().all(|g| other.items.contains(g))
    }
}

impl Eq for GuidelineSet {}

impl FromIterator<Guideline> for GuidelineSet {
    fn from_iter<I: IntoIterator<Item = Guideline>>(iter: I) -> Self {
        let mut set = Self::new();
        for guideline in iter {
            set.insert(guideline);
        }
        set
    }
}

impl From<Vec<Guideline>> for GuidelineSet {
    fn from(items: Vec<Guideline>) -> Self {
        items.into_iter().collect()
    }
}

impl From<GuidelineSet> for Vec<Guideline> {
    fn from(set: GuidelineSet) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a GuidelineSet {
    type Item = &'a Guideline;
    type IntoIter = std::slice::Iter<'a, Guideline>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for GuidelineSet {
    type Item = Guideline;
    type IntoIter = std::vec::IntoIter<Guideline>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::stroke::StrokeParameters;

    #[test]
    fn test_column_validity_range() {
        assert!(is_valid_column(0));
        assert!(is_valid_column(1));
        assert!(is_valid_column(10_000));
        assert!(!is_valid_column(-1));
        assert!(!is_valid_column(10_001));
    }

    #[test]
    fn test_construction_rejects_invalid_columns() {
        assert!(Guideline::new(0, None).is_ok());
        assert!(Guideline::new(10_000, None).is_ok());
        assert_eq!(
            Guideline::new(-1, None),
            Err(GuidelineError::InvalidColumn(-1))
        );
        assert_eq!(
            Guideline::new(99_999, None),
            Err(GuidelineError::InvalidColumn(99_999))
        );
    }

    #[test]
    fn test_no_stroke_differs_from_explicit_stroke() {
        let bare = Guideline::new(80, None).unwrap();
        let styled = Guideline::new(80, Some(StrokeParameters::default())).unwrap();
        assert_ne!(bare, styled);
        assert_eq!(bare, bare.clone());
    }

    #[test]
    fn test_set_dedups_by_full_pair() {
        let red = StrokeParameters::from_color(Color::rgb(0xFF, 0, 0));
        let mut set = GuidelineSet::new();
        assert!(set.insert(Guideline::new(80, None).unwrap()));
        assert!(!set.insert(Guideline::new(80, None).unwrap()));
        // Same column, different stroke: a distinct member.
        assert!(set.insert(Guideline::new(80, Some(red)).unwrap()));
        assert_eq!(set.len(), 2);
        assert!(set.contains_column(80));
        assert!(!set.contains_column(40));
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a: GuidelineSet = [40, 80, 120]
            .into_iter()
            .map(|c| Guideline::new(c, None).unwrap())
            .collect();
        let b: GuidelineSet = [120, 40, 80]
            .into_iter()
            .map(|c| Guideline::new(c, None).unwrap())
            .collect();
        assert_eq!(a, b);

        let c: GuidelineSet = [40, 80]
            .into_iter()
            .map(|col| Guideline::new(col, None).unwrap())
            .collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let set: GuidelineSet = [120, 40, 80]
            .into_iter()
            .map(|c| Guideline::new(c, None).unwrap())
            .collect();
        let columns: Vec<i32> = set.columns().collect();
        assert_eq!(columns, vec![120, 40, 80]);
    }
}
