#![warn(missing_docs)]
//! `guideline-core` - headless column-guideline kernel for editor hosts.
//!
//! # Overview
//!
//! `guideline-core` turns raw configuration text describing vertical column
//! guidelines into validated, deduplicated guideline descriptors. It is
//! deliberately headless: it knows nothing about viewports, brushes or
//! adornment layers. The host editor reads convention values or a persisted
//! settings string, calls into this crate, and renders whatever comes back.
//!
//! # What it parses
//!
//! - The `guidelines` convention value, in either of two grammars: a
//!   structured comma-separated list where each entry may carry an inline
//!   style (`80 2px dashed blue`), or a loose list of column numbers with
//!   mixed separators (`132:80, 40 8`). See [`conventions`].
//! - The `guidelines_style` convention value (`1px dotted 80FF0000`),
//!   applied as the fallback style for entries without one.
//! - The standard `max_line_length` convention value, honored as one extra
//!   guideline.
//! - The legacy persisted settings string `RGB(r,g,b) c1, c2, c3`. See
//!   [`settings`].
//!
//! # Design
//!
//! All parsing is pure, synchronous and allocation-light; functions here
//! are callable from any thread and complete in microseconds on realistic
//! input. Malformed configuration never errors out of a parse: bad tokens
//! degrade to fewer guidelines or default styling, so a broken convention
//! file can never take down the editor. The one real error,
//! [`GuidelineError::InvalidColumn`], is reserved for direct construction
//! through explicit host commands.
//!
//! Change detection is the host's job: re-parse on every external change
//! and compare the produced [`GuidelineSet`]s for equality to decide
//! whether to re-render. The kernel holds no state between parses.
//!
//! # Quick start
//!
//! ```rust
//! use guideline_core::conventions;
//!
//! let style = conventions::parse_stroke_style("1px dotted 80FF0000");
//! let set = conventions::parse_guidelines("80, 120 2px solid red", style.as_ref());
//!
//! let columns: Vec<i32> = set.columns().collect();
//! assert_eq!(columns, vec![80, 120]);
//! ```
//!
//! # Module description
//!
//! - [`guideline`] - the `Guideline` value type and `GuidelineSet`
//! - [`stroke`] - line styles, dash patterns and stroke parameters
//! - [`color`] - ARGB colors, hex and named-color parsing
//! - [`conventions`] - the convention-value grammars
//! - [`settings`] - the legacy persisted-string codec

pub mod color;
pub mod conventions;
pub mod guideline;
pub mod settings;
pub mod stroke;

pub use color::Color;
pub use guideline::{Guideline, GuidelineError, GuidelineSet, MAX_COLUMN, is_valid_column};
pub use stroke::{DEFAULT_THICKNESS, LineStyle, MAX_THICKNESS, StrokeParameters};
