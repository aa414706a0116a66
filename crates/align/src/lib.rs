//! Positioning of rectangles and single-line text inside bounding rectangles.
//!
//! Both entry points, [`rectangle`] and [`text`], reduce to the one dimensional [`align`]
//! primitive applied independently on each axis. Nothing is clamped: content larger than its
//! bounds is positioned anyway, and callers that need the result to stay in range must trim the
//! content first.
//!
//! ```
//! use gridalign::{HorizontalAlignment, Position, Rect, VerticalAlignment};
//!
//! let bounds = Rect::new(1, 1, 4, 4);
//! let start = gridalign::text(
//! 	bounds,
//! 	"a",
//! 	HorizontalAlignment::Right,
//! 	VerticalAlignment::Bottom,
//! )?;
//! assert_eq!(start, Position::new(3, 3));
//! # Ok::<(), gridalign::AlignError>(())
//! ```

/// Horizontal and vertical alignment directives.
pub mod alignment;
/// The one dimensional alignment primitive.
pub mod anchor;
/// Alignment failures.
pub mod error;
/// Rectangle and text placement.
pub mod place;

pub use alignment::{Alignment, Axis, HorizontalAlignment, VerticalAlignment};
pub use anchor::{Anchor, align};
pub use error::AlignError;
pub use gridalign_geometry::{ParseGeometryError, Position, Rect, Size};
pub use place::{rectangle, text};
