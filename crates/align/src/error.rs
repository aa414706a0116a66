use gridalign_geometry::Rect;
use thiserror::Error;

use crate::Axis;

/// Errors returned by the alignment routines.
///
/// Every failure is a validation failure of the inputs; no result is produced alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
	/// An alignment value outside the closed set for its axis.
	#[error("unsupported {axis} alignment {value:?}")]
	InvalidAlignment {
		/// The axis the value was meant for.
		axis: Axis,
		/// The rejected value as it was given.
		value: String,
	},

	/// The area to align is not fully enclosed by the bounding rectangle.
	#[error("area {area} does not fit inside bounds {bounds}")]
	AreaOutOfBounds {
		/// The rejected area.
		area: Rect,
		/// The bounding rectangle.
		bounds: Rect,
	},

	/// A rectangle whose `max` corner lies before its `min` corner, giving it a negative width or
	/// height.
	#[error("rectangle {rect} has its max corner before its min corner")]
	InvertedRect {
		/// The rejected rectangle.
		rect: Rect,
	},

	/// The text to align contains a line break.
	#[error("text {text:?} spans more than one line")]
	MultilineText {
		/// The rejected text.
		text: String,
	},
}
