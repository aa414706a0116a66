use core::fmt;
use core::str::FromStr;

use crate::error::{ParseGeometryError, parse_coords, strip_parens};
use crate::{Position, Size};

/// A rectangular area on the cell grid.
///
/// A `Rect` is half-open: [`min`](Self::min) is the first cell inside the rectangle and
/// [`max`](Self::max) is the first cell outside of it on both axes. The width and height are
/// derived as `max - min`, so a rectangle whose corners coincide on either axis is empty but still
/// has a position.
///
/// # Construction
///
/// - [`new`](Self::new) - Create from two corners, swapping coordinates so that `min <= max`
/// - [`from_size`](Self::from_size) - Create from a top-left corner and a [`Size`]
/// - [`from((Position, Position))`](Self::from) - Create from raw corners without reordering
/// - [`from_str`](Self::from_str) - Parse `x0,y0,x1,y1` or `(x0,y0)-(x1,y1)`
///
/// # Examples
///
/// ```rust
/// use gridalign_geometry::{Position, Rect};
///
/// let rect = Rect::new(4, 4, 1, 1);
/// assert_eq!(rect.min, Position::new(1, 1));
/// assert_eq!(rect.max, Position::new(4, 4));
/// assert_eq!(rect.width(), 3);
/// assert_eq!(rect.to_string(), "(1,1)-(4,4)");
/// ```
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
	/// The top-left corner, inclusive.
	pub min: Position,
	/// The bottom-right corner, exclusive.
	pub max: Position,
}

impl fmt::Display for Rect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.min, self.max)
	}
}

impl Rect {
	/// A zero sized Rect at position 0,0
	pub const ZERO: Self = Self {
		min: Position::ORIGIN,
		max: Position::ORIGIN,
	};

	/// Creates a new `Rect` spanning the two corners.
	///
	/// The coordinates are reordered if needed so that `min.x <= max.x` and `min.y <= max.y`,
	/// which means the result never has a negative width or height.
	pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
		let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
		let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
		Self {
			min: Position::new(min_x, min_y),
			max: Position::new(max_x, max_y),
		}
	}

	/// Creates a `Rect` with its top-left corner at `min` and the given size.
	///
	/// The bottom-right corner saturates at the bounds of `i32`.
	pub const fn from_size(min: Position, size: Size) -> Self {
		Self {
			min,
			max: min.offset(size.width, size.height),
		}
	}

	/// The number of columns covered, `max.x - min.x`.
	pub const fn width(self) -> i32 {
		self.max.x.saturating_sub(self.min.x)
	}

	/// The number of rows covered, `max.y - min.y`.
	pub const fn height(self) -> i32 {
		self.max.y.saturating_sub(self.min.y)
	}

	/// Width and height as a [`Size`].
	pub const fn size(self) -> Size {
		Size::new(self.width(), self.height())
	}

	/// Returns true if the `Rect` covers no cells.
	pub const fn is_empty(self) -> bool {
		self.min.x >= self.max.x || self.min.y >= self.max.y
	}

	/// Returns true if `max` lies before `min` on either axis.
	///
	/// Only rectangles built from raw corners can be inverted; [`Rect::new`] never returns one.
	pub const fn is_inverted(self) -> bool {
		self.max.x < self.min.x || self.max.y < self.min.y
	}

	/// Returns true if the given position is inside the `Rect`.
	///
	/// `min` is inside, `max` is not.
	pub const fn contains(self, position: Position) -> bool {
		position.x >= self.min.x
			&& position.x < self.max.x
			&& position.y >= self.min.y
			&& position.y < self.max.y
	}

	/// Returns true if `other` lies entirely within this `Rect`.
	///
	/// Both corners are compared directly, so an empty `other` is only enclosed when its corners
	/// are themselves within range.
	pub const fn contains_rect(self, other: Self) -> bool {
		other.min.x >= self.min.x
			&& other.min.y >= self.min.y
			&& other.max.x <= self.max.x
			&& other.max.y <= self.max.y
	}

	/// Moves the `Rect` by `(dx, dy)` without changing its size.
	#[must_use = "method returns the modified value"]
	pub const fn translate(self, dx: i32, dy: i32) -> Self {
		Self {
			min: self.min.offset(dx, dy),
			max: self.max.offset(dx, dy),
		}
	}
}

impl From<(Position, Position)> for Rect {
	fn from((min, max): (Position, Position)) -> Self {
		Self { min, max }
	}
}

impl From<(Position, Size)> for Rect {
	fn from((position, size): (Position, Size)) -> Self {
		Self::from_size(position, size)
	}
}

impl From<Size> for Rect {
	/// Creates a new `Rect` with the given size at [`Position::ORIGIN`].
	fn from(size: Size) -> Self {
		Self::from_size(Position::ORIGIN, size)
	}
}

/// Parses either `x0,y0,x1,y1` or the [`Display`](fmt::Display) form `(x0,y0)-(x1,y1)`.
///
/// Corners are reordered as in [`Rect::new`].
impl FromStr for Rect {
	type Err = ParseGeometryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let [x0, y0, x1, y1] = match trimmed.split_once(")-(") {
			Some((min, max)) => {
				let [x0, y0] = parse_coords::<2>(strip_parens(&format!("{min})")), s)?;
				let [x1, y1] = parse_coords::<2>(strip_parens(&format!("({max}")), s)?;
				[x0, y0, x1, y1]
			}
			None => parse_coords::<4>(trimmed, s)?,
		};
		Ok(Self::new(x0, y0, x1, y1))
	}
}

#[cfg(test)]
mod tests;
