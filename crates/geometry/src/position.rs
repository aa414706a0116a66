use core::fmt;
use core::str::FromStr;

use crate::error::{ParseGeometryError, parse_coords, strip_parens};

/// A cell coordinate on the grid.
///
/// The coordinate system has its origin at the top-left, with `x` increasing to the right and `y`
/// increasing downward. Both coordinates may be negative.
///
/// # Examples
///
/// ```
/// use gridalign_geometry::Position;
///
/// let position: Position = "3,-1".parse()?;
/// assert_eq!(position, Position::new(3, -1));
/// assert_eq!(position.to_string(), "(3,-1)");
/// # Ok::<(), gridalign_geometry::ParseGeometryError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
	/// Column.
	pub x: i32,
	/// Row.
	pub y: i32,
}

impl Position {
	/// Position at the origin, the top-left corner of the grid.
	pub const ORIGIN: Self = Self::new(0, 0);

	/// Creates a new `Position`.
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}

	/// Moves the position by `(dx, dy)`, saturating at the bounds of `i32`.
	#[must_use = "method returns the modified value"]
	pub const fn offset(self, dx: i32, dy: i32) -> Self {
		Self {
			x: self.x.saturating_add(dx),
			y: self.y.saturating_add(dy),
		}
	}
}

impl From<(i32, i32)> for Position {
	fn from((x, y): (i32, i32)) -> Self {
		Self { x, y }
	}
}

impl From<Position> for (i32, i32) {
	fn from(position: Position) -> Self {
		(position.x, position.y)
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({},{})", self.x, self.y)
	}
}

/// Parses `x,y`, optionally wrapped in parentheses.
impl FromStr for Position {
	type Err = ParseGeometryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let [x, y] = parse_coords::<2>(strip_parens(s.trim()), s)?;
		Ok(Self { x, y })
	}
}
