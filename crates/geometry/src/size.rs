use core::fmt;

/// The extent of a [`Rect`](crate::Rect) along both axes, in cells.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
	/// Number of columns.
	pub width: i32,
	/// Number of rows.
	pub height: i32,
}

impl Size {
	/// A size with no extent on either axis.
	pub const ZERO: Self = Self::new(0, 0);

	/// Creates a new `Size`.
	pub const fn new(width: i32, height: i32) -> Self {
		Self { width, height }
	}

	/// Returns true if either dimension is zero or negative.
	pub const fn is_empty(self) -> bool {
		self.width <= 0 || self.height <= 0
	}
}

impl From<(i32, i32)> for Size {
	fn from((width, height): (i32, i32)) -> Self {
		Self { width, height }
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}
