use core::fmt;
use core::str::FromStr;

use gridalign_geometry::{Position, Rect};

use crate::{AlignError, place};

/// Horizontal content alignment within a bounding rectangle.
///
/// Parsing from text or from the ordinal encoding is the only place an unknown alignment can
/// appear; both reject it with [`AlignError::InvalidAlignment`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
	/// Content starts at the left edge.
	#[default]
	Left,
	/// Content is centered, truncating toward the left when the slack is odd.
	Center,
	/// Content ends at the right edge.
	Right,
}

/// Vertical content alignment within a bounding rectangle.
///
/// It complements [`HorizontalAlignment`] to provide full 2D positioning control.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
	/// Content starts at the top edge.
	#[default]
	Top,
	/// Content is centered, truncating toward the top when the slack is odd.
	Middle,
	/// Content ends at the bottom edge.
	Bottom,
}

/// One of the two grid axes, used to label alignment errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
	/// The x axis.
	Horizontal,
	/// The y axis.
	Vertical,
}

impl fmt::Display for Axis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Horizontal => write!(f, "horizontal"),
			Self::Vertical => write!(f, "vertical"),
		}
	}
}

impl fmt::Display for HorizontalAlignment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Left => write!(f, "Left"),
			Self::Center => write!(f, "Center"),
			Self::Right => write!(f, "Right"),
		}
	}
}

/// Case-insensitive: `left`, `center`, `right`.
impl FromStr for HorizontalAlignment {
	type Err = AlignError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			v if v.eq_ignore_ascii_case("left") => Ok(Self::Left),
			v if v.eq_ignore_ascii_case("center") => Ok(Self::Center),
			v if v.eq_ignore_ascii_case("right") => Ok(Self::Right),
			_ => Err(AlignError::InvalidAlignment {
				axis: Axis::Horizontal,
				value: s.to_owned(),
			}),
		}
	}
}

/// Ordinal encoding in declaration order: `0` left, `1` center, `2` right.
impl TryFrom<i32> for HorizontalAlignment {
	type Error = AlignError;

	fn try_from(value: i32) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Self::Left),
			1 => Ok(Self::Center),
			2 => Ok(Self::Right),
			_ => Err(AlignError::InvalidAlignment {
				axis: Axis::Horizontal,
				value: value.to_string(),
			}),
		}
	}
}

impl fmt::Display for VerticalAlignment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Top => write!(f, "Top"),
			Self::Middle => write!(f, "Middle"),
			Self::Bottom => write!(f, "Bottom"),
		}
	}
}

/// Case-insensitive: `top`, `middle`, `bottom`.
impl FromStr for VerticalAlignment {
	type Err = AlignError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			v if v.eq_ignore_ascii_case("top") => Ok(Self::Top),
			v if v.eq_ignore_ascii_case("middle") => Ok(Self::Middle),
			v if v.eq_ignore_ascii_case("bottom") => Ok(Self::Bottom),
			_ => Err(AlignError::InvalidAlignment {
				axis: Axis::Vertical,
				value: s.to_owned(),
			}),
		}
	}
}

/// Ordinal encoding in declaration order: `0` top, `1` middle, `2` bottom.
impl TryFrom<i32> for VerticalAlignment {
	type Error = AlignError;

	fn try_from(value: i32) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Self::Top),
			1 => Ok(Self::Middle),
			2 => Ok(Self::Bottom),
			_ => Err(AlignError::InvalidAlignment {
				axis: Axis::Vertical,
				value: value.to_string(),
			}),
		}
	}
}

/// A horizontal and vertical alignment pair.
///
/// Convenient when the same directives are applied to many areas in one render pass.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
	/// Placement along the x axis.
	pub horizontal: HorizontalAlignment,
	/// Placement along the y axis.
	pub vertical: VerticalAlignment,
}

impl Alignment {
	/// Creates a new `Alignment`.
	pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
		Self {
			horizontal,
			vertical,
		}
	}

	/// See [`place::rectangle`].
	pub fn rectangle(self, bounds: Rect, area: Rect) -> Result<Rect, AlignError> {
		place::rectangle(bounds, area, self.horizontal, self.vertical)
	}

	/// See [`place::text`].
	pub fn text(self, bounds: Rect, text: &str) -> Result<Position, AlignError> {
		place::text(bounds, text, self.horizontal, self.vertical)
	}
}

impl fmt::Display for Alignment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.horizontal, self.vertical)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn horizontal_alignment_to_string() {
		assert_eq!(HorizontalAlignment::Left.to_string(), "Left");
		assert_eq!(HorizontalAlignment::Center.to_string(), "Center");
		assert_eq!(HorizontalAlignment::Right.to_string(), "Right");
	}

	#[test]
	fn horizontal_alignment_from_str() {
		assert_eq!("Left".parse::<HorizontalAlignment>(), Ok(HorizontalAlignment::Left));
		assert_eq!("center".parse::<HorizontalAlignment>(), Ok(HorizontalAlignment::Center));
		assert_eq!("RIGHT".parse::<HorizontalAlignment>(), Ok(HorizontalAlignment::Right));
		assert_eq!(
			"middle".parse::<HorizontalAlignment>(),
			Err(AlignError::InvalidAlignment {
				axis: Axis::Horizontal,
				value: "middle".to_owned(),
			})
		);
		assert!("".parse::<HorizontalAlignment>().is_err());
	}

	#[test]
	fn vertical_alignment_to_string() {
		assert_eq!(VerticalAlignment::Top.to_string(), "Top");
		assert_eq!(VerticalAlignment::Middle.to_string(), "Middle");
		assert_eq!(VerticalAlignment::Bottom.to_string(), "Bottom");
	}

	#[test]
	fn vertical_alignment_from_str() {
		let top = "Top".parse::<VerticalAlignment>();
		assert_eq!(top, Ok(VerticalAlignment::Top));

		let middle = " middle ".parse::<VerticalAlignment>();
		assert_eq!(middle, Ok(VerticalAlignment::Middle));

		let bottom = "bottom".parse::<VerticalAlignment>();
		assert_eq!(bottom, Ok(VerticalAlignment::Bottom));

		let invalid = "center".parse::<VerticalAlignment>();
		assert_eq!(
			invalid,
			Err(AlignError::InvalidAlignment {
				axis: Axis::Vertical,
				value: "center".to_owned(),
			})
		);
	}

	#[test]
	fn ordinals_cover_exactly_the_declared_variants() {
		assert_eq!(HorizontalAlignment::try_from(0), Ok(HorizontalAlignment::Left));
		assert_eq!(HorizontalAlignment::try_from(2), Ok(HorizontalAlignment::Right));
		assert_eq!(VerticalAlignment::try_from(1), Ok(VerticalAlignment::Middle));

		for bad in [-1, 3, i32::MAX] {
			assert!(matches!(
				HorizontalAlignment::try_from(bad),
				Err(AlignError::InvalidAlignment {
					axis: Axis::Horizontal,
					..
				})
			));
			assert!(matches!(
				VerticalAlignment::try_from(bad),
				Err(AlignError::InvalidAlignment {
					axis: Axis::Vertical,
					..
				})
			));
		}
	}

	#[test]
	fn invalid_alignment_message_names_axis_and_value() {
		let err = VerticalAlignment::try_from(-1).unwrap_err();
		assert_eq!(err.to_string(), "unsupported vertical alignment \"-1\"");
	}

	#[test]
	fn default_alignment_is_top_left() {
		assert_eq!(
			Alignment::default(),
			Alignment::new(HorizontalAlignment::Left, VerticalAlignment::Top)
		);
		assert_eq!(Alignment::default().to_string(), "Left Top");
	}
}
