use crate::{HorizontalAlignment, VerticalAlignment};

/// Where along a single axis a span is placed within the available space.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Anchor {
	/// Flush with the start of the available span.
	Start,
	/// Centered, with odd slack truncated toward the start.
	Center,
	/// Flush with the end of the available span.
	End,
}

impl From<HorizontalAlignment> for Anchor {
	fn from(alignment: HorizontalAlignment) -> Self {
		match alignment {
			HorizontalAlignment::Left => Self::Start,
			HorizontalAlignment::Center => Self::Center,
			HorizontalAlignment::Right => Self::End,
		}
	}
}

impl From<VerticalAlignment> for Anchor {
	fn from(alignment: VerticalAlignment) -> Self {
		match alignment {
			VerticalAlignment::Top => Self::Start,
			VerticalAlignment::Middle => Self::Center,
			VerticalAlignment::Bottom => Self::End,
		}
	}
}

/// Returns the offset at which a span of `needed` cells starts inside `available` cells that
/// begin at `start`.
///
/// The result is not clamped. When `needed > available` the span overflows the available space,
/// and for [`Anchor::Center`] the negative slack is halved with truncation toward zero, so the
/// offset lands no further before `start` than half the overflow rounded down. The result
/// saturates at the bounds of `i32`.
///
/// # Examples
///
/// ```
/// use gridalign::{Anchor, align};
///
/// assert_eq!(align(1, 3, 1, Anchor::Center), 2);
/// assert_eq!(align(1, 3, 4, Anchor::Center), 1);
/// assert_eq!(align(1, 3, 4, Anchor::End), 0);
/// ```
pub fn align(start: i32, available: i32, needed: i32, anchor: Anchor) -> i32 {
	saturate(align_wide(
		i64::from(start),
		i64::from(available),
		i64::from(needed),
		anchor,
	))
}

/// [`align`] over `i64` spans, so lengths of full-range `i32` rectangles stay exact.
pub(crate) fn align_wide(start: i64, available: i64, needed: i64, anchor: Anchor) -> i64 {
	match anchor {
		Anchor::Start => start,
		// Signed `/` truncates toward zero; floor division would shift odd overflow one cell
		// further toward the start.
		Anchor::Center => start.saturating_add(available.saturating_sub(needed) / 2),
		Anchor::End => start.saturating_add(available).saturating_sub(needed),
	}
}

pub(crate) fn saturate(value: i64) -> i32 {
	i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
