use gridalign_geometry::{Position, Rect};

use crate::anchor::{align_wide, saturate};
use crate::{AlignError, Anchor, HorizontalAlignment, VerticalAlignment};

/// Aligns `area` inside `bounds`.
///
/// Only the size of `area` determines the result. Its position is used solely to check that it
/// lies entirely within `bounds`; the returned rectangle has the same size as `area` and is
/// placed according to `horizontal` and `vertical`.
///
/// # Errors
///
/// Returns [`AlignError::InvertedRect`] if `bounds` or `area` has a negative width or height, and
/// [`AlignError::AreaOutOfBounds`] if any edge of `area` lies outside `bounds`.
///
/// # Examples
///
/// ```
/// use gridalign::{HorizontalAlignment, Rect, VerticalAlignment, rectangle};
///
/// let bounds = Rect::new(0, 0, 3, 3);
/// let area = Rect::new(0, 0, 1, 1);
/// let centered = rectangle(
/// 	bounds,
/// 	area,
/// 	HorizontalAlignment::Center,
/// 	VerticalAlignment::Middle,
/// )?;
/// assert_eq!(centered, Rect::new(1, 1, 2, 2));
/// # Ok::<(), gridalign::AlignError>(())
/// ```
pub fn rectangle(
	bounds: Rect,
	area: Rect,
	horizontal: HorizontalAlignment,
	vertical: VerticalAlignment,
) -> Result<Rect, AlignError> {
	reject_inverted(bounds)?;
	reject_inverted(area)?;
	if !bounds.contains_rect(area) {
		#[cfg(feature = "tracing")]
		tracing::debug!(%area, %bounds, "area outside bounds");
		return Err(AlignError::AreaOutOfBounds { area, bounds });
	}

	let (width, height) = (span(area.min.x, area.max.x), span(area.min.y, area.max.y));
	let x = place_span(bounds.min.x, bounds.max.x, width, horizontal.into());
	let y = place_span(bounds.min.y, bounds.max.y, height, vertical.into());
	let aligned = Rect::from((
		Position::new(saturate(x), saturate(y)),
		Position::new(saturate(x + width), saturate(y + height)),
	));

	#[cfg(feature = "tracing")]
	tracing::trace!(%bounds, %area, %horizontal, %vertical, %aligned, "aligned rectangle");
	Ok(aligned)
}

/// Returns the cell at which rendering of the single-line `text` should start inside `bounds`.
///
/// The text occupies one row and one column per `char`. Its length is not checked against
/// `bounds`: text wider than the bounds is positioned as if it fit, and the caller is expected to
/// trim it before rendering.
///
/// # Errors
///
/// Returns [`AlignError::MultilineText`] if `text` contains a `'\n'`, and
/// [`AlignError::InvertedRect`] if `bounds` has a negative width or height.
pub fn text(
	bounds: Rect,
	text: &str,
	horizontal: HorizontalAlignment,
	vertical: VerticalAlignment,
) -> Result<Position, AlignError> {
	if text.contains('\n') {
		#[cfg(feature = "tracing")]
		tracing::debug!(text, "text spans multiple lines");
		return Err(AlignError::MultilineText {
			text: text.to_owned(),
		});
	}

	reject_inverted(bounds)?;

	let length = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
	let start = Position::new(
		saturate(place_span(bounds.min.x, bounds.max.x, length, horizontal.into())),
		saturate(place_span(bounds.min.y, bounds.max.y, 1, vertical.into())),
	);

	#[cfg(feature = "tracing")]
	tracing::trace!(%bounds, length, %horizontal, %vertical, %start, "aligned text");
	Ok(start)
}

fn reject_inverted(rect: Rect) -> Result<(), AlignError> {
	if rect.is_inverted() {
		#[cfg(feature = "tracing")]
		tracing::debug!(%rect, "inverted rectangle");
		return Err(AlignError::InvertedRect { rect });
	}
	Ok(())
}

/// Exact distance from `min` to `max`; an `i32` difference can exceed `i32::MAX`.
fn span(min: i32, max: i32) -> i64 {
	i64::from(max) - i64::from(min)
}

/// Offset of a `needed` span placed between `min` and `max`.
fn place_span(min: i32, max: i32, needed: i64, anchor: Anchor) -> i64 {
	align_wide(i64::from(min), span(min, max), needed, anchor)
}
