use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced when parsing a [`Position`](crate::Position) or [`Rect`](crate::Rect) from
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGeometryError {
	/// The input had the wrong number of comma separated coordinates.
	#[error("expected {expected} coordinates in {input:?}, found {found}")]
	Arity {
		/// The offending input.
		input: String,
		/// Number of coordinates the target type needs.
		expected: usize,
		/// Number of coordinates present.
		found: usize,
	},

	/// A coordinate was not a valid `i32`.
	#[error("invalid coordinate {value:?} in {input:?}")]
	Coordinate {
		/// The offending input.
		input: String,
		/// The coordinate text that failed to parse.
		value: String,
		/// The underlying integer parse failure.
		#[source]
		source: ParseIntError,
	},
}

/// Splits `input` on commas into exactly `N` integer coordinates.
pub(crate) fn parse_coords<const N: usize>(
	input: &str,
	original: &str,
) -> Result<[i32; N], ParseGeometryError> {
	let parts: Vec<&str> = input.split(',').map(str::trim).collect();
	if parts.len() != N {
		return Err(ParseGeometryError::Arity {
			input: original.to_owned(),
			expected: N,
			found: parts.len(),
		});
	}

	let mut coords = [0; N];
	for (slot, part) in coords.iter_mut().zip(parts) {
		*slot = part
			.parse()
			.map_err(|source| ParseGeometryError::Coordinate {
				input: original.to_owned(),
				value: part.to_owned(),
				source,
			})?;
	}
	Ok(coords)
}

/// Strips one pair of surrounding parentheses, if present.
pub(crate) fn strip_parens(input: &str) -> &str {
	input
		.strip_prefix('(')
		.and_then(|s| s.strip_suffix(')'))
		.unwrap_or(input)
}
