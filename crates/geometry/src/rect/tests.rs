use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{Position, Rect, Size};
use crate::ParseGeometryError;

#[test]
fn new_rect_orders_corners() {
	let rect = Rect::new(4, 1, 1, 4);
	assert_eq!(rect.min, Position::new(1, 1));
	assert_eq!(rect.max, Position::new(4, 4));
}

#[test]
fn rect_dimensions_are_max_minus_min() {
	let rect = Rect::new(10, 5, 13, 7);
	assert_eq!(rect.width(), 3);
	assert_eq!(rect.height(), 2);
	assert_eq!(rect.size(), Size::new(3, 2));
}

#[test]
fn zero_sized_rect_is_empty_but_positioned() {
	let rect = Rect::new(2, 3, 2, 8);
	assert!(rect.is_empty());
	assert_eq!(rect.width(), 0);
	assert_eq!(rect.min, Position::new(2, 3));
}

#[test]
fn contains_uses_inclusive_min_exclusive_max() {
	let rect = Rect::new(10, 5, 13, 7);
	assert!(rect.contains(Position::new(10, 5)));
	assert!(rect.contains(Position::new(12, 6)));
	assert!(!rect.contains(Position::new(13, 6)));
	assert!(!rect.contains(Position::new(12, 7)));
}

#[rstest]
#[case::equal(Rect::new(0, 0, 2, 2), true)]
#[case::inner(Rect::new(1, 1, 2, 2), true)]
#[case::touching_max(Rect::new(1, 1, 3, 3), true)]
#[case::past_right(Rect::new(1, 0, 4, 1), false)]
#[case::past_bottom(Rect::new(0, 1, 1, 4), false)]
#[case::before_left(Rect::new(-1, 0, 1, 1), false)]
#[case::before_top(Rect::new(0, -1, 1, 1), false)]
#[case::empty_outside(Rect::new(5, 5, 5, 5), false)]
fn contains_rect(#[case] area: Rect, #[case] expected: bool) {
	let bounds = Rect::new(0, 0, 3, 3);
	assert_eq!(bounds.contains_rect(area), expected);
}

#[test]
fn translate_keeps_size() {
	let rect = Rect::new(1, 1, 3, 4).translate(-2, 5);
	assert_eq!(rect, Rect::new(-1, 6, 1, 9));
	assert_eq!(rect.size(), Size::new(2, 3));
}

#[test]
fn from_size_places_min_corner() {
	assert_eq!(
		Rect::from_size(Position::new(2, 3), Size::new(4, 1)),
		Rect::new(2, 3, 6, 4)
	);
	assert_eq!(Rect::from(Size::new(2, 2)), Rect::new(0, 0, 2, 2));
}

#[rstest]
#[case::bare("0,0,3,3", Rect::new(0, 0, 3, 3))]
#[case::spaced(" 1, 2 ,4 , 5 ", Rect::new(1, 2, 4, 5))]
#[case::negative("-3,-2,-1,0", Rect::new(-3, -2, -1, 0))]
#[case::display_form("(-1,0)-(2,3)", Rect::new(-1, 0, 2, 3))]
#[case::reordered("3,3,0,0", Rect::new(0, 0, 3, 3))]
fn parses(#[case] input: &str, #[case] expected: Rect) {
	assert_eq!(input.parse::<Rect>(), Ok(expected));
}

#[test]
fn display_round_trips() {
	let rect = Rect::new(-4, 2, 7, 9);
	assert_eq!(rect.to_string(), "(-4,2)-(7,9)");
	assert_eq!(rect.to_string().parse::<Rect>(), Ok(rect));
}

#[test]
fn parse_rejects_three_coordinates() {
	assert_eq!(
		"1,2,3".parse::<Rect>(),
		Err(ParseGeometryError::Arity {
			input: "1,2,3".to_owned(),
			expected: 4,
			found: 3,
		})
	);
}

#[test]
fn parse_rejects_garbage_coordinate() {
	let err = "0,0,x,3".parse::<Rect>().unwrap_err();
	assert!(matches!(err, ParseGeometryError::Coordinate { ref value, .. } if value == "x"));
}

#[rstest]
#[case::normal(Rect::new(3, 3, 0, 0), false)]
#[case::empty(Rect::from((Position::new(2, 2), Position::new(2, 5))), false)]
#[case::inverted_x(Rect::from((Position::new(2, 0), Position::new(1, 1))), true)]
#[case::inverted_y(Rect::from((Position::new(0, 2), Position::new(1, 1))), true)]
fn is_inverted(#[case] rect: Rect, #[case] expected: bool) {
	assert_eq!(rect.is_inverted(), expected);
}
