//! Result rendering for the two output formats.

use gridalign::{Position, Rect};

use crate::cli::Format;

/// Renders an aligned rectangle: `x0,y0,x1,y1` or its JSON form.
pub fn rect(rect: Rect, format: Format) -> anyhow::Result<String> {
	match format {
		Format::Plain => Ok(format!(
			"{},{},{},{}",
			rect.min.x, rect.min.y, rect.max.x, rect.max.y
		)),
		Format::Json => json(&rect),
	}
}

/// Renders a text start point: `x,y` or its JSON form.
pub fn position(position: Position, format: Format) -> anyhow::Result<String> {
	match format {
		Format::Plain => Ok(format!("{},{}", position.x, position.y)),
		Format::Json => json(&position),
	}
}

fn json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
	Ok(serde_json::to_string(value)?)
}
