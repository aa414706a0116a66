//! Integer grid geometry shared by the alignment routines and their callers.
//!
//! Coordinates are signed so that content aligned outside its bounds (for example oversized text
//! aligned to the right edge) still has a representable origin.

/// Parse errors for textual positions and rectangles.
pub mod error;
/// Grid positions.
pub mod position;
/// Half-open rectangles on the grid.
pub mod rect;
/// Width/height pairs.
pub mod size;

pub use error::ParseGeometryError;
pub use position::Position;
pub use rect::Rect;
pub use size::Size;
