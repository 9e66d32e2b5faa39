//! Geometry, identifiers and colours shared by the folio crates.

pub mod aspect;
pub mod color;
pub mod geometry;
pub mod ids;

pub use aspect::{AspectAlign, AspectMeet, AspectRatio, Scaling};
pub use color::Color;
pub use geometry::{Point, Rect, Size, Transform};
pub use ids::{ComponentId, OutputName};
