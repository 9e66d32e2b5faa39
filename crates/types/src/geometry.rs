//! Points, sizes, rectangles and affine transforms.
//!
//! All values are in points. Unit conversion happens while parsing style values.

use crate::aspect::AspectAlign;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A 2D affine transform in PDF matrix order `[a b c d e f]`.
///
/// A point maps as `x' = a*x + c*y + e` and `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::identity()
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns the transform that applies `prev` first and `self` second.
    pub fn pre_concat(&self, prev: Self) -> Self {
        Self {
            a: self.a * prev.a + self.c * prev.b,
            b: self.b * prev.a + self.d * prev.b,
            c: self.a * prev.c + self.c * prev.d,
            d: self.b * prev.c + self.d * prev.d,
            e: self.a * prev.e + self.c * prev.f + self.e,
            f: self.b * prev.e + self.d * prev.f + self.f,
        }
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Maps `view` into `available` with a single scale factor, so the whole view stays
    /// visible, then aligns the scaled view inside `available` according to `align`.
    ///
    /// `AspectAlign::None` is treated as min/min alignment here; callers pick
    /// [`Transform::non_uniform_scaling`] for that policy.
    pub fn uniform_scaling(available: Size, view: Rect, align: AspectAlign) -> Self {
        if view.width <= 0.0 || view.height <= 0.0 {
            return Self::identity();
        }
        let scale = (available.width / view.width).min(available.height / view.height);
        let (ax, ay) = align.factors();
        let tx = (available.width - view.width * scale) * ax - view.x * scale;
        let ty = (available.height - view.height * scale) * ay - view.y * scale;
        Self::translate(tx, ty).pre_concat(Self::scale(scale, scale))
    }

    /// Stretches `view` so it exactly fills `available`, ignoring the aspect ratio.
    pub fn non_uniform_scaling(available: Size, view: Rect) -> Self {
        if view.width <= 0.0 || view.height <= 0.0 {
            return Self::identity();
        }
        let sx = available.width / view.width;
        let sy = available.height / view.height;
        Self::translate(-view.x * sx, -view.y * sy).pre_concat(Self::scale(sx, sy))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_constructors() {
        let r = Rect::from_origin_size(Point::new(5.0, 10.0), Size::new(20.0, 30.0));
        assert_eq!(r, Rect::new(5.0, 10.0, 20.0, 30.0));
        assert_eq!(r.right(), 25.0);
        assert_eq!(r.bottom(), 40.0);
        assert_eq!(Rect::zero().size(), Size::zero());
    }

    #[test]
    fn test_uniform_scaling_uses_limiting_axis() {
        let m = Transform::uniform_scaling(
            Size::new(200.0, 200.0),
            Rect::new(0.0, 0.0, 100.0, 50.0),
            AspectAlign::XMidYMid,
        );
        assert_eq!(m.a, 2.0);
        assert_eq!(m.d, 2.0);
        assert_eq!(m.b, 0.0);
        assert_eq!(m.c, 0.0);
        // 100pt of spare height, centred.
        assert_eq!(m.e, 0.0);
        assert_eq!(m.f, 50.0);
    }

    #[test]
    fn test_uniform_scaling_alignment() {
        let available = Size::new(200.0, 200.0);
        let view = Rect::new(0.0, 0.0, 100.0, 50.0);
        let min = Transform::uniform_scaling(available, view, AspectAlign::XMinYMin);
        let max = Transform::uniform_scaling(available, view, AspectAlign::XMaxYMax);
        assert_eq!(min.f, 0.0);
        assert_eq!(max.f, 100.0);
    }

    #[test]
    fn test_uniform_scaling_offsets_view_origin() {
        let m = Transform::uniform_scaling(
            Size::new(100.0, 100.0),
            Rect::new(10.0, 20.0, 50.0, 50.0),
            AspectAlign::XMinYMin,
        );
        let p = m.apply(Point::new(10.0, 20.0));
        assert_eq!(p, Point::zero());
    }

    #[test]
    fn test_non_uniform_scaling() {
        let m = Transform::non_uniform_scaling(
            Size::new(200.0, 200.0),
            Rect::new(0.0, 0.0, 100.0, 50.0),
        );
        assert_eq!(m.a, 2.0);
        assert_eq!(m.d, 4.0);
        assert_eq!(m.apply(Point::new(100.0, 50.0)), Point::new(200.0, 200.0));
    }

    #[test]
    fn test_degenerate_view_is_identity() {
        let m = Transform::non_uniform_scaling(Size::new(10.0, 10.0), Rect::zero());
        assert!(m.is_identity());
    }
}
