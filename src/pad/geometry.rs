//! Geometry primitives shared by the pad model and its scene.
//!
//! All coordinates are local to the pad: the origin is the top-left corner of
//! its bounds, X grows right and Y grows down.

/// A 2D point in local pad coordinates
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A width/height pair
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }

    /// Rect anchored at the local origin, covering `size`
    pub fn from_size(size: Size) -> Self {
        Rect {
            origin: Point::default(),
            size,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width * 0.5,
            self.origin.y + self.size.height * 0.5,
        )
    }

    /// Component-wise interpolation toward `other`, see [`lerp`]
    pub fn lerp(&self, other: &Rect, t: f64, exponent: f64) -> Rect {
        Rect {
            origin: Point::new(
                lerp(self.origin.x, other.origin.x, t, exponent),
                lerp(self.origin.y, other.origin.y, t, exponent),
            ),
            size: Size::new(
                lerp(self.size.width, other.size.width, t, exponent),
                lerp(self.size.height, other.size.height, t, exponent),
            ),
        }
    }
}

/// Interpolates from `from` to `to` by `t` raised to `exponent`.
///
/// An exponent above 1.0 makes the approach accelerate toward `to`.
pub fn lerp(from: f64, to: f64, t: f64, exponent: f64) -> f64 {
    (to - from) * t.powf(exponent) + from
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    max.min(min.max(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends() {
        assert_eq!(lerp(10.0, 20.0, 0.0, 2.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 100.0, 0.5, 1.0), 50.0);
        assert_eq!(lerp(0.0, 100.0, 0.5, 2.0), 25.0);
    }

    #[test]
    fn clamp_keeps_value_in_range() {
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(3.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.4, 0.0, 1.0), 0.4);
    }

    #[test]
    fn rect_edges_and_center() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(rect.max_x(), 40.0);
        assert_eq!(rect.max_y(), 60.0);
        assert_eq!(rect.center(), Point::new(25.0, 40.0));
    }
}
