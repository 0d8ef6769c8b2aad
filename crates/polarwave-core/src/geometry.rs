//! Cartesian and polar point primitives.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point in Cartesian coordinates, in viewport-relative units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// A point in polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    /// Angle in radians.
    pub angle: f64,
    /// Distance from the origin.
    pub radius: f64,
}

impl PolarPoint {
    /// Creates a new polar point.
    pub fn new(angle: f64, radius: f64) -> Self {
        Self { angle, radius }
    }

    /// Projects to Cartesian coordinates.
    pub fn to_cartesian(self) -> Point {
        Point::new(self.angle.cos() * self.radius, self.angle.sin() * self.radius)
    }

    /// Recovers polar coordinates from a Cartesian point.
    ///
    /// The angle is in `(-pi, pi]`; the origin maps to angle 0, radius 0.
    pub fn from_cartesian(point: Point) -> Self {
        let radius = point.x.hypot(point.y);
        let angle = point.y.atan2(point.x);
        Self { angle, radius }
    }
}
