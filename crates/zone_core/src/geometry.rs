//! Integer plane geometry
//!
//! Two closed shapes are supported, both with inclusive boundaries:
//! - `Circle`: closed disk, squared-distance test (no sqrt)
//! - `Rectangle`: axis-aligned, `low` corner to `high` corner
//!
//! Containment arithmetic is widened to `u128` and saturates, so `contains`
//! is total for every `i64` coordinate.

use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Point on the integer plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`, saturating at `u128::MAX`
    pub fn distance_sq(&self, other: Point) -> u128 {
        let dx = (other.x as i128 - self.x as i128).unsigned_abs();
        let dy = (other.y as i128 - self.y as i128).unsigned_abs();
        (dx * dx).saturating_add(dy * dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Closed disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Circle {
    center: Point,
    radius: i64,
}

impl Circle {
    pub fn new(center: Point, radius: i64) -> Result<Self, ShapeError> {
        if radius < 0 {
            return Err(ShapeError::InvalidShape {
                reason: format!("a circle with a negative radius ({}) is invalid", radius),
            });
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i64 {
        self.radius
    }

    pub fn contains(&self, p: Point) -> bool {
        let r = self.radius as u128;
        self.center.distance_sq(p) <= r * r
    }
}

/// Axis-aligned rectangle spanning `low` to `high` (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    low: Point,
    high: Point,
}

impl Rectangle {
    pub fn new(low: Point, high: Point) -> Result<Self, ShapeError> {
        if high.x < low.x || high.y < low.y {
            return Err(ShapeError::InvalidShape {
                reason: format!("invalid coordinates of a rectangle: {} .. {}", low, high),
            });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> Point {
        self.low
    }

    pub fn high(&self) -> Point {
        self.high
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.low.x..=self.high.x).contains(&p.x) && (self.low.y..=self.high.y).contains(&p.y)
    }
}

/// Shape keyword as written in map files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Rectangle, ShapeKind::Circle];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive match against the canonical keyword.
impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShapeError::UnknownShape { value: s.to_string() })
    }
}

/// Closed set of zone shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        match self {
            Shape::Circle(c) => c.contains(p),
            Shape::Rectangle(r) => r.contains(p),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(f, "circle {} r={}", c.center(), c.radius()),
            Shape::Rectangle(r) => write!(f, "rectangle {} {}", r.low(), r.high()),
        }
    }
}
