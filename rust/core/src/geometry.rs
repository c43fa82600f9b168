// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar geometry primitives shared across the floor plan model

use nalgebra::Point2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point in planar units (pixels or a normalized grid)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point2D) -> Point2D {
        Point2D::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Both coordinates are finite (no NaN/Infinity)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounding box in planar units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl BoundingBox2D {
    /// Compute the bounding box of a vertex stream.
    ///
    /// Non-finite vertices are ignored. Returns `None` when no usable vertex
    /// remains, so an empty stream never folds into infinite bounds.
    pub fn from_points(points: impl IntoIterator<Item = Point2D>) -> Option<Self> {
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        let mut any = false;

        for p in points {
            if !p.is_finite() {
                continue;
            }
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
            any = true;
        }

        if !any {
            return None;
        }

        Some(Self {
            min: Point2D::new(min_x, min_y),
            max: Point2D::new(max_x, max_y),
        })
    }

    pub fn center(&self) -> Point2D {
        self.min.midpoint(&self.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_and_midpoint() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);

        assert_relative_eq!(a.distance_to(&b), 5.0);

        let mid = a.midpoint(&b);
        assert_relative_eq!(mid.x, 1.5);
        assert_relative_eq!(mid.y, 2.0);
    }

    #[test]
    fn test_bounding_box_from_points() {
        let bounds = BoundingBox2D::from_points(vec![
            Point2D::new(2.0, 8.0),
            Point2D::new(-1.0, 3.0),
            Point2D::new(5.0, 0.0),
        ])
        .unwrap();

        assert_relative_eq!(bounds.min.x, -1.0);
        assert_relative_eq!(bounds.min.y, 0.0);
        assert_relative_eq!(bounds.max.x, 5.0);
        assert_relative_eq!(bounds.max.y, 8.0);
        assert_relative_eq!(bounds.width(), 6.0);
        assert_relative_eq!(bounds.height(), 8.0);
    }

    #[test]
    fn test_bounding_box_empty_stream() {
        assert!(BoundingBox2D::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bounding_box_ignores_non_finite() {
        let bounds = BoundingBox2D::from_points(vec![
            Point2D::new(f64::NAN, 1.0),
            Point2D::new(1.0, f64::INFINITY),
        ]);
        assert!(bounds.is_none());

        let bounds = BoundingBox2D::from_points(vec![
            Point2D::new(f64::NAN, 1.0),
            Point2D::new(2.0, 3.0),
        ])
        .unwrap();
        assert_relative_eq!(bounds.min.x, 2.0);
        assert_relative_eq!(bounds.max.y, 3.0);
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let p = Point2D::new(1.25, -7.5);
        let q = Point2D::from_nalgebra(&p.to_nalgebra());
        assert_eq!(p, q);
    }
}
