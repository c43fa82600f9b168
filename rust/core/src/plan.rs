// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan element types
//!
//! The plan is produced by an external analyzer or by the interactive editor
//! and consumed read-only by the scene conversion. Every collection field is
//! always present (possibly empty), so consumers never null-check.

use crate::error::PlanError;
use crate::geometry::Point2D;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default wall height in meters
pub const DEFAULT_WALL_HEIGHT: f64 = 2.5;
/// Default door height in meters
pub const DEFAULT_DOOR_HEIGHT: f64 = 2.1;
/// Default window height in meters
pub const DEFAULT_WINDOW_HEIGHT: f64 = 1.5;
/// Default window sill height above floor level in meters
pub const DEFAULT_WINDOW_SILL: f64 = 1.0;

/// A straight wall segment between two planar points
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wall {
    pub id: String,
    pub start: Point2D,
    pub end: Point2D,
    /// Wall thickness in meters (already metric, not a planar distance)
    pub thickness: f64,
    /// Wall height in meters
    pub height: f64,
}

impl Wall {
    /// Create a wall with the default height
    pub fn new(id: impl Into<String>, start: Point2D, end: Point2D, thickness: f64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            thickness,
            height: DEFAULT_WALL_HEIGHT,
        }
    }

    /// Centerline length in planar units
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Cardinal orientation of a door opening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DoorDirection {
    Horizontal,
    Vertical,
    /// Catch-all for unrecognized producer values; behaves as horizontal
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

/// Which side the door leaf swings toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DoorSwing {
    Left,
    Right,
    Both,
    /// Catch-all for unrecognized producer values; behaves as left
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

/// A door placed on the plan
///
/// Doors carry no derived orientation vector; `direction` is a coarse
/// cardinal alignment chosen by the producer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Door {
    pub id: String,
    pub position: Point2D,
    /// Opening width in planar units
    pub width: f64,
    pub direction: DoorDirection,
    pub opens: DoorSwing,
}

impl Door {
    pub fn new(id: impl Into<String>, position: Point2D, width: f64) -> Self {
        Self {
            id: id.into(),
            position,
            width,
            direction: DoorDirection::Horizontal,
            opens: DoorSwing::Left,
        }
    }
}

/// A window placed on the plan
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Window {
    pub id: String,
    pub position: Point2D,
    /// Opening width in planar units
    pub width: f64,
    /// Opening height in meters
    pub height: f64,
    /// Sill elevation above floor level in meters
    pub from_floor: f64,
}

impl Window {
    /// Create a window with the default height and sill elevation
    pub fn new(id: impl Into<String>, position: Point2D, width: f64) -> Self {
        Self {
            id: id.into(),
            position,
            width,
            height: DEFAULT_WINDOW_HEIGHT,
            from_floor: DEFAULT_WINDOW_SILL,
        }
    }
}

/// A room as a closed boundary polygon
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Boundary polygon, implicitly closed. Polygon validity
    /// (non-self-intersection) is not enforced here.
    pub boundary: Vec<Point2D>,
    /// Area in square planar units
    pub area: f64,
}

impl Room {
    /// Create a room, computing its area from the boundary
    pub fn new(id: impl Into<String>, name: impl Into<String>, boundary: Vec<Point2D>) -> Self {
        let area = Self::polygon_area(&boundary);
        Self {
            id: id.into(),
            name: name.into(),
            boundary,
            area,
        }
    }

    /// Calculate polygon area using the shoelace formula
    pub fn polygon_area(points: &[Point2D]) -> f64 {
        let n = points.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += points[i].x * points[j].y;
            area -= points[j].x * points[i].y;
        }

        (area / 2.0).abs()
    }
}

/// Complete floor plan: the snapshot the conversion engine reads
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloorPlan {
    pub id: String,
    pub name: String,
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub rooms: Vec<Room>,
    /// Planar-unit to meter conversion factor (`meters = units * scale`)
    pub scale: f64,
}

impl FloorPlan {
    /// Create an empty plan with all collections initialized
    pub fn new(id: impl Into<String>, name: impl Into<String>, scale: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            walls: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
            rooms: Vec::new(),
            scale,
        }
    }

    /// Check the producer contract. The scale is the only plan-level field
    /// without a meaningful per-element recovery: nothing downstream of a
    /// zero or negative factor is usable.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(PlanError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wall_length() {
        let wall = Wall::new(
            "w1",
            Point2D::new(0.0, 0.0),
            Point2D::new(30.0, 40.0),
            0.2,
        );
        assert_relative_eq!(wall.length(), 50.0);
        assert_relative_eq!(wall.height, DEFAULT_WALL_HEIGHT);
    }

    #[test]
    fn test_polygon_area_square() {
        let square = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 4.0),
            Point2D::new(0.0, 4.0),
        ];
        assert_relative_eq!(Room::polygon_area(&square), 16.0);
    }

    #[test]
    fn test_polygon_area_winding_independent() {
        let cw = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 4.0),
            Point2D::new(4.0, 4.0),
            Point2D::new(4.0, 0.0),
        ];
        assert_relative_eq!(Room::polygon_area(&cw), 16.0);
    }

    #[test]
    fn test_polygon_area_degenerate() {
        assert_eq!(Room::polygon_area(&[]), 0.0);
        assert_eq!(
            Room::polygon_area(&[Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0)]),
            0.0
        );
    }

    #[test]
    fn test_room_new_computes_area() {
        let room = Room::new(
            "r1",
            "Living Room",
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, 0.0),
                Point2D::new(10.0, 8.0),
                Point2D::new(0.0, 8.0),
            ],
        );
        assert_relative_eq!(room.area, 80.0);
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let mut plan = FloorPlan::new("p1", "Test Plan", 1.0);
        assert!(plan.validate().is_ok());

        plan.scale = 0.0;
        assert!(plan.validate().is_err());

        plan.scale = -0.5;
        assert!(plan.validate().is_err());

        plan.scale = f64::NAN;
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_new_plan_is_empty() {
        let plan = FloorPlan::new("p1", "Empty", 0.01);
        assert!(plan.walls.is_empty());
        assert!(plan.doors.is_empty());
        assert!(plan.windows.is_empty());
        assert!(plan.rooms.is_empty());
    }
}
