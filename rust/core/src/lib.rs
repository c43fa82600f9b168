// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planlift floor plan data model
//!
//! Plain value types describing an analyzed 2D floor plan: walls, doors,
//! windows, room polygons, and the planar-unit to meter scale. The editing
//! layer owns and mutates a [`FloorPlan`]; the scene conversion crate reads
//! immutable snapshots of it.
//!
//! Enable the `serde` feature to (de)serialize the whole model.

pub mod error;
pub mod geometry;
pub mod plan;

pub use error::PlanError;
pub use geometry::{BoundingBox2D, Point2D};
pub use plan::{
    Door, DoorDirection, DoorSwing, FloorPlan, Room, Wall, Window, DEFAULT_DOOR_HEIGHT,
    DEFAULT_WALL_HEIGHT, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_SILL,
};
