// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planlift scene conversion
//!
//! Turns an analyzed 2D floor plan (walls, doors, windows, room polygons in
//! planar units) into a renderer-ready 3D scene descriptor: oriented box
//! volumes, a floor slab spanning the room footprint, default lighting, and
//! a default camera pose.
//!
//! The conversion is a pure, synchronous pass over an immutable plan
//! snapshot. It allocates a fresh descriptor per call, preserves input
//! order, and recovers locally from degenerate elements; only an invalid
//! plan scale fails the whole call.
//!
//! # Usage
//!
//! ```
//! use planlift_core::{FloorPlan, Point2D, Wall};
//! use planlift_scene::convert_plan_to_scene;
//!
//! let mut plan = FloorPlan::new("demo", "Demo Plan", 1.0);
//! plan.walls.push(Wall::new(
//!     "w1",
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(5.0, 0.0),
//!     0.2,
//! ));
//!
//! let scene = convert_plan_to_scene(&plan)?;
//! assert_eq!(scene.walls.len(), 1);
//! # Ok::<(), planlift_scene::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod scene;
pub mod transform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use convert::{
    convert_plan_to_scene, door_to_mesh, floor_from_rooms, sample_plan, wall_to_mesh,
    window_to_mesh,
};
pub use error::{Error, Result};
pub use scene::{
    Camera, DirectionalLight, DoorMesh3D, FloorMesh3D, Lighting, SceneDescriptor, WallMesh3D,
    WindowMesh3D, FALLBACK_FLOOR_EXTENT, FLOOR_THICKNESS, OPENING_DEPTH,
};
pub use transform::to_3d;
