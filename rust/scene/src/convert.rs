// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element meshing and scene assembly
//!
//! Each element maps independently; a degenerate entry is dropped (or its
//! orientation defaulted) without failing the conversion, so a plan with one
//! bad wall still produces a usable scene for the rest.

use crate::error::Result;
use crate::scene::{
    Camera, DoorMesh3D, FloorMesh3D, Lighting, SceneDescriptor, WallMesh3D, WindowMesh3D,
    FALLBACK_FLOOR_EXTENT, FLOOR_THICKNESS, OPENING_DEPTH,
};
use crate::transform::to_3d;
use planlift_core::{
    BoundingBox2D, Door, DoorDirection, FloorPlan, Point2D, Room, Wall, Window,
    DEFAULT_DOOR_HEIGHT,
};
use std::f64::consts::FRAC_PI_2;
use tracing::{debug, warn};

/// Convert a wall segment into an oriented box volume.
///
/// The box is authored lying along world X and rotated about the vertical
/// axis to align with the wall direction. Returns `None` for degenerate
/// walls: coincident endpoints or non-finite data.
pub fn wall_to_mesh(wall: &Wall, scale: f64) -> Option<WallMesh3D> {
    let start = to_3d(wall.start, scale);
    let end = to_3d(wall.end, scale);

    let dx = end.x - start.x;
    let dz = end.z - start.z;
    let length = (dx * dx + dz * dz).sqrt();

    if length == 0.0 || !length.is_finite() {
        warn!(id = %wall.id, "skipping zero-length or malformed wall");
        return None;
    }
    if !wall.thickness.is_finite() || !wall.height.is_finite() {
        warn!(id = %wall.id, "skipping wall with non-finite dimensions");
        return None;
    }

    let angle = dz.atan2(dx);

    // Length derives from scaled planar coordinates, but thickness is an
    // already-metric measurement and is NOT re-multiplied by the scale.
    // Normalizing the units here would change the cross-section of every
    // wall ever produced.
    Some(WallMesh3D {
        id: wall.id.clone(),
        position: [start.x + dx / 2.0, wall.height / 2.0, start.z + dz / 2.0],
        size: [length, wall.height, wall.thickness],
        rotation: [0.0, angle, 0.0],
    })
}

/// Convert a door into a thin slab spanning floor to lintel.
pub fn door_to_mesh(door: &Door, scale: f64) -> Option<DoorMesh3D> {
    if !door.position.is_finite() || !door.width.is_finite() {
        warn!(id = %door.id, "skipping door with non-finite data");
        return None;
    }

    let pos = to_3d(door.position, scale);

    // Doors carry no endpoint pair to derive an angle from; vertical
    // placements get a quarter turn, anything else stays axis-aligned.
    let yaw = match door.direction {
        DoorDirection::Vertical => FRAC_PI_2,
        DoorDirection::Horizontal => 0.0,
        DoorDirection::Unknown => {
            debug!(id = %door.id, "unrecognized door direction, treating as horizontal");
            0.0
        }
    };

    Some(DoorMesh3D {
        id: door.id.clone(),
        position: [pos.x, DEFAULT_DOOR_HEIGHT / 2.0, pos.z],
        size: [door.width * scale, DEFAULT_DOOR_HEIGHT, OPENING_DEPTH],
        rotation: [0.0, yaw, 0.0],
    })
}

/// Convert a window into a thin slab centered within the sill-to-head span.
pub fn window_to_mesh(window: &Window, scale: f64) -> Option<WindowMesh3D> {
    if !window.position.is_finite()
        || !window.width.is_finite()
        || !window.height.is_finite()
        || !window.from_floor.is_finite()
    {
        warn!(id = %window.id, "skipping window with non-finite data");
        return None;
    }

    let pos = to_3d(window.position, scale);

    Some(WindowMesh3D {
        id: window.id.clone(),
        position: [pos.x, window.from_floor + window.height / 2.0, pos.z],
        size: [window.width * scale, window.height, OPENING_DEPTH],
        rotation: [0.0, 0.0, 0.0],
    })
}

/// Generate the floor slab from the union of all room boundaries.
///
/// Upstream analysis routinely yields no room polygons; a plan without a
/// single usable boundary vertex still gets a nominal slab at the origin. A
/// genuinely zero-area boundary yields a zero-size slab, emitted as-is.
pub fn floor_from_rooms(rooms: &[Room], scale: f64) -> FloorMesh3D {
    let bounds =
        BoundingBox2D::from_points(rooms.iter().flat_map(|room| room.boundary.iter().copied()));

    let Some(bounds) = bounds else {
        if !rooms.is_empty() {
            debug!("no usable room boundary vertices, using fallback slab");
        }
        return FloorMesh3D {
            position: [0.0, 0.0, 0.0],
            size: [FALLBACK_FLOOR_EXTENT, FALLBACK_FLOOR_EXTENT, FLOOR_THICKNESS],
        };
    };

    let center = bounds.center();

    FloorMesh3D {
        position: [center.x * scale, 0.0, -center.y * scale],
        size: [
            bounds.width() * scale,
            bounds.height() * scale,
            FLOOR_THICKNESS,
        ],
    }
}

/// Convert a complete floor plan into a renderer-ready scene.
///
/// Total for every structurally valid plan with a valid scale, including an
/// entirely empty one. Output order matches input order for every element
/// array; degenerate entries are skipped per element. The only fatal input
/// is a non-positive or non-finite scale.
pub fn convert_plan_to_scene(plan: &FloorPlan) -> Result<SceneDescriptor> {
    plan.validate()?;
    let scale = plan.scale;

    Ok(SceneDescriptor {
        walls: plan
            .walls
            .iter()
            .filter_map(|wall| wall_to_mesh(wall, scale))
            .collect(),
        doors: plan
            .doors
            .iter()
            .filter_map(|door| door_to_mesh(door, scale))
            .collect(),
        windows: plan
            .windows
            .iter()
            .filter_map(|window| window_to_mesh(window, scale))
            .collect(),
        floor: floor_from_rooms(&plan.rooms, scale),
        lighting: Lighting::default(),
        camera: Camera::default(),
    })
}

/// Build a small two-room demo plan for validation and the CLI
pub fn sample_plan() -> FloorPlan {
    let mut plan = FloorPlan::new("sample", "Sample Apartment", 0.1);

    // Outer walls, 100x80 planar units (10m x 8m)
    plan.walls = vec![
        Wall::new("w-south", Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0), 0.3),
        Wall::new("w-east", Point2D::new(100.0, 0.0), Point2D::new(100.0, 80.0), 0.3),
        Wall::new("w-north", Point2D::new(100.0, 80.0), Point2D::new(0.0, 80.0), 0.3),
        Wall::new("w-west", Point2D::new(0.0, 80.0), Point2D::new(0.0, 0.0), 0.3),
        // Interior partition
        Wall::new("w-mid", Point2D::new(60.0, 0.0), Point2D::new(60.0, 80.0), 0.15),
    ];

    plan.doors = vec![Door::new("d-entry", Point2D::new(30.0, 0.0), 9.0)];

    let mut partition_door = Door::new("d-mid", Point2D::new(60.0, 40.0), 8.0);
    partition_door.direction = DoorDirection::Vertical;
    plan.doors.push(partition_door);

    plan.windows = vec![
        Window::new("win-north", Point2D::new(25.0, 80.0), 12.0),
        Window::new("win-east", Point2D::new(100.0, 40.0), 10.0),
    ];

    plan.rooms = vec![
        Room::new(
            "r-living",
            "Living Room",
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(60.0, 0.0),
                Point2D::new(60.0, 80.0),
                Point2D::new(0.0, 80.0),
            ],
        ),
        Room::new(
            "r-bed",
            "Bedroom",
            vec![
                Point2D::new(60.0, 0.0),
                Point2D::new(100.0, 0.0),
                Point2D::new(100.0, 80.0),
                Point2D::new(60.0, 80.0),
            ],
        ),
    ];

    plan
}
