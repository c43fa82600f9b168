// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene descriptor types consumed by the renderer
//!
//! Every mesh entry is an axis-authored box: `position` is the world-space
//! center, `size` the local extents, `rotation` Euler radians with only the
//! yaw (Y) component ever non-zero. The world is Y-up and right-handed.

use serde::{Deserialize, Serialize};

/// Depth of the thin slab standing in for a door or window opening, in meters
pub const OPENING_DEPTH: f64 = 0.1;
/// Nominal floor slab thickness in meters. Slabs are visually flat, not
/// structurally modeled.
pub const FLOOR_THICKNESS: f64 = 0.01;
/// Side length of the fallback floor slab when no room polygons exist
pub const FALLBACK_FLOOR_EXTENT: f64 = 10.0;

/// Oriented box volume for a wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallMesh3D {
    pub id: String,
    /// World-space center
    pub position: [f64; 3],
    /// Local extents: length, height, thickness
    pub size: [f64; 3],
    /// Euler rotation in radians
    pub rotation: [f64; 3],
}

/// Thin slab volume for a door opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorMesh3D {
    pub id: String,
    pub position: [f64; 3],
    /// Local extents: width, height, depth
    pub size: [f64; 3],
    pub rotation: [f64; 3],
}

/// Thin slab volume for a window opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowMesh3D {
    pub id: String,
    pub position: [f64; 3],
    pub size: [f64; 3],
    pub rotation: [f64; 3],
}

/// Flat floor slab spanning the room footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorMesh3D {
    /// World-space center, always at floor level (`y = 0`)
    pub position: [f64; 3],
    /// Local extents: width, depth, thickness
    pub size: [f64; 3],
}

/// Directional light term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub intensity: f64,
    pub position: [f64; 3],
}

/// Fixed scene lighting: one ambient term, one elevated oblique directional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub ambient: f64,
    pub directional: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            directional: DirectionalLight {
                intensity: 1.0,
                position: [5.0, 10.0, 5.0],
            },
        }
    }
}

/// Default camera pose: elevated and oblique, looking at the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: [f64; 3],
    pub target: [f64; 3],
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: [5.0, 4.0, 5.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Complete, self-contained scene ready for rendering.
///
/// A pure value: rebuilt wholesale on every conversion, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    pub walls: Vec<WallMesh3D>,
    pub doors: Vec<DoorMesh3D>,
    pub windows: Vec<WindowMesh3D>,
    pub floor: FloorMesh3D,
    pub lighting: Lighting,
    pub camera: Camera,
}
