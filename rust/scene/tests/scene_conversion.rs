// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end conversion tests: plan JSON in, scene descriptor out.

use approx::assert_relative_eq;
use planlift_core::FloorPlan;
use planlift_scene::{convert_plan_to_scene, sample_plan, SceneDescriptor};

const PLAN_JSON: &str = r#"{
    "id": "plan-1",
    "name": "Analyzed Plan",
    "walls": [
        {
            "id": "wall-1",
            "start": { "x": 0.0, "y": 0.0 },
            "end": { "x": 5.0, "y": 0.0 },
            "thickness": 0.2,
            "height": 2.5
        },
        {
            "id": "wall-2",
            "start": { "x": 5.0, "y": 0.0 },
            "end": { "x": 5.0, "y": 5.0 },
            "thickness": 0.2,
            "height": 2.5
        }
    ],
    "doors": [
        {
            "id": "door-1",
            "position": { "x": 2.5, "y": 0.0 },
            "width": 0.9,
            "direction": "horizontal",
            "opens": "left"
        },
        {
            "id": "door-2",
            "position": { "x": 5.0, "y": 2.5 },
            "width": 0.9,
            "direction": "diagonal",
            "opens": "outward"
        }
    ],
    "windows": [
        {
            "id": "window-1",
            "position": { "x": 5.0, "y": 2.5 },
            "width": 1.2,
            "height": 1.5,
            "from_floor": 1.0
        }
    ],
    "rooms": [],
    "scale": 1.0
}"#;

#[test]
fn converts_plan_parsed_from_json() {
    let plan: FloorPlan = serde_json::from_str(PLAN_JSON).unwrap();
    let scene = convert_plan_to_scene(&plan).unwrap();

    assert_eq!(scene.walls.len(), 2);
    assert_eq!(scene.doors.len(), 2);
    assert_eq!(scene.windows.len(), 1);

    let wall1 = &scene.walls[0];
    assert_eq!(wall1.id, "wall-1");
    assert_relative_eq!(wall1.position[0], 2.5);
    assert_relative_eq!(wall1.position[1], 1.25);
    assert_relative_eq!(wall1.size[0], 5.0);
}

#[test]
fn unrecognized_door_fields_default_instead_of_failing() {
    let plan: FloorPlan = serde_json::from_str(PLAN_JSON).unwrap();
    let scene = convert_plan_to_scene(&plan).unwrap();

    // "diagonal"/"outward" are not in the producer vocabulary; the door is
    // kept with an identity rotation rather than dropped or mis-rotated.
    let door2 = scene.doors.iter().find(|d| d.id == "door-2").unwrap();
    assert_relative_eq!(door2.rotation[1], 0.0);
}

#[test]
fn scene_descriptor_round_trips_through_json() {
    let scene = convert_plan_to_scene(&sample_plan()).unwrap();

    let json = serde_json::to_string(&scene).unwrap();
    let back: SceneDescriptor = serde_json::from_str(&json).unwrap();

    assert_eq!(scene, back);
}

#[test]
fn sample_plan_produces_expected_footprint() {
    let scene = convert_plan_to_scene(&sample_plan()).unwrap();

    // Two rooms spanning 100x80 planar units at scale 0.1
    assert_relative_eq!(scene.floor.size[0], 10.0);
    assert_relative_eq!(scene.floor.size[1], 8.0);
    assert_relative_eq!(scene.floor.position[0], 5.0);
    assert_relative_eq!(scene.floor.position[2], -4.0);
}

#[test]
fn repeated_conversion_is_structurally_identical() {
    let plan: FloorPlan = serde_json::from_str(PLAN_JSON).unwrap();

    let a = convert_plan_to_scene(&plan).unwrap();
    let b = convert_plan_to_scene(&plan).unwrap();

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn floor_plan_model_round_trips_through_json() {
    let plan = sample_plan();

    let json = serde_json::to_string(&plan).unwrap();
    let back: FloorPlan = serde_json::from_str(&json).unwrap();

    assert_eq!(plan, back);
}
