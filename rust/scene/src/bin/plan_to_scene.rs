// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: convert a floor plan JSON file into a 3D scene descriptor
//!
//! Usage:
//!   plan-to-scene [plan.json] [options]
//!
//! Without an input file a built-in sample plan is converted, which is handy
//! for smoke-testing a renderer integration.

use planlift_core::FloorPlan;
use planlift_scene::{convert_plan_to_scene, sample_plan};
use std::env;
use std::fs;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    let mut input_path: Option<String> = None;
    let mut output_path = String::from("scene.json");
    let mut pretty = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a path");
                    process::exit(1);
                }
                output_path = args[i].clone();
            }
            "--pretty" => {
                pretty = true;
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(1);
            }
            path => {
                input_path = Some(path.to_string());
            }
        }
        i += 1;
    }

    // Step 1: Load or synthesize the plan
    let plan: FloorPlan = match &input_path {
        Some(path) => {
            println!("[1/3] Loading plan: {}", path);
            let contents = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error: cannot read '{}': {}", path, e);
                process::exit(1);
            });
            serde_json::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Error: cannot parse '{}': {}", path, e);
                process::exit(1);
            })
        }
        None => {
            println!("[1/3] No input file, using the built-in sample plan");
            sample_plan()
        }
    };

    println!(
        "      plan '{}': {} walls, {} doors, {} windows, {} rooms (scale {})",
        plan.name,
        plan.walls.len(),
        plan.doors.len(),
        plan.windows.len(),
        plan.rooms.len(),
        plan.scale
    );

    // Step 2: Convert
    println!("[2/3] Converting to 3D scene");
    let scene = convert_plan_to_scene(&plan).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    println!(
        "      scene: {} wall volumes, {} door slabs, {} window slabs, floor {:.2}m x {:.2}m",
        scene.walls.len(),
        scene.doors.len(),
        scene.windows.len(),
        scene.floor.size[0],
        scene.floor.size[1]
    );

    // Step 3: Write descriptor
    println!("[3/3] Writing scene descriptor: {}", output_path);
    let json = if pretty {
        serde_json::to_string_pretty(&scene)
    } else {
        serde_json::to_string(&scene)
    }
    .unwrap_or_else(|e| {
        eprintln!("Error: cannot serialize scene: {}", e);
        process::exit(1);
    });

    fs::write(&output_path, json).unwrap_or_else(|e| {
        eprintln!("Error: cannot write '{}': {}", output_path, e);
        process::exit(1);
    });

    println!("Done.");
}

fn print_usage() {
    println!("Usage: plan-to-scene [plan.json] [options]");
    println!();
    println!("Options:");
    println!("  --output <path>   Output file (default: scene.json)");
    println!("  --pretty          Pretty-print the JSON output");
    println!("  -h, --help        Show this help");
    println!();
    println!("Reads a floor plan JSON (walls, doors, windows, rooms, scale)");
    println!("and writes the converted 3D scene descriptor. Without an input");
    println!("file a built-in sample plan is used.");
}
