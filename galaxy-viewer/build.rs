// build.rs
use constants::galaxy::{
    DEFAULT_BRANCHES, DEFAULT_COUNT, DEFAULT_INSIDE_COLOUR, DEFAULT_OUTSIDE_COLOUR,
    DEFAULT_RADIUS, DEFAULT_RANDOMNESS, DEFAULT_RANDOMNESS_POWER, DEFAULT_SIZE, DEFAULT_SPIN,
    GALAXY_PRESET_PATH,
};
use std::{env, fs, path::PathBuf};

/// Writes a default preset into `assets/` when none is present, so a fresh
/// checkout starts with the stock galaxy. Existing presets are left alone.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/{}", GALAXY_PRESET_PATH);

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let assets_dir = manifest_dir.join("assets");
    let preset_path = assets_dir.join(GALAXY_PRESET_PATH);
    if preset_path.exists() {
        return;
    }

    let preset = serde_json::json!({
        "galaxy": {
            "count": DEFAULT_COUNT,
            "size": DEFAULT_SIZE,
            "radius": DEFAULT_RADIUS,
            "branches": DEFAULT_BRANCHES,
            "spin": DEFAULT_SPIN,
            "randomness": DEFAULT_RANDOMNESS,
            "randomness_power": DEFAULT_RANDOMNESS_POWER,
            "inside_colour": DEFAULT_INSIDE_COLOUR,
            "outside_colour": DEFAULT_OUTSIDE_COLOUR,
        }
    });

    fs::create_dir_all(&assets_dir).expect("Failed to create assets directory");
    let json_content = serde_json::to_string_pretty(&preset).unwrap();
    fs::write(&preset_path, json_content).expect("Failed to write default galaxy preset");

    println!(
        "cargo:warning=Generated default preset in assets/{}",
        GALAXY_PRESET_PATH
    );
}
