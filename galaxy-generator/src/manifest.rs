/// Manifest describing an exported point set.
use crate::bounds::PointCloudBounds;
use crate::config::GenerationConfig;
use crate::error::Result;
use crate::scatter::ScatterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the manifest inside the export directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Parameters the exported point set was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointSource {
    Galaxy(GenerationConfig),
    Scatter(ScatterConfig),
}

impl PointSource {
    /// Arm count, for sources that have arms.
    pub fn branches(&self) -> Option<usize> {
        match self {
            Self::Galaxy(config) => Some(config.branches.max(1) as usize),
            Self::Scatter(_) => None,
        }
    }
}

/// Texture file names relative to the export directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureFiles {
    /// Position texture with XYZ and arm index per texel.
    pub position: String,
    /// Colour texture with RGB and unit alpha, absent for uncoloured sets.
    pub colour: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyManifest {
    pub name: String,
    pub source: PointSource,
    /// RNG seed, when the set was generated deterministically.
    pub seed: Option<u64>,
    pub point_count: usize,
    pub has_colour: bool,
    pub texture_size: usize,
    /// `rgba32f` or `rgba16f`.
    pub position_format: String,
    pub texture_files: TextureFiles,
    /// Absent for empty sets.
    pub bounds: Option<PointCloudBounds>,
}

impl GalaxyManifest {
    /// Write as pretty JSON into `output_dir`.
    pub fn write(&self, output_dir: &Path) -> Result<()> {
        let manifest_path = output_dir.join(MANIFEST_FILE);
        let manifest_json = serde_json::to_string_pretty(self)?;
        fs::write(&manifest_path, manifest_json)?;
        tracing::info!(path = %manifest_path.display(), "wrote manifest");
        Ok(())
    }

    pub fn read(output_dir: &Path) -> Result<Self> {
        let contents = fs::read_to_string(output_dir.join(MANIFEST_FILE))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Print a summary for verification.
    pub fn print_summary(&self) {
        println!("Manifest Summary:");
        println!("  Name: {}", self.name);
        println!("  Points: {}", self.point_count);
        println!(
            "  Texture: {0}x{0} {1}",
            self.texture_size, self.position_format
        );
        if let Some(bounds) = &self.bounds {
            println!(
                "  Bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                bounds.min_x,
                bounds.min_y,
                bounds.min_z,
                bounds.max_x,
                bounds.max_y,
                bounds.max_z
            );
        }
        match &self.texture_files.colour {
            Some(colour) => println!("  Colour texture: {}", colour),
            None => println!("  No colour texture generated"),
        }
    }
}
