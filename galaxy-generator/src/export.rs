/// Packs point sets into square float textures and writes them with a manifest.
use crate::dds_writer::{write_f16_texture, write_f32_texture};
use crate::error::{GalaxyError, Result};
use crate::generator::branch_index;
use crate::manifest::{GalaxyManifest, PointSource, TextureFiles};
use crate::point_set::PointSet;
use constants::texture::{EXPORT_PROGRESS_CHUNK, MAX_POINTS, MAX_TEXTURE_SIZE};
use ddsfile::DxgiFormat;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Store positions as RGBA16F instead of RGBA32F.
    pub half_precision: bool,
    /// Draw progress bars while packing.
    pub show_progress: bool,
    /// Seed recorded in the manifest.
    pub seed: Option<u64>,
}

/// Writes point sets into an output directory under a programmatic name.
pub struct PointSetExporter {
    output_dir: PathBuf,
    output_name: String,
}

impl PointSetExporter {
    /// Create the exporter, creating the output directory if needed.
    pub fn new(output_dir: &Path, name: &str) -> Result<Self> {
        fs::create_dir_all(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            output_name: programmatic_name(name),
        })
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Pack and write textures plus `manifest.json`.
    pub fn export(
        &self,
        point_set: &PointSet,
        source: PointSource,
        options: ExportOptions,
    ) -> Result<GalaxyManifest> {
        let texture_size = texture_size_for(point_set.len())?;
        info!(
            points = point_set.len(),
            texture_size, "exporting point set"
        );

        let progress = create_progress_bar(point_set.len() as u64, options.show_progress);

        progress.set_message("Packing positions");
        let positions = pack_positions(point_set, source.branches(), texture_size, &progress);
        let position_file = format!("{}_position_{1}x{1}.dds", self.output_name, texture_size);
        let position_path = self.output_dir.join(&position_file);
        if options.half_precision {
            write_f16_texture(&position_path, texture_size, &positions)?;
        } else {
            write_f32_texture(
                &position_path,
                texture_size,
                &positions,
                DxgiFormat::R32G32B32A32_Float,
            )?;
        }

        let colour_file = match point_set.colours() {
            Some(colours) => {
                progress.set_position(0);
                progress.set_message("Packing colours");
                let packed = pack_colours(colours, texture_size, &progress);
                let file = format!("{}_colour_{1}x{1}.dds", self.output_name, texture_size);
                write_f32_texture(
                    &self.output_dir.join(&file),
                    texture_size,
                    &packed,
                    DxgiFormat::R32G32B32A32_Float,
                )?;
                Some(file)
            }
            None => None,
        };
        progress.finish_with_message("Textures written");

        let manifest = GalaxyManifest {
            name: self.output_name.clone(),
            source,
            seed: options.seed,
            point_count: point_set.len(),
            has_colour: point_set.has_colours(),
            texture_size,
            position_format: if options.half_precision {
                "rgba16f".to_string()
            } else {
                "rgba32f".to_string()
            },
            texture_files: TextureFiles {
                position: position_file,
                colour: colour_file,
            },
            bounds: Some(point_set.bounds()).filter(|bounds| !bounds.is_empty()),
        };
        manifest.write(&self.output_dir)?;

        Ok(manifest)
    }
}

/// Reject a requested point count the exporter could never pack, before
/// anything is generated. Negative counts are left to config validation.
pub fn check_capacity(count: i64) -> Result<()> {
    match usize::try_from(count) {
        Ok(count) if count > MAX_POINTS => Err(GalaxyError::TooManyPoints {
            count,
            max: MAX_POINTS,
        }),
        _ => Ok(()),
    }
}

/// Smallest power-of-two side whose square holds `count` texels.
pub fn texture_size_for(count: usize) -> Result<usize> {
    if count > MAX_POINTS {
        return Err(GalaxyError::TooManyPoints {
            count,
            max: MAX_POINTS,
        });
    }
    let mut side = 1;
    while side * side < count {
        side *= 2;
    }
    Ok(side.min(MAX_TEXTURE_SIZE))
}

/// Lowercase alphanumeric name with underscores, safe for file names.
pub fn programmatic_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('_');
    if cleaned.is_empty() {
        "galaxy".to_string()
    } else {
        cleaned.to_string()
    }
}

/// RGBA texels: XYZ plus the arm index (zero for sources without arms).
fn pack_positions(
    point_set: &PointSet,
    branches: Option<usize>,
    texture_size: usize,
    progress: &ProgressBar,
) -> Vec<f32> {
    let mut data = vec![0.0f32; texture_size * texture_size * 4];
    for (chunk_index, chunk) in point_set
        .positions()
        .chunks(EXPORT_PROGRESS_CHUNK)
        .enumerate()
    {
        let start = chunk_index * EXPORT_PROGRESS_CHUNK;
        for (offset, [x, y, z]) in chunk.iter().enumerate() {
            let index = start + offset;
            let arm = branches.map_or(0.0, |b| branch_index(index, b) as f32);
            data[index * 4..index * 4 + 4].copy_from_slice(&[*x, *y, *z, arm]);
        }
        progress.inc(chunk.len() as u64);
    }
    data
}

fn pack_colours(colours: &[[f32; 3]], texture_size: usize, progress: &ProgressBar) -> Vec<f32> {
    let mut data = vec![0.0f32; texture_size * texture_size * 4];
    for (chunk_index, chunk) in colours.chunks(EXPORT_PROGRESS_CHUNK).enumerate() {
        let start = chunk_index * EXPORT_PROGRESS_CHUNK;
        for (offset, [r, g, b]) in chunk.iter().enumerate() {
            let index = start + offset;
            data[index * 4..index * 4 + 4].copy_from_slice(&[*r, *g, *b, 1.0]);
        }
        progress.inc(chunk.len() as u64);
    }
    data
}

fn create_progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "[{bar:40.green/blue}] {pos}/{len} points ({percent}%) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("▉▊▋▌▍▎▏ ");
    pb.set_style(style);
    pb
}
