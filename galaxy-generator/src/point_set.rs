/// Generated point positions with optional per-point colours.
use crate::bounds::PointCloudBounds;
use rayon::prelude::*;

/// Points per chunk when reducing bounds in parallel
const BOUNDS_CHUNK_SIZE: usize = 25_000;

/// Output of one generation call. Immutable once produced; regeneration
/// builds a fresh set rather than editing this one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    positions: Vec<[f32; 3]>,
    colours: Option<Vec<[f32; 3]>>,
}

impl PointSet {
    /// Empty set, with an empty colour buffer when colours are requested.
    pub fn empty(with_colours: bool) -> Self {
        Self {
            positions: Vec::new(),
            colours: with_colours.then(Vec::new),
        }
    }

    /// Build from parallel buffers. Colours must match positions one to one.
    pub(crate) fn from_parts(positions: Vec<[f32; 3]>, colours: Option<Vec<[f32; 3]>>) -> Self {
        debug_assert!(
            colours.as_ref().is_none_or(|c| c.len() == positions.len()),
            "colour buffer length must match positions"
        );
        Self { positions, colours }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colours(&self) -> Option<&[[f32; 3]]> {
        self.colours.as_deref()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn has_colours(&self) -> bool {
        self.colours.is_some()
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` buffer.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flatten().copied().collect()
    }

    /// Colours as a flat `r, g, b, ...` buffer.
    pub fn flat_colours(&self) -> Option<Vec<f32>> {
        self.colours
            .as_ref()
            .map(|colours| colours.iter().flatten().copied().collect())
    }

    /// Consume into the raw buffers.
    pub fn into_parts(self) -> (Vec<[f32; 3]>, Option<Vec<[f32; 3]>>) {
        (self.positions, self.colours)
    }

    /// Bounds over all positions, reduced in parallel chunks.
    pub fn bounds(&self) -> PointCloudBounds {
        self.positions
            .par_chunks(BOUNDS_CHUNK_SIZE)
            .map(|chunk| {
                let mut local_bounds = PointCloudBounds::new();
                for [x, y, z] in chunk {
                    local_bounds.update(*x as f64, *y as f64, *z as f64);
                }
                local_bounds
            })
            .reduce_with(PointCloudBounds::merge)
            .unwrap_or_default()
    }
}
