/// Axis-aligned bounds of a generated point cloud
use serde::{Deserialize, Serialize};
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointCloudBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Default for PointCloudBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl PointCloudBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
        }
    }

    /// Update bounds with a new point
    pub fn update(&mut self, x: f64, y: f64, z: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }

    /// Combine with bounds computed over another chunk
    pub fn merge(mut self, other: Self) -> Self {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
        self.min_z = self.min_z.min(other.min_z);
        self.max_z = self.max_z.max(other.max_z);
        self
    }

    /// No point has been added yet
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }

    /// World space dimensions, zero when empty
    pub fn dimensions(&self) -> (f64, f64, f64) {
        if self.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        (
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }

    pub fn center(&self) -> (f64, f64, f64) {
        if self.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        (
            (self.max_x + self.min_x) * 0.5,
            (self.max_y + self.min_y) * 0.5,
            (self.max_z + self.min_z) * 0.5,
        )
    }

    /// Distance from the Y axis to the farthest box corner in the XZ plane
    pub fn xz_radius(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let x = self.min_x.abs().max(self.max_x.abs());
        let z = self.min_z.abs().max(self.max_z.abs());
        x.hypot(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bounds_report_zero_extent() {
        let bounds = PointCloudBounds::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.dimensions(), (0.0, 0.0, 0.0));
        assert_eq!(bounds.xz_radius(), 0.0);
    }

    #[test]
    fn merge_matches_sequential_updates() {
        let mut left = PointCloudBounds::new();
        left.update(-1.0, 0.5, 2.0);
        let mut right = PointCloudBounds::new();
        right.update(3.0, -0.5, -4.0);

        let mut all = PointCloudBounds::new();
        all.update(-1.0, 0.5, 2.0);
        all.update(3.0, -0.5, -4.0);

        assert_eq!(left.merge(right), all);
        assert_eq!(all.dimensions(), (4.0, 1.0, 6.0));
        assert_eq!(all.center(), (1.0, 0.0, -1.0));
        assert_eq!(all.xz_radius(), 5.0);
    }
}
