use serde::{Deserialize, Serialize};
use validator::Validate;

/// Physical dimensions of one triangle in the tiling. Every conversion
/// between grid space and world space is parameterized by this config, so
/// two grids of different scale can coexist in one process. The two lengths
/// are free parameters: keeping `height = side_len *
/// [HEIGHT_RATIO](Self::HEIGHT_RATIO)` gives equilateral triangles, but
/// callers can stretch the lattice vertically by picking any other ratio.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Length of one triangle edge, in world units. Must be positive.
    #[validate(range(min = 0.000001))]
    pub side_len: f64,

    /// Altitude of one triangle (base to apex), in world units. Must be
    /// positive. This is also the world-space height of one grid row.
    #[validate(range(min = 0.000001))]
    pub height: f64,
}

impl GridConfig {
    /// Edge length of the reference tiling (`100 * sqrt(3)`).
    pub const DEFAULT_SIDE_LEN: f64 = 173.20508075689;
    /// Altitude of the reference tiling. Together with
    /// [DEFAULT_SIDE_LEN](Self::DEFAULT_SIDE_LEN) this forms an equilateral
    /// triangle.
    pub const DEFAULT_HEIGHT: f64 = 150.0;
    /// Altitude-to-edge ratio of an equilateral triangle (`sqrt(3) / 2`).
    pub const HEIGHT_RATIO: f64 = 0.866_025_403_784_438_6;
    /// Circumradius-to-edge ratio of an equilateral triangle
    /// (`1 / sqrt(3)`), i.e. the distance from a triangle's center to any of
    /// its corners as a fraction of the edge length.
    pub const CENTER_RATIO: f64 = 0.577_350_269_189_625_7;

    /// Build a config for equilateral triangles with the given edge length.
    /// The height is derived via [HEIGHT_RATIO](Self::HEIGHT_RATIO).
    pub fn equilateral(side_len: f64) -> Self {
        Self {
            side_len,
            height: side_len * Self::HEIGHT_RATIO,
        }
    }

    /// Distance from the center of one (equilateral) triangle to any of its
    /// corners, in world units.
    pub fn circumradius(&self) -> f64 {
        self.side_len * Self::CENTER_RATIO
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            side_len: Self::DEFAULT_SIDE_LEN,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}
