//! Flat-array index layouts for per-triangle and per-corner data. A
//! consuming application that stores cell payloads in a `Vec` uses these
//! conversions as its key scheme.
//!
//! The cell layout packs the two triangles of each rhombus together:
//! `index = (y * width + x) * 2 + side`, row-major by `y`, with the
//! orientation as the least-significant bit. The corner layout is a plain
//! row-major walk of the `(width + 1)`-wide vertex lattice:
//! `index = y * (width + 1) + x`.
//!
//! Unlike the rest of the coordinate math, these conversions are only
//! meaningful for positions inside the `width`-wide storage strip, so they
//! validate their inputs and return an error instead of silently producing
//! an index into some other cell's slot. Callers must pass the same `width`
//! to both directions of the conversion.

use crate::grid::unit::{Side, TriPoint, VertexPoint};
use anyhow::{anyhow, Context};

impl TriPoint {
    /// Linearize this position into a flat-array index for a grid strip
    /// `width` rhombi wide (`2 * width` triangles per row). Returns an
    /// error if `width` is zero or if this position lies outside the strip
    /// (`0 <= x < width`, `0 <= y`).
    pub fn to_index(self, width: u16) -> anyhow::Result<usize> {
        if width == 0 {
            return Err(anyhow!("invalid grid width 0; must be at least 1"));
        }
        if self.x() < 0
            || i32::from(self.x()) >= i32::from(width)
            || self.y() < 0
        {
            return Err(anyhow!(
                "position {} is outside the grid strip of width {}; \
                 expected 0 <= x < {} and 0 <= y",
                self,
                width,
                width
            ));
        }
        let cell =
            self.y() as usize * usize::from(width) + self.x() as usize;
        Ok(cell * 2 + self.side().offset() as usize)
    }

    /// Decode a flat-array index produced by [Self::to_index] with the same
    /// `width`. Returns an error if `width` is zero, or if the index
    /// decodes to a row beyond the coordinate range.
    pub fn from_index(index: usize, width: u16) -> anyhow::Result<Self> {
        if width == 0 {
            return Err(anyhow!("invalid grid width 0; must be at least 1"));
        }
        let side = if index % 2 == 0 { Side::Up } else { Side::Down };
        let cell = index / 2;
        let width = usize::from(width);
        let x = i16::try_from(cell % width)
            .with_context(|| index_range_error(index, width))?;
        let y = i16::try_from(cell / width)
            .with_context(|| index_range_error(index, width))?;
        Ok(Self::new(x, y, side))
    }
}

impl VertexPoint {
    /// Linearize this corner point into a flat-array index for the vertex
    /// lattice bounding a grid strip `width` rhombi wide. The lattice has
    /// one more column of corners than the strip has cells, so `x` may
    /// equal `width`. Returns an error if `width` is zero or if this point
    /// lies outside the lattice (`0 <= x <= width`, `0 <= y`).
    pub fn to_index(self, width: u16) -> anyhow::Result<usize> {
        if width == 0 {
            return Err(anyhow!("invalid grid width 0; must be at least 1"));
        }
        if self.x() < 0 || i32::from(self.x()) > i32::from(width) || self.y() < 0
        {
            return Err(anyhow!(
                "corner {} is outside the vertex lattice of width {}; \
                 expected 0 <= x <= {} and 0 <= y",
                self,
                width,
                width
            ));
        }
        Ok(self.y() as usize * (usize::from(width) + 1) + self.x() as usize)
    }

    /// Decode a flat-array index produced by [Self::to_index] with the same
    /// `width`. Returns an error if `width` is zero, or if the index
    /// decodes to a row beyond the coordinate range.
    pub fn from_index(index: usize, width: u16) -> anyhow::Result<Self> {
        if width == 0 {
            return Err(anyhow!("invalid grid width 0; must be at least 1"));
        }
        let columns = usize::from(width) + 1;
        let x = i16::try_from(index % columns)
            .with_context(|| index_range_error(index, width.into()))?;
        let y = i16::try_from(index / columns)
            .with_context(|| index_range_error(index, width.into()))?;
        Ok(Self::new(x, y))
    }
}

fn index_range_error(index: usize, width: usize) -> String {
    format!("index {index} is out of range for a grid of width {width}")
}
