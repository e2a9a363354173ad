//! Trigrid is a coordinate math library for equilateral triangle tilings.
//! It covers the conversions a grid-based application needs to store and
//! draw triangular cells: discrete grid address to continuous world-space
//! position and back, linearization of addresses into flat-array indexes,
//! adjacency enumeration, and a path-distance metric. Containers for
//! per-cell data and rendering live in the consuming application.
//!
//! ```
//! use trigrid::{GridConfig, Side, TriPoint};
//!
//! let config = GridConfig::default();
//! let point = TriPoint::new(2, 3, Side::Up);
//!
//! // The centroid is always strictly inside the triangle, so it maps
//! // straight back to the cell it came from
//! let center = point.centroid(&config);
//! assert_eq!(TriPoint::from_world(center, &config), point);
//!
//! // Every triangle has exactly 3 neighbors
//! assert_eq!(point.adjacents().count(), 3);
//! ```
//!
//! See [GridConfig] for the free parameters of the tiling, and the [grid]
//! module docs for a description of the coordinate systems.

mod config;
pub mod grid;

pub use crate::{
    config::GridConfig,
    grid::{
        EdgeDirection, Side, TriPoint, TriPointMap, TriPointSet, VertexPoint,
        WorldPoint,
    },
};
