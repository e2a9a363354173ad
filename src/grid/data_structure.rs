use crate::grid::unit::TriPoint;
use fnv::FnvBuildHasher;
use std::collections::{HashMap, HashSet};

/// A set of triangle positions
pub type TriPointSet = HashSet<TriPoint, FnvBuildHasher>;
/// A map of triangle positions to some `T`. Consumers with a bounded grid
/// strip will usually prefer a flat `Vec` keyed by [TriPoint::to_index];
/// this map is for sparse or unbounded collections of cells.
pub type TriPointMap<T> = HashMap<TriPoint, T, FnvBuildHasher>;
