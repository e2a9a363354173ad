//! This sub-module contains the basic value types that form the triangle
//! coordinate system. See the parent module documentation for more info on
//! the coordinate system.

use crate::config::GridConfig;
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// The two mirror-image triangle orientations that tile a rhombus cell. The
/// up-triangle hugs the cell's origin corner, the down-triangle fills the
/// far half past the diagonal. Orientation alternates with every step to an
/// adjacent triangle.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Up,
    Down,
}

impl Side {
    /// Get the orientation on the other side of any shared edge.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Arithmetic encoding of the orientation: 0 for up, 1 for down. This is
    /// the least-significant bit of the flat-array index layout, and the
    /// `side` term in the distance metric.
    pub const fn offset(self) -> i16 {
        match self {
            Self::Up => 0,
            Self::Down => 1,
        }
    }
}

/// The three directions in which a triangle borders its neighbors, named by
/// the edge being crossed. `Flat` is the horizontal edge: the base of an
/// up-triangle, or the top of a down-triangle. `East` and `West` are the
/// right and left slanted edges respectively.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    Flat,
    East,
    West,
}

/// A 2D point in continuous world space. See module-level docs in
/// [crate::grid] for a description of what world space means.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// A position in the grid coordinate system that refers to a single
/// triangle cell. See module-level documentation for a description of the
/// coordinate system.
///
/// ## Implementation
///
/// The x and y coordinates are stored as `i16`s. A grid more than 32k
/// rhombi on a side would hold over 4 billion triangles, so this saves a
/// lot of memory anywhere positions are stored in bulk.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.side.offset()")]
pub struct TriPoint {
    x: i16,
    y: i16,
    side: Side,
}

impl TriPoint {
    /// The up-triangle of the cell at `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0, Side::Up);

    pub const fn new(x: i16, y: i16, side: Side) -> Self {
        Self { x, y, side }
    }

    /// The column of the rhombus cell holding this triangle
    pub const fn x(self) -> i16 {
        self.x
    }

    /// The row of the rhombus cell holding this triangle
    pub const fn y(self) -> i16 {
        self.y
    }

    /// Which half of the rhombus cell this triangle is
    pub const fn side(self) -> Side {
        self.side
    }

    /// Get the world-space position of this cell's origin corner (the
    /// corner shared by both triangles of the rhombus at `(x, y)`). Note
    /// that the corner itself is a boundary point; use [Self::centroid] for
    /// a point that identifies this particular triangle.
    pub fn to_world(self, config: &GridConfig) -> WorldPoint {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        WorldPoint {
            x: x * config.side_len + y * config.side_len / 2.0,
            y: y * config.height,
        }
    }

    /// Find the triangle that contains the given world-space point. Inverse
    /// of [Self::to_world]/[Self::centroid] for any point strictly inside a
    /// triangle; points exactly on an edge resolve deterministically to one
    /// of its two triangles. Total for all finite inputs.
    pub fn from_world(point: WorldPoint, config: &GridConfig) -> Self {
        // Undo the row shear to get fractional rhombus coordinates
        let yf = point.y / config.height;
        let xf = point.x / config.side_len - yf / 2.0;
        // Offsets within the rhombus must be taken relative to floor, NOT
        // truncation, so they stay in [0, 1) for negative coordinates too
        let x = xf.floor();
        let y = yf.floor();
        // Past the diagonal of the rhombus means the down-triangle
        let side = if (xf - x) + (yf - y) > 1.0 {
            Side::Down
        } else {
            Side::Up
        };
        Self::new(x as i16, y as i16, side)
    }

    /// Get the neighbor sharing the given edge of this triangle. The
    /// neighbor always has the opposite orientation; which cell it lives in
    /// depends on our own orientation, since e.g. only an up-triangle has a
    /// flat edge on the southern row boundary.
    pub fn adjacent(self, direction: EdgeDirection) -> Self {
        let (dx, dy) = match (self.side, direction) {
            (Side::Up, EdgeDirection::Flat) => (0, -1),
            (Side::Up, EdgeDirection::East) => (0, 0),
            (Side::Up, EdgeDirection::West) => (-1, 0),
            (Side::Down, EdgeDirection::Flat) => (0, 1),
            (Side::Down, EdgeDirection::East) => (1, 0),
            (Side::Down, EdgeDirection::West) => (0, 0),
        };
        Self::new(self.x + dx, self.y + dy, self.side.opposite())
    }

    /// Get an iterator of all the triangles directly adjacent to this one.
    /// The iterator will always contain exactly 3 values.
    pub fn adjacents(self) -> impl Iterator<Item = Self> {
        EdgeDirection::iter().map(move |direction| self.adjacent(direction))
    }

    /// Calculate the path distance between two triangles, meaning the
    /// number of shared-edge crossings it takes to get from one to the
    /// other. 0 if the points are equal, 1 if the triangles are adjacent, 2
    /// if there is 1 triangle between them, etc.
    pub fn distance_to(self, other: Self) -> usize {
        let dx = i32::from(self.x) - i32::from(other.x);
        let dy = i32::from(self.y) - i32::from(other.y);
        let ds =
            i32::from(self.side.offset()) - i32::from(other.side.offset());
        // Every term flips sign under an a<->b swap, so the absolute values
        // keep this symmetric
        (dx.abs() + dy.abs() + (dx + dy + ds).abs()) as usize
    }

    /// Get the three corners of this triangle on the vertex lattice. The
    /// two triangles of one rhombus share the corners on its diagonal.
    pub const fn vertices(self) -> [VertexPoint; 3] {
        let (x, y) = (self.x, self.y);
        match self.side {
            Side::Up => [
                VertexPoint::new(x, y),
                VertexPoint::new(x + 1, y),
                VertexPoint::new(x, y + 1),
            ],
            Side::Down => [
                VertexPoint::new(x + 1, y),
                VertexPoint::new(x, y + 1),
                VertexPoint::new(x + 1, y + 1),
            ],
        }
    }

    /// Get the world-space center of this triangle: the mean of its three
    /// corners. Unlike [Self::to_world], the returned point is always
    /// strictly inside the triangle, so it survives a round trip through
    /// [Self::from_world].
    pub fn centroid(self, config: &GridConfig) -> WorldPoint {
        let [a, b, c] = self.vertices();
        let sum =
            a.to_world(config) + b.to_world(config) + c.to_world(config);
        sum / 3.0
    }
}

/// A point on the intersection lattice: the grid of triangle corner points.
/// A grid strip `w` rhombi wide is bounded by `w + 1` columns of corners,
/// which is why the lattice has its own index layout, separate from the
/// cell layout.
///
/// Lattice point `(x, y)` coincides with the origin corner of the cell
/// `(x, y)`, so both share one world-space mapping.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct VertexPoint {
    x: i16,
    y: i16,
}

impl VertexPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> i16 {
        self.x
    }

    pub const fn y(self) -> i16 {
        self.y
    }

    /// Get the world-space position of this corner point. Same affine map
    /// as [TriPoint::to_world].
    pub fn to_world(self, config: &GridConfig) -> WorldPoint {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        WorldPoint {
            x: x * config.side_len + y * config.side_len / 2.0,
            y: y * config.height,
        }
    }
}
