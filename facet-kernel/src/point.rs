use std::fmt::{Display, Formatter};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::kernel::Kernel;

/// A point in 2-dimensional cartesian space of the kernel `K`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K::FT: Serialize",
    deserialize = "K::FT: Deserialize<'de>"
))]
pub struct Point2<K: Kernel> {
    x: K::FT,
    y: K::FT,
}

impl<K: Kernel> Point2<K> {
    /// Number of coordinates of the point.
    pub const DIMENSION: usize = 2;

    /// Creates a new point with the given coordinates.
    pub fn new(x: K::FT, y: K::FT) -> Self {
        Self { x, y }
    }

    /// Point with all coordinates equal to zero.
    pub fn origin() -> Self {
        let zero = <K::FT as num_traits::Zero>::zero();
        Self::new(zero, zero)
    }

    /// X coordinate.
    pub fn x(&self) -> K::FT {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> K::FT {
        self.y
    }

    /// Returns `i`-th cartesian coordinate, or `None` if `i` is not less than
    /// [`DIMENSION`](Self::DIMENSION).
    pub fn cartesian(&self, i: usize) -> Option<K::FT> {
        match i {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Returns coordinates of the point as an array.
    pub fn coords(&self) -> [K::FT; 2] {
        [self.x, self.y]
    }

    /// Returns the dimension of the point.
    pub fn dimension(&self) -> usize {
        Self::DIMENSION
    }
}

impl<K: Kernel> Display for Point2<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl<K> AbsDiffEq for Point2<K>
where
    K: Kernel + PartialEq,
    K::FT: AbsDiffEq<K::FT, Epsilon = K::FT>,
{
    type Epsilon = K::FT;

    fn default_epsilon() -> Self::Epsilon {
        K::FT::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

/// A point in 3-dimensional cartesian space of the kernel `K`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K::FT: Serialize",
    deserialize = "K::FT: Deserialize<'de>"
))]
pub struct Point3<K: Kernel> {
    x: K::FT,
    y: K::FT,
    z: K::FT,
}

impl<K: Kernel> Point3<K> {
    /// Number of coordinates of the point.
    pub const DIMENSION: usize = 3;

    /// Creates a new point with the given coordinates.
    pub fn new(x: K::FT, y: K::FT, z: K::FT) -> Self {
        Self { x, y, z }
    }

    /// Point with all coordinates equal to zero.
    pub fn origin() -> Self {
        let zero = <K::FT as num_traits::Zero>::zero();
        Self::new(zero, zero, zero)
    }

    /// X coordinate.
    pub fn x(&self) -> K::FT {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> K::FT {
        self.y
    }

    /// Z coordinate.
    pub fn z(&self) -> K::FT {
        self.z
    }

    /// Returns `i`-th cartesian coordinate, or `None` if `i` is not less than
    /// [`DIMENSION`](Self::DIMENSION).
    pub fn cartesian(&self, i: usize) -> Option<K::FT> {
        match i {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Returns coordinates of the point as an array.
    pub fn coords(&self) -> [K::FT; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the dimension of the point.
    pub fn dimension(&self) -> usize {
        Self::DIMENSION
    }
}

impl<K: Kernel> Display for Point3<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl<K> AbsDiffEq for Point3<K>
where
    K: Kernel + PartialEq,
    K::FT: AbsDiffEq<K::FT, Epsilon = K::FT>,
{
    type Epsilon = K::FT;

    fn default_epsilon() -> Self::Epsilon {
        K::FT::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}
