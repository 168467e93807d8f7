use nalgebra::Scalar;
use num_traits::Num;

/// Point in 1-dimensional cartesian space.
pub trait CartesianPoint1d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd + Scalar;

    /// X coordinate.
    fn x(&self) -> Self::Num;
}

/// Point type that can be constructed from a single cartesian coordinate.
pub trait NewCartesianPoint1d<Num = f64>: CartesianPoint1d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num) -> Self;
}

/// Point in 2-dimensional cartesian space.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd + Scalar;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

/// Point type that can be constructed from two cartesian coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// Point in 3-dimensional cartesian space.
pub trait CartesianPoint3d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd + Scalar;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;
    /// Z coordinate.
    fn z(&self) -> Self::Num;

    /// Returns true if all three coordinates of the points are equal.
    fn equal(&self, other: &impl CartesianPoint3d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y() && self.z() == other.z()
    }
}

/// Point type that can be constructed from three cartesian coordinates.
pub trait NewCartesianPoint3d<Num = f64>: CartesianPoint3d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num, z: Num) -> Self;
}
