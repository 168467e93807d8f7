//! Lossless conversion between [`Point`] and cartesian point types of other libraries.
//!
//! Conversion is a plain copy of the coordinates in their order: `x` and `y` always map, `z` only
//! for 3-dimensional points. Both sides store `f64` values, so converting a point there and back
//! gives exactly the original point.
//!
//! The dimension is a part of the point types on both sides. A foreign type that cannot be
//! constructed from `DIM` coordinates does not implement [`ForeignPoint<DIM>`], and an attempt to
//! convert it fails to compile:
//!
//! ```compile_fail
//! use facet_kernel::{Point2, SimpleCartesian};
//! use facet_types::{to_foreign, Point};
//!
//! let p = Point::<3>::new(1.0, 2.0, 3.0);
//! let _: Point2<SimpleCartesian<f64>> = to_foreign(&p);
//! ```
//!
//! For points whose dimension is known only at run time see [`try_to_host`](crate::try_to_host).

use crate::cartesian::{NewCartesianPoint1d, NewCartesianPoint2d, NewCartesianPoint3d};
use crate::point::Point;

/// Cartesian point type of another library with `DIM` coordinates of type `f64`.
///
/// This trait is implemented automatically for every type implementing
/// [`NewCartesianPoint1d`], [`NewCartesianPoint2d`] or [`NewCartesianPoint3d`] with `f64`
/// coordinates.
pub trait ForeignPoint<const DIM: usize>: Sized {
    /// Creates a point from its coordinates.
    fn from_coords(coords: [f64; DIM]) -> Self;

    /// Returns coordinates of the point in order.
    fn to_coords(&self) -> [f64; DIM];
}

impl<T: NewCartesianPoint1d<f64>> ForeignPoint<1> for T {
    fn from_coords([x]: [f64; 1]) -> Self {
        T::new(x)
    }

    fn to_coords(&self) -> [f64; 1] {
        [self.x()]
    }
}

impl<T: NewCartesianPoint2d<f64>> ForeignPoint<2> for T {
    fn from_coords([x, y]: [f64; 2]) -> Self {
        T::new(x, y)
    }

    fn to_coords(&self) -> [f64; 2] {
        [self.x(), self.y()]
    }
}

impl<T: NewCartesianPoint3d<f64>> ForeignPoint<3> for T {
    fn from_coords([x, y, z]: [f64; 3]) -> Self {
        T::new(x, y, z)
    }

    fn to_coords(&self) -> [f64; 3] {
        [self.x(), self.y(), self.z()]
    }
}

/// Converts `point` into the point type `F` of another library.
///
/// ```
/// use facet_kernel::{Point3, SimpleCartesian};
/// use facet_types::{to_foreign, Point};
///
/// let p = Point::<3>::new(1.0, 2.0, 3.0);
/// let converted: Point3<SimpleCartesian<f64>> = to_foreign(&p);
/// assert_eq!(converted.to_string(), "1 2 3");
/// ```
pub fn to_foreign<F, const DIM: usize>(point: &Point<DIM>) -> F
where
    F: ForeignPoint<DIM>,
{
    point.to_foreign()
}

/// Converts `point` of another library into a [`Point`] of the same dimension.
///
/// ```
/// use facet_kernel::{Point3, SimpleCartesian};
/// use facet_types::{to_host, Point};
///
/// let p = Point3::<SimpleCartesian<f64>>::new(1.0, 2.0, 3.0);
/// let converted: Point<3> = to_host(&p);
/// assert_eq!(converted.to_string(), "1.00000 2.00000 3.00000");
/// ```
pub fn to_host<const DIM: usize, F>(point: &F) -> Point<DIM>
where
    F: ForeignPoint<DIM>,
{
    Point::from_foreign(point)
}
