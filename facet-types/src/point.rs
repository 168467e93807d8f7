use std::fmt::{Display, Formatter};
use std::ops::Index;

use approx::AbsDiffEq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::convert::ForeignPoint;
use crate::error::FacetTypesError;

/// A point in `DIM`-dimensional cartesian space with `f64` coordinates.
///
/// Only dimensions 1, 2 and 3 are supported. Using any other dimension is rejected at compile time.
///
/// The point is immutable: it is created from its coordinates (with [`Point::new`],
/// [`Point::from_coords`] or a conversion from a foreign point type) and can only be read
/// afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point<const DIM: usize> {
    coords: [f64; DIM],
}

impl<const DIM: usize> Point<DIM> {
    /// Number of decimal places used by [`Display`] when no precision is given in the format
    /// string.
    pub const DEFAULT_PRECISION: usize = 5;

    const SUPPORTED_DIMENSION: () = assert!(
        DIM >= 1 && DIM <= 3,
        "only 1, 2 and 3-dimensional points are supported"
    );

    /// Creates a point from an array of coordinates.
    pub const fn from_coords(coords: [f64; DIM]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SUPPORTED_DIMENSION;
        Self { coords }
    }

    /// Point with all coordinates equal to zero.
    pub const fn origin() -> Self {
        Self::from_coords([0.0; DIM])
    }

    /// Returns coordinates of the point as an array.
    pub const fn coords(&self) -> [f64; DIM] {
        self.coords
    }

    /// Returns `i`-th coordinate, or `None` if `i` is not less than `DIM`.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.coords.get(i).copied()
    }

    /// Returns the dimension of the point.
    pub const fn dimension(&self) -> usize {
        DIM
    }

    /// First coordinate.
    pub const fn x(&self) -> f64 {
        self.coords[0]
    }

    /// Square of the euclidean distance to the `other` point.
    pub fn distance_square(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    /// Euclidean distance to the `other` point.
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_square(other).sqrt()
    }

    /// Converts the point into a point type of another library with the same dimension.
    ///
    /// See [`to_foreign`](crate::to_foreign).
    pub fn to_foreign<F: ForeignPoint<DIM>>(&self) -> F {
        F::from_coords(self.coords)
    }

    /// Creates a point from a point type of another library with the same dimension.
    ///
    /// See [`to_host`](crate::to_host).
    pub fn from_foreign<F: ForeignPoint<DIM>>(point: &F) -> Self {
        Self::from_coords(point.to_coords())
    }
}

impl Point<1> {
    /// Creates a new 1-dimensional point.
    pub const fn new(x: f64) -> Self {
        Self::from_coords([x])
    }
}

impl Point<2> {
    /// Creates a new 2-dimensional point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self::from_coords([x, y])
    }

    /// Second coordinate.
    pub const fn y(&self) -> f64 {
        self.coords[1]
    }
}

impl Point<3> {
    /// Creates a new 3-dimensional point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_coords([x, y, z])
    }

    /// Second coordinate.
    pub const fn y(&self) -> f64 {
        self.coords[1]
    }

    /// Third coordinate.
    pub const fn z(&self) -> f64 {
        self.coords[2]
    }
}

impl<const DIM: usize> Default for Point<DIM> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<const DIM: usize> Index<usize> for Point<DIM> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl<const DIM: usize> From<[f64; DIM]> for Point<DIM> {
    fn from(value: [f64; DIM]) -> Self {
        Self::from_coords(value)
    }
}

impl<const DIM: usize> From<Point<DIM>> for [f64; DIM] {
    fn from(value: Point<DIM>) -> Self {
        value.coords
    }
}

impl<const DIM: usize> TryFrom<&[f64]> for Point<DIM> {
    type Error = FacetTypesError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        let coords: [f64; DIM] = value.try_into().map_err(|_| {
            log::debug!(
                "Rejected {} coordinates for a {DIM}-dimensional point",
                value.len()
            );

            FacetTypesError::DimensionMismatch {
                expected: DIM,
                actual: value.len(),
            }
        })?;

        Ok(Self::from_coords(coords))
    }
}

/// Coordinates are written in fixed notation separated by spaces. The number of decimal places
/// is [`Point::DEFAULT_PRECISION`] unless the format string specifies a precision.
impl<const DIM: usize> Display for Point<DIM> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(Self::DEFAULT_PRECISION);
        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{:.*}", precision, coord)?;
        }

        Ok(())
    }
}

impl<const DIM: usize> AbsDiffEq for Point<DIM> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const DIM: usize> Serialize for Point<DIM> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.coords.iter())
    }
}

impl<'de, const DIM: usize> Deserialize<'de> for Point<DIM> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coords = Vec::<f64>::deserialize(deserializer)?;
        Self::try_from(coords.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use insta::assert_compact_debug_snapshot;

    use super::*;

    #[test]
    fn display_uses_fixed_precision() {
        assert_eq!(
            Point::<3>::new(1.0, 2.0, 3.0).to_string(),
            "1.00000 2.00000 3.00000"
        );
        assert_eq!(Point::<2>::new(-0.5, 1e-7).to_string(), "-0.50000 0.00000");
        assert_eq!(Point::<1>::new(2.0).to_string(), "2.00000");
    }

    #[test]
    fn display_precision_from_format_string() {
        let p = Point::<3>::new(1.0, 2.25, 3.0);
        assert_eq!(format!("{p:.2}"), "1.00 2.25 3.00");
        assert_eq!(format!("{p:.0}"), "1 2 3");
    }

    #[test]
    fn accessors() {
        let p = Point::<3>::new(1.0, 2.0, 3.0);
        assert_eq!((p.x(), p.y(), p.z()), (1.0, 2.0, 3.0));
        assert_eq!(p[2], 3.0);
        assert_eq!(p.get(2), Some(3.0));
        assert_eq!(p.get(3), None);
        assert_eq!(p.dimension(), 3);
        assert_eq!(<[f64; 3]>::from(p), [1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let p = Point::<2>::new(1.0, 2.0);
        let _ = p[2];
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::<3>::default(), Point::<3>::new(0.0, 0.0, 0.0));
        assert_eq!(Point::<1>::default(), Point::<1>::origin());
    }

    #[test]
    fn distance() {
        let a = Point::<3>::new(1.0, 2.0, 3.0);
        let b = Point::<3>::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance_square(&b), 25.0);
        assert_abs_diff_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn try_from_slice() {
        let p = Point::<3>::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
        assert_eq!(p, Point::<3>::new(1.0, 2.0, 3.0));

        let result = Point::<3>::try_from(&[1.0, 2.0][..]);
        assert_matches!(
            result,
            Err(FacetTypesError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );

        let result = Point::<2>::try_from(&[1.0, 2.0, 3.0][..]);
        assert_compact_debug_snapshot!(result, @"Err(DimensionMismatch { expected: 2, actual: 3 })");
    }

    #[test]
    fn dimension_mismatch_message() {
        let err = FacetTypesError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected 3-dimensional point, got 2-dimensional"
        );
    }

    #[test]
    fn abs_diff_eq() {
        assert_abs_diff_eq!(
            Point::<2>::new(1.0, 2.0),
            Point::<2>::new(1.0 + 1e-12, 2.0),
            epsilon = 1e-9
        );
        assert!(!Point::<2>::new(1.0, 2.0).abs_diff_eq(&Point::<2>::new(1.0, 2.1), 1e-9));
    }

    #[test]
    fn serde() {
        let p = Point::<3>::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0]");

        let restored: Point<3> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);

        let err = serde_json::from_str::<Point<2>>(&json).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("dimension mismatch: expected 2-dimensional point, got 3-dimensional"));
    }
}
