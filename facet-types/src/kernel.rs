//! Conversion of kernel points whose dimension is known only at run time.

use facet_kernel::{AnyPoint, Kernel, Point2, Point3};

use crate::error::FacetTypesError;
use crate::point::Point;

/// Converts a kernel point of any dimension into a `DIM`-dimensional [`Point`].
///
/// Returns [`FacetTypesError::DimensionMismatch`] without copying any coordinate if the dimension
/// of `point` is not `DIM`.
pub fn try_to_host<const DIM: usize, K>(point: &AnyPoint<K>) -> Result<Point<DIM>, FacetTypesError>
where
    K: Kernel<FT = f64>,
{
    match point {
        AnyPoint::Point2(p) => Point::try_from(&p.coords()[..]),
        AnyPoint::Point3(p) => Point::try_from(&p.coords()[..]),
    }
}

/// Converts `point` into a kernel point of the same dimension.
///
/// The kernel has only 2 and 3-dimensional points, so converting a 1-dimensional point returns
/// [`FacetTypesError::DimensionMismatch`].
pub fn try_to_any<const DIM: usize, K>(point: &Point<DIM>) -> Result<AnyPoint<K>, FacetTypesError>
where
    K: Kernel<FT = f64>,
{
    let coords = point.coords();
    match coords.as_slice() {
        &[x, y] => Ok(Point2::new(x, y).into()),
        &[x, y, z] => Ok(Point3::new(x, y, z).into()),
        _ => {
            let expected = DIM.clamp(Point2::<K>::DIMENSION, Point3::<K>::DIMENSION);
            log::debug!("Kernel has no {DIM}-dimensional points");

            Err(FacetTypesError::DimensionMismatch {
                expected,
                actual: DIM,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use facet_kernel::SimpleCartesian;
    use insta::assert_compact_debug_snapshot;

    use super::*;

    type K = SimpleCartesian<f64>;

    #[test]
    fn any_point_to_host() {
        let p: AnyPoint<K> = Point3::new(1.0, 2.0, 3.0).into();
        let host = try_to_host::<3, _>(&p).unwrap();
        assert_eq!(host, Point::<3>::new(1.0, 2.0, 3.0));

        let p: AnyPoint<K> = Point2::new(-1.0, 0.5).into();
        let host: Point<2> = try_to_host(&p).unwrap();
        assert_eq!(host.coords(), [-1.0, 0.5]);
    }

    #[test]
    fn any_point_dimension_mismatch() {
        let p: AnyPoint<K> = Point2::new(1.0, 2.0).into();
        assert_matches!(
            try_to_host::<3, _>(&p),
            Err(FacetTypesError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );

        let p: AnyPoint<K> = Point3::new(1.0, 2.0, 3.0).into();
        assert_compact_debug_snapshot!(try_to_host::<2, _>(&p), @"Err(DimensionMismatch { expected: 2, actual: 3 })");
        assert_compact_debug_snapshot!(try_to_host::<1, _>(&p), @"Err(DimensionMismatch { expected: 1, actual: 3 })");
    }

    #[test]
    fn host_to_any_point() {
        let p = try_to_any::<3, K>(&Point::<3>::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(p, AnyPoint::Point3(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(p.to_string(), "1 2 3");

        let p = try_to_any::<2, K>(&Point::<2>::new(1.0, 2.0)).unwrap();
        assert_eq!(p.dimension(), 2);
    }

    #[test]
    fn host_to_any_point_rejects_1d() {
        let result = try_to_any::<1, K>(&Point::<1>::new(1.0));
        assert_compact_debug_snapshot!(result, @"Err(DimensionMismatch { expected: 2, actual: 1 })");
    }

    #[test]
    fn round_trip_through_any_point() {
        let host = Point::<3>::new(0.1, -0.0, f64::MAX);
        let any = try_to_any::<3, K>(&host).unwrap();
        let back: Point<3> = try_to_host(&any).unwrap();
        for i in 0..3 {
            assert_eq!(back[i].to_bits(), host[i].to_bits());
        }
    }
}
