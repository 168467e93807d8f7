use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::kernel::Kernel;
use crate::point::{Point2, Point3};

/// Point of the kernel `K` whose dimension is known only at run time.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K::FT: Serialize",
    deserialize = "K::FT: Deserialize<'de>"
))]
pub enum AnyPoint<K: Kernel> {
    /// 2-dimensional point.
    Point2(Point2<K>),
    /// 3-dimensional point.
    Point3(Point3<K>),
}

impl<K: Kernel> AnyPoint<K> {
    /// Returns the dimension of the contained point.
    pub fn dimension(&self) -> usize {
        match self {
            AnyPoint::Point2(p) => p.dimension(),
            AnyPoint::Point3(p) => p.dimension(),
        }
    }

    /// Returns `i`-th cartesian coordinate of the contained point.
    pub fn cartesian(&self, i: usize) -> Option<K::FT> {
        match self {
            AnyPoint::Point2(p) => p.cartesian(i),
            AnyPoint::Point3(p) => p.cartesian(i),
        }
    }

    /// Returns the contained 2d point, if any.
    pub fn as_point2(&self) -> Option<&Point2<K>> {
        match self {
            AnyPoint::Point2(p) => Some(p),
            AnyPoint::Point3(_) => None,
        }
    }

    /// Returns the contained 3d point, if any.
    pub fn as_point3(&self) -> Option<&Point3<K>> {
        match self {
            AnyPoint::Point2(_) => None,
            AnyPoint::Point3(p) => Some(p),
        }
    }
}

impl<K: Kernel> From<Point2<K>> for AnyPoint<K> {
    fn from(value: Point2<K>) -> Self {
        Self::Point2(value)
    }
}

impl<K: Kernel> From<Point3<K>> for AnyPoint<K> {
    fn from(value: Point3<K>) -> Self {
        Self::Point3(value)
    }
}

impl<K: Kernel> Display for AnyPoint<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyPoint::Point2(p) => p.fmt(f),
            AnyPoint::Point3(p) => p.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleCartesian;

    type K = SimpleCartesian<f64>;

    #[test]
    fn dimension_follows_variant() {
        let p: AnyPoint<K> = Point2::new(1.0, 2.0).into();
        assert_eq!(p.dimension(), 2);
        assert!(p.as_point3().is_none());
        assert_eq!(p.as_point2(), Some(&Point2::new(1.0, 2.0)));

        let p: AnyPoint<K> = Point3::new(1.0, 2.0, 3.0).into();
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.cartesian(2), Some(3.0));
        assert!(p.as_point2().is_none());
    }

    #[test]
    fn display_delegates_to_point() {
        let p: AnyPoint<K> = Point3::new(1.0, 2.0, 3.0).into();
        assert_eq!(p.to_string(), "1 2 3");
    }

    #[test]
    fn serde() {
        let p: AnyPoint<K> = Point2::new(1.0, 2.0).into();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"Point2":{"x":1.0,"y":2.0}}"#);
        let restored: AnyPoint<K> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);
    }
}
