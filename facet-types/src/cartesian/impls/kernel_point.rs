use facet_kernel::{Kernel, Point2, Point3};
use nalgebra::Scalar;

use crate::cartesian::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d,
};

impl<K> CartesianPoint2d for Point2<K>
where
    K: Kernel,
    K::FT: Scalar,
{
    type Num = K::FT;

    fn x(&self) -> Self::Num {
        Point2::x(self)
    }

    fn y(&self) -> Self::Num {
        Point2::y(self)
    }
}

impl<K> NewCartesianPoint2d<K::FT> for Point2<K>
where
    K: Kernel,
    K::FT: Scalar,
{
    fn new(x: K::FT, y: K::FT) -> Self {
        Point2::new(x, y)
    }
}

impl<K> CartesianPoint3d for Point3<K>
where
    K: Kernel,
    K::FT: Scalar,
{
    type Num = K::FT;

    fn x(&self) -> Self::Num {
        Point3::x(self)
    }

    fn y(&self) -> Self::Num {
        Point3::y(self)
    }

    fn z(&self) -> Self::Num {
        Point3::z(self)
    }
}

impl<K> NewCartesianPoint3d<K::FT> for Point3<K>
where
    K: Kernel,
    K::FT: Scalar,
{
    fn new(x: K::FT, y: K::FT, z: K::FT) -> Self {
        Point3::new(x, y, z)
    }
}
