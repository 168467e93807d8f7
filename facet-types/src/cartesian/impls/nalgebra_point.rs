use nalgebra::{Point1, Point2, Point3, Scalar};

use crate::cartesian::{
    CartesianPoint1d, CartesianPoint2d, CartesianPoint3d, NewCartesianPoint1d,
    NewCartesianPoint2d, NewCartesianPoint3d,
};

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> CartesianPoint1d for Point1<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> NewCartesianPoint1d<Num> for Point1<Num> {
    fn new(x: Num) -> Self {
        Point1::new(x)
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> NewCartesianPoint2d<Num> for Point2<Num> {
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> CartesianPoint3d for Point3<Num> {
    type Num = Num;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }

    fn z(&self) -> Self::Num {
        self.z
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> NewCartesianPoint3d<Num> for Point3<Num> {
    fn new(x: Num, y: Num, z: Num) -> Self {
        Point3::new(x, y, z)
    }
}
