use geo_types::{coord, point, Coord, CoordNum};
use nalgebra::Scalar;

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};

impl<T: CoordNum + Scalar> CartesianPoint2d for geo_types::Point<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.0.x
    }

    fn y(&self) -> Self::Num {
        self.0.y
    }
}

impl<T: CoordNum + Scalar> NewCartesianPoint2d<T> for geo_types::Point<T> {
    fn new(x: T, y: T) -> Self {
        point!(x: x, y: y)
    }
}

impl<T: CoordNum + Scalar> CartesianPoint2d for Coord<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

impl<T: CoordNum + Scalar> NewCartesianPoint2d<T> for Coord<T> {
    fn new(x: T, y: T) -> Self {
        coord!(x: x, y: y)
    }
}
