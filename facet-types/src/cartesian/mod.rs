//! Accessor and constructor traits for cartesian points of other libraries.
//!
//! Any type implementing the `New...` trait of some arity can be converted to and from
//! [`Point`](crate::Point) of the same arity (see [`ForeignPoint`](crate::ForeignPoint)).

mod cartesian_point;
mod impls;

pub use cartesian_point::{
    CartesianPoint1d, CartesianPoint2d, CartesianPoint3d, NewCartesianPoint1d,
    NewCartesianPoint2d, NewCartesianPoint3d,
};
