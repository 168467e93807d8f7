//! Cartesian points of a computational geometry library.
//!
//! Every point type is parameterized by a [`Kernel`] that fixes the number field of its coordinates.
//! The only kernel provided is [`SimpleCartesian`], which stores coordinates as plain numbers:
//!
//! ```
//! use facet_kernel::{Point3, SimpleCartesian};
//!
//! let p = Point3::<SimpleCartesian<f64>>::new(1.0, 2.0, 3.0);
//! assert_eq!(p.to_string(), "1 2 3");
//! ```
//!
//! Points with arity known only at run time are represented by [`AnyPoint`].

mod any_point;
mod kernel;
mod point;

pub use any_point::AnyPoint;
pub use kernel::{Kernel, SimpleCartesian};
pub use point::{Point2, Point3};
