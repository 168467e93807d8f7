//! Fixed-dimension points of finite element code and their lossless conversion to points of other
//! geometry libraries.
//!
//! The crate defines [`Point<DIM>`](Point), a point with `DIM` (1, 2 or 3) coordinates of type
//! `f64`. It can be converted to and from any type that implements [`ForeignPoint`] with the same
//! dimension:
//!
//! * points of the computational geometry kernel from `facet-kernel` (feature `kernel`),
//! * `nalgebra` points,
//! * `geo-types` points and coordinates (feature `geo-types`).
//!
//! Other libraries can be supported by implementing the traits from [`cartesian`] module.

pub mod cartesian;
mod convert;
pub mod error;
#[cfg(feature = "kernel")]
mod kernel;
mod point;

pub use convert::{to_foreign, to_host, ForeignPoint};
pub use error::FacetTypesError;
#[cfg(feature = "kernel")]
pub use kernel::{try_to_any, try_to_host};
pub use point::Point;
