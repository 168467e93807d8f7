#[cfg(feature = "geo-types")]
mod geo_types_point;
#[cfg(feature = "kernel")]
mod kernel_point;
mod nalgebra_point;
