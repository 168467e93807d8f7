//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FacetTypesError {
    /// Dimension of the source point does not match the dimension of the target point type.
    #[error("dimension mismatch: expected {expected}-dimensional point, got {actual}-dimensional")]
    DimensionMismatch {
        /// Dimension of the target point type.
        expected: usize,
        /// Dimension of the source point.
        actual: usize,
    },
}
