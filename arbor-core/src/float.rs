//! Floating-point element types accepted by the clustering engines.

use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Element type of a condensed dissimilarity matrix.
///
/// Implemented for `f32` and `f64` only. The engines are generic over this
/// trait so precision is chosen by the caller's buffer type.
pub trait Float:
    num_traits::Float + Default + fmt::Debug + fmt::Display + Send + Sync + 'static + sealed::Sealed
{
    /// Converts a cluster size into the element type.
    fn from_size(size: usize) -> Self;

    /// Widens the value to `f64` for reporting.
    fn into_f64(self) -> f64;
}

impl Float for f32 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "cluster sizes beyond 2^24 lose precision exactly as the arithmetic would"
    )]
    #[inline]
    fn from_size(size: usize) -> Self {
        size as Self
    }

    #[inline]
    fn into_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Float for f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "cluster sizes beyond 2^53 are not reachable with a condensed matrix in memory"
    )]
    #[inline]
    fn from_size(size: usize) -> Self {
        size as Self
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }
}
