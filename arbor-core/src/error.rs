//! Error types for the arbor core library.
//!
//! Defines the error enum exposed by the public API, its stable codes, and a
//! convenient result alias.

use std::{collections::TryReserveError, fmt, sync::Arc};

use thiserror::Error;

use crate::{builder::Algorithm, method::Method};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running a hierarchical
/// clustering.
///
/// Every input check happens before the dissimilarity matrix is modified, so
/// a returned error means the caller's buffer is untouched.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LinkageError {
    /// Clustering requires at least one observation.
    #[error("cannot cluster zero observations")]
    EmptyInput,
    /// The condensed matrix size for this many observations overflows `usize`.
    #[error("a condensed matrix over {observations} observations does not fit in memory")]
    ObservationOverflow {
        /// Number of observations requested by the caller.
        observations: usize,
    },
    /// The buffer length does not match `observations * (observations - 1) / 2`.
    #[error(
        "condensed matrix over {observations} observations needs {expected} entries but has {actual}"
    )]
    MatrixLengthMismatch {
        /// Number of observations requested by the caller.
        observations: usize,
        /// Length implied by `observations`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// A dissimilarity was NaN or infinite.
    #[error("dissimilarity between observations {row} and {column} (offset {index}) is not finite")]
    NonFiniteDissimilarity {
        /// Offset into the condensed buffer.
        index: usize,
        /// Smaller observation index of the pair.
        row: usize,
        /// Larger observation index of the pair.
        column: usize,
    },
    /// A dissimilarity overflows when squared by a method that works on
    /// squared dissimilarities.
    #[error(
        "dissimilarity between observations {row} and {column} (offset {index}) overflows when squared"
    )]
    SquaredOverflow {
        /// Offset into the condensed buffer.
        index: usize,
        /// Smaller observation index of the pair.
        row: usize,
        /// Larger observation index of the pair.
        column: usize,
    },
    /// The requested algorithm cannot compute the requested method.
    #[error("the {algorithm} algorithm cannot compute {method} linkage")]
    UnsupportedAlgorithm {
        /// Linkage method requested by the caller.
        method: Method,
        /// Algorithm requested by the caller.
        algorithm: Algorithm,
    },
    /// A method name did not match any supported linkage method.
    #[error("unrecognised linkage method `{name}`")]
    UnknownMethod {
        /// Name supplied by the caller.
        name: Arc<str>,
    },
    /// An algorithm name did not match any supported algorithm.
    #[error("unrecognised linkage algorithm `{name}`")]
    UnknownAlgorithm {
        /// Name supplied by the caller.
        name: Arc<str>,
    },
    /// Storage for the dendrogram steps could not be reserved.
    #[error("failed to reserve storage for {steps} dendrogram steps: {source}")]
    AllocationFailed {
        /// Number of steps that were requested.
        steps: usize,
        #[source]
        /// Allocation failure reported by the standard library.
        source: TryReserveError,
    },
}

define_error_codes! {
    /// Stable codes describing [`LinkageError`] variants.
    enum LinkageErrorCode for LinkageError {
        /// Clustering requires at least one observation.
        EmptyInput => EmptyInput => "LINKAGE_EMPTY_INPUT",
        /// The condensed matrix size overflows `usize`.
        ObservationOverflow => ObservationOverflow { .. } => "LINKAGE_OBSERVATION_OVERFLOW",
        /// The buffer length does not match the observation count.
        MatrixLengthMismatch => MatrixLengthMismatch { .. } => "LINKAGE_MATRIX_LENGTH_MISMATCH",
        /// A dissimilarity was NaN or infinite.
        NonFiniteDissimilarity => NonFiniteDissimilarity { .. } => "LINKAGE_NON_FINITE_DISSIMILARITY",
        /// A dissimilarity overflows when squared.
        SquaredOverflow => SquaredOverflow { .. } => "LINKAGE_SQUARED_OVERFLOW",
        /// The requested algorithm cannot compute the requested method.
        UnsupportedAlgorithm => UnsupportedAlgorithm { .. } => "LINKAGE_UNSUPPORTED_ALGORITHM",
        /// A method name did not match any supported linkage method.
        UnknownMethod => UnknownMethod { .. } => "LINKAGE_UNKNOWN_METHOD",
        /// An algorithm name did not match any supported algorithm.
        UnknownAlgorithm => UnknownAlgorithm { .. } => "LINKAGE_UNKNOWN_ALGORITHM",
        /// Storage for the dendrogram steps could not be reserved.
        AllocationFailed => AllocationFailed { .. } => "LINKAGE_ALLOCATION_FAILED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LinkageError>;
