#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Linear algebra utilities.
pub mod linalg;

/// Operations on 3D point data.
pub mod ops;

/// 3D transforms algorithms.
pub mod transforms;

/// Conversions between plain arrays and faer types.
pub mod utils;
