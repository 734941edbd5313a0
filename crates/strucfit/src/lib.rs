#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use strucfit_3d as s3d;

#[doc(inline)]
pub use strucfit_align as align;
