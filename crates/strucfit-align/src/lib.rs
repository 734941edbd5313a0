#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::AlignError;

mod score;
pub use score::{rmsd, tm_score, tm_score_max_norm};

mod superpose;
pub use superpose::Superposition;
