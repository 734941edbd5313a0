use thiserror::Error;

/// An error type for the superposition solver and similarity scores.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlignError {
    /// The two point sets have different lengths.
    #[error("The two point sets are not of same length ({0} != {1})")]
    MismatchedLengths(usize, usize),

    /// The point sets contain no points.
    #[error("The point sets must contain at least one point")]
    EmptyPointSets,

    /// A full structure length is smaller than the aligned length drawn from it.
    #[error("The full length ({0}) must be greater or equal to the alignment length ({1})")]
    AlignmentLongerThanStructure(usize, usize),
}
