/// Error type for RustPerceptron
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Indicates some dimension is incorrect in a Matrix operation.
    DimensionErr,
    /// Indicates a zero dimension was passed when constructing a Perceptron.
    InvalidDimErr,
}

pub type Result<T> = std::result::Result<T, Error>;
