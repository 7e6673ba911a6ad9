use thiserror::Error;

// --- Shape ---

#[derive(Error, Debug)]
#[error("Data length ({data_length}) does not match size of tensor ({tensor_size}).")]
pub(crate) struct InvalidDataLengthError {
    pub data_length: usize,
    pub tensor_size: usize,
}

#[derive(Error, Debug)]
#[error("Tensor of shape {current_shape:?} cannot be viewed/reshaped to {new_shape:?}.")]
pub(crate) struct ReshapeError {
    pub current_shape: Vec<usize>,
    pub new_shape: Vec<usize>,
}

#[derive(Error, Debug)]
pub(crate) enum EmptyTensorError {
    #[error("Strides are empty. Unable to view.")]
    View,

    #[error("Empty tensor. Nothing to correlate.")]
    Stencil,
}

#[derive(Error, Debug)]
#[error("Shape is not contiguous. Use `reshape` instead.")]
pub(crate) struct NonContiguousError;

#[derive(Error, Debug)]
#[error("Shapes {lhs_sizes:?} and {rhs_sizes:?} cannot be zipped elementwise.")]
pub(crate) struct ZipShapeError {
    pub lhs_sizes: Vec<usize>,
    pub rhs_sizes: Vec<usize>,
}

// --- Index, Dims ---

#[derive(Error, Debug)]
pub(crate) enum IndexError {
    #[error("Index {index} is out of range for dimension {dimension}, of size {size}.")]
    OutOfRange {
        index: usize,
        dimension: usize,
        size: usize,
    },

    #[error("Number of indices ({num_indices}) does not match the number of dimensions ({num_dimensions}).")]
    IndicesLength {
        num_indices: usize,
        num_dimensions: usize,
    },
}

#[derive(Error, Debug)]
pub(crate) enum DimensionError {
    #[error("Dimension {dimension} is greater than max range of dimensions, {dim_range}.")]
    OutOfRange { dimension: usize, dim_range: usize },

    #[error("Dimension {0} repeats.")]
    Repetition(usize),
}

// --- Stencil ---

#[derive(Error, Debug)]
#[error("Kernel rank ({kernel_rank}) does not match input rank ({input_rank}).")]
pub(crate) struct KernelRankError {
    pub input_rank: usize,
    pub kernel_rank: usize,
}

#[derive(Error, Debug)]
#[error("Kernel extent {extent} along dimension {dimension} is not odd. Odd extents give the kernel a center cell.")]
pub(crate) struct KernelExtentError {
    pub extent: usize,
    pub dimension: usize,
}

#[derive(Error, Debug)]
#[error("`{mode}` is not a boundary mode. Expected one of `constant`, `reflect`, `nearest`, `wrap`.")]
pub struct BoundaryParseError {
    pub mode: String,
}

// --- Misc ---

#[derive(Error, Debug)]
#[error("Cannot convert {value} from `usize` to type {dtype}.")]
pub(crate) struct UsizeCastError {
    pub value: usize,
    pub dtype: &'static str,
}

#[derive(Error, Debug)]
pub(crate) enum ArangeError {
    #[error("Step size cannot be zero.")]
    Zero,

    #[error("Step size is positive, but start > end.")]
    Positive,

    #[error("Step size is negative, but end > start.")]
    Negative,

    #[error("Step size cannot be compared with zero.")]
    Comparison,
}
