//! Compile-time limits shared by the arithmetic and formatting code.

/// Largest exponent accepted by [`Polynomial::pow`](crate::Polynomial::pow).
/// Bounds the degree blow-up `n * deg(P)` and the cost of the convolutions.
pub const MAX_EXPONENT: i64 = 1024;

/// Maximum length, in characters, of a rendered polynomial.
pub const MAX_REPR_LEN: usize = 2047;

/// Appended to a rendering cut at [`MAX_REPR_LEN`].
pub const TRUNCATION_MARKER: &str = "... [truncated]";

// below this many output coefficients the parallel convolution is slower than the serial one
#[cfg(feature = "multithreading")]
pub(crate) const PARALLEL_MUL_THRESHOLD: usize = 512;
