//! Generic numeric traits shared across the workspace.

/// Generic floating-point trait for numeric computations.
///
/// Linear-algebra routines are written against this trait so that both
/// `f32` and `f64` matrices share a single implementation.
///
/// # Examples
/// ```
/// use sampler_core::traits::Float;
///
/// fn half_log_det<T: Float>(diag: &[T]) -> T {
///     diag.iter().fold(T::zero(), |acc, &d| acc + d.ln())
/// }
///
/// let value: f64 = half_log_det(&[1.0, 1.0]);
/// assert_eq!(value, 0.0);
/// ```
pub use num_traits::Float;
