/// Logistic function: squashes any real x into (0, 1).
///
/// Saturates to 0.0 / 1.0 for large-magnitude inputs instead of overflowing.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid with respect to the function's own output.
/// For `y = sigmoid(x)`, `dy/dx = y * (1 - y)` — so this expects `y` to
/// already BE a sigmoid output, not a raw pre-activation value. Passing a
/// pre-activation value gives a wrong result.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}
