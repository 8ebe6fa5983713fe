/// Length of the hypotenuse of a right triangle with legs `a` and `b`.
///
/// `a² + b²` is summed in `u128` and only the square root is taken in `f64`,
/// so the result is correctly rounded as long as the sum fits the 53-bit
/// mantissa. Above that the value carries the usual double precision error.
/// Sums past `u128::MAX` are computed entirely in `f64`.
pub fn hypotenuse(a: u64, b: u64) -> f64 {
    let (a, b) = (a as u128, b as u128);
    match (a * a).checked_add(b * b) {
        Some(sum) => (sum as f64).sqrt(),
        None => (a as f64).hypot(b as f64),
    }
}

/// Whether `value` has no fractional part. NaN and infinities are never integral.
pub fn is_integral(value: f64) -> bool {
    value.fract() == 0.0
}
