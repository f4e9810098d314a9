use num_traits::Float;

/// Round to the nearest integer with ties going towards positive infinity
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`. Values beyond the `i64` range
/// saturate.
pub fn round_half_up<F: Float>(value: F) -> i64 {
    let half = F::one() / (F::one() + F::one());
    saturating_i64((value + half).floor(), value)
}

/// Drop the fractional part, rounding towards zero
pub fn truncate<F: Float>(value: F) -> i64 {
    saturating_i64(value.trunc(), value)
}

/// Narrow to `i32`, saturating at the type bounds
pub fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Squared Euclidean distance between two (row, col) positions
///
/// Comparing squared distances gives the same nearest point as comparing
/// Euclidean distances, without floating point error.
pub const fn squared_distance(a: (usize, usize), b: (usize, usize)) -> u64 {
    let dr = a.0.abs_diff(b.0) as u64;
    let dc = a.1.abs_diff(b.1) as u64;
    dr * dr + dc * dc
}

fn saturating_i64<F: Float>(rounded: F, original: F) -> i64 {
    rounded.to_i64().unwrap_or(if original.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
