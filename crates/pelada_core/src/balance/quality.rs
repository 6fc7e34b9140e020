/// Upper bound of the balance quality score.
pub const MAX_QUALITY: f64 = 100.0;

/// Maps the rating gap between the two teams to a 0-100 score.
///
/// Every `divisor` rating points of imbalance costs one point. The penalty is
/// capped at `MAX_QUALITY`, and a NaN gap is treated as the worst case
/// (`f64::min` returns the non-NaN operand).
pub fn quality_score(rating_gap: f64, divisor: f64) -> f64 {
    let penalty = (rating_gap.abs() / divisor).min(MAX_QUALITY);
    MAX_QUALITY - penalty
}
