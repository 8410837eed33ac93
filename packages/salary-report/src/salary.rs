//! Salary estimation from a partial range.

/// Estimate a single salary figure from an advertised range.
///
/// Bounds that are zero or negative count as absent; SuperJob reports `0`
/// for a bound the employer left blank.
///
/// - only `to`: 80% of it
/// - only `from`: 120% of it
/// - both: their midpoint
///
/// Arithmetic is widened to `i128`; an estimate that doesn't fit back into
/// `i64` is treated as not computable.
pub fn predict_salary(from: Option<i64>, to: Option<i64>) -> Option<i64> {
    let from = from.filter(|v| *v > 0).map(i128::from);
    let to = to.filter(|v| *v > 0).map(i128::from);

    let estimate = match (from, to) {
        (None, None) => return None,
        (None, Some(to)) => to * 4 / 5,
        (Some(from), None) => from * 6 / 5,
        (Some(from), Some(to)) => (from + to).div_euclid(2),
    };
    i64::try_from(estimate).ok()
}
