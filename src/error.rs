use thiserror::Error;

/// Errors raised during a single encode/predict cycle
///
/// These should not occur in normal operation since the schema artifact and
/// the input record are coupled by convention. When they do, the request
/// fails outright rather than returning a guessed price.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Prediction is not a finite whole-unit price: {0}")]
    NonFinite(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Truncate toward zero, or `None` when the value has no `i64` equivalent
pub fn checked_trunc(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    // i64::MAX rounds up to 2^63 as f64, which is already out of range
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}
