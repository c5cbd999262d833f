use wayfind_core::errors::{WayfindError, WayfindResult};

/// Fraction of positions where `predicted` equals `actual`.
///
/// Equality is exact. Fails on a length mismatch, and on empty input where
/// the ratio is undefined.
pub fn accuracy<T: PartialEq>(predicted: &[T], actual: &[T]) -> WayfindResult<f64> {
    if predicted.len() != actual.len() {
        return Err(WayfindError::LengthMismatch {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }
    if predicted.is_empty() {
        return Err(WayfindError::invalid("predicted", "cannot score an empty sequence"));
    }
    let hits = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    Ok(hits as f64 / predicted.len() as f64)
}
