use wayfind_core::constants::MIN_RECORD_WEIGHT;

use crate::formula;

/// Integer weights for `len` records, oldest first.
///
/// `round(len · er)` with round-half-to-even, then shifted so the minimum
/// weight is exactly [`MIN_RECORD_WEIGHT`]. Empty for an empty dataset.
pub fn weights(len: usize, rho: f64) -> Vec<u64> {
    let scale = len as f64;
    let raw: Vec<u64> = formula::rates(len, rho)
        .into_iter()
        // er is clamped to [0, 1], so the product is in [0, len].
        .map(|er| (scale * er).round_ties_even() as u64)
        .collect();

    let Some(&min) = raw.iter().min() else {
        return raw;
    };
    raw.into_iter()
        .map(|w| w - min + MIN_RECORD_WEIGHT)
        .collect()
}
