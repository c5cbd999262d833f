use crate::formula;

/// Index (oldest first) of the first record whose clamped rate is nonzero.
///
/// Returns `len` when every record has evaporated, so slicing at the cutoff
/// drops the whole dataset instead of indexing past its end.
pub fn cutoff_index(len: usize, rho: f64) -> usize {
    formula::rates(len, rho)
        .iter()
        .position(|&er| er > 0.0)
        .unwrap_or(len)
}
