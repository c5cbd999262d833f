/// Raw evaporation rate `2 - e^(k·rho)` for a record at age position `k`.
///
/// `k = 1` is the newest record. Unbounded below; overflows to `-inf` for
/// very old records, which the clamp absorbs.
pub fn raw_rate(k: usize, rho: f64) -> f64 {
    2.0 - (k as f64 * rho).exp()
}

/// Evaporation rate clamped to [0.0, 1.0].
pub fn rate(k: usize, rho: f64) -> f64 {
    raw_rate(k, rho).clamp(0.0, 1.0)
}

/// Clamped rates for a dataset of `len` records, oldest first.
pub fn rates(len: usize, rho: f64) -> Vec<f64> {
    (1..=len).rev().map(|k| rate(k, rho)).collect()
}
