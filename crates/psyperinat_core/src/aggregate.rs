//! Population scaling and sector repartition
//!
//! The tail of the pipeline: once the per-birth table has been summed
//! across conditions, the combined total is scaled by a territory's birth
//! count and split back into per-sector currency amounts.
//!
//! The ordering compute → scale_to_births → total_across_conditions →
//! scale_to_population → repartition_by_sector is enforced upstream by the
//! `CostTable<PerCase>` / `CostTable<PerBirth>` types; the functions here
//! only ever see per-birth figures.

use crate::model::{RepartitionTable, Sector};

/// Resolve the population multiplier from an optional birth count.
///
/// An absent, non-finite or negative count falls back to 1 so the caller
/// always has something to render; zero is a valid multiplier.
pub fn effective_birth_count(birth_count: Option<f64>) -> f64 {
    match birth_count {
        Some(n) if n.is_finite() && n >= 0.0 => n,
        _ => 1.0,
    }
}

/// Scale the combined per-birth total to a territory's annual birth count
pub fn scale_to_population(per_birth_total: f64, birth_count: Option<f64>) -> f64 {
    per_birth_total * effective_birth_count(birth_count)
}

/// Split a scaled total into per-sector currency amounts.
///
/// The amounts sum back to `scaled_total` up to floating-point tolerance,
/// since the repartition fractions sum to 1.
pub fn repartition_by_sector(
    repartition: &RepartitionTable,
    scaled_total: f64,
) -> [(Sector, f64); 3] {
    let mut amounts = [(Sector::SanteSocial, 0.0); 3];
    for (i, (sector, fraction)) in repartition.iter().enumerate() {
        amounts[i] = (sector, fraction * scaled_total);
    }
    amounts
}
