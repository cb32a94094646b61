//! Simplified ITU-R P.1546 point-to-area path loss.
//!
//! Not the tabulated field-strength curves; a distance-exponent
//! approximation anchored at the 1 km free-space loss, with the exponent
//! picked from terrain roughness and frequency band.

use super::fspl::fspl_db;
use crate::terrain::TerrainType;

/// Simplified P.1546 path loss in dB for 30–3000 MHz broadcast-style
/// paths; outside that band the free-space value is returned.
pub fn itu_p1546_loss(distance_km: f64, freq_mhz: f64, h_tx_m: f64, terrain: TerrainType) -> f64 {
    if !(30.0..=3000.0).contains(&freq_mhz) {
        return fspl_db(distance_km, freq_mhz);
    }

    let n = path_loss_exponent(terrain, freq_mhz);
    fspl_db(1.0, freq_mhz) + 10.0 * n * distance_km.max(0.01).log10()
        - 20.0 * (h_tx_m.max(1.0) / 10.0).log10()
}

/// Distance exponent: flat low-VHF paths spread closest to free space,
/// rough terrain above 300 MHz decays fastest.
fn path_loss_exponent(terrain: TerrainType, freq_mhz: f64) -> f64 {
    match (terrain, freq_mhz < 300.0) {
        (TerrainType::Flat, true) => 3.0,
        (TerrainType::Flat, false) | (_, true) => 3.5,
        (_, false) => 4.0,
    }
}
