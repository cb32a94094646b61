//! Okumura-Hata empirical path loss for 150–1500 MHz macro cells.

use super::fspl::fspl_db;
use crate::terrain::GroundType;

/// Okumura-Hata basic transmission loss in dB.
///
/// Valid for 150–1500 MHz and paths of at least 0.1 km; outside that
/// region the free-space value is returned. Base-station heights below 1 m
/// and mobile heights below 0.5 m are pulled up to the model's floor.
pub fn okumura_hata_loss(
    distance_km: f64,
    freq_mhz: f64,
    h_tx_m: f64,
    h_rx_m: f64,
    ground: GroundType,
) -> f64 {
    if distance_km < 0.1 || !(150.0..=1500.0).contains(&freq_mhz) {
        return fspl_db(distance_km, freq_mhz);
    }

    let h_te = h_tx_m.max(1.0);
    let h_re = h_rx_m.max(0.5);
    let log_f = freq_mhz.log10();
    let log_h = h_te.log10();

    // Mobile-antenna correction for a medium-sized city.
    let a_h_re = (1.1 * log_f - 0.7) * h_re - (1.56 * log_f - 0.8);
    let urban = 69.55 + 26.16 * log_f - 13.82 * log_h - a_h_re
        + (44.9 - 6.55 * log_h) * distance_km.log10();

    match ground {
        GroundType::Urban | GroundType::DenseUrban => urban,
        GroundType::OpenLand | GroundType::Farmland => {
            urban - 4.78 * log_f.powi(2) + 18.33 * log_f - 40.94
        }
        _ => urban - 2.0 * (freq_mhz / 28.0).log10().powi(2) - 5.4,
    }
}
