//! Single knife-edge diffraction, ITU-R P.526.
//!
//! The dominant obstacle is reduced to a Fresnel-Kirchhoff parameter ν from
//! its height above the direct Tx–Rx sight line, then the P.526-15
//! piecewise approximation J(ν) turns that into a loss. The first-zone
//! clearance fraction comes from the same geometry but is reported
//! separately, since it feeds the quality score rather than the budget sum.

use crate::{terrain::TerrainProfile, units::wavelength_m};

/// ν reported for a path with no obstruction: deep in the clear region.
pub const CLEAR_PATH_NU: f64 = -2.0;

/// Fresnel-Kirchhoff diffraction parameter ν for the dominant obstacle, or
/// [`CLEAR_PATH_NU`] when the path has none.
pub fn fresnel_parameter(terrain: &TerrainProfile, distance_km: f64, freq_mhz: f64) -> f64 {
    let obstacle = match terrain.obstacle_on_path(distance_km) {
        Some(obstacle) => obstacle,
        None => return CLEAR_PATH_NU,
    };
    if freq_mhz <= 0.0 {
        return CLEAR_PATH_NU;
    }

    let d1_m = obstacle.dist_from_tx_km * 1_000.0;
    let d2_m = (distance_km - obstacle.dist_from_tx_km) * 1_000.0;
    let h_m = obstacle.peak_elev_m - los_height_at(terrain, distance_km, obstacle.dist_from_tx_km);
    let lambda_m = wavelength_m(freq_mhz);

    h_m * (2.0 * (d1_m + d2_m) / (lambda_m * d1_m * d2_m)).sqrt()
}

/// Height of the straight Tx–Rx sight line above mean sea level at `at_km`
/// along the path.
fn los_height_at(terrain: &TerrainProfile, distance_km: f64, at_km: f64) -> f64 {
    let tx_m = terrain.elevation_tx_m + terrain.antenna_height_tx_m;
    let rx_m = terrain.elevation_rx_m + terrain.antenna_height_rx_m;
    tx_m + (rx_m - tx_m) * (at_km / distance_km)
}

/// Knife-edge diffraction loss J(ν) in dB, ITU-R P.526-15 approximation.
pub fn knife_edge_diffraction(nu: f64) -> f64 {
    if nu < -1.0 {
        0.0
    } else if nu < 0.0 {
        -20.0 * (0.5 - 0.62 * nu).log10()
    } else if nu < 1.0 {
        -20.0 * (0.5 * (-0.95 * nu).exp()).log10()
    } else if nu < 2.4 {
        -20.0 * (0.4 - (0.1184 - (0.38 - 0.1 * nu).powi(2)).max(0.0).sqrt()).log10()
    } else {
        -20.0 * (0.225 / nu).log10()
    }
}

/// Diffraction loss of the path in dB; 0 when nothing obstructs it.
pub fn diffraction_loss(terrain: &TerrainProfile, distance_km: f64, freq_mhz: f64) -> f64 {
    knife_edge_diffraction(fresnel_parameter(terrain, distance_km, freq_mhz))
}

/// Fraction of the first Fresnel zone the dominant obstacle leaves clear,
/// clamped to `[0, 1]`. A path with no obstacle is fully clear.
pub fn fresnel_clearance(terrain: &TerrainProfile, distance_km: f64, freq_mhz: f64) -> f64 {
    let obstacle = match terrain.obstacle_on_path(distance_km) {
        Some(obstacle) => obstacle,
        None => return 1.0,
    };
    if freq_mhz <= 0.0 {
        return 1.0;
    }

    let d1_m = obstacle.dist_from_tx_km * 1_000.0;
    let d2_m = (distance_km - obstacle.dist_from_tx_km) * 1_000.0;
    let lambda_m = wavelength_m(freq_mhz);
    let r1_m = (lambda_m * d1_m * d2_m / (d1_m + d2_m)).sqrt();
    let clearance_m =
        los_height_at(terrain, distance_km, obstacle.dist_from_tx_km) - obstacle.peak_elev_m;

    (clearance_m / r1_m + 1.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{Obstacle, TerrainProfile};
    use approx::assert_relative_eq;

    fn ridge_profile() -> TerrainProfile {
        TerrainProfile {
            elevation_tx_m: 50.0,
            elevation_rx_m: 100.0,
            obstacle: Some(Obstacle {
                peak_elev_m: 300.0,
                dist_from_tx_km: 5.0,
            }),
            ..TerrainProfile::default()
        }
    }

    #[test]
    fn test_deep_clearance_is_lossless() {
        assert_eq!(knife_edge_diffraction(-2.0), 0.0);
        assert_eq!(knife_edge_diffraction(-1.001), 0.0);
    }

    #[test]
    fn test_grazing_incidence() {
        assert_relative_eq!(knife_edge_diffraction(0.0), 6.02, epsilon = 0.01);
    }

    #[test]
    fn test_monotone_for_positive_nu() {
        // Sampled away from the analytic seams at ν = 1 and ν = 2.4.
        let samples = [0.0, 0.5, 0.9, 1.5, 2.0, 2.35, 3.0, 5.0, 10.0];
        for pair in samples.windows(2) {
            assert!(
                knife_edge_diffraction(pair[1]) > knife_edge_diffraction(pair[0]),
                "J not increasing between ν = {} and ν = {}",
                pair[0],
                pair[1],
            );
        }
    }

    #[test]
    fn test_seam_discontinuity_is_small() {
        let jump = (knife_edge_diffraction(2.401) - knife_edge_diffraction(2.399)).abs();
        assert!(jump < 1.5, "seam jump {jump} dB");
    }

    #[test]
    fn test_ridge_parameter_and_loss() {
        let terrain = ridge_profile();
        let nu = fresnel_parameter(&terrain, 9.642, 68.0);
        // A 300 m ridge towering over a ~78 m sight line is deep in shadow.
        assert!(nu > 2.0, "ν = {nu}");
        assert!(diffraction_loss(&terrain, 9.642, 68.0) > 20.0);
    }

    #[test]
    fn test_clear_path_sentinels() {
        let terrain = TerrainProfile::default();
        assert_eq!(fresnel_parameter(&terrain, 10.0, 450.0), CLEAR_PATH_NU);
        assert_eq!(diffraction_loss(&terrain, 10.0, 450.0), 0.0);
        assert_eq!(fresnel_clearance(&terrain, 10.0, 450.0), 1.0);
    }

    #[test]
    fn test_obstacle_beyond_path_ignored() {
        let mut terrain = ridge_profile();
        terrain.obstacle = Some(Obstacle {
            peak_elev_m: 300.0,
            dist_from_tx_km: 11.0,
        });
        assert_eq!(fresnel_parameter(&terrain, 9.642, 68.0), CLEAR_PATH_NU);
        assert_eq!(fresnel_clearance(&terrain, 9.642, 68.0), 1.0);
    }

    #[test]
    fn test_blocked_path_has_zero_clearance() {
        let terrain = ridge_profile();
        assert_eq!(fresnel_clearance(&terrain, 9.642, 68.0), 0.0);
    }

    #[test]
    fn test_low_obstacle_leaves_path_mostly_clear() {
        let terrain = TerrainProfile {
            antenna_height_tx_m: 30.0,
            antenna_height_rx_m: 30.0,
            obstacle: Some(Obstacle {
                peak_elev_m: 5.0,
                dist_from_tx_km: 2.0,
            }),
            ..TerrainProfile::default()
        };
        let clearance = fresnel_clearance(&terrain, 4.0, 5_800.0);
        assert!(clearance > 0.9, "clearance {clearance}");
        // Far below the sight line, so effectively no extra loss.
        assert!(diffraction_loss(&terrain, 4.0, 5_800.0) < 0.1);
    }
}
