//! Gaseous attenuation by dry air and water vapour, ITU-R P.676.
//!
//! A piecewise fit of the specific-attenuation curves at standard surface
//! conditions (7.5 g/m³ water vapour), capturing the 60 GHz oxygen complex
//! and the 22.235/183.31 GHz water lines. Planning-grade accuracy, not a
//! line-by-line summation.

/// Specific gaseous attenuation γ in dB/km at `freq_mhz`.
pub fn specific_gas_attenuation(freq_mhz: f64) -> f64 {
    if freq_mhz <= 0.0 {
        return 0.0;
    }
    let f_ghz = freq_mhz / 1_000.0;
    oxygen(f_ghz) + water_vapour(f_ghz)
}

/// Dry-air component, dominated by the 50–70 GHz oxygen absorption complex.
fn oxygen(f_ghz: f64) -> f64 {
    if f_ghz < 50.0 {
        7.19e-3
    } else if f_ghz < 57.0 {
        7.19e-3 + (14.5 - 7.19e-3) * (f_ghz - 50.0) / 7.0
    } else if f_ghz <= 63.0 {
        14.5
    } else if f_ghz <= 100.0 {
        (14.5 * (-((f_ghz - 63.0) / 15.5).powi(2)).exp()).max(0.05)
    } else {
        0.05
    }
}

/// Water-vapour component with the 22.235 GHz and 183.31 GHz lines.
fn water_vapour(f_ghz: f64) -> f64 {
    if f_ghz < 1.0 {
        0.0
    } else if f_ghz < 22.235 {
        0.18 * (f_ghz - 1.0) / (22.235 - 1.0)
    } else if f_ghz < 178.0 {
        0.18
    } else if f_ghz < 189.0 {
        (30.0 * (-((f_ghz - 183.31) / 1.5).powi(2)).exp()).max(0.18)
    } else {
        0.5
    }
}

/// Total gaseous absorption over `distance_km`, in dB.
pub fn gas_absorption(distance_km: f64, freq_mhz: f64) -> f64 {
    if distance_km <= 0.0 {
        return 0.0;
    }
    specific_gas_attenuation(freq_mhz) * distance_km
}

#[cfg(test)]
mod tests {
    use super::{gas_absorption, specific_gas_attenuation};
    use approx::assert_relative_eq;

    #[test]
    fn test_scales_linearly_with_distance() {
        for f_mhz in [100.0, 1_000.0, 10_000.0, 30_000.0, 60_000.0] {
            for d_km in [0.5, 5.0, 80.0] {
                assert_relative_eq!(
                    gas_absorption(2.0 * d_km, f_mhz) / gas_absorption(d_km, f_mhz),
                    2.0,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_low_band_is_oxygen_floor() {
        // Below the 1 GHz water-vapour cutoff only the oxygen term remains.
        assert_relative_eq!(specific_gas_attenuation(145.0), 7.19e-3);
        assert_relative_eq!(specific_gas_attenuation(900.0), 7.19e-3);
    }

    #[test]
    fn test_sixty_ghz_peak() {
        let peak = specific_gas_attenuation(60_000.0);
        assert_relative_eq!(peak, 14.68, epsilon = 0.01);
        assert!(peak > specific_gas_attenuation(40_000.0));
        assert!(peak > specific_gas_attenuation(90_000.0));
    }

    #[test]
    fn test_water_vapour_ramp() {
        // Roughly 0.0835 dB/km at 10 GHz under the linear ramp.
        assert_relative_eq!(specific_gas_attenuation(10_000.0), 0.0835, epsilon = 1e-3);
        // The 22.235 GHz line tops the ramp.
        assert!(specific_gas_attenuation(22_235.0) > specific_gas_attenuation(15_000.0));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(gas_absorption(0.0, 10_000.0), 0.0);
        assert_eq!(gas_absorption(-5.0, 10_000.0), 0.0);
        assert_eq!(gas_absorption(10.0, 0.0), 0.0);
        assert_eq!(specific_gas_attenuation(-100.0), 0.0);
    }
}
