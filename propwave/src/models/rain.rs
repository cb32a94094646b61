//! Rain attenuation, ITU-R P.838-3.
//!
//! γ_R = k · R^α with the power-law coefficients taken from the P.838-3
//! tables for horizontal polarisation. Between tabulated frequencies, k is
//! interpolated log-log and α linearly against log f; linear interpolation
//! of k in f would be off by orders of magnitude at the low-GHz end. The
//! path total applies the usual 1/(1 + 0.045·d) effective-length reduction.

/// (frequency GHz, k, α), horizontal polarisation, ITU-R P.838-3.
const COEFFICIENTS: [(f64, f64, f64); 18] = [
    (1.0, 0.000_025_9, 0.9691),
    (2.0, 0.000_084_7, 1.0664),
    (4.0, 0.000_107_1, 1.6009),
    (6.0, 0.000_705_6, 1.5900),
    (8.0, 0.004_115, 1.3905),
    (10.0, 0.012_17, 1.2571),
    (12.0, 0.023_86, 1.1825),
    (15.0, 0.044_81, 1.1233),
    (20.0, 0.091_64, 1.0568),
    (25.0, 0.157_1, 0.9991),
    (30.0, 0.240_3, 0.9485),
    (35.0, 0.337_4, 0.9047),
    (40.0, 0.443_1, 0.8673),
    (50.0, 0.660_0, 0.8084),
    (60.0, 0.860_6, 0.7656),
    (70.0, 1.031_5, 0.7345),
    (80.0, 1.170_4, 0.7115),
    (100.0, 1.367_1, 0.6815),
];

/// Power-law coefficients (k, α) at `f_ghz`, clamped at the table edges.
fn coefficients(f_ghz: f64) -> (f64, f64) {
    let (first_f, first_k, first_a) = COEFFICIENTS[0];
    if f_ghz <= first_f {
        return (first_k, first_a);
    }
    let (last_f, last_k, last_a) = COEFFICIENTS[COEFFICIENTS.len() - 1];
    if f_ghz >= last_f {
        return (last_k, last_a);
    }

    let idx = COEFFICIENTS
        .iter()
        .rposition(|&(f, _, _)| f <= f_ghz)
        .unwrap();
    let (f0, k0, a0) = COEFFICIENTS[idx];
    let (f1, k1, a1) = COEFFICIENTS[idx + 1];

    let t = (f_ghz.ln() - f0.ln()) / (f1.ln() - f0.ln());
    let k = (k0.ln() + t * (k1.ln() - k0.ln())).exp();
    let alpha = a0 + t * (a1 - a0);
    (k, alpha)
}

/// Rain attenuation over the path in dB for the rain rate exceeded 0.01%
/// of the time. Rain is transparent below 1 GHz.
pub fn rain_attenuation(distance_km: f64, freq_mhz: f64, rain_rate_mm_h: f64) -> f64 {
    if distance_km <= 0.0 || freq_mhz < 1_000.0 || rain_rate_mm_h <= 0.0 {
        return 0.0;
    }

    let (k, alpha) = coefficients(freq_mhz / 1_000.0);
    let gamma_db_km = k * rain_rate_mm_h.powf(alpha);
    let path_reduction = 1.0 / (1.0 + 0.045 * distance_km);
    gamma_db_km * distance_km * path_reduction
}

#[cfg(test)]
mod tests {
    use super::{coefficients, rain_attenuation};
    use approx::assert_relative_eq;

    #[test]
    fn test_tabulated_points() {
        let (k, alpha) = coefficients(15.0);
        assert_relative_eq!(k, 0.04481, epsilon = 1e-12);
        assert_relative_eq!(alpha, 1.1233, epsilon = 1e-12);
        assert_eq!(coefficients(1.0), (0.0000259, 0.9691));
        assert_eq!(coefficients(100.0), (1.3671, 0.6815));
    }

    #[test]
    fn test_interpolation_stays_between_neighbours() {
        let (k, alpha) = coefficients(17.3);
        assert!(k > 0.04481 && k < 0.09164, "k = {k}");
        assert!(alpha < 1.1233 && alpha > 1.0568, "α = {alpha}");
    }

    #[test]
    fn test_edge_clamping() {
        assert_eq!(coefficients(0.5), coefficients(1.0));
        assert_eq!(coefficients(250.0), coefficients(100.0));
    }

    #[test]
    fn test_transparent_regimes() {
        assert_eq!(rain_attenuation(10.0, 15_000.0, 0.0), 0.0);
        assert_eq!(rain_attenuation(10.0, 900.0, 100.0), 0.0);
        assert_eq!(rain_attenuation(0.0, 15_000.0, 100.0), 0.0);
    }

    #[test]
    fn test_monotone_in_rain_rate() {
        let mut last = 0.0;
        for rate in [1.0, 5.0, 20.0, 50.0, 100.0] {
            let loss = rain_attenuation(5.0, 15_000.0, rate);
            assert!(loss > last, "loss {loss} at {rate} mm/h");
            last = loss;
        }
    }

    #[test]
    fn test_monotone_in_frequency() {
        let mut last = 0.0;
        for f_ghz in [2.0, 5.0, 8.0, 12.0, 18.0, 25.0, 40.0, 80.0] {
            let loss = rain_attenuation(5.0, f_ghz * 1_000.0, 20.0);
            assert!(loss > last, "loss {loss} at {f_ghz} GHz");
            last = loss;
        }
    }

    #[test]
    fn test_sublinear_in_distance() {
        for d in [1.0, 5.0, 20.0] {
            let short = rain_attenuation(d, 15_000.0, 50.0);
            let long = rain_attenuation(4.0 * d, 15_000.0, 50.0);
            assert!(long < 4.0 * short, "long {long}, short {short}");
            assert!(long > short);
        }
    }

    #[test]
    fn test_heavy_rain_at_ku_band() {
        // 100 mm/h over ~2 km at 15 GHz costs well over a dB.
        let loss = rain_attenuation(2.03, 15_000.0, 100.0);
        assert_relative_eq!(loss, 14.7, epsilon = 0.1);
    }
}
