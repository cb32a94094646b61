//! Near-terminal clutter loss, ITU-R P.2108.
//!
//! Median loss caused by buildings and vegetation close to the terminals,
//! keyed on ground cover. Only the wooded and built-up categories grow with
//! frequency; open covers are small constants.

use crate::terrain::GroundType;

/// Median clutter loss in dB for a terminal in the given ground cover.
pub fn clutter_loss(freq_mhz: f64, ground: GroundType) -> f64 {
    let f_ghz = freq_mhz / 1_000.0;
    match ground {
        GroundType::Sea => 0.0,
        GroundType::Coast => 0.5,
        GroundType::OpenLand => 1.0,
        GroundType::Farmland => 2.0,
        GroundType::Forest => (5.0 + 4.0 * (f_ghz.max(0.03) / 0.03).log10()).min(15.0),
        GroundType::Suburban => 6.0 + 1.5 * (f_ghz.max(0.1) / 0.1).log10(),
        GroundType::Urban => 12.0 + 2.0 * (f_ghz.max(0.1) / 0.1).log10(),
        GroundType::DenseUrban => 20.0 + 3.0 * (f_ghz.max(0.1) / 0.1).log10(),
    }
}

#[cfg(test)]
mod tests {
    use super::clutter_loss;
    use crate::terrain::GroundType;
    use approx::assert_relative_eq;

    #[test]
    fn test_open_covers_are_constant() {
        for f_mhz in [30.0, 450.0, 6_000.0] {
            assert_eq!(clutter_loss(f_mhz, GroundType::Sea), 0.0);
            assert_eq!(clutter_loss(f_mhz, GroundType::Coast), 0.5);
            assert_eq!(clutter_loss(f_mhz, GroundType::OpenLand), 1.0);
            assert_eq!(clutter_loss(f_mhz, GroundType::Farmland), 2.0);
        }
    }

    #[test]
    fn test_built_up_ordering() {
        for f_mhz in [100.0, 450.0, 2_400.0, 15_000.0] {
            let suburban = clutter_loss(f_mhz, GroundType::Suburban);
            let urban = clutter_loss(f_mhz, GroundType::Urban);
            let dense = clutter_loss(f_mhz, GroundType::DenseUrban);
            assert!(suburban < urban, "at {f_mhz} MHz");
            assert!(urban < dense, "at {f_mhz} MHz");
        }
    }

    #[test]
    fn test_urban_grows_with_frequency() {
        let mut last = 0.0;
        for f_mhz in [200.0, 900.0, 3_500.0, 28_000.0] {
            let loss = clutter_loss(f_mhz, GroundType::Urban);
            assert!(loss > last, "loss {loss} at {f_mhz} MHz");
            last = loss;
        }
    }

    #[test]
    fn test_forest_saturates() {
        assert_relative_eq!(clutter_loss(30.0, GroundType::Forest), 5.0);
        assert_eq!(clutter_loss(20_000.0, GroundType::Forest), 15.0);
        assert_eq!(clutter_loss(60_000.0, GroundType::Forest), 15.0);
    }
}
