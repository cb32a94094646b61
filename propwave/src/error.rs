use thiserror::Error;

/// Contract violations surfaced by the engine.
///
/// Physically sensible edge cases never error: non-positive distances and
/// frequencies make the individual loss functions return 0 dB, missing
/// equipment and terrain fall back to documented defaults, and an obstacle
/// lying outside the path is ignored. The variants below are caller bugs.
#[derive(Debug, Error, PartialEq)]
pub enum PropwaveError {
    #[error("non-finite value for '{0}'")]
    NonFinite(&'static str),

    #[error("inverted frequency range: {min_mhz} MHz > {max_mhz} MHz")]
    FrequencyRange { min_mhz: f64, max_mhz: f64 },

    #[error("non-positive power: {0} W")]
    NonPositivePower(f64),

    #[error("negative rain rate: {0} mm/h")]
    NegativeRainRate(f64),
}
