//! Composite connection-quality scoring.
//!
//! Folds a computed budget into a 0–100 score from four weighted
//! sub-scores (margin, Fresnel clearance, weather, antenna gains), an
//! availability estimate against log-normal fading, and the SNR over the
//! thermal floor.

use crate::units::thermal_noise_dbm;
use serde::Serialize;
use std::fmt;

/// Fade-depth standard deviation for the availability model, in dB.
const FADE_SIGMA_DB: f64 = 8.0;

/// Five-band classification of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBand {
    Excellent,
    Good,
    Acceptable,
    Weak,
    Insufficient,
}

impl QualityBand {
    /// Band a composite score falls in.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => QualityBand::Excellent,
            60..=79 => QualityBand::Good,
            40..=59 => QualityBand::Acceptable,
            20..=39 => QualityBand::Weak,
            _ => QualityBand::Insufficient,
        }
    }

    /// Human-readable band label.
    pub fn label(&self) -> &'static str {
        match self {
            QualityBand::Excellent => "Excellent",
            QualityBand::Good => "Good",
            QualityBand::Acceptable => "Acceptable",
            QualityBand::Weak => "Weak",
            QualityBand::Insufficient => "Insufficient",
        }
    }

    /// Display colour for the band, as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            QualityBand::Excellent => "#22c55e",
            QualityBand::Good => "#84cc16",
            QualityBand::Acceptable => "#eab308",
            QualityBand::Weak => "#f97316",
            QualityBand::Insufficient => "#ef4444",
        }
    }
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Composite quality of a computed link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectionQuality {
    /// Composite score, 0–100.
    pub score: u8,
    /// Band the score falls in.
    pub label: QualityBand,
    /// Display colour for the band.
    pub color: &'static str,
    /// Probability the instantaneous margin survives fading, in [0, 1].
    pub availability: f64,
    /// Signal-to-noise ratio over the thermal floor, in dB.
    pub snr_db: f64,
}

/// Scores a link from its margin, Fresnel clearance, weather losses, and
/// antenna gains.
///
/// An infeasible link (negative margin) is hard-capped into the bottom two
/// bands no matter how clear and well-equipped the path is.
pub fn connection_quality(
    link_margin_db: f64,
    fresnel_clearance: f64,
    weather_loss_db: f64,
    total_gain_dbi: f64,
    received_power_dbm: f64,
    bandwidth_khz: f64,
) -> ConnectionQuality {
    let margin_score = (link_margin_db / 30.0).clamp(0.0, 1.0) * 50.0;
    let fresnel_score = fresnel_clearance.clamp(0.0, 1.0) * 20.0;
    let reliability = (1.0 - weather_loss_db / (weather_loss_db + 10.0).max(10.0)).max(0.0);
    let weather_score = reliability * 20.0;
    let gain_score = (total_gain_dbi / 20.0).clamp(0.0, 1.0) * 10.0;

    let mut score = (margin_score + fresnel_score + weather_score + gain_score).round();
    if link_margin_db < 0.0 {
        score = (19.0 + (2.0 * link_margin_db).round()).clamp(0.0, score);
    }
    let score = score.clamp(0.0, 100.0) as u8;

    let band = QualityBand::from_score(score);
    ConnectionQuality {
        score,
        label: band,
        color: band.color(),
        availability: availability(link_margin_db),
        snr_db: received_power_dbm - thermal_noise_dbm(bandwidth_khz),
    }
}

/// Probability that the instantaneous margin exceeds the fade depth,
/// modelled as a Gaussian CDF with σ = [`FADE_SIGMA_DB`].
pub fn availability(link_margin_db: f64) -> f64 {
    0.5 * (1.0 + erf(link_margin_db / (FADE_SIGMA_DB * std::f64::consts::SQRT_2)))
}

/// Abramowitz & Stegun 7.1.26 rational approximation, max error ~1.5e-7.
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736
                + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));

    sign * (1.0 - poly * (-x * x).exp())
}
