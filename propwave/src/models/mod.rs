//! Propagation loss models and the automatic model selector.

pub mod clouds;
pub mod clutter;
pub mod diffraction;
pub mod fspl;
pub mod gases;
pub mod hata;
pub mod p1546;
pub mod rain;

pub use {
    clouds::cloud_fog_attenuation,
    clutter::clutter_loss,
    diffraction::{
        diffraction_loss, fresnel_clearance, fresnel_parameter, knife_edge_diffraction,
    },
    fspl::fspl_db,
    gases::{gas_absorption, specific_gas_attenuation},
    hata::okumura_hata_loss,
    p1546::itu_p1546_loss,
    rain::rain_attenuation,
};

use crate::terrain::TerrainProfile;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Base-loss model applied to a link.
///
/// `Auto` is only meaningful as an input: it asks [`select_model`] to pick.
/// `ItuP452` is reserved; forcing it currently computes free-space loss and
/// says so in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationModel {
    Fspl,
    ItuP452,
    ItuP1546,
    ItuP526,
    OkumuraHata,
    Auto,
}

impl fmt::Display for PropagationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropagationModel::Fspl => "FSPL",
            PropagationModel::ItuP452 => "ITU-R P.452",
            PropagationModel::ItuP1546 => "ITU-R P.1546",
            PropagationModel::ItuP526 => "ITU-R P.526",
            PropagationModel::OkumuraHata => "Okumura-Hata",
            PropagationModel::Auto => "auto",
        };
        f.write_str(name)
    }
}

impl FromStr for PropagationModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "auto" => Ok(PropagationModel::Auto),
            "fspl" => Ok(PropagationModel::Fspl),
            "itu_p452" | "p452" => Ok(PropagationModel::ItuP452),
            "itu_p1546" | "p1546" => Ok(PropagationModel::ItuP1546),
            "itu_p526" | "p526" => Ok(PropagationModel::ItuP526),
            "okumura_hata" | "hata" => Ok(PropagationModel::OkumuraHata),
            _ => Err(format!("unknown propagation model: {s}")),
        }
    }
}

/// Picks the base-loss model for a path.
///
/// Priority order: knife-edge diffraction whenever a dominant obstacle
/// stands in the way of a VHF-or-above signal; plain free space below
/// 30 MHz; Okumura-Hata for built-up ground within its calibrated range;
/// P.1546 up to 3 GHz; free space beyond.
pub fn select_model(freq_mhz: f64, distance_km: f64, terrain: &TerrainProfile) -> PropagationModel {
    if terrain.obstacle_on_path(distance_km).is_some() && freq_mhz >= 30.0 {
        PropagationModel::ItuP526
    } else if freq_mhz < 30.0 {
        PropagationModel::Fspl
    } else if freq_mhz <= 1500.0 && terrain.ground.is_built_up() && distance_km >= 1.0 {
        PropagationModel::OkumuraHata
    } else if freq_mhz <= 3000.0 {
        PropagationModel::ItuP1546
    } else {
        PropagationModel::Fspl
    }
}
