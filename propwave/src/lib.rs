//! # Radio Propagation & Link Budgets
//!
//! `propwave` estimates how much of a radio signal survives the trip between
//! two points on Earth. Given the endpoints, the transmission parameters, and
//! an optional terrain description, [`compute_link_budget`] selects a suitable
//! base-loss model (ITU-R P.525/526/1546 or Okumura-Hata), stacks the
//! applicable attenuation mechanisms on top (gaseous absorption, rain,
//! cloud/fog, clutter, knife-edge diffraction), and returns an itemised
//! [`LinkBudget`] with a composite [`ConnectionQuality`] score.
//!
//! Every routine is a pure function of its inputs; the crate holds no state
//! and is safe to call concurrently.

mod budget;
mod error;
pub mod geodesy;
pub mod models;
pub mod quality;
pub mod terrain;
pub mod units;

pub use {
    crate::{
        budget::{compute_link_budget, GeoPoint, LinkBudget, RadioEquipment, RadioLinkInput},
        error::PropwaveError,
        geodesy::{bearing_deg, distance_km},
        models::{
            cloud_fog_attenuation, clutter_loss, diffraction_loss, fresnel_clearance,
            fresnel_parameter, fspl_db, gas_absorption, itu_p1546_loss, knife_edge_diffraction,
            okumura_hata_loss, rain_attenuation, select_model, specific_gas_attenuation,
            PropagationModel,
        },
        quality::{availability, connection_quality, ConnectionQuality, QualityBand},
        terrain::{
            ClimateZone, GroundType, Obstacle, TerrainProfile, TerrainProfileParams, TerrainType,
            Vegetation,
        },
        units::{dbm_to_watt, thermal_noise_dbm, watt_to_dbm, wavelength_m},
    },
    geo,
};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;
