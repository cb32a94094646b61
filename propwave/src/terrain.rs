//! Terrain and environment description for a link path.
//!
//! Callers describe the environment with [`TerrainProfileParams`], where
//! every field is optional; [`TerrainProfileParams::resolve`] merges the
//! supplied fields over the documented defaults into the concrete
//! [`TerrainProfile`] the models consume. Keeping the two apart means a
//! caller-specified `rain_rate_mm_h = 0.0` stays distinguishable from an
//! unspecified one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Large-scale relief category along the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainType {
    #[default]
    Flat,
    Hilly,
    Mountainous,
    Valley,
}

impl FromStr for TerrainType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "flat" => Ok(TerrainType::Flat),
            "hilly" => Ok(TerrainType::Hilly),
            "mountainous" => Ok(TerrainType::Mountainous),
            "valley" => Ok(TerrainType::Valley),
            _ => Err(format!("unknown terrain type: {s}")),
        }
    }
}

/// Ground cover around the terminals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundType {
    Sea,
    Coast,
    #[default]
    OpenLand,
    Farmland,
    Forest,
    Suburban,
    Urban,
    DenseUrban,
}

impl GroundType {
    /// True for the ground covers Okumura-Hata was calibrated against.
    pub fn is_built_up(&self) -> bool {
        matches!(
            self,
            GroundType::Suburban | GroundType::Urban | GroundType::DenseUrban
        )
    }
}

impl FromStr for GroundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sea" => Ok(GroundType::Sea),
            "coast" => Ok(GroundType::Coast),
            "open_land" | "open" => Ok(GroundType::OpenLand),
            "farmland" => Ok(GroundType::Farmland),
            "forest" => Ok(GroundType::Forest),
            "suburban" => Ok(GroundType::Suburban),
            "urban" => Ok(GroundType::Urban),
            "dense_urban" => Ok(GroundType::DenseUrban),
            _ => Err(format!("unknown ground type: {s}")),
        }
    }
}

/// Broad climate zone of the path.
///
/// Carried through the API for future temperature corrections; none of the
/// current models consult it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    Arctic,
    #[default]
    Temperate,
    Subtropical,
    Tropical,
    Arid,
}

impl FromStr for ClimateZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "arctic" => Ok(ClimateZone::Arctic),
            "temperate" => Ok(ClimateZone::Temperate),
            "subtropical" => Ok(ClimateZone::Subtropical),
            "tropical" => Ok(ClimateZone::Tropical),
            "arid" => Ok(ClimateZone::Arid),
            _ => Err(format!("unknown climate zone: {s}")),
        }
    }
}

/// Vegetation class along the path. Reserved, like [`ClimateZone`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vegetation {
    #[default]
    None,
    Crops,
    SparseTrees,
    Forest,
    Jungle,
}

impl FromStr for Vegetation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "none" => Ok(Vegetation::None),
            "crops" => Ok(Vegetation::Crops),
            "sparse_trees" => Ok(Vegetation::SparseTrees),
            "forest" => Ok(Vegetation::Forest),
            "jungle" => Ok(Vegetation::Jungle),
            _ => Err(format!("unknown vegetation class: {s}")),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "_")
}

/// A single dominant obstruction between the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Peak elevation above mean sea level, in meters.
    pub peak_elev_m: f64,
    /// Along-path distance from the transmitter, in kilometers.
    pub dist_from_tx_km: f64,
}

/// Fully-resolved terrain description consumed by the models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainProfile {
    pub terrain: TerrainType,
    pub ground: GroundType,
    pub climate: ClimateZone,
    pub vegetation: Vegetation,
    /// Transmitter antenna height above local ground, in meters.
    pub antenna_height_tx_m: f64,
    /// Receiver antenna height above local ground, in meters.
    pub antenna_height_rx_m: f64,
    /// Transmitter ground elevation above mean sea level, in meters.
    pub elevation_tx_m: f64,
    /// Receiver ground elevation above mean sea level, in meters.
    pub elevation_rx_m: f64,
    pub obstacle: Option<Obstacle>,
    /// Rain rate exceeded 0.01% of the time, in mm/h.
    pub rain_rate_mm_h: f64,
    /// Cloud/fog liquid water content, in g/m³.
    pub liquid_water_content_g_m3: f64,
}

impl Default for TerrainProfile {
    fn default() -> Self {
        Self {
            terrain: TerrainType::default(),
            ground: GroundType::default(),
            climate: ClimateZone::default(),
            vegetation: Vegetation::default(),
            antenna_height_tx_m: 2.0,
            antenna_height_rx_m: 2.0,
            elevation_tx_m: 0.0,
            elevation_rx_m: 0.0,
            obstacle: None,
            rain_rate_mm_h: 0.0,
            liquid_water_content_g_m3: 0.0,
        }
    }
}

impl TerrainProfile {
    /// Returns the dominant obstacle if it actually lies between the
    /// endpoints; one at or beyond either terminal is treated as absent.
    pub fn obstacle_on_path(&self, distance_km: f64) -> Option<Obstacle> {
        self.obstacle
            .filter(|o| o.dist_from_tx_km > 0.0 && o.dist_from_tx_km < distance_km)
    }
}

/// Caller-supplied terrain description, optional per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainProfileParams {
    pub terrain: Option<TerrainType>,
    pub ground: Option<GroundType>,
    pub climate: Option<ClimateZone>,
    pub vegetation: Option<Vegetation>,
    pub antenna_height_tx_m: Option<f64>,
    pub antenna_height_rx_m: Option<f64>,
    pub elevation_tx_m: Option<f64>,
    pub elevation_rx_m: Option<f64>,
    pub obstacle: Option<Obstacle>,
    pub rain_rate_mm_h: Option<f64>,
    pub liquid_water_content_g_m3: Option<f64>,
}

impl TerrainProfileParams {
    /// Merges the supplied fields over the engine defaults.
    pub fn resolve(&self) -> TerrainProfile {
        let defaults = TerrainProfile::default();
        TerrainProfile {
            terrain: self.terrain.unwrap_or(defaults.terrain),
            ground: self.ground.unwrap_or(defaults.ground),
            climate: self.climate.unwrap_or(defaults.climate),
            vegetation: self.vegetation.unwrap_or(defaults.vegetation),
            antenna_height_tx_m: self
                .antenna_height_tx_m
                .unwrap_or(defaults.antenna_height_tx_m),
            antenna_height_rx_m: self
                .antenna_height_rx_m
                .unwrap_or(defaults.antenna_height_rx_m),
            elevation_tx_m: self.elevation_tx_m.unwrap_or(defaults.elevation_tx_m),
            elevation_rx_m: self.elevation_rx_m.unwrap_or(defaults.elevation_rx_m),
            obstacle: self.obstacle,
            rain_rate_mm_h: self.rain_rate_mm_h.unwrap_or(defaults.rain_rate_mm_h),
            liquid_water_content_g_m3: self
                .liquid_water_content_g_m3
                .unwrap_or(defaults.liquid_water_content_g_m3),
        }
    }
}
