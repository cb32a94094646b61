use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use propwave::{geo::Coord, GroundType, Obstacle, PropagationModel, TerrainType};
use std::str::FromStr;

/// Compute point-to-point radio link budgets.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Start "lat,lng" in decimal degrees.
    #[arg(long)]
    pub start: LatLng,

    /// Destination "lat,lng" in decimal degrees.
    #[arg(long)]
    pub dest: LatLng,

    /// Carrier frequency, in MHz.
    #[arg(short, long)]
    pub frequency: f64,

    /// Transmit power, in watts.
    #[arg(short, long, default_value_t = 5.0)]
    pub power: f64,

    /// Channel bandwidth, in kHz.
    #[arg(short, long, default_value_t = 25.0)]
    pub bandwidth: f64,

    /// Relief category along the path.
    #[arg(long)]
    pub terrain: Option<TerrainType>,

    /// Ground cover around the terminals.
    #[arg(long)]
    pub ground: Option<GroundType>,

    /// Transmitter antenna height above ground, in meters.
    #[arg(long)]
    pub tx_height: Option<f64>,

    /// Receiver antenna height above ground, in meters.
    #[arg(long)]
    pub rx_height: Option<f64>,

    /// Transmitter site elevation above sea level, in meters.
    #[arg(long)]
    pub tx_elevation: Option<f64>,

    /// Receiver site elevation above sea level, in meters.
    #[arg(long)]
    pub rx_elevation: Option<f64>,

    /// Dominant obstacle "peak_m,dist_km" along the path.
    #[arg(long)]
    pub obstacle: Option<ObstacleArg>,

    /// Rain rate exceeded 0.01% of the time, in mm/h.
    #[arg(long)]
    pub rain: Option<f64>,

    /// Cloud/fog liquid water content, in g/m³.
    #[arg(long)]
    pub lwc: Option<f64>,

    /// Transmitter antenna gain, in dBi.
    #[arg(long)]
    pub tx_gain: Option<f64>,

    /// Receiver antenna gain, in dBi.
    #[arg(long)]
    pub rx_gain: Option<f64>,

    /// Receiver sensitivity, in dBm.
    #[arg(long)]
    pub rx_sensitivity: Option<f64>,

    /// Force a propagation model instead of automatic selection.
    #[arg(short, long)]
    pub model: Option<PropagationModel>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print a human-readable budget report.
    Report,

    /// Print the budget as JSON.
    Json,
}

#[derive(Clone, Debug)]
pub struct LatLng(pub Coord<f64>);

impl FromStr for LatLng {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lng_str) = s.split_once(',').ok_or(anyhow!("not a valid lat,lng"))?;
        let lat = f64::from_str(lat_str.trim())?;
        let lng = f64::from_str(lng_str.trim())?;
        Ok(Self(Coord { x: lng, y: lat }))
    }
}

#[derive(Clone, Debug)]
pub struct ObstacleArg(pub Obstacle);

impl FromStr for ObstacleArg {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (peak_str, dist_str) = s
            .split_once(',')
            .ok_or(anyhow!("not a valid peak_m,dist_km"))?;
        Ok(Self(Obstacle {
            peak_elev_m: f64::from_str(peak_str.trim())?,
            dist_from_tx_km: f64::from_str(dist_str.trim())?,
        }))
    }
}
