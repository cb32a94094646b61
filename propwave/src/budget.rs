//! Link-budget assembly: the crate's principal entry point.

use crate::{
    error::PropwaveError,
    geodesy,
    models::{
        self, cloud_fog_attenuation, clutter_loss, diffraction_loss, fresnel_clearance, fspl_db,
        gas_absorption, itu_p1546_loss, okumura_hata_loss, rain_attenuation, PropagationModel,
    },
    quality::{self, ConnectionQuality},
    terrain::{TerrainProfile, TerrainProfileParams},
    units::watt_to_dbm,
};
use geo::Point;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Receiver sensitivity assumed when no equipment is supplied, in dBm.
const DEFAULT_RX_SENSITIVITY_DBM: f64 = -110.0;

/// A geographic endpoint in decimal degrees, WGS84-interpreted but computed
/// on a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other`, in kilometers.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        geodesy::distance_km(Point::from(*self), Point::from(*other))
    }

    /// Initial great-circle bearing toward `other`, in degrees.
    pub fn bearing_deg(&self, other: &GeoPoint) -> f64 {
        geodesy::bearing_deg(Point::from(*self), Point::from(*other))
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(p: GeoPoint) -> Self {
        Point::new(p.lng, p.lat)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(p: Point<f64>) -> Self {
        Self {
            lat: p.y(),
            lng: p.x(),
        }
    }
}

/// Transceiver hardware capabilities relevant to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadioEquipment {
    pub freq_min_mhz: f64,
    pub freq_max_mhz: f64,
    pub max_power_w: f64,
    pub rx_sensitivity_dbm: f64,
    pub antenna_gain_dbi: f64,
}

/// Transmission parameters of a planned link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadioLinkInput {
    pub frequency_mhz: f64,
    pub bandwidth_khz: f64,
    pub tx_power_w: f64,
}

/// A fully-itemised link budget.
///
/// Every loss mechanism is reported separately so callers can show where
/// the signal went; `model` names the base-loss model actually used and is
/// never [`PropagationModel::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkBudget {
    pub tx_power_dbm: f64,
    pub tx_gain_dbi: f64,
    pub rx_gain_dbi: f64,
    pub base_loss_db: f64,
    pub diffraction_loss_db: f64,
    pub gas_absorption_db: f64,
    pub rain_attenuation_db: f64,
    pub cloud_fog_attenuation_db: f64,
    pub clutter_loss_db: f64,
    pub received_power_dbm: f64,
    pub rx_sensitivity_dbm: f64,
    pub link_margin_db: f64,
    pub distance_km: f64,
    pub fresnel_clearance_fraction: f64,
    pub feasible: bool,
    pub model: PropagationModel,
    pub connection_quality: ConnectionQuality,
}

/// Computes the complete link budget between `from` and `to`.
///
/// Missing equipment substitutes 0 dBi gain and −110 dBm sensitivity;
/// missing terrain resolves to the flat open-land defaults. `force_model`
/// overrides automatic selection, with [`PropagationModel::Auto`] meaning
/// "pick for me".
///
/// # Errors
///
/// Returns [`PropwaveError`] for contract violations: non-finite numeric
/// inputs, an inverted equipment frequency range, non-positive transmit
/// power, or a negative rain rate.
pub fn compute_link_budget(
    from: GeoPoint,
    to: GeoPoint,
    link: &RadioLinkInput,
    equip_from: Option<&RadioEquipment>,
    equip_to: Option<&RadioEquipment>,
    terrain: Option<&TerrainProfileParams>,
    force_model: Option<PropagationModel>,
) -> Result<LinkBudget, PropwaveError> {
    validate_inputs(&from, &to, link, [equip_from, equip_to], terrain)?;

    let distance_km = from.distance_km(&to);
    let terrain = terrain.map(TerrainProfileParams::resolve).unwrap_or_default();

    let tx_power_dbm = watt_to_dbm(link.tx_power_w);
    let tx_gain_dbi = equip_from.map_or(0.0, |e| e.antenna_gain_dbi);
    let rx_gain_dbi = equip_to.map_or(0.0, |e| e.antenna_gain_dbi);
    let rx_sensitivity_dbm = equip_to.map_or(DEFAULT_RX_SENSITIVITY_DBM, |e| e.rx_sensitivity_dbm);

    for equip in [equip_from, equip_to].into_iter().flatten() {
        if link.frequency_mhz < equip.freq_min_mhz || link.frequency_mhz > equip.freq_max_mhz {
            warn!(
                "link frequency {} MHz outside equipment range {}-{} MHz",
                link.frequency_mhz, equip.freq_min_mhz, equip.freq_max_mhz
            );
        }
    }

    let model = resolve_model(force_model, link.frequency_mhz, distance_km, &terrain);

    let base_loss_db = match model {
        PropagationModel::OkumuraHata => okumura_hata_loss(
            distance_km,
            link.frequency_mhz,
            terrain.antenna_height_tx_m,
            terrain.antenna_height_rx_m,
            terrain.ground,
        ),
        PropagationModel::ItuP1546 => itu_p1546_loss(
            distance_km,
            link.frequency_mhz,
            terrain.antenna_height_tx_m,
            terrain.terrain,
        ),
        // Knife-edge paths start from free space; the edge itself is
        // accounted for in the diffraction term below.
        _ => fspl_db(distance_km, link.frequency_mhz),
    };

    let diffraction_loss_db = if model == PropagationModel::ItuP526 {
        diffraction_loss(&terrain, distance_km, link.frequency_mhz)
    } else {
        0.0
    };
    // Okumura-Hata's measurements already embed urban clutter.
    let clutter_loss_db = if model == PropagationModel::OkumuraHata {
        0.0
    } else {
        clutter_loss(link.frequency_mhz, terrain.ground)
    };
    let gas_absorption_db = gas_absorption(distance_km, link.frequency_mhz);
    let rain_attenuation_db =
        rain_attenuation(distance_km, link.frequency_mhz, terrain.rain_rate_mm_h);
    let cloud_fog_attenuation_db = cloud_fog_attenuation(
        distance_km,
        link.frequency_mhz,
        terrain.liquid_water_content_g_m3,
    );

    let total_loss_db = base_loss_db
        + diffraction_loss_db
        + gas_absorption_db
        + rain_attenuation_db
        + cloud_fog_attenuation_db
        + clutter_loss_db;
    let received_power_dbm = tx_power_dbm + tx_gain_dbi - total_loss_db + rx_gain_dbi;
    let link_margin_db = received_power_dbm - rx_sensitivity_dbm;
    let fresnel_clearance_fraction = fresnel_clearance(&terrain, distance_km, link.frequency_mhz);

    debug!(
        "budget: {distance_km:.3} km at {} MHz via {model}, margin {link_margin_db:.1} dB",
        link.frequency_mhz
    );

    let connection_quality = quality::connection_quality(
        link_margin_db,
        fresnel_clearance_fraction,
        rain_attenuation_db + cloud_fog_attenuation_db,
        tx_gain_dbi + rx_gain_dbi,
        received_power_dbm,
        link.bandwidth_khz,
    );

    Ok(LinkBudget {
        tx_power_dbm,
        tx_gain_dbi,
        rx_gain_dbi,
        base_loss_db,
        diffraction_loss_db,
        gas_absorption_db,
        rain_attenuation_db,
        cloud_fog_attenuation_db,
        clutter_loss_db,
        received_power_dbm,
        rx_sensitivity_dbm,
        link_margin_db,
        distance_km,
        fresnel_clearance_fraction,
        feasible: link_margin_db > 0.0,
        model,
        connection_quality,
    })
}

/// Applies a forced model over automatic selection. The reserved P.452
/// entry has no implementation yet and degrades to free space, loudly.
fn resolve_model(
    force: Option<PropagationModel>,
    freq_mhz: f64,
    distance_km: f64,
    terrain: &TerrainProfile,
) -> PropagationModel {
    match force {
        None | Some(PropagationModel::Auto) => models::select_model(freq_mhz, distance_km, terrain),
        Some(PropagationModel::ItuP452) => {
            warn!("ITU-R P.452 is not implemented; computing free-space loss instead");
            PropagationModel::Fspl
        }
        Some(model) => model,
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), PropwaveError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PropwaveError::NonFinite(name))
    }
}

fn validate_inputs(
    from: &GeoPoint,
    to: &GeoPoint,
    link: &RadioLinkInput,
    equipment: [Option<&RadioEquipment>; 2],
    terrain: Option<&TerrainProfileParams>,
) -> Result<(), PropwaveError> {
    ensure_finite("from.lat", from.lat)?;
    ensure_finite("from.lng", from.lng)?;
    ensure_finite("to.lat", to.lat)?;
    ensure_finite("to.lng", to.lng)?;
    ensure_finite("frequency_mhz", link.frequency_mhz)?;
    ensure_finite("bandwidth_khz", link.bandwidth_khz)?;
    ensure_finite("tx_power_w", link.tx_power_w)?;
    if link.tx_power_w <= 0.0 {
        return Err(PropwaveError::NonPositivePower(link.tx_power_w));
    }

    for equip in equipment.into_iter().flatten() {
        ensure_finite("freq_min_mhz", equip.freq_min_mhz)?;
        ensure_finite("freq_max_mhz", equip.freq_max_mhz)?;
        ensure_finite("max_power_w", equip.max_power_w)?;
        ensure_finite("rx_sensitivity_dbm", equip.rx_sensitivity_dbm)?;
        ensure_finite("antenna_gain_dbi", equip.antenna_gain_dbi)?;
        if equip.freq_min_mhz > equip.freq_max_mhz {
            return Err(PropwaveError::FrequencyRange {
                min_mhz: equip.freq_min_mhz,
                max_mhz: equip.freq_max_mhz,
            });
        }
        if equip.max_power_w <= 0.0 {
            return Err(PropwaveError::NonPositivePower(equip.max_power_w));
        }
    }

    if let Some(terrain) = terrain {
        for (name, value) in [
            ("antenna_height_tx_m", terrain.antenna_height_tx_m),
            ("antenna_height_rx_m", terrain.antenna_height_rx_m),
            ("elevation_tx_m", terrain.elevation_tx_m),
            ("elevation_rx_m", terrain.elevation_rx_m),
            ("rain_rate_mm_h", terrain.rain_rate_mm_h),
            (
                "liquid_water_content_g_m3",
                terrain.liquid_water_content_g_m3,
            ),
        ] {
            if let Some(value) = value {
                ensure_finite(name, value)?;
            }
        }
        if let Some(obstacle) = terrain.obstacle {
            ensure_finite("obstacle.peak_elev_m", obstacle.peak_elev_m)?;
            ensure_finite("obstacle.dist_from_tx_km", obstacle.dist_from_tx_km)?;
        }
        if let Some(rate) = terrain.rain_rate_mm_h {
            if rate < 0.0 {
                return Err(PropwaveError::NegativeRainRate(rate));
            }
        }
    }

    Ok(())
}
