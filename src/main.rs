mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use options::{Cli, Command as CliCmd};
use propwave::{
    compute_link_budget, GeoPoint, LinkBudget, RadioEquipment, RadioLinkInput,
    TerrainProfileParams,
};

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();
    env_logger::init();

    let from = GeoPoint::new(cli.start.0.y, cli.start.0.x);
    let to = GeoPoint::new(cli.dest.0.y, cli.dest.0.x);

    let link = RadioLinkInput {
        frequency_mhz: cli.frequency,
        bandwidth_khz: cli.bandwidth,
        tx_power_w: cli.power,
    };

    let terrain = TerrainProfileParams {
        terrain: cli.terrain,
        ground: cli.ground,
        climate: None,
        vegetation: None,
        antenna_height_tx_m: cli.tx_height,
        antenna_height_rx_m: cli.rx_height,
        elevation_tx_m: cli.tx_elevation,
        elevation_rx_m: cli.rx_elevation,
        obstacle: cli.obstacle.as_ref().map(|o| o.0),
        rain_rate_mm_h: cli.rain,
        liquid_water_content_g_m3: cli.lwc,
    };

    let equip_from = cli.tx_gain.map(|gain| equipment(&cli, gain, -110.0));
    let equip_to = (cli.rx_gain.is_some() || cli.rx_sensitivity.is_some()).then(|| {
        equipment(
            &cli,
            cli.rx_gain.unwrap_or(0.0),
            cli.rx_sensitivity.unwrap_or(-110.0),
        )
    });

    let budget = compute_link_budget(
        from,
        to,
        &link,
        equip_from.as_ref(),
        equip_to.as_ref(),
        Some(&terrain),
        cli.model,
    )?;

    match cli.cmd {
        CliCmd::Report => print_report(&from, &to, &budget),
        CliCmd::Json => println!("{}", serde_json::to_string_pretty(&budget)?),
    }

    Ok(())
}

/// A synthetic equipment record describing exactly the link under study.
fn equipment(cli: &Cli, gain_dbi: f64, sensitivity_dbm: f64) -> RadioEquipment {
    RadioEquipment {
        freq_min_mhz: cli.frequency,
        freq_max_mhz: cli.frequency,
        max_power_w: cli.power,
        rx_sensitivity_dbm: sensitivity_dbm,
        antenna_gain_dbi: gain_dbi,
    }
}

fn print_report(from: &GeoPoint, to: &GeoPoint, budget: &LinkBudget) {
    let quality = &budget.connection_quality;

    println!("distance          {:>12.2} km", budget.distance_km);
    println!("bearing           {:>12.1} deg", from.bearing_deg(to));
    println!("model             {:>12}", budget.model.to_string());
    println!("tx power          {:>12.1} dBm", budget.tx_power_dbm);
    println!("tx gain           {:>12.1} dBi", budget.tx_gain_dbi);
    println!("rx gain           {:>12.1} dBi", budget.rx_gain_dbi);
    println!("base loss         {:>12.1} dB", budget.base_loss_db);
    println!("diffraction       {:>12.1} dB", budget.diffraction_loss_db);
    println!("gas absorption    {:>12.2} dB", budget.gas_absorption_db);
    println!("rain              {:>12.2} dB", budget.rain_attenuation_db);
    println!("cloud/fog         {:>12.2} dB", budget.cloud_fog_attenuation_db);
    println!("clutter           {:>12.1} dB", budget.clutter_loss_db);
    println!("received power    {:>12.1} dBm", budget.received_power_dbm);
    println!("rx sensitivity    {:>12.1} dBm", budget.rx_sensitivity_dbm);
    println!("link margin       {:>12.1} dB", budget.link_margin_db);
    println!(
        "fresnel clearance {:>12.0} %",
        budget.fresnel_clearance_fraction * 100.0
    );
    println!("snr               {:>12.1} dB", quality.snr_db);
    println!("availability      {:>12.3}", quality.availability);
    println!(
        "quality           {:>12} ({}/100)",
        quality.label.to_string(),
        quality.score
    );
    println!("feasible          {:>12}", budget.feasible);
}
