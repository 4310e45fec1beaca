use std::fs::create_dir_all;

use clap::Parser;
use pairviz::cli::VizConfig;
use pairviz::io::{
    clear_out_files, read_session_toml, write_curve_json, write_potential_png,
    write_schematic_png, write_session_toml,
};
use pairviz::{apply_overrides, ModelKind, PotentialModel, Session};

fn print_models() {
    for kind in ModelKind::ALL {
        let model = PotentialModel::from_kind(kind);
        println!("-----------------------------------------");
        println!("Model: {}", model.name());
        println!("Equation: {}", model.equation());
        println!("Description: {}", model.description());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Get commandline arguments
    let config = VizConfig::parse();

    if config.list_models() {
        print_models();
        return Ok(());
    }

    let session = if !config.input().is_empty() {
        println!("Using requested session: {}", config.input());
        read_session_toml(config.input())?
    } else {
        println!("No session provided. Using defaults");
        Session::default()
    };

    // a bad edit stops here, before any previous output is touched
    let requested = config.distance();
    let session = apply_overrides(session, config.model(), requested)?;
    if let Some(r) = requested {
        if r != session.distance {
            log::info!("Distance {r} snapped to detent at {}", session.distance);
        }
    }

    // Init I/O
    println!("Writing output to {}", config.output_dir());
    create_dir_all(config.output_dir())?;
    clear_out_files(&config)?;

    // dump resolved session to output directory
    write_session_toml(&session, &config.toml())?;

    let model = &session.model;
    let energy = session.current_energy();
    println!("Model: {}", model.name());
    println!("Equation: {}", model.equation());
    println!("r = {:.4} Å", session.distance);
    if energy.is_finite() {
        println!("V(r) = {:.4} K", energy);
    } else {
        println!("V(r) = ∞ (inside the hard core)");
    }
    if let Some(r_min) = model.minimum() {
        println!("Potential minimum at r = {:.4} Å", r_min);
    }

    // Write visualizations to disc
    write_potential_png(&session, &config.potential())?;
    write_schematic_png(&session, &config.schematic())?;
    write_curve_json(&session, &config.curve())?;

    println!("Done!");

    Ok(())
}
