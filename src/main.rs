// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use fireworks_show::physic_engine::config::SimConfig;
use fireworks_show::physic_engine::fireworks::FireworksEngine;
use fireworks_show::renderer_engine::RecordingCanvas;
use fireworks_show::utils::show_rust_core_dependencies;
use fireworks_show::{Simulator, SystemClock};

/// Durée maximale du déroulé, garde-fou si la séquence traîne.
const MAX_RUN_SECONDS: f32 = 120.0;

/// Point d'entrée : déroule le show de démonstration en headless, contre
/// un canvas d'enregistrement (le rendu fenêtré est un collaborateur
/// extérieur, hors du périmètre de cette crate).
fn main() -> Result<()> {
    env_logger::init();

    info!("🎆 Starting Fireworks Show...");

    show_rust_core_dependencies();

    let config = SimConfig::from_file("assets/config/fireworks.toml").unwrap_or_default();
    info!("Sim config loaded:\n{:#?}", config);

    let engine = FireworksEngine::new(&config);
    let canvas = RecordingCanvas::new();
    let clock = SystemClock::new();

    let mut simulator = Simulator::new(engine, canvas, clock);

    let mut rng = StdRng::from_os_rng();
    simulator.start_demo(&mut rng);

    // Boucle à ~60 Hz jusqu'à épuisement du show et des entités
    let frame_budget = Duration::from_millis(1000 / 60);
    let deadline = std::time::Instant::now() + Duration::from_secs_f32(MAX_RUN_SECONDS);
    while simulator.step() {
        if std::time::Instant::now() >= deadline {
            info!("⏹️ Deadline reached, stopping the show");
            simulator.stop_sequence();
            simulator.request_clear();
        }
        std::thread::sleep(frame_budget);
    }

    info!("🏁 Show complete: {} frames simulated", simulator.frames());
    simulator.close();

    Ok(())
}
