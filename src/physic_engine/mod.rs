pub mod r#trait;
pub use r#trait::PhysicEngine;

pub mod types;
pub use self::types::{Color, Flash, UpdateResult, PALETTE, WHITE};

pub mod config;
pub use self::config::SimConfig;

pub mod rocket;
pub use self::rocket::{LaunchParams, LaunchParamsBuilder, Rocket};

pub mod particle;
pub use self::particle::Particle;

pub mod shape_emitter;
pub use self::shape_emitter::BurstShape;

pub mod explosion;

pub mod sequencer;
pub use self::sequencer::{build_demo_sequence, ShowEvent, ShowSequencer};

pub mod fireworks;
pub use self::fireworks::FireworksEngine;
#[cfg(any(test, feature = "test_helpers"))]
pub use self::fireworks::PhysicEngineTestHelpers;
