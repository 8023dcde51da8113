pub mod simulator;
pub use simulator::{Clock, LaunchSettings, Simulator, SystemClock};
#[cfg(any(test, feature = "test_helpers"))]
pub use simulator::ManualClock;
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::{Canvas, DrawCmd, RecordingCanvas};
// Physic engine
pub mod physic_engine;
pub use physic_engine::PhysicEngine;
// Jeux annexes (arcade)
pub mod games;

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
