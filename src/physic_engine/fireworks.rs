use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::physic_engine::{
    config::SimConfig,
    explosion::explode,
    particle::Particle,
    rocket::{LaunchParams, Rocket},
    types::{Flash, UpdateResult},
    PhysicEngine,
};

/// Borne supérieure du pas de simulation (secondes) : amortit les pics de
/// frame-time, p.ex. à la reprise après un gel de la fenêtre.
const MAX_DT: f32 = 1.0 / 20.0;

/// Moteur de feux d'artifice : fusées ascendantes, détonation à altitude
/// cible, particules balistiques à durée de vie bornée.
#[derive(Debug)]
pub struct FireworksEngine {
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,
    /// Flashs du dernier pas, redessinés une frame puis jetés
    flashes: Vec<Flash>,

    config: SimConfig,
    rng: StdRng,
}

impl FireworksEngine {
    pub fn new(config: &SimConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Variante avec source aléatoire injectée (tests déterministes).
    pub fn with_rng(config: &SimConfig, rng: StdRng) -> Self {
        Self {
            rockets: Vec::new(),
            particles: Vec::new(),
            flashes: Vec::new(),
            config: config.clone(),
            rng,
        }
    }

    fn update(&mut self, dt: f32) -> UpdateResult<'_> {
        let dt = dt.clamp(0.0, MAX_DT);
        let drag = self.config.drag_factor(dt);
        let gravity = self.config.gravity;

        // Les flashs de la frame précédente ont été dessinés : on les jette.
        self.flashes.clear();

        // Fusées : les collections "vivantes" sont reconstruites à chaque
        // pas, jamais mutées en place pendant l'itération de retrait.
        let mut alive_rockets = Vec::with_capacity(self.rockets.len());
        for mut rocket in std::mem::take(&mut self.rockets) {
            rocket.integrate(dt, drag, gravity);
            rocket.push_trail(self.config.trail_len);

            if rocket.should_detonate() {
                debug!(
                    "💥 Explosion triggered at ({:.1}, {:.1}), shape={}, count={}",
                    rocket.pos.x,
                    rocket.pos.y,
                    rocket.shape.name(),
                    rocket.count
                );
                let (particles, flash) = explode(&rocket, &mut self.rng);
                self.particles.extend(particles);
                self.flashes.push(flash);
            } else {
                alive_rockets.push(rocket);
            }
        }
        self.rockets = alive_rockets;

        // Particules
        let mut alive_particles = Vec::with_capacity(self.particles.len());
        for mut particle in std::mem::take(&mut self.particles) {
            particle.integrate(dt, drag, gravity);
            if particle.is_alive(&self.config) {
                alive_particles.push(particle);
            }
        }
        self.particles = alive_particles;

        UpdateResult {
            detonations: &self.flashes,
        }
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl PhysicEngine for FireworksEngine {
    fn set_window_size(&mut self, width: f32, height: f32) {
        self.config.width = width;
        self.config.height = height;
    }

    fn launch(&mut self, params: &LaunchParams) {
        let rocket = Rocket::launch(params, &self.config, &mut self.rng);
        debug!(
            "🚀 Rocket launched at ({:.1}, {:.1}), explode_y={:.1}",
            rocket.pos.x, rocket.pos.y, rocket.explode_y
        );
        self.rockets.push(rocket);
    }

    fn update(&mut self, dt: f32) -> UpdateResult<'_> {
        self.update(dt)
    }

    fn clear(&mut self) {
        self.rockets.clear();
        self.particles.clear();
        self.flashes.clear();
    }

    fn close(&mut self) {
        self.clear();
        debug!("FireworksEngine closed and reset.");
    }

    fn reload_config(&mut self, config: &SimConfig) {
        self.config = config.clone();
    }

    fn get_config(&self) -> &SimConfig {
        &self.config
    }

    fn iter_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a> {
        Box::new(self.rockets.iter())
    }

    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(self.particles.iter())
    }

    fn iter_flashes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Flash> + 'a> {
        Box::new(self.flashes.iter())
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    fn rockets_count(&self) -> usize;
    fn particles_count(&self) -> usize;
    /// Injecte une fusée arbitraire (pour forcer une configuration précise).
    fn inject_rocket(&mut self, rocket: Rocket);
    /// Injecte une particule arbitraire.
    fn inject_particle(&mut self, particle: Particle);
}

#[cfg(any(test, feature = "test_helpers"))]
impl PhysicEngineTestHelpers for FireworksEngine {
    fn rockets_count(&self) -> usize {
        self.rockets.len()
    }

    fn particles_count(&self) -> usize {
        self.particles.len()
    }

    fn inject_rocket(&mut self, rocket: Rocket) {
        self.rockets.push(rocket);
    }

    fn inject_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }
}
