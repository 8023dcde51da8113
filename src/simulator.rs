use log::{debug, info};
use rand::Rng;

use crate::log_metrics_and_fps;
use crate::physic_engine::rocket::LaunchParams;
use crate::physic_engine::sequencer::{build_demo_sequence, ShowEvent, ShowSequencer};
use crate::physic_engine::shape_emitter::BurstShape;
use crate::physic_engine::PhysicEngine;
use crate::profiler::Profiler;
use crate::renderer_engine::{render_frame, Canvas};

/// Horloge monotone en secondes, collaborateur extérieur de la boucle.
pub trait Clock {
    fn now(&self) -> f32;
}

/// Horloge système basée sur `Instant`.
pub struct SystemClock {
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }
}

/// Horloge pilotée à la main (tests et déroulé accéléré du show).
#[cfg(any(test, feature = "test_helpers"))]
#[derive(Default)]
pub struct ManualClock {
    now: std::cell::Cell<f32>,
}

#[cfg(any(test, feature = "test_helpers"))]
impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, dt: f32) {
        self.now.set(self.now.get() + dt);
    }
}

#[cfg(any(test, feature = "test_helpers"))]
impl Clock for ManualClock {
    fn now(&self) -> f32 {
        self.now.get()
    }
}

/// Réglages courants des contrôles UI (forme / nombre / vitesse),
/// appliqués aux tirs déclenchés par clic.
#[derive(Debug, Clone, Copy)]
pub struct LaunchSettings {
    pub shape: BurstShape,
    pub count: usize,
    pub speed: f32,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            shape: BurstShape::Circle,
            count: 140,
            speed: 210.0,
        }
    }
}

/// Orchestrateur d'un tick : séquenceur -> physique -> rendu.
///
/// Mono-thread coopératif : tout l'état est possédé exclusivement par la
/// boucle ; les commandes (clear, stop) prennent effet à la frontière du
/// tick suivant.
pub struct Simulator<P, C, K>
where
    P: PhysicEngine,
    C: Canvas,
    K: Clock,
{
    physic_engine: P,
    canvas: C,
    clock: K,
    sequencer: ShowSequencer,
    pub settings: LaunchSettings,

    // Loop state
    profiler: Profiler,
    frames: u64,
    last_time: f32,
    fps_avg: f32,
    last_log: f32,
    first_frame: bool,
    clear_requested: bool,
}

/// Intervalle entre deux logs périodiques de métriques (secondes)
const LOG_INTERVAL: f32 = 5.0;

impl<P, C, K> Simulator<P, C, K>
where
    P: PhysicEngine,
    C: Canvas,
    K: Clock,
{
    pub fn new(physic_engine: P, canvas: C, clock: K) -> Self {
        let now = clock.now();
        Self {
            physic_engine,
            canvas,
            clock,
            sequencer: ShowSequencer::default(),
            settings: LaunchSettings::default(),
            profiler: Profiler::new(200),
            frames: 0,
            last_time: now,
            fps_avg: 0.0,
            last_log: now,
            first_frame: true,
            clear_requested: false,
        }
    }

    /// Un tick complet. Retourne `false` quand il ne reste plus rien à
    /// animer (séquence épuisée, aucune fusée ni particule vivante).
    pub fn step(&mut self) -> bool {
        let _frame_guard = self.profiler.frame(); // RAII: mesure totale de la frame

        let now = self.clock.now();
        let delta = now - self.last_time;
        self.last_time = now;
        self.frames += 1;

        // Commandes différées : effet à la frontière du tick
        if self.clear_requested {
            self.physic_engine.clear();
            self.clear_requested = false;
        }

        // Séquenceur : tir des événements devenus dus
        for event in self.sequencer.advance(now) {
            debug!(
                "🎇 Show event fired: t={:.2}, x={:.1}, shape={}",
                event.t,
                event.x,
                event.shape.name()
            );
            let params = LaunchParams::from(event);
            self.physic_engine.launch(&params);
        }

        // Physique
        let update_result = self
            .profiler
            .profile_block("physic - update", || self.physic_engine.update(delta));
        for (i, flash) in update_result.detonations.iter().enumerate() {
            debug!(
                "💥 Detonation {} at ({:.1}, {:.1})",
                i, flash.pos.x, flash.pos.y
            );
        }

        // Rendu
        let drawn = self
            .profiler
            .profile_block("render frame", || {
                render_frame(&self.physic_engine, &mut self.canvas)
            });
        self.profiler.record_metric("primitives drawn", drawn as f32);

        // moyenne pondérée EMA
        let fps = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        let alpha = 0.15;
        self.fps_avg = alpha * fps + (1.0 - alpha) * self.fps_avg;

        // affichage périodique
        if now - self.last_log >= LOG_INTERVAL {
            log_metrics_and_fps!(&self.profiler);
            info!("FPS moyen (EMA): {:.2}", self.fps_avg);
            self.last_log = now;
        }

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        self.sequencer.is_running()
            || self.physic_engine.iter_rockets().next().is_some()
            || self.physic_engine.iter_particles().next().is_some()
    }

    /// Tir déclenché par un clic sur le canvas, avec les réglages UI courants.
    pub fn on_click(&mut self, x: f32) {
        let params = LaunchParams {
            x,
            shape: self.settings.shape,
            color: None, // couleur aléatoire de la palette
            count: self.settings.count,
            speed: self.settings.speed,
        };
        self.physic_engine.launch(&params);
    }

    /// Planifie et démarre la séquence de démonstration.
    pub fn start_demo(&mut self, rng: &mut impl Rng) {
        let events = build_demo_sequence(self.physic_engine.get_config(), rng);
        self.start_sequence(events);
    }

    /// Démarre une séquence arbitraire à l'instant courant.
    pub fn start_sequence(&mut self, events: Vec<ShowEvent>) {
        self.sequencer = ShowSequencer::new(events);
        self.sequencer.start(self.clock.now());
    }

    pub fn stop_sequence(&mut self) {
        self.sequencer.stop();
    }

    /// Demande l'effacement des entités ; appliqué au prochain tick.
    pub fn request_clear(&mut self) {
        self.clear_requested = true;
    }

    pub fn close(&mut self) {
        self.sequencer.stop();
        self.physic_engine.close();
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn sequencer(&self) -> &ShowSequencer {
        &self.sequencer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
