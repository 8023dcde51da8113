//! Séquenceur de show : une liste d'événements de tir ordonnés dans le
//! temps, déclenchés contre une horloge murale relative au démarrage.

use log::info;
use rand::Rng;

use crate::physic_engine::config::SimConfig;
use crate::physic_engine::rocket::LaunchParams;
use crate::physic_engine::shape_emitter::BurstShape;
use crate::physic_engine::types::{Color, PALETTE, WHITE};

/// Événement de tir planifié. Immuable une fois construit, consommé
/// exactement une fois par le séquenceur.
#[derive(Debug, Clone)]
pub struct ShowEvent {
    /// Offset en secondes depuis le démarrage de la séquence
    pub t: f32,
    pub x: f32,
    pub shape: BurstShape,
    pub color: Color,
    pub count: usize,
    pub speed: f32,
}

impl From<&ShowEvent> for LaunchParams {
    fn from(event: &ShowEvent) -> Self {
        LaunchParams {
            x: event.x,
            shape: event.shape,
            color: Some(event.color),
            count: event.count,
            speed: event.speed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    #[default]
    Idle,
    Running,
}

/// Machine à deux états : `Idle -> Running` au démarrage (enregistre t0,
/// remet l'index à zéro), retour à `Idle` sur stop ou épuisement naturel.
#[derive(Debug, Default)]
pub struct ShowSequencer {
    events: Vec<ShowEvent>,
    index: usize,
    t0: f32,
    state: SequencerState,
}

impl ShowSequencer {
    /// Construit le séquenceur ; la liste est triée par temps croissant
    /// (tri stable : les événements simultanés gardent leur ordre).
    pub fn new(mut events: Vec<ShowEvent>) -> Self {
        events.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self {
            events,
            index: 0,
            t0: 0.0,
            state: SequencerState::Idle,
        }
    }

    pub fn start(&mut self, now: f32) {
        self.t0 = now;
        self.index = 0;
        self.state = SequencerState::Running;
        info!("🎆 Show sequence started ({} events)", self.events.len());
    }

    /// Suspend le tir sans retirer les entités déjà créées.
    pub fn stop(&mut self) {
        if self.state == SequencerState::Running {
            info!("⏹️ Show sequence stopped ({} events fired)", self.index);
        }
        self.state = SequencerState::Idle;
    }

    pub fn is_running(&self) -> bool {
        self.state == SequencerState::Running
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[ShowEvent] {
        &self.events
    }

    /// Retourne les événements devenus dus à l'instant `now`, dans l'ordre
    /// planifié, chacun exactement une fois. L'index avance de façon
    /// monotone ; l'épuisement de la liste fait repasser à `Idle`.
    pub fn advance(&mut self, now: f32) -> &[ShowEvent] {
        if self.state != SequencerState::Running {
            return &[];
        }

        let elapsed = now - self.t0;
        let start = self.index;
        while self.index < self.events.len() && self.events[self.index].t <= elapsed {
            self.index += 1;
        }

        if self.index >= self.events.len() {
            self.state = SequencerState::Idle;
            info!("🏁 Show sequence finished");
        }

        &self.events[start..self.index]
    }
}

// Constantes du show de démonstration
const DEMO_LAUNCHES: usize = 24;
const DEMO_COUNTS: [usize; 4] = [90, 120, 160, 200];
const DEMO_SPEEDS: [f32; 4] = [160.0, 200.0, 240.0, 300.0];
const DEMO_GAPS: [f32; 4] = [0.18, 0.22, 0.28, 0.35];
const FINALE_DELAY: f32 = 0.8;
const FINALE_XS: [f32; 5] = [0.2, 0.35, 0.5, 0.65, 0.8];
const FINALE_COUNT: usize = 240;
const FINALE_SPEED: f32 = 320.0;

/// Construit la séquence de démonstration : 24 tirs aléatoires à rythme
/// varié, puis un final de cinq étoiles blanches tirées ensemble.
pub fn build_demo_sequence(cfg: &SimConfig, rng: &mut impl Rng) -> Vec<ShowEvent> {
    let mut events = Vec::with_capacity(DEMO_LAUNCHES + FINALE_XS.len());
    let mut t = 0.0;

    for _ in 0..DEMO_LAUNCHES {
        events.push(ShowEvent {
            t,
            x: rng.random_range((cfg.width * 0.15)..(cfg.width * 0.85)),
            shape: BurstShape::ALL[rng.random_range(0..BurstShape::ALL.len())],
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            count: DEMO_COUNTS[rng.random_range(0..DEMO_COUNTS.len())],
            speed: DEMO_SPEEDS[rng.random_range(0..DEMO_SPEEDS.len())],
        });
        // petites variations de rythme
        t += DEMO_GAPS[rng.random_range(0..DEMO_GAPS.len())];
    }

    // final
    t += FINALE_DELAY;
    for fx in FINALE_XS {
        events.push(ShowEvent {
            t,
            x: cfg.width * fx,
            shape: BurstShape::Star,
            color: WHITE,
            count: FINALE_COUNT,
            speed: FINALE_SPEED,
        });
    }

    events.sort_by(|a, b| a.t.total_cmp(&b.t));
    events
}
