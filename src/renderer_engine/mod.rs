pub mod scene;
pub use scene::render_frame;

use crate::physic_engine::types::Color;
use glam::Vec2;

/// Contrat de rendu consommé par le cœur, implémenté par le collaborateur
/// extérieur (fenêtre, canvas, terminal...). Le cœur ne connaît que ces
/// trois primitives.
pub trait Canvas {
    /// Efface les primitives de la frame précédente.
    fn clear(&mut self);

    fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Color, width: f32);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool);
}

/// Primitive de dessin enregistrée par [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line {
        p1: Vec2,
        p2: Vec2,
        color: Color,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        filled: bool,
    },
}

/// Canvas qui enregistre les primitives émises au lieu de les dessiner.
///
/// Sert de backend headless (binaire de démo) et de point d'observation
/// pour les tests : on inspecte `commands` après un rendu, avant le
/// `clear` de la frame suivante.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCmd>,
    pub clears: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCmd::Line {
            p1,
            p2,
            color,
            width,
        });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
            filled,
        });
    }
}
