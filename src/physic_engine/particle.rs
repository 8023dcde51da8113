use crate::physic_engine::config::SimConfig;
use crate::physic_engine::types::Color;
use glam::Vec2;

/// Masse ponctuelle issue d'une explosion, dessinée comme un disque
/// jusqu'à expiration de sa durée de vie.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Durée de vie restante (secondes)
    pub life: f32,
    pub color: Color,
    pub radius: f32,
}

impl Particle {
    /// Un pas de cinématique : gravité, drag exponentiel, Euler explicite,
    /// décrément de la durée de vie.
    pub fn integrate(&mut self, dt: f32, drag: f32, gravity: f32) {
        self.vel.y += gravity * dt;
        self.vel *= drag;
        self.pos += self.vel * dt;
        self.life -= dt;
    }

    /// Vivante tant que la durée de vie est positive et que la position
    /// reste dans une marge généreuse autour du canvas.
    pub fn is_alive(&self, cfg: &SimConfig) -> bool {
        let m = cfg.offscreen_margin;
        self.life > 0.0
            && self.pos.x > -m
            && self.pos.x < cfg.width + m
            && self.pos.y > -m
            && self.pos.y < cfg.height + cfg.offscreen_margin_bottom
    }
}
