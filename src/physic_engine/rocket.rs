use derive_builder::Builder;
use rand::Rng;
use std::collections::VecDeque;

use crate::physic_engine::config::SimConfig;
use crate::physic_engine::shape_emitter::BurstShape;
use crate::physic_engine::types::{Color, PALETTE};
use glam::Vec2;

/// Paramètres d'un tir de fusée.
///
/// Tous les champs optionnels ont des valeurs par défaut (celles des
/// contrôles UI) ; seule l'abscisse de tir est requise :
///
/// ```
/// use fireworks_show::physic_engine::rocket::LaunchParamsBuilder;
/// let params = LaunchParamsBuilder::default().x(450.0).build().unwrap();
/// assert_eq!(params.count, 140);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct LaunchParams {
    /// Abscisse de tir (pixels)
    pub x: f32,

    #[builder(default)]
    pub shape: BurstShape,

    /// `None` => couleur tirée aléatoirement dans la palette
    #[builder(default)]
    pub color: Option<Color>,

    /// Nombre de particules de l'explosion (0 => aucune particule, pas d'erreur)
    #[builder(default = "140")]
    pub count: usize,

    /// Vitesse de base des particules d'explosion (px/s)
    #[builder(default = "210.0")]
    pub speed: f32,
}

/// Représentation d'une fusée.
///
/// `count` et `speed` sont figés à la création (ils paramètrent l'unique
/// explosion de la fusée) et ne sont jamais mutés ensuite.
#[derive(Debug, Clone)]
pub struct Rocket {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Altitude de détonation (repère y vers le bas : détonation quand y <= explode_y)
    pub explode_y: f32,
    pub color: Color,
    pub shape: BurstShape,
    /// Positions récentes, la plus récente en dernier, bornée à `trail_len`
    pub trail: VecDeque<Vec2>,
    pub count: usize,
    pub speed: f32,
}

impl Rocket {
    /// Crée une fusée sur le pas de tir, juste sous le bord bas du canvas.
    pub fn launch(params: &LaunchParams, cfg: &SimConfig, rng: &mut impl Rng) -> Self {
        let color = params
            .color
            .unwrap_or_else(|| PALETTE[rng.random_range(0..PALETTE.len())]);

        let vx = rng.random_range(-cfg.launch_drift..=cfg.launch_drift);
        let vy = -rng.random_range(cfg.launch_min_speed..=cfg.launch_max_speed);
        let explode_y =
            rng.random_range((cfg.explode_band_min * cfg.height)..(cfg.explode_band_max * cfg.height));

        Self {
            pos: Vec2::new(params.x, cfg.height + 10.0),
            vel: Vec2::new(vx, vy),
            explode_y,
            color,
            shape: params.shape,
            trail: VecDeque::with_capacity(cfg.trail_len + 1),
            count: params.count,
            speed: params.speed,
        }
    }

    /// Un pas de cinématique : gravité, drag exponentiel, Euler explicite.
    pub fn integrate(&mut self, dt: f32, drag: f32, gravity: f32) {
        self.vel.y += gravity * dt;
        self.vel *= drag;
        self.pos += self.vel * dt;
    }

    /// Ajoute la position courante à la traînée, en évinçant la plus
    /// ancienne une fois la capacité dépassée.
    pub fn push_trail(&mut self, cap: usize) {
        self.trail.push_back(self.pos);
        while self.trail.len() > cap {
            self.trail.pop_front();
        }
    }

    /// La fusée détone dès que son altitude atteint (ou dépasse) `explode_y`.
    pub fn should_detonate(&self) -> bool {
        self.pos.y <= self.explode_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_launch_params_builder_defaults() {
        let params = LaunchParamsBuilder::default().x(100.0).build().unwrap();
        assert_eq!(params.shape, BurstShape::Circle);
        assert!(params.color.is_none());
        assert_eq!(params.count, 140);
        assert_eq!(params.speed, 210.0);
    }

    #[test]
    fn test_launch_params_builder_requires_x() {
        assert!(LaunchParamsBuilder::default().build().is_err());
    }

    #[test]
    fn test_launch_initial_conditions() {
        let cfg = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let params = LaunchParamsBuilder::default().x(450.0).build().unwrap();

        for _ in 0..50 {
            let r = Rocket::launch(&params, &cfg, &mut rng);
            assert_eq!(r.pos.x, 450.0);
            assert_eq!(r.pos.y, cfg.height + 10.0);
            assert!(r.vel.x.abs() <= cfg.launch_drift);
            assert!(r.vel.y <= -cfg.launch_min_speed && r.vel.y >= -cfg.launch_max_speed);
            assert!(r.explode_y >= cfg.explode_band_min * cfg.height);
            assert!(r.explode_y < cfg.explode_band_max * cfg.height);
            assert!(r.trail.is_empty());
        }
    }

    #[test]
    fn test_launch_color_override_and_random_fallback() {
        let cfg = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        let params = LaunchParamsBuilder::default()
            .x(0.0)
            .color(Some(PALETTE[0]))
            .build()
            .unwrap();
        let r = Rocket::launch(&params, &cfg, &mut rng);
        assert_eq!(r.color, PALETTE[0]);

        let params = LaunchParamsBuilder::default().x(0.0).build().unwrap();
        let r = Rocket::launch(&params, &cfg, &mut rng);
        assert!(PALETTE.contains(&r.color), "random color must come from palette");
    }
}
