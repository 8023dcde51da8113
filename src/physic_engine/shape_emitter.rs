//! Génération des directions d'émission d'une explosion.
//!
//! Chaque forme produit `n` vecteurs unitaires (à epsilon près) :
//! - `Circle`  : angles régulièrement espacés sur un tour complet
//! - `Star`    : comme `Circle`, mais les indices pairs sont "snappés" sur
//!   les directions des pointes (l'asymétrie pair/impair est voulue, elle
//!   donne la texture visuelle de l'étoile)
//! - `Heart`   : courbe paramétrique du cœur, y inversé pour pointer vers
//!   le haut dans un repère écran (y vers le bas)
//! - `Spiral`  : l'angle balaie 3 tours pendant qu'un rayon synthétique
//!   croît linéairement de 0.2 à 1.0
//! - `Scatter` : angles uniformément aléatoires (repli pour les noms de
//!   forme inconnus ; seule voie utilisant le rng)

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Epsilon ajouté à la norme pour éviter la division par zéro
/// (le point d'origine de la courbe du cœur notamment).
const NORM_EPS: f32 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BurstShape {
    #[default]
    Circle,
    Star,
    Heart,
    Spiral,
    /// Repli : directions aléatoires uniformes
    Scatter,
}

impl BurstShape {
    /// Les formes proposées par l'UI (le repli `Scatter` n'en fait pas partie).
    pub const ALL: [BurstShape; 4] = [
        BurstShape::Circle,
        BurstShape::Star,
        BurstShape::Heart,
        BurstShape::Spiral,
    ];

    /// Un identifiant inconnu dégrade en `Scatter` plutôt que d'échouer.
    pub fn parse(name: &str) -> Self {
        match name {
            "circle" => BurstShape::Circle,
            "star" => BurstShape::Star,
            "heart" => BurstShape::Heart,
            "spiral" => BurstShape::Spiral,
            _ => BurstShape::Scatter,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BurstShape::Circle => "circle",
            BurstShape::Star => "star",
            BurstShape::Heart => "heart",
            BurstShape::Spiral => "spiral",
            BurstShape::Scatter => "scatter",
        }
    }
}

/// Retourne exactement `n` directions unitaires pour la forme demandée.
///
/// Fonction pure (le rng n'est consommé que par la voie `Scatter`).
pub fn emit(shape: BurstShape, n: usize, rng: &mut impl Rng) -> Vec<Vec2> {
    let mut vecs = Vec::with_capacity(n);

    match shape {
        BurstShape::Circle => {
            for i in 0..n {
                let a = TAU * i as f32 / n as f32;
                vecs.push(Vec2::from_angle(a));
            }
        }
        BurstShape::Star => {
            let spikes = std::cmp::max(5, n / 10) as f32;
            for i in 0..n {
                let mut a = TAU * i as f32 / n as f32;
                if i % 2 == 0 {
                    // Snap sur la direction de pointe la plus proche
                    a = TAU * ((a / (TAU / spikes)).round() / spikes);
                }
                vecs.push(Vec2::from_angle(a));
            }
        }
        BurstShape::Heart => {
            // x = 16 sin^3 t ; y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t
            for i in 0..n {
                let t = TAU * i as f32 / n as f32;
                let x = 16.0 * t.sin().powi(3);
                let y = 13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos();
                let v = Vec2::new(x, -y); // y inversé : la pointe vers le haut à l'écran
                vecs.push(v / (v.length() + NORM_EPS));
            }
        }
        BurstShape::Spiral => {
            let denom = std::cmp::max(n.saturating_sub(1), 1) as f32;
            for i in 0..n {
                let t = 3.0 * TAU * i as f32 / n as f32;
                let r = 0.2 + 0.8 * (i as f32 / denom);
                let v = Vec2::new(r * t.cos(), r * t.sin());
                vecs.push(v / (v.length() + NORM_EPS));
            }
        }
        BurstShape::Scatter => {
            for _ in 0..n {
                let a = rng.random_range(0.0..TAU);
                vecs.push(Vec2::from_angle(a));
            }
        }
    }

    vecs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_known_and_unknown_names() {
        assert_eq!(BurstShape::parse("circle"), BurstShape::Circle);
        assert_eq!(BurstShape::parse("star"), BurstShape::Star);
        assert_eq!(BurstShape::parse("heart"), BurstShape::Heart);
        assert_eq!(BurstShape::parse("spiral"), BurstShape::Spiral);
        // Identifiant inconnu => repli aléatoire, pas d'erreur
        assert_eq!(BurstShape::parse("comet"), BurstShape::Scatter);
        assert_eq!(BurstShape::parse(""), BurstShape::Scatter);
    }

    #[test]
    fn test_emit_zero_particles_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        for shape in BurstShape::ALL {
            assert!(emit(shape, 0, &mut rng).is_empty());
        }
        assert!(emit(BurstShape::Scatter, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_spiral_single_particle_does_not_divide_by_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let vecs = emit(BurstShape::Spiral, 1, &mut rng);
        assert_eq!(vecs.len(), 1);
        assert!(vecs[0].is_finite());
        assert!((vecs[0].length() - 1.0).abs() < 1e-3);
    }
}
