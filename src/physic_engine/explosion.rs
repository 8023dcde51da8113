//! Conversion d'une fusée détonante en gerbe de particules.

use rand::Rng;

use crate::physic_engine::particle::Particle;
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::shape_emitter;
use crate::physic_engine::types::{Flash, WHITE};

/// Rayon du flash blanc dessiné au point de détonation.
const FLASH_RADIUS: f32 = 8.0;

/// Fraction de la vitesse de la fusée héritée par chaque particule.
const MOMENTUM_INHERITANCE: f32 = 0.20;

/// Produit les particules de l'explosion et le flash associé.
///
/// Pour chaque direction unitaire émise par la forme de la fusée :
/// - vitesse = direction * (jitter dans [0.75, 1.15] * speed) + 0.20 * vel fusée
/// - durée de vie dans [1.0, 1.8] s, rayon dans [1.5, 2.6]
/// - couleur : celle de la fusée
pub fn explode(rocket: &Rocket, rng: &mut impl Rng) -> (Vec<Particle>, Flash) {
    let dirs = shape_emitter::emit(rocket.shape, rocket.count, rng);

    let particles = dirs
        .into_iter()
        .map(|dir| {
            let s = rng.random_range(0.75..1.15) * rocket.speed;
            Particle {
                pos: rocket.pos,
                vel: dir * s + MOMENTUM_INHERITANCE * rocket.vel,
                life: rng.random_range(1.0..1.8),
                color: rocket.color,
                radius: rng.random_range(1.5..2.6),
            }
        })
        .collect();

    let flash = Flash {
        pos: rocket.pos,
        radius: FLASH_RADIUS,
        color: WHITE,
    };

    (particles, flash)
}
