//! Projection de l'état du moteur en primitives de dessin.

use itertools::Itertools;

use crate::physic_engine::PhysicEngine;
use crate::renderer_engine::Canvas;

/// Largeur des segments de traînée (pixels)
const TRAIL_WIDTH: f32 = 2.0;
/// Rayon de la tête de fusée
const HEAD_RADIUS: f32 = 3.0;

/// Dessine une frame complète : traînées, têtes de fusées, particules,
/// flashs de détonation. Retourne le nombre de primitives émises (hors
/// clear), métrique remontée au profiler.
pub fn render_frame<P, C>(engine: &P, canvas: &mut C) -> usize
where
    P: PhysicEngine + ?Sized,
    C: Canvas + ?Sized,
{
    canvas.clear();
    let mut drawn = 0;

    for rocket in engine.iter_rockets() {
        // traînée : segments entre positions consécutives
        for (p1, p2) in rocket.trail.iter().tuple_windows() {
            canvas.draw_line(*p1, *p2, rocket.color, TRAIL_WIDTH);
            drawn += 1;
        }
        // tête
        canvas.draw_circle(rocket.pos, HEAD_RADIUS, rocket.color, true);
        drawn += 1;
    }

    for particle in engine.iter_particles() {
        canvas.draw_circle(particle.pos, particle.radius, particle.color, true);
        drawn += 1;
    }

    for flash in engine.iter_flashes() {
        canvas.draw_circle(flash.pos, flash.radius, flash.color, true);
        drawn += 1;
    }

    drawn
}
