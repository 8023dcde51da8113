use fireworks_show::physic_engine::config::SimConfig;
use fireworks_show::physic_engine::fireworks::{FireworksEngine, PhysicEngineTestHelpers};
use fireworks_show::physic_engine::rocket::Rocket;
use fireworks_show::physic_engine::shape_emitter::BurstShape;
use fireworks_show::physic_engine::{PhysicEngine, PALETTE};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;

const DT: f32 = 1.0 / 60.0;

fn rocket_at(pos: Vec2, vel: Vec2, explode_y: f32, count: usize) -> Rocket {
    Rocket {
        pos,
        vel,
        explode_y,
        color: PALETTE[0],
        shape: BurstShape::Circle,
        trail: VecDeque::new(),
        count,
        speed: 210.0,
    }
}

fn engine() -> FireworksEngine {
    FireworksEngine::with_rng(&SimConfig::default(), StdRng::seed_from_u64(42))
}

// ==================================
// 1. Traînée bornée
// ==================================

#[test]
fn test_trail_never_exceeds_cap() {
    let cfg = SimConfig::default();
    let mut engine = engine();
    // explode_y négatif : la fusée ne détone jamais pendant le test
    engine.inject_rocket(rocket_at(
        Vec2::new(450.0, 610.0),
        Vec2::new(0.0, -100.0),
        -10_000.0,
        0,
    ));

    for step in 0..200 {
        engine.update(DT);
        let rocket = engine.iter_rockets().next().expect("rocket must survive");
        assert!(
            rocket.trail.len() <= cfg.trail_len,
            "trail length {} exceeds cap {} at step {}",
            rocket.trail.len(),
            cfg.trail_len,
            step
        );
    }

    // Après assez de pas, la traînée est pleine et la plus récente en dernier
    let rocket = engine.iter_rockets().next().unwrap();
    assert_eq!(rocket.trail.len(), cfg.trail_len);
    assert_eq!(*rocket.trail.back().unwrap(), rocket.pos);
}

// ==================================
// 2. Scénario de détonation (explode_y=150, y0=610)
// ==================================

#[test]
fn test_rocket_detonates_at_altitude_never_before() {
    let mut engine = engine();
    // Vitesse ascensionnelle suffisante pour vaincre gravité + drag
    engine.inject_rocket(rocket_at(
        Vec2::new(450.0, 610.0),
        Vec2::new(0.0, -1000.0),
        150.0,
        32,
    ));

    let mut detonated = false;
    for _ in 0..600 {
        let result = engine.update(DT);
        if !result.detonations.is_empty() {
            // La détonation a lieu au franchissement de l'altitude cible
            assert!(result.detonations[0].pos.y <= 150.0);
            detonated = true;
            break;
        }
        // Tant que la fusée vit, elle est strictement au-dessous de
        // l'altitude de détonation (y > explode_y, repère y vers le bas)
        if let Some(rocket) = engine.iter_rockets().next() {
            assert!(
                rocket.pos.y > 150.0,
                "rocket at y={} should already have detonated",
                rocket.pos.y
            );
        }
    }

    assert!(detonated, "rocket never reached its detonation altitude");
    assert_eq!(engine.rockets_count(), 0, "detonated rocket must be retired");
    assert_eq!(
        engine.particles_count(),
        32,
        "one burst with exactly `count` particles"
    );
}

// ==================================
// 3. Une fusée, une seule détonation
// ==================================

#[test]
fn test_rocket_generates_exactly_one_burst() {
    let mut engine = engine();
    engine.inject_rocket(rocket_at(
        Vec2::new(450.0, 610.0),
        Vec2::new(0.0, -1000.0),
        400.0,
        16,
    ));

    let mut bursts = 0;
    for _ in 0..600 {
        bursts += engine.update(DT).detonations.len();
    }
    assert_eq!(bursts, 1);
}

// ==================================
// 4. Paramètres figés à la création
// ==================================

#[test]
fn test_count_and_speed_are_fixed_at_creation() {
    let mut engine = engine();
    engine.inject_rocket(rocket_at(
        Vec2::new(450.0, 610.0),
        Vec2::new(0.0, -100.0),
        -10_000.0,
        77,
    ));

    for _ in 0..100 {
        engine.update(DT);
        let rocket = engine.iter_rockets().next().unwrap();
        assert_eq!(rocket.count, 77);
        assert_eq!(rocket.speed, 210.0);
    }
}
