//! "Santa Dash" : attraper les cadeaux, éviter le charbon, le cacao donne
//! un bouclier temporaire qui convertit le charbon en points.
//!
//! Le temps est un temps de simulation avancé par `update(dt, input)`,
//! sans horloge murale ambiante.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

pub const WIDTH: f32 = 900.0;
pub const HEIGHT: f32 = 600.0;

const SANTA_SPEED: f32 = 420.0;
const SANTA_RADIUS: f32 = 24.0;
const SANTA_Y: f32 = HEIGHT - 70.0;

const FALL_SPEED_BASE: f32 = 170.0;
const SPAWN_GIFT_BASE: f32 = 0.55; // secondes
const SPAWN_COAL_BASE: f32 = 0.75;
const SPAWN_COCOA_BASE: f32 = 6.0;

const SHIELD_DURATION: f32 = 5.0;
const START_LIVES: u32 = 3;
const MAX_DIFFICULTY: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Gift,
    Coal,
    Cocoa,
}

#[derive(Debug, Clone, Copy)]
pub struct FallingItem {
    pub kind: ItemKind,
    pub pos: Vec2,
    pub vy: f32,
    /// Demi-côté du carré de collision
    pub size: f32,
}

/// Entrées clavier d'un tick
#[derive(Debug, Clone, Copy, Default)]
pub struct SantaInput {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug)]
pub struct SantaDash {
    santa_x: f32,
    shield_until: f32,
    items: Vec<FallingItem>,

    score: u32,
    lives: u32,
    game_over: bool,

    /// Temps de simulation écoulé (secondes)
    elapsed: f32,
    last_gift: f32,
    last_coal: f32,
    last_cocoa: f32,

    rng: StdRng,
}

impl SantaDash {
    pub fn new(rng: StdRng) -> Self {
        Self {
            santa_x: WIDTH / 2.0,
            shield_until: 0.0,
            items: Vec::new(),
            score: 0,
            lives: START_LIVES,
            game_over: false,
            elapsed: 0.0,
            last_gift: 0.0,
            last_coal: 0.0,
            last_cocoa: 0.0,
            rng,
        }
    }

    /// La difficulté monte avec le score, plafonnée.
    pub fn difficulty(&self) -> f32 {
        (self.score as f32 / 15.0).min(MAX_DIFFICULTY)
    }

    pub fn has_shield(&self) -> bool {
        self.elapsed < self.shield_until
    }

    pub fn shield_left(&self) -> f32 {
        (self.shield_until - self.elapsed).max(0.0)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn santa_pos(&self) -> Vec2 {
        Vec2::new(self.santa_x, SANTA_Y)
    }

    pub fn items(&self) -> &[FallingItem] {
        &self.items
    }

    /// Remet la partie à l'état initial (la graine du rng est conservée).
    pub fn reset(&mut self) {
        self.santa_x = WIDTH / 2.0;
        self.shield_until = 0.0;
        self.items.clear();
        self.score = 0;
        self.lives = START_LIVES;
        self.game_over = false;
        self.elapsed = 0.0;
        self.last_gift = self.elapsed;
        self.last_coal = self.elapsed;
        self.last_cocoa = self.elapsed;
    }

    fn spawn(&mut self, kind: ItemKind) {
        let difficulty = self.difficulty();
        let x = self.rng.random_range(40.0..(WIDTH - 40.0));
        let speed = FALL_SPEED_BASE
            * (1.0 + 0.18 * difficulty)
            * self.rng.random_range(0.9..1.2);
        let size = if kind == ItemKind::Cocoa { 14.0 } else { 16.0 };
        self.items.push(FallingItem {
            kind,
            pos: Vec2::new(x, -30.0),
            vy: speed,
            size,
        });
    }

    /// Un pas de simulation. Aucun effet une fois la partie perdue
    /// (jusqu'à `reset`).
    pub fn update(&mut self, dt: f32, input: SantaInput) {
        if self.game_over {
            return;
        }

        self.elapsed += dt;

        // Déplacement horizontal, clampé au terrain
        if input.left {
            self.santa_x -= SANTA_SPEED * dt;
        }
        if input.right {
            self.santa_x += SANTA_SPEED * dt;
        }
        self.santa_x = self.santa_x.clamp(SANTA_RADIUS, WIDTH - SANTA_RADIUS);

        // Spawns : un peu plus rapides avec la difficulté
        let difficulty = self.difficulty();
        let gift_cd = (SPAWN_GIFT_BASE - 0.03 * difficulty).max(0.18);
        let coal_cd = (SPAWN_COAL_BASE - 0.02 * difficulty).max(0.22);

        if self.elapsed - self.last_gift > gift_cd {
            self.spawn(ItemKind::Gift);
            self.last_gift = self.elapsed;
        }
        if self.elapsed - self.last_coal > coal_cd {
            self.spawn(ItemKind::Coal);
            self.last_coal = self.elapsed;
        }
        if self.elapsed - self.last_cocoa > SPAWN_COCOA_BASE {
            self.spawn(ItemKind::Cocoa);
            self.last_cocoa = self.elapsed;
        }

        // Chute
        for item in &mut self.items {
            item.pos.y += item.vy * dt;
        }

        // Collisions + retrait (collections reconstruites, pas de retrait en place)
        let santa = Vec2::new(self.santa_x, SANTA_Y);
        let mut kept = Vec::with_capacity(self.items.len());
        for item in std::mem::take(&mut self.items) {
            if item.pos.y > HEIGHT + 40.0 {
                continue;
            }

            if aabb_overlap(santa, SANTA_RADIUS, item.pos, item.size) {
                match item.kind {
                    ItemKind::Gift => self.score += 1,
                    ItemKind::Coal => {
                        if self.has_shield() {
                            // Le bouclier "convertit" le charbon en point
                            self.score += 1;
                        } else {
                            self.lives = self.lives.saturating_sub(1);
                            if self.lives == 0 {
                                self.game_over = true;
                            }
                        }
                    }
                    ItemKind::Cocoa => {
                        self.shield_until = self.elapsed + SHIELD_DURATION;
                    }
                }
                continue;
            }

            kept.push(item);
        }
        self.items = kept;
    }

    #[cfg(any(test, feature = "test_helpers"))]
    pub fn inject_item(&mut self, kind: ItemKind, pos: Vec2, vy: f32) {
        let size = if kind == ItemKind::Cocoa { 14.0 } else { 16.0 };
        self.items.push(FallingItem {
            kind,
            pos,
            vy,
            size,
        });
    }
}

/// Recouvrement de deux carrés alignés sur les axes (demi-côtés `ra`, `rb`).
fn aabb_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    (a.x - b.x).abs() < ra + rb && (a.y - b.y).abs() < ra + rb
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn game() -> SantaDash {
        SantaDash::new(StdRng::seed_from_u64(42))
    }

    fn on_santa(g: &SantaDash) -> Vec2 {
        g.santa_pos()
    }

    #[test]
    fn test_gift_scores() {
        let mut g = game();
        g.inject_item(ItemKind::Gift, on_santa(&g), 0.0);
        g.update(0.001, SantaInput::default());
        assert_eq!(g.score(), 1);
        assert!(g.items().iter().all(|i| i.kind != ItemKind::Gift));
    }

    #[test]
    fn test_coal_costs_a_life() {
        let mut g = game();
        g.inject_item(ItemKind::Coal, on_santa(&g), 0.0);
        g.update(0.001, SantaInput::default());
        assert_eq!(g.lives(), START_LIVES - 1);
        assert!(!g.is_game_over());
    }

    #[test]
    fn test_shield_converts_coal_to_score() {
        let mut g = game();
        g.inject_item(ItemKind::Cocoa, on_santa(&g), 0.0);
        g.update(0.001, SantaInput::default());
        assert!(g.has_shield());
        assert!((g.shield_left() - SHIELD_DURATION).abs() < 0.01);

        g.inject_item(ItemKind::Coal, on_santa(&g), 0.0);
        g.update(0.001, SantaInput::default());
        assert_eq!(g.lives(), START_LIVES);
        assert_eq!(g.score(), 1);
    }

    #[test]
    fn test_shield_expires() {
        let mut g = game();
        g.inject_item(ItemKind::Cocoa, on_santa(&g), 0.0);
        g.update(0.001, SantaInput::default());
        assert!(g.has_shield());

        // On avance au-delà de la durée du bouclier, par pas réalistes
        for _ in 0..((SHIELD_DURATION * 60.0) as usize + 10) {
            g.update(1.0 / 60.0, SantaInput::default());
        }
        assert!(!g.has_shield());
    }

    #[test]
    fn test_three_coals_end_the_game() {
        let mut g = game();
        for _ in 0..3 {
            g.inject_item(ItemKind::Coal, on_santa(&g), 0.0);
            g.update(0.001, SantaInput::default());
        }
        assert_eq!(g.lives(), 0);
        assert!(g.is_game_over());

        // La partie perdue est figée jusqu'au reset
        let score = g.score();
        g.update(1.0, SantaInput { left: true, right: false });
        assert_eq!(g.score(), score);

        g.reset();
        assert!(!g.is_game_over());
        assert_eq!(g.lives(), START_LIVES);
        assert_eq!(g.score(), 0);
        assert!(g.items().is_empty());
    }

    #[test]
    fn test_items_dropped_below_field() {
        let mut g = game();
        g.inject_item(ItemKind::Gift, Vec2::new(10.0, HEIGHT + 50.0), 0.0);
        g.update(0.001, SantaInput::default());
        assert!(g.items().is_empty());
        assert_eq!(g.score(), 0, "an item past the bottom must not score");
    }

    #[test]
    fn test_movement_is_clamped() {
        // Phases courtes : aucun objet apparu n'a le temps d'atteindre la
        // hauteur du traîneau, la trajectoire ne dépend que des entrées
        let mut g = game();
        for _ in 0..120 {
            g.update(
                1.0 / 60.0,
                SantaInput {
                    left: true,
                    right: false,
                },
            );
        }
        assert_eq!(g.santa_pos().x, SANTA_RADIUS);

        g.reset();
        for _ in 0..150 {
            g.update(
                1.0 / 60.0,
                SantaInput {
                    left: false,
                    right: true,
                },
            );
        }
        assert_eq!(g.santa_pos().x, WIDTH - SANTA_RADIUS);
    }

    #[test]
    fn test_difficulty_is_capped() {
        let mut g = game();
        // Score artificiellement haut via des cadeaux injectés
        for _ in 0..300 {
            g.inject_item(ItemKind::Gift, on_santa(&g), 0.0);
            g.update(0.0001, SantaInput::default());
        }
        assert!(g.score() >= 200);
        assert_eq!(g.difficulty(), MAX_DIFFICULTY);
    }

    #[test]
    fn test_spawns_accumulate_over_time() {
        let mut g = game();
        for _ in 0..180 {
            // 3 secondes simulées : les cadences de base garantissent des
            // cadeaux et du charbon, encore trop haut pour toute collision
            g.update(1.0 / 60.0, SantaInput::default());
        }
        assert!(g.items().iter().any(|i| i.kind == ItemKind::Gift));
        assert!(g.items().iter().any(|i| i.kind == ItemKind::Coal));
    }
}
