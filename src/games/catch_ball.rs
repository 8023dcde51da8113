//! "Fang den Ball" : un joueur glisse au bas de l'écran et rattrape une
//! balle qui tombe. Rater la balle remet le score et la vitesse à zéro.
//!
//! Le jeu avance par frames fixes à 60 Hz nominal : `tick` représente
//! une frame, les vitesses sont en pixels par frame.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

pub const WIDTH: f32 = 600.0;
pub const HEIGHT: f32 = 400.0;

const PLAYER_SIZE: f32 = 50.0;
const PLAYER_Y: f32 = HEIGHT - 70.0;
/// Pixels par frame
const PLAYER_SPEED: f32 = 7.0;

pub const BALL_RADIUS: f32 = 15.0;
const BALL_SPEED_START: f32 = 5.0;
/// Accélération à chaque balle attrapée (la difficulté monte)
const BALL_SPEED_STEP: f32 = 0.2;

/// Entrées clavier d'une frame
#[derive(Debug, Clone, Copy, Default)]
pub struct CatchInput {
    pub left: bool,
    pub right: bool,
}

/// Résultat d'une frame, utile au collaborateur (sons, effets...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    None,
    Caught,
    Missed,
}

#[derive(Debug)]
pub struct CatchBall {
    /// Bord gauche du carré joueur
    player_x: f32,
    ball: Vec2,
    ball_speed: f32,
    score: u32,
    rng: StdRng,
}

impl CatchBall {
    pub fn new(mut rng: StdRng) -> Self {
        let ball_x = rng.random_range(BALL_RADIUS..(WIDTH - BALL_RADIUS));
        Self {
            player_x: WIDTH / 2.0,
            ball: Vec2::new(ball_x, 0.0),
            ball_speed: BALL_SPEED_START,
            score: 0,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ball_pos(&self) -> Vec2 {
        self.ball
    }

    pub fn ball_speed(&self) -> f32 {
        self.ball_speed
    }

    pub fn player_x(&self) -> f32 {
        self.player_x
    }

    fn respawn_ball(&mut self) {
        self.ball.y = 0.0;
        self.ball.x = self.rng.random_range(BALL_RADIUS..(WIDTH - BALL_RADIUS));
    }

    /// Le centre de la balle est-il dans le carré joueur ?
    fn player_catches(&self) -> bool {
        self.ball.x >= self.player_x
            && self.ball.x <= self.player_x + PLAYER_SIZE
            && self.ball.y >= PLAYER_Y
            && self.ball.y <= PLAYER_Y + PLAYER_SIZE
    }

    /// Une frame de jeu (60 Hz nominal).
    pub fn tick(&mut self, input: CatchInput) -> TickOutcome {
        // Déplacement du joueur (pixels par frame, comme la balle)
        if input.left && self.player_x > 0.0 {
            self.player_x -= PLAYER_SPEED;
        }
        if input.right && self.player_x < WIDTH - PLAYER_SIZE {
            self.player_x += PLAYER_SPEED;
        }

        // Chute de la balle
        self.ball.y += self.ball_speed;

        if self.player_catches() {
            self.score += 1;
            self.ball_speed += BALL_SPEED_STEP;
            self.respawn_ball();
            return TickOutcome::Caught;
        }

        // Balle perdue ?
        if self.ball.y > HEIGHT {
            self.score = 0;
            self.ball_speed = BALL_SPEED_START;
            self.respawn_ball();
            return TickOutcome::Missed;
        }

        TickOutcome::None
    }

    #[cfg(any(test, feature = "test_helpers"))]
    pub fn place_ball(&mut self, pos: Vec2) {
        self.ball = pos;
    }
}
