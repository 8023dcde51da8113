use glam::{Vec2, Vec4};

pub type Color = Vec4;

/// Palette des tirs (couleurs hex converties en RGBA normalisé).
pub const PALETTE: [Color; 6] = [
    Color::new(1.0, 0.302, 0.302, 1.0), // #ff4d4d
    Color::new(1.0, 0.824, 0.302, 1.0), // #ffd24d
    Color::new(0.486, 1.0, 0.302, 1.0), // #7cff4d
    Color::new(0.302, 0.824, 1.0, 1.0), // #4dd2ff
    Color::new(0.722, 0.302, 1.0, 1.0), // #b84dff
    Color::new(1.0, 1.0, 1.0, 1.0),     // #ffffff
];

pub const WHITE: Color = Color::ONE;

/// Marqueur visuel transitoire émis au moment d'une détonation.
///
/// Dessiné une seule frame, puis jeté au prochain `update` du moteur.
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

// ------------------------
// UpdateResult
// ------------------------
pub struct UpdateResult<'a> {
    /// Flashs des détonations déclenchées pendant ce pas de simulation.
    pub detonations: &'a [Flash],
}
