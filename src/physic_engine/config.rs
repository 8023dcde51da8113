use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Dimensions du monde (pixels, repère y vers le bas)
    pub width: f32,
    pub height: f32,

    /// Fréquence nominale utilisée pour rendre le drag indépendant du dt réel
    pub nominal_fps: f32,

    pub gravity: f32,
    /// Facteur de décélération par frame nominale, exponentié par `dt * nominal_fps`
    pub air_drag: f32,

    /// Longueur maximale de la traînée d'une fusée
    pub trail_len: usize,

    /// Marges hors-écran avant retrait des particules
    pub offscreen_margin: f32,
    pub offscreen_margin_bottom: f32,

    /// Conditions initiales d'un tir
    pub launch_drift: f32,
    pub launch_min_speed: f32,
    pub launch_max_speed: f32,

    /// Altitude de détonation, tirée dans [band_min, band_max] * height
    pub explode_band_min: f32,
    pub explode_band_max: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            nominal_fps: 60.0,
            gravity: 280.0,  // px/s^2
            air_drag: 0.985, // par frame nominale
            trail_len: 18,
            offscreen_margin: 50.0,
            offscreen_margin_bottom: 80.0,
            launch_drift: 20.0,
            launch_min_speed: 360.0,
            launch_max_speed: 520.0,
            explode_band_min: 0.18,
            explode_band_max: 0.45,
        }
    }
}

impl SimConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Facteur de drag effectif pour un pas `dt` donné.
    pub fn drag_factor(&self, dt: f32) -> f32 {
        self.air_drag.powf(dt * self.nominal_fps)
    }
}
