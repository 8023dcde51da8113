use crate::physic_engine::config::SimConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::rocket::{LaunchParams, Rocket};
use crate::physic_engine::types::{Flash, UpdateResult};

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune des moteurs de simulation. Les itérateurs sont
/// retournés en `Box<dyn Iterator>` : signatures simples et stables, au
/// prix d'une allocation négligeable par rapport au coût d'un pas de
/// simulation.
pub trait PhysicEngine {
    /// Ajuste les dimensions du monde (si le canvas de rendu change de taille).
    fn set_window_size(&mut self, width: f32, height: f32);

    /// Crée une fusée sur le pas de tir. Appelé par le séquenceur et par
    /// l'input utilisateur (clic).
    fn launch(&mut self, params: &LaunchParams);

    /// Avance la simulation de `dt` secondes (clampé à [0, 1/20] pour
    /// borner l'effet d'un pic de frame-time).
    fn update(&mut self, dt: f32) -> UpdateResult<'_>;

    /// Retire toutes les fusées et particules vivantes.
    fn clear(&mut self);

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.

    fn reload_config(&mut self, config: &SimConfig);

    fn get_config(&self) -> &SimConfig;

    /// Fusées en vol (l'état consommé par le collaborateur de rendu).
    fn iter_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a>;

    /// Particules vivantes.
    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a>;

    /// Flashs de détonation du dernier pas (transitoires, une frame).
    fn iter_flashes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Flash> + 'a>;
}
