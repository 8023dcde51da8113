//! Les deux petits jeux d'arcade du dépôt, réimplémentés comme machines à
//! états pures : aucune dépendance de rendu, le dessin reste le travail du
//! collaborateur extérieur (même découpage que le cœur fireworks).

pub mod catch_ball;
pub mod santa_dash;

pub use catch_ball::CatchBall;
pub use santa_dash::SantaDash;
