//! Noyau de raisonnement sur les angles
//!
//! Fonctions pures, déterministes, totales : aucun tirage aléatoire ici
//! (le hasard vit dans `crate::quiz`), aucun état partagé.
//!
//! Organisation interne :
//! - angle.rs     : normalisation [0, 2π), égalité approchée, quadrants,
//!                  étiquettes en fraction de π
//! - valeurs.rs   : valeurs exactes de sin/cos (table + règle des signes),
//!                  classes de signes par quadrant
//! - identites.rs : angles associés π−x, π+x, π/2−x, π/2+x (table unique)
//! - equations.rs : résolution par balayage des 16 angles canoniques

pub mod angle;
pub mod equations;
pub mod identites;
pub mod valeurs;

#[cfg(test)]
mod tests_proprietes;

pub use angle::{approx_egal, etiquette_fraction_pi, normaliser, ANGLES_CANONIQUES};
pub use identites::{appliquer, FormeAssociee};
pub use valeurs::{classe_de_signes, valeur_exacte, FonctionTrig};
