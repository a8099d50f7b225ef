//! Couche quiz : tirage aléatoire AU-DESSUS du noyau
//!
//! Contrat de séparation : le noyau reste pur et déterministe ; tout ce qui
//! touche à `rand` vit ici. Les vues consomment des `Question` fermées
//! (énoncé, options, index de la bonne réponse) sans jamais recalculer.
//!
//! - flashcards.rs  : le paquet fixe de cartes (recto/verso)
//! - generation.rs  : construction des questions (visuel, équations)

pub mod flashcards;
pub mod generation;

pub use flashcards::CARTES;
pub use generation::{angle_canonique, question_equation, question_visuelle, Question};
