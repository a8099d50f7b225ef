//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de l'application (onglet, progression, état de
//! chaque mode) et offrir les opérations de mutation nommées — jamais d'état
//! ambiant, jamais de logique d'affichage ici.
//!
//! Contrats :
//! - La progression n'est mutée QUE par `noter_reponse` (un écrivain logique).
//! - Après chaque mutation, `progression_modifiee` déclenche une écriture
//!   en bloc dans le stockage (voir app.rs).
//! - Le tirage aléatoire reste confiné à `crate::quiz`.

use std::f64::consts::FRAC_PI_6;

use rand::thread_rng;

use crate::noyau::identites::FormeAssociee;
use crate::noyau::valeurs::FonctionTrig;
use crate::progression::{Mode, Progression};
use crate::quiz::{angle_canonique, question_equation, question_visuelle, Question, CARTES};

/// Onglets de l'application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Onglet {
    Flashcards,
    Visuel,
    Etapes,
    Equations,
    Progression,
}

impl Onglet {
    pub const TOUS: [Onglet; 5] = [
        Self::Flashcards,
        Self::Visuel,
        Self::Etapes,
        Self::Equations,
        Self::Progression,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Self::Flashcards => "Flashcards",
            Self::Visuel => "Cercle (visuel)",
            Self::Etapes => "Étapes guidées",
            Self::Equations => "Équations",
            Self::Progression => "Progression",
        }
    }
}

/// État du mode flashcards : carte courante + face visible.
#[derive(Clone, Debug)]
pub struct EtatFlashcards {
    pub index: usize,
    pub retournee: bool,
}

/// État du mode visuel : angle déplaçable + question courante.
#[derive(Clone, Debug)]
pub struct EtatVisuel {
    pub angle: f64,
    pub question: Question,
}

/// État du mode étapes : formule choisie + x du curseur.
#[derive(Clone, Debug)]
pub struct EtatEtapes {
    pub fonction: FonctionTrig,
    pub forme: FormeAssociee,
    pub x: f64,
}

/// État du mode équations : question courante.
#[derive(Clone, Debug)]
pub struct EtatEquations {
    pub question: Question,
}

#[derive(Clone, Debug)]
pub struct AppTrigo {
    pub onglet: Onglet,

    // --- progression (seule donnée persistée) ---
    pub progression: Progression,
    pub progression_modifiee: bool,

    // --- état par mode ---
    pub flashcards: EtatFlashcards,
    pub visuel: EtatVisuel,
    pub etapes: EtatEtapes,
    pub equations: EtatEquations,
}

impl AppTrigo {
    /// Construction au démarrage : progression relue du stockage
    /// (vierge si absente/corrompue), premières questions tirées.
    pub fn nouveau(cc: &eframe::CreationContext<'_>) -> Self {
        let mut rng = thread_rng();
        Self {
            onglet: Onglet::Flashcards,
            progression: Progression::charger(cc.storage),
            progression_modifiee: false,
            flashcards: EtatFlashcards {
                index: 0,
                retournee: false,
            },
            visuel: EtatVisuel {
                angle: angle_canonique(&mut rng),
                question: question_visuelle(&mut rng),
            },
            etapes: EtatEtapes {
                fonction: FonctionTrig::Sin,
                forme: FormeAssociee::PiMoinsX,
                x: FRAC_PI_6,
            },
            equations: EtatEquations {
                question: question_equation(&mut rng),
            },
        }
    }

    /* ------------------------ Mutations nommées ------------------------ */

    /// Point d'entrée unique de la notation : compteurs + historique +
    /// marquage « à sauvegarder ».
    pub fn noter_reponse(&mut self, mode: Mode, correcte: bool) {
        self.progression.noter(mode, correcte);
        self.progression_modifiee = true;
    }

    /// Flashcards : note la carte (Facile = correcte), passe à la suivante.
    pub fn carte_suivante(&mut self, correcte: bool) {
        self.noter_reponse(Mode::Flashcards, correcte);
        self.flashcards.retournee = false;
        self.flashcards.index = (self.flashcards.index + 1) % CARTES.len();
    }

    /// Mode visuel : note le choix puis retire une question et un angle.
    pub fn repondre_visuel(&mut self, choix: usize) {
        let correcte = choix == self.visuel.question.bonne;
        self.noter_reponse(Mode::Visuel, correcte);

        let mut rng = thread_rng();
        self.visuel.question = question_visuelle(&mut rng);
        self.visuel.angle = angle_canonique(&mut rng);
    }

    /// Mode étapes : « Marquer comme compris » compte comme une réussite.
    pub fn marquer_etape_comprise(&mut self) {
        self.noter_reponse(Mode::Etapes, true);
    }

    /// Mode équations : note le choix puis retire une équation.
    pub fn repondre_equation(&mut self, choix: usize) {
        let correcte = choix == self.equations.question.bonne;
        self.noter_reponse(Mode::Equations, correcte);
        self.equations.question = question_equation(&mut thread_rng());
    }
}
