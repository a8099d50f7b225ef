// src/progression.rs
//
// Progression locale (par mode d'entraînement)
// --------------------------------------------
// - Un instantané JSON unique sous une clé nommée d'eframe::Storage
//   (fichier en natif, localStorage en web)
// - Historique additif : un point (horodatage, taux cumulé) par réponse,
//   jamais tronqué ni compacté
// - Lecture unique au démarrage ; toute donnée absente/corrompue retombe
//   sur l'enregistrement vierge ; les échecs d'écriture sont avalés

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Clé unique de l'instantané dans le stockage local.
pub const CLE_STOCKAGE: &str = "trigo_trainer_progression_v1";

/// Les quatre modes d'entraînement suivis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Flashcards,
    Visuel,
    Etapes,
    Equations,
}

impl Mode {
    pub const TOUS: [Mode; 4] = [
        Self::Flashcards,
        Self::Visuel,
        Self::Etapes,
        Self::Equations,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Self::Flashcards => "Flashcards",
            Self::Visuel => "Cercle (visuel)",
            Self::Etapes => "Étapes guidées",
            Self::Equations => "Équations",
        }
    }
}

/// Un point d'historique : horodatage (ms Unix) + taux de réussite cumulé.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointHistorique {
    pub t: i64,
    pub score: f64,
}

/// Compteurs d'un mode + historique additif.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsMode {
    pub tentatives: u32,
    pub reussites: u32,
    pub historique: Vec<PointHistorique>,
}

impl StatsMode {
    /// Note une réponse : compteurs + un point d'historique horodaté.
    pub fn noter(&mut self, correcte: bool) {
        self.noter_a(correcte, Utc::now().timestamp_millis());
    }

    /// Variante à horodatage explicite (testable).
    pub fn noter_a(&mut self, correcte: bool, t: i64) {
        self.tentatives += 1;
        if correcte {
            self.reussites += 1;
        }
        self.historique.push(PointHistorique {
            t,
            score: self.reussites as f64 / self.tentatives as f64,
        });
    }

    /// Taux de réussite en pourcentage arrondi (0 si aucune tentative).
    pub fn taux_pourcent(&self) -> u32 {
        if self.tentatives == 0 {
            return 0;
        }
        (100.0 * self.reussites as f64 / self.tentatives as f64).round() as u32
    }
}

/// L'enregistrement complet : un `StatsMode` par mode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub flashcards: StatsMode,
    pub visuel: StatsMode,
    pub etapes: StatsMode,
    pub equations: StatsMode,
}

impl Progression {
    pub fn stats(&self, mode: Mode) -> &StatsMode {
        match mode {
            Mode::Flashcards => &self.flashcards,
            Mode::Visuel => &self.visuel,
            Mode::Etapes => &self.etapes,
            Mode::Equations => &self.equations,
        }
    }

    pub fn stats_mut(&mut self, mode: Mode) -> &mut StatsMode {
        match mode {
            Mode::Flashcards => &mut self.flashcards,
            Mode::Visuel => &mut self.visuel,
            Mode::Etapes => &mut self.etapes,
            Mode::Equations => &mut self.equations,
        }
    }

    /// Note une réponse dans le mode donné.
    pub fn noter(&mut self, mode: Mode, correcte: bool) {
        self.stats_mut(mode).noter(correcte);
    }

    /* ------------------------ (Dé)sérialisation ------------------------ */

    /// Sérialise l'instantané ; None si la sérialisation échoue
    /// (jamais vu en pratique : types fermés, pas de Map non-string).
    pub fn vers_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Relit un instantané ; None si absent ou corrompu.
    pub fn depuis_json(json: &str) -> Option<Progression> {
        serde_json::from_str(json).ok()
    }

    /* ------------------------ Stockage local ------------------------ */

    /// Lecture au démarrage : instantané présent et valide, sinon vierge.
    pub fn charger(storage: Option<&dyn eframe::Storage>) -> Progression {
        storage
            .and_then(|s| s.get_string(CLE_STOCKAGE))
            .and_then(|json| Self::depuis_json(&json))
            .unwrap_or_default()
    }

    /// Écriture en bloc de l'instantané (échec silencieux, perte acceptée).
    pub fn sauvegarder(&self, storage: &mut dyn eframe::Storage) {
        if let Some(json) = self.vers_json() {
            storage.set_string(CLE_STOCKAGE, json);
        }
    }
}

/* ------------------------ tests ------------------------ */
