// src/app.rs
//
// TrigoTrainer — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + cercle.rs)
// - Ré-exporter AppTrigo (pour main.rs: use crate::app::AppTrigo;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Persistance :
// - La progression est écrite EN BLOC après chaque réponse notée
//   (drapeau progression_modifiee posé par etat.rs), plus le passage
//   standard App::save (auto-save + fermeture).
// - Tout échec de stockage est silencieux : la perte est acceptée,
//   jamais montrée à l'élève.

pub mod cercle;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppTrigo;`
pub use etat::AppTrigo;

use eframe::egui;

impl eframe::App for AppTrigo {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Écriture en bloc dès qu'une réponse a été notée.
        if self.progression_modifiee {
            if let Some(storage) = frame.storage_mut() {
                self.progression.sauvegarder(storage);
                storage.flush();
            }
            self.progression_modifiee = false;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.progression.sauvegarder(storage);
    }
}
