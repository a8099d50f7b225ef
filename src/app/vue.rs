// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppTrigo (etat.rs) pour natif + wasm
// - Tactile : gros boutons, onglets « pilules », cercle déplaçable au doigt
// - Aucune décision pédagogique ici : tout vient du noyau, via etat.rs
//
// Note :
// - La courbe de progression est tracée au peintre egui (polyline simple),
//   pas de dépendance graphique dédiée.

use std::f64::consts::TAU;

use eframe::egui::{self, Color32, Pos2, Stroke};

use super::cercle::cercle_trigo;
use super::etat::{AppTrigo, Onglet};
use crate::noyau::angle::etiquette_fraction_pi;
use crate::noyau::identites::{appliquer, libelle_membre, FormeAssociee};
use crate::noyau::valeurs::FonctionTrig;
use crate::progression::Mode;
use crate::quiz::CARTES;

impl AppTrigo {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("TrigoTrainer • Cercle trigonométrique");
                ui.label("Terminale (programme FR) — mobile-first");
                ui.add_space(6.0);

                self.ui_onglets(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                match self.onglet {
                    Onglet::Flashcards => self.ui_flashcards(ui),
                    Onglet::Visuel => self.ui_visuel(ui),
                    Onglet::Etapes => self.ui_etapes(ui),
                    Onglet::Equations => self.ui_equations(ui),
                    Onglet::Progression => self.ui_progression(ui),
                }

                ui.add_space(10.0);
                ui.weak(
                    "Astuce : touche le cercle pour régler l'angle. \
                     Les scores sont sauvegardés automatiquement en local.",
                );
            });
    }

    fn ui_onglets(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for onglet in Onglet::TOUS {
                if ui
                    .selectable_label(self.onglet == onglet, onglet.libelle())
                    .clicked()
                {
                    self.onglet = onglet;
                }
            }
        });
    }

    /* ------------------------ Flashcards ------------------------ */

    fn ui_flashcards(&mut self, ui: &mut egui::Ui) {
        ui.strong("Flashcards — formules clés");
        ui.weak("Tape pour retourner");

        let carte = &CARTES[self.flashcards.index % CARTES.len()];
        let texte = if self.flashcards.retournee {
            carte.verso
        } else {
            carte.recto
        };

        let face = ui.add_sized(
            [ui.available_width(), 96.0],
            egui::Button::new(egui::RichText::new(texte).size(16.0)).wrap(),
        );
        if face.clicked() {
            self.flashcards.retournee = !self.flashcards.retournee;
        }

        ui.add_space(6.0);
        ui.columns(2, |colonnes| {
            if colonnes[0]
                .add_sized([colonnes[0].available_width(), 32.0], egui::Button::new("Difficile"))
                .clicked()
            {
                self.carte_suivante(false);
            }
            if colonnes[1]
                .add_sized([colonnes[1].available_width(), 32.0], egui::Button::new("Facile"))
                .clicked()
            {
                self.carte_suivante(true);
            }
        });
    }

    /* ------------------------ Mode visuel ------------------------ */

    fn ui_visuel(&mut self, ui: &mut egui::Ui) {
        ui.strong("Exercices visuels — cercle trigonométrique");
        ui.weak("Déplace le point sur le cercle au doigt, puis réponds au quiz.");

        cercle_trigo(ui, &mut self.visuel.angle, true, true);
        ui.weak(format!(
            "angle = {}",
            etiquette_fraction_pi(self.visuel.angle)
        ));

        ui.add_space(6.0);
        ui.strong(self.visuel.question.enonce.as_str());

        let mut choix = None;
        egui::Grid::new("options_visuel")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, option) in self.visuel.question.options.iter().enumerate() {
                    if ui
                        .add_sized([140.0, 32.0], egui::Button::new(option.as_str()))
                        .clicked()
                    {
                        choix = Some(i);
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        if let Some(i) = choix {
            self.repondre_visuel(i);
        }
    }

    /* ------------------------ Étapes guidées ------------------------ */

    fn ui_etapes(&mut self, ui: &mut egui::Ui) {
        ui.strong("Étapes guidées — angles associés");
        ui.label("Choisis une formule à illustrer");

        let mut selection = (self.etapes.fonction, self.etapes.forme);
        egui::Grid::new("formules_etapes")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                let mut i = 0usize;
                for f in [FonctionTrig::Sin, FonctionTrig::Cos] {
                    for forme in FormeAssociee::ASSOCIEES {
                        let actif = selection == (f, forme);
                        if ui
                            .selectable_label(actif, libelle_membre(f, forme))
                            .clicked()
                        {
                            selection = (f, forme);
                        }
                        i += 1;
                        if i % 2 == 0 {
                            ui.end_row();
                        }
                    }
                }
            });
        (self.etapes.fonction, self.etapes.forme) = selection;

        ui.label("Choisis x");
        ui.add(egui::Slider::new(&mut self.etapes.x, 0.0..=TAU).show_value(false));
        ui.weak(format!("x = {}", etiquette_fraction_pi(self.etapes.x)));

        let identite = appliquer(self.etapes.forme, self.etapes.fonction, self.etapes.x);

        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("Illustration");

            ui.label(FormeAssociee::Identite.description());
            let mut x_fixe = self.etapes.x;
            cercle_trigo(ui, &mut x_fixe, false, true);

            ui.label(self.etapes.forme.description());
            let mut associe_fixe = identite.angle;
            cercle_trigo(ui, &mut associe_fixe, false, true);

            ui.add_space(4.0);
            ui.label(format!(
                "Conclusion : {} = {}.",
                libelle_membre(self.etapes.fonction, self.etapes.forme),
                identite.libelle_resultat()
            ));
            ui.weak(format!(
                "Valeur numérique (pour x choisi) : {:.3}",
                identite.evaluer(self.etapes.x)
            ));

            ui.add_space(4.0);
            if ui.button("Marquer comme compris").clicked() {
                self.marquer_etape_comprise();
            }
        });
    }

    /* ------------------------ Équations ------------------------ */

    fn ui_equations(&mut self, ui: &mut egui::Ui) {
        ui.strong("Équations trigonométriques (angles remarquables)");
        ui.weak("Résous dans [0, 2π). Choisis la bonne liste de solutions.");

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(self.equations.question.enonce.as_str());
            });

        ui.add_space(4.0);
        let mut choix = None;
        for (i, option) in self.equations.question.options.iter().enumerate() {
            if ui
                .add_sized(
                    [ui.available_width(), 32.0],
                    egui::Button::new(format!("{{ {option} }}")),
                )
                .clicked()
            {
                choix = Some(i);
            }
        }
        if let Some(i) = choix {
            self.repondre_equation(i);
        }
    }

    /* ------------------------ Progression ------------------------ */

    fn ui_progression(&mut self, ui: &mut egui::Ui) {
        ui.strong("Progression");

        egui::Grid::new("resume_progression")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, mode) in Mode::TOUS.into_iter().enumerate() {
                    let stats = self.progression.stats(mode);
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.weak(mode.libelle());
                            ui.heading(format!("{} %", stats.taux_pourcent()));
                            ui.weak(format!("{} questions", stats.tentatives));
                        });
                    });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(8.0);
        self.ui_courbe_progression(ui);
    }

    /// Courbe « taux cumulé dans le temps », tous modes confondus.
    fn ui_courbe_progression(&self, ui: &mut egui::Ui) {
        let mut points: Vec<(i64, f64)> = Vec::new();
        for mode in Mode::TOUS {
            for p in &self.progression.stats(mode).historique {
                points.push((p.t, p.score));
            }
        }
        points.sort_by_key(|&(t, _)| t);

        if points.len() < 2 {
            ui.weak("Réponds à quelques questions pour voir ta courbe.");
            return;
        }

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 160.0),
            egui::Sense::hover(),
        );
        let peintre = ui.painter_at(rect);
        peintre.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

        // lignes de repère 0 / 50 / 100 %
        let repere = Stroke::new(1.0, ui.visuals().weak_text_color());
        for frac in [0.0f32, 0.5, 1.0] {
            let y = rect.bottom() - frac * rect.height();
            peintre.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                repere,
            );
        }

        let t_min = points[0].0;
        let t_max = points[points.len() - 1].0;
        let etendue = (t_max - t_min).max(1) as f32;

        let projeter = |(t, score): (i64, f64)| -> Pos2 {
            let x = rect.left() + ((t - t_min) as f32 / etendue) * rect.width();
            let y = rect.bottom() - (score as f32) * rect.height();
            Pos2::new(x, y)
        };

        let trace = Stroke::new(2.0, Color32::from_rgb(0x60, 0xa5, 0xfa));
        for paire in points.windows(2) {
            peintre.line_segment([projeter(paire[0]), projeter(paire[1])], trace);
        }
    }
}
