// src/app/cercle.rs
//
// Cercle trigonométrique (widget egui) — natif + web
// --------------------------------------------------
// - Cercle unité, axes, 16 graduations canoniques, rayon + point
// - Guides pointillés : projection sin (verticale) / cos (horizontale)
// - Interactif : clic/glisser (souris ou doigt) repositionne l'angle
//   via atan2, normalisé dans [0, 2π)

use eframe::egui::{self, Color32, Pos2, Sense, Shape, Stroke, Vec2};

use crate::noyau::angle::{normaliser, ANGLES_CANONIQUES};

const COULEUR_GUIDE_SIN: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa);
const COULEUR_GUIDE_COS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99);

/// Position sur le cercle (repère écran : y vers le bas).
fn point_du_cercle(centre: Pos2, rayon: f32, angle: f64) -> Pos2 {
    centre + Vec2::new(rayon * angle.cos() as f32, -rayon * angle.sin() as f32)
}

/// Dessine le cercle et, si `interactif`, laisse déplacer le point.
///
/// Renvoie la `Response` (marquée `changed` quand l'angle a bougé).
pub fn cercle_trigo(
    ui: &mut egui::Ui,
    angle: &mut f64,
    interactif: bool,
    guides: bool,
) -> egui::Response {
    // Taille : pleine largeur disponible, bornée (mobile-first)
    let cote = ui.available_width().clamp(240.0, 360.0);
    let sense = if interactif {
        Sense::click_and_drag()
    } else {
        Sense::hover()
    };
    let (rect, mut reponse) = ui.allocate_exact_size(Vec2::splat(cote), sense);

    let peintre = ui.painter_at(rect);
    let centre = rect.center();
    let rayon = cote / 2.0 - 16.0;

    let trait_faible = Stroke::new(1.0, ui.visuals().weak_text_color());
    let trait_fort = Stroke::new(2.0, ui.visuals().strong_text_color());

    // disque + axes
    peintre.circle_filled(centre, rayon, ui.visuals().extreme_bg_color);
    peintre.circle_stroke(centre, rayon, Stroke::new(2.0, ui.visuals().weak_text_color()));
    peintre.line_segment(
        [
            Pos2::new(centre.x - rayon, centre.y),
            Pos2::new(centre.x + rayon, centre.y),
        ],
        trait_faible,
    );
    peintre.line_segment(
        [
            Pos2::new(centre.x, centre.y - rayon),
            Pos2::new(centre.x, centre.y + rayon),
        ],
        trait_faible,
    );

    // graduations des 16 angles canoniques
    for &a in &ANGLES_CANONIQUES {
        let exterieur = point_du_cercle(centre, rayon, a);
        let interieur = point_du_cercle(centre, rayon - 8.0, a);
        peintre.line_segment([interieur, exterieur], trait_faible);
    }

    // rayon + point courant
    let pointe = point_du_cercle(centre, rayon, *angle);
    peintre.line_segment([centre, pointe], trait_fort);
    peintre.circle_filled(pointe, 6.0, ui.visuals().strong_text_color());

    // guides pointillés : projections sur les axes
    if guides {
        peintre.extend(Shape::dashed_line(
            &[pointe, Pos2::new(pointe.x, centre.y)],
            Stroke::new(1.5, COULEUR_GUIDE_SIN),
            4.0,
            4.0,
        ));
        peintre.extend(Shape::dashed_line(
            &[pointe, Pos2::new(centre.x, pointe.y)],
            Stroke::new(1.5, COULEUR_GUIDE_COS),
            4.0,
            4.0,
        ));
    }

    // interaction : clic/glisser -> atan2 (repère math : y vers le haut)
    if interactif {
        if let Some(pos) = reponse.interact_pointer_pos() {
            let dx = (pos.x - centre.x) as f64;
            let dy = (centre.y - pos.y) as f64;
            let nouveau = normaliser(dy.atan2(dx));
            if nouveau != *angle {
                *angle = nouveau;
                reponse.mark_changed();
            }
        }
    }

    reponse
}
