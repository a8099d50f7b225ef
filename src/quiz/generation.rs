// src/quiz/generation.rs
//
// Construction aléatoire des questions (modes visuel et équations)
// ----------------------------------------------------------------
// Tout le hasard passe par un `rand::Rng` reçu en paramètre : les vues
// donnent `thread_rng()`, les tests un `StdRng` semé.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::noyau::angle::ANGLES_CANONIQUES;
use crate::noyau::equations::{format_ensemble, resoudre_sur_canoniques, MembreEquation};
use crate::noyau::identites::FormeAssociee;
use crate::noyau::valeurs::{classe_de_signes, valeur_exacte, ClasseSignes, FonctionTrig, ETIQUETTES_CONNUES};
use crate::noyau::etiquette_fraction_pi;

/// Une question fermée : énoncé, options affichables, index de la bonne.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub enonce: String,
    pub options: Vec<String>,
    pub bonne: usize,
}

/// Tire un angle du jeu canonique.
pub fn angle_canonique(rng: &mut impl Rng) -> f64 {
    *ANGLES_CANONIQUES.choose(rng).unwrap_or(&0.0)
}

fn fonction_aleatoire(rng: &mut impl Rng) -> FonctionTrig {
    if rng.gen_bool(0.5) {
        FonctionTrig::Sin
    } else {
        FonctionTrig::Cos
    }
}

/* ------------------------ Mode visuel ------------------------ */

/// Question du mode visuel : une fois sur deux « signes », sinon « valeur ».
pub fn question_visuelle(rng: &mut impl Rng) -> Question {
    let a = angle_canonique(rng);
    if rng.gen_bool(0.5) {
        question_signes(a)
    } else {
        let fonction = fonction_aleatoire(rng);
        question_valeur(rng, fonction, a)
    }
}

/// Question « signes de sin et cos » — déterministe pour un angle donné.
pub fn question_signes(a: f64) -> Question {
    let classe = classe_de_signes(a);
    let options: Vec<String> = ClasseSignes::TOUTES
        .iter()
        .map(|c| c.libelle().to_string())
        .collect();
    let bonne = ClasseSignes::TOUTES
        .iter()
        .position(|&c| c == classe)
        .unwrap_or(0);

    Question {
        enonce: format!(
            "À l'angle {}, quels sont les signes de sin et cos ?",
            etiquette_fraction_pi(a)
        ),
        options,
        bonne,
    }
}

/// Question « valeur exacte » : la bonne étiquette + 3 distracteurs du
/// réservoir, mélangés (l'index de la bonne est recalculé après mélange).
pub fn question_valeur(rng: &mut impl Rng, f: FonctionTrig, a: f64) -> Question {
    let vraie = valeur_exacte(f, a);

    let mut options: Vec<String> = vec![vraie.clone()];
    let mut reservoir: Vec<&str> = ETIQUETTES_CONNUES
        .iter()
        .copied()
        .filter(|&e| e != vraie)
        .collect();
    reservoir.shuffle(rng);
    options.extend(reservoir.iter().take(3).map(|e| e.to_string()));
    options.shuffle(rng);

    let bonne = options.iter().position(|o| *o == vraie).unwrap_or(0);

    Question {
        enonce: format!("{}({}) = ?", f.nom(), etiquette_fraction_pi(a)),
        options,
        bonne,
    }
}

/* ------------------------ Mode équations ------------------------ */

/// Question « équation » : sin x ou cos x à gauche, une des huit formes
/// associées à droite ; les mauvaises options sont de faux ensembles de
/// solutions tirés du jeu canonique.
pub fn question_equation(rng: &mut impl Rng) -> Question {
    let gauche = MembreEquation {
        fonction: fonction_aleatoire(rng),
        forme: FormeAssociee::Identite,
    };
    let droite = MembreEquation {
        fonction: fonction_aleatoire(rng),
        forme: *FormeAssociee::ASSOCIEES
            .choose(rng)
            .unwrap_or(&FormeAssociee::PiMoinsX),
    };

    let solutions = resoudre_sur_canoniques(gauche, droite);
    let correcte = format_ensemble(&solutions);

    let mut options = vec![correcte.clone()];
    // Passes bornées : garde-fou anti-boucle si les faux ensembles
    // retombent sans cesse sur des doublons.
    for _ in 0..64 {
        if options.len() == 4 {
            break;
        }
        let taille = rng.gen_range(0..=4usize);
        let mut faux: Vec<f64> = ANGLES_CANONIQUES
            .choose_multiple(rng, taille)
            .copied()
            .collect();
        faux.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
        let libelle = format_ensemble(&faux);
        if !options.contains(&libelle) {
            options.push(libelle);
        }
    }
    options.shuffle(rng);

    let bonne = options.iter().position(|o| *o == correcte).unwrap_or(0);

    Question {
        enonce: format!("{} = {}", gauche.libelle(), droite.libelle()),
        options,
        bonne,
    }
}

/* ------------------------ tests ------------------------ */
