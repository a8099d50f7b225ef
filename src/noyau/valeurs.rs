// src/noyau/valeurs.rs
//
// Valeurs exactes de sin/cos sur les angles remarquables
// ------------------------------------------------------
// - Quadrant -> angle de référence -> plus proche angle de base
// - Table des modules sur {0, π/6, π/4, π/3, π/2}
// - Règle des signes : sin < 0 en Q3/Q4, cos < 0 en Q2/Q3
// - Étiquette symbolique par tolérance (repli : 3 décimales)

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

use super::angle::{angle_reference, normaliser, quadrant, EPSILON};

/// sin ou cos (tan est hors programme ici : non injectif sur le cercle complet).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionTrig {
    Sin,
    Cos,
}

impl FonctionTrig {
    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }

    /// Évaluation numérique (flottante) de la fonction.
    pub fn evaluer(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
        }
    }
}

/// Classe de signes (sin, cos) du quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClasseSignes {
    PlusPlus,
    PlusMoins,
    MoinsMoins,
    MoinsPlus,
}

impl ClasseSignes {
    pub const TOUTES: [ClasseSignes; 4] = [
        Self::PlusPlus,
        Self::PlusMoins,
        Self::MoinsMoins,
        Self::MoinsPlus,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Self::PlusPlus => "sin+, cos+",
            Self::PlusMoins => "sin+, cos-",
            Self::MoinsMoins => "sin-, cos-",
            Self::MoinsPlus => "sin-, cos+",
        }
    }
}

/// Classe de signes d'un angle, calculée directement sur sin/cos.
///
/// TODO: un angle exactement sur un axe (sin ou cos nul) tombe dans une
/// branche « moins » faute de test `== 0` ; comportement historique conservé,
/// à arbitrer avec une classe « bord » dédiée.
pub fn classe_de_signes(angle: f64) -> ClasseSignes {
    let s = angle.sin();
    let c = angle.cos();
    if s > 0.0 && c > 0.0 {
        ClasseSignes::PlusPlus
    } else if s > 0.0 && c < 0.0 {
        ClasseSignes::PlusMoins
    } else if s < 0.0 && c < 0.0 {
        ClasseSignes::MoinsMoins
    } else {
        ClasseSignes::MoinsPlus
    }
}

/* ------------------------ Valeur exacte ------------------------ */

const RACINE_2_SUR_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
const RACINE_3_SUR_2: f64 = 0.866_025_403_784_438_6; // √3/2

/// (angle de base, |sin|, |cos|) sur le premier quadrant.
const TABLE_BASE: [(f64, f64, f64); 5] = [
    (0.0, 0.0, 1.0),
    (FRAC_PI_6, 0.5, RACINE_3_SUR_2),
    (FRAC_PI_4, RACINE_2_SUR_2, RACINE_2_SUR_2),
    (FRAC_PI_3, RACINE_3_SUR_2, 0.5),
    (FRAC_PI_2, 1.0, 0.0),
];

/// Étiquette symbolique de la valeur exacte de `f(angle)`.
///
/// Pour les 16 angles canoniques la correspondance est exacte (à EPSILON
/// près) ; pour tout autre angle, le plus proche angle de base est retenu
/// et l'étiquette peut retomber en décimal.
pub fn valeur_exacte(f: FonctionTrig, angle: f64) -> String {
    let r = normaliser(angle);
    let quad = quadrant(r);
    let reference = angle_reference(r);

    // plus proche angle de base, par écart absolu
    let &(_, module_sin, module_cos) = TABLE_BASE
        .iter()
        .min_by(|a, b| {
            let da = (a.0 - reference).abs();
            let db = (b.0 - reference).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(&TABLE_BASE[0]);

    let mut valeur = match f {
        FonctionTrig::Sin => module_sin,
        FonctionTrig::Cos => module_cos,
    };

    // règle des signes par quadrant
    match f {
        FonctionTrig::Sin => {
            if quad == 3 || quad == 4 {
                valeur = -valeur;
            }
        }
        FonctionTrig::Cos => {
            if quad == 2 || quad == 3 {
                valeur = -valeur;
            }
        }
    }

    etiquette_valeur(valeur)
}

/// Étiquette symbolique d'un nombre : 0, ±1, ±1/2, ±√2/2, ±√3/2,
/// sinon repli en 3 décimales.
pub fn etiquette_valeur(x: f64) -> String {
    if x.abs() < 1e-9 {
        return "0".to_string();
    }
    if (x - 1.0).abs() < EPSILON {
        return "1".to_string();
    }
    if (x + 1.0).abs() < EPSILON {
        return "-1".to_string();
    }
    if (x.abs() - RACINE_2_SUR_2).abs() < EPSILON {
        return if x > 0.0 { "√2/2" } else { "-√2/2" }.to_string();
    }
    if (x.abs() - RACINE_3_SUR_2).abs() < EPSILON {
        return if x > 0.0 { "√3/2" } else { "-√3/2" }.to_string();
    }
    if (x.abs() - 0.5).abs() < EPSILON {
        return if x > 0.0 { "1/2" } else { "-1/2" }.to_string();
    }
    format!("{x:.3}")
}

/// Les neuf étiquettes possibles sur les angles canoniques
/// (réservoir de distracteurs côté quiz).
pub const ETIQUETTES_CONNUES: [&str; 9] = [
    "0", "1", "-1", "√2/2", "-√2/2", "√3/2", "-√3/2", "1/2", "-1/2",
];

/* ------------------------ tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn valeurs_premier_quadrant() {
        assert_eq!(valeur_exacte(FonctionTrig::Sin, FRAC_PI_6), "1/2");
        assert_eq!(valeur_exacte(FonctionTrig::Cos, FRAC_PI_6), "√3/2");
        assert_eq!(valeur_exacte(FonctionTrig::Sin, FRAC_PI_4), "√2/2");
        assert_eq!(valeur_exacte(FonctionTrig::Cos, FRAC_PI_2), "0");
        assert_eq!(valeur_exacte(FonctionTrig::Cos, 0.0), "1");
    }

    #[test]
    fn valeurs_signes_quadrants() {
        // Q3 : sinus négatif
        assert_eq!(valeur_exacte(FonctionTrig::Sin, 7.0 * PI / 6.0), "-1/2");
        // Q2 : cosinus négatif
        assert_eq!(valeur_exacte(FonctionTrig::Cos, 2.0 * PI / 3.0), "-1/2");
        // Q4 : sinus négatif, cosinus positif
        assert_eq!(valeur_exacte(FonctionTrig::Sin, 11.0 * PI / 6.0), "-1/2");
        assert_eq!(valeur_exacte(FonctionTrig::Cos, 11.0 * PI / 6.0), "√3/2");
        // π et 3π/2
        assert_eq!(valeur_exacte(FonctionTrig::Cos, PI), "-1");
        assert_eq!(valeur_exacte(FonctionTrig::Sin, 3.0 * PI / 2.0), "-1");
    }

    #[test]
    fn classes_de_signes() {
        assert_eq!(classe_de_signes(FRAC_PI_4), ClasseSignes::PlusPlus);
        assert_eq!(classe_de_signes(2.0 * PI / 3.0), ClasseSignes::PlusMoins);
        assert_eq!(classe_de_signes(5.0 * PI / 4.0), ClasseSignes::MoinsMoins);
        assert_eq!(classe_de_signes(7.0 * PI / 4.0), ClasseSignes::MoinsPlus);
    }

    #[test]
    fn classe_de_signes_sur_axe() {
        // Comportement historique : composante nulle -> branche « moins ».
        // sin(0) == 0 exactement, cos(0) == 1.
        assert_eq!(classe_de_signes(0.0), ClasseSignes::MoinsPlus);
    }

    #[test]
    fn etiquette_repli_decimal() {
        assert_eq!(etiquette_valeur(0.123_456), "0.123");
    }
}
