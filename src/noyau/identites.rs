// src/noyau/identites.rs
//
// Angles associés : π−x, π+x, π/2−x, π/2+x
// ----------------------------------------
// Table unique des identités (source de vérité) :
//   sin(π−x)   =  sin x       cos(π−x)   = -cos x
//   sin(π+x)   = -sin x       cos(π+x)   = -cos x
//   sin(π/2−x) =  cos x       cos(π/2−x) =  sin x
//   sin(π/2+x) =  cos x       cos(π/2+x) = -sin x
// Les vues « Étapes guidées » et le solveur d'équations dérivent tous deux
// de cette table ; aucune redétection par motif sur des chaînes affichées.

use std::f64::consts::{FRAC_PI_2, PI};

use super::angle::normaliser;
use super::valeurs::FonctionTrig;

/// Forme d'angle associé appliquée à sin x ou cos x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormeAssociee {
    /// x lui-même (aucune transformation).
    Identite,
    PiMoinsX,
    PiPlusX,
    PiSurDeuxMoinsX,
    PiSurDeuxPlusX,
}

/// Résultat algébrique : `f(forme(x)) = signe · fonction(x)`,
/// avec `angle` l'angle transformé normalisé.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdentiteAppliquee {
    pub fonction: FonctionTrig,
    pub signe: i8,
    pub angle: f64,
}

impl FormeAssociee {
    /// Les quatre transformations du programme (sans l'identité).
    pub const ASSOCIEES: [FormeAssociee; 4] = [
        Self::PiMoinsX,
        Self::PiPlusX,
        Self::PiSurDeuxMoinsX,
        Self::PiSurDeuxPlusX,
    ];

    /// Angle transformé, normalisé dans [0, 2π).
    pub fn angle_associe(self, x: f64) -> f64 {
        let brut = match self {
            Self::Identite => x,
            Self::PiMoinsX => PI - x,
            Self::PiPlusX => PI + x,
            Self::PiSurDeuxMoinsX => FRAC_PI_2 - x,
            Self::PiSurDeuxPlusX => FRAC_PI_2 + x,
        };
        normaliser(brut)
    }

    /// Libellé de l'argument : "x", "π − x", ...
    pub fn libelle_argument(self) -> &'static str {
        match self {
            Self::Identite => "x",
            Self::PiMoinsX => "π − x",
            Self::PiPlusX => "π + x",
            Self::PiSurDeuxMoinsX => "π/2 − x",
            Self::PiSurDeuxPlusX => "π/2 + x",
        }
    }

    /// Lecture géométrique de la transformation sur le cercle.
    pub fn description(self) -> &'static str {
        match self {
            Self::Identite => "Angle de départ x sur le cercle.",
            Self::PiMoinsX => "Symétrie par rapport à Oy (π − x).",
            Self::PiPlusX => "Translation de π (symétrie centrale).",
            Self::PiSurDeuxMoinsX => "Complémentaire : on prend l'angle π/2 − x.",
            Self::PiSurDeuxPlusX => "Complémentaire décalé : on prend l'angle π/2 + x.",
        }
    }
}

/// Libellé complet du membre, ex. "sin(π − x)" ou "cos x".
pub fn libelle_membre(f: FonctionTrig, forme: FormeAssociee) -> String {
    match forme {
        FormeAssociee::Identite => format!("{} x", f.nom()),
        _ => format!("{}({})", f.nom(), forme.libelle_argument()),
    }
}

/// Applique l'identité : `f(forme(x))` réécrit en `signe · fonction(x)`.
///
/// C'est LA table ; tout le reste (étapes, équations, libellés de
/// conclusion) doit passer par ici.
pub fn appliquer(forme: FormeAssociee, f: FonctionTrig, x: f64) -> IdentiteAppliquee {
    use FonctionTrig::{Cos, Sin};
    use FormeAssociee::*;

    let (fonction, signe) = match (f, forme) {
        (Sin, Identite) => (Sin, 1),
        (Sin, PiMoinsX) => (Sin, 1),
        (Sin, PiPlusX) => (Sin, -1),
        (Sin, PiSurDeuxMoinsX) => (Cos, 1),
        (Sin, PiSurDeuxPlusX) => (Cos, 1),

        (Cos, Identite) => (Cos, 1),
        (Cos, PiMoinsX) => (Cos, -1),
        (Cos, PiPlusX) => (Cos, -1),
        (Cos, PiSurDeuxMoinsX) => (Sin, 1),
        (Cos, PiSurDeuxPlusX) => (Sin, -1),
    };

    IdentiteAppliquee {
        fonction,
        signe,
        angle: forme.angle_associe(x),
    }
}

impl IdentiteAppliquee {
    /// Membre de droite de la conclusion : "sin x", "-cos x", ...
    pub fn libelle_resultat(&self) -> String {
        let signe = if self.signe < 0 { "-" } else { "" };
        format!("{signe}{} x", self.fonction.nom())
    }

    /// Valeur numérique du membre réécrit, pour le x de départ.
    pub fn evaluer(&self, x: f64) -> f64 {
        self.signe as f64 * self.fonction.evaluer(x)
    }
}

/* ------------------------ tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::angle::{approx_egal, ANGLES_CANONIQUES};
    use std::f64::consts::FRAC_PI_6;

    #[test]
    fn pi_moins_x_sur_sin() {
        let id = appliquer(FormeAssociee::PiMoinsX, FonctionTrig::Sin, FRAC_PI_6);
        assert!(approx_egal(id.angle, 5.0 * PI / 6.0));
        assert_eq!(id.signe, 1);
        assert_eq!(id.fonction, FonctionTrig::Sin);
        assert!(((5.0 * PI / 6.0).sin() - FRAC_PI_6.sin()).abs() < 1e-12);
    }

    #[test]
    fn table_complete_libelles() {
        let cas = [
            (FonctionTrig::Sin, FormeAssociee::PiMoinsX, "sin x"),
            (FonctionTrig::Sin, FormeAssociee::PiPlusX, "-sin x"),
            (FonctionTrig::Sin, FormeAssociee::PiSurDeuxMoinsX, "cos x"),
            (FonctionTrig::Sin, FormeAssociee::PiSurDeuxPlusX, "cos x"),
            (FonctionTrig::Cos, FormeAssociee::PiMoinsX, "-cos x"),
            (FonctionTrig::Cos, FormeAssociee::PiPlusX, "-cos x"),
            (FonctionTrig::Cos, FormeAssociee::PiSurDeuxMoinsX, "sin x"),
            (FonctionTrig::Cos, FormeAssociee::PiSurDeuxPlusX, "-sin x"),
        ];
        for (f, forme, attendu) in cas {
            assert_eq!(appliquer(forme, f, 0.4).libelle_resultat(), attendu);
        }
    }

    #[test]
    fn coherence_numerique_de_la_table() {
        // f(forme(x)) doit valoir signe·fonction(x) pour tous les angles
        // canoniques et toutes les combinaisons.
        for &x in &ANGLES_CANONIQUES {
            for f in [FonctionTrig::Sin, FonctionTrig::Cos] {
                for forme in FormeAssociee::ASSOCIEES {
                    let id = appliquer(forme, f, x);
                    let direct = f.evaluer(forme.angle_associe(x));
                    let reecrit = id.evaluer(x);
                    assert!(
                        (direct - reecrit).abs() < 1e-9,
                        "{} : direct={direct} réécrit={reecrit} x={x}",
                        libelle_membre(f, forme)
                    );
                }
            }
        }
    }

    #[test]
    fn libelles_membres() {
        assert_eq!(
            libelle_membre(FonctionTrig::Sin, FormeAssociee::Identite),
            "sin x"
        );
        assert_eq!(
            libelle_membre(FonctionTrig::Cos, FormeAssociee::PiSurDeuxPlusX),
            "cos(π/2 + x)"
        );
    }
}
