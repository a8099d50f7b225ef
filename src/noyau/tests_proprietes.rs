//! Tests de propriétés (campagne) : invariants du noyau, bout en bout.
//!
//! But : vérifier les contrats transverses qui engagent plusieurs modules
//! à la fois (les cas unitaires vivent dans les `mod tests` de chaque
//! fichier).
//!
//! Notes :
//! - Toutes les fonctions du noyau sont totales : aucun cas d'erreur à
//!   couvrir, seulement des égalités/invariants.
//! - Les comparaisons d'angles passent par `approx_egal`, jamais par `==`.

use std::f64::consts::{PI, TAU};

use super::angle::{approx_egal, approx_egal_eps, normaliser, ANGLES_CANONIQUES};
use super::equations::{resoudre_sur_canoniques, MembreEquation};
use super::identites::{appliquer, FormeAssociee};
use super::valeurs::{valeur_exacte, FonctionTrig};

/* ------------------------ Normalisation ------------------------ */

#[test]
fn prop_normalisation_plage() {
    for &a in &ANGLES_CANONIQUES {
        for k in -3i32..=3 {
            let n = normaliser(a + TAU * k as f64);
            assert!((0.0..TAU).contains(&n), "a={a} k={k} -> {n}");
            assert!(approx_egal_eps(n, a, 1e-9));
        }
    }
}

/* ------------------------ Étiquettes ------------------------ */

#[test]
fn prop_angles_canoniques_tous_etiquetables() {
    // Aucun angle canonique ne doit retomber sur le repli décimal.
    for &a in &ANGLES_CANONIQUES {
        let e = etiquette(a);
        assert!(!e.ends_with("rad"), "angle {a} -> {e}");
    }
}

fn etiquette(a: f64) -> String {
    super::angle::etiquette_fraction_pi(a)
}

#[test]
fn prop_valeurs_exactes_jamais_decimales_sur_canoniques() {
    // Sur le jeu canonique, la valeur exacte doit toujours être symbolique
    // (le repli 3 décimales est réservé aux angles irréguliers).
    for &a in &ANGLES_CANONIQUES {
        for f in [FonctionTrig::Sin, FonctionTrig::Cos] {
            let v = valeur_exacte(f, a);
            assert!(
                super::valeurs::ETIQUETTES_CONNUES.contains(&v.as_str()),
                "{}({}) -> {v}",
                f.nom(),
                etiquette(a)
            );
        }
    }
}

#[test]
fn prop_valeur_exacte_coherente_avec_le_flottant() {
    // L'étiquette symbolique doit re-coder la valeur flottante.
    let decode = |e: &str| -> f64 {
        match e {
            "0" => 0.0,
            "1" => 1.0,
            "-1" => -1.0,
            "1/2" => 0.5,
            "-1/2" => -0.5,
            "√2/2" => std::f64::consts::FRAC_1_SQRT_2,
            "-√2/2" => -std::f64::consts::FRAC_1_SQRT_2,
            "√3/2" => 3f64.sqrt() / 2.0,
            "-√3/2" => -(3f64.sqrt()) / 2.0,
            autre => panic!("étiquette inattendue: {autre}"),
        }
    };

    for &a in &ANGLES_CANONIQUES {
        for f in [FonctionTrig::Sin, FonctionTrig::Cos] {
            let attendu = f.evaluer(a);
            let obtenu = decode(&valeur_exacte(f, a));
            assert!(
                (attendu - obtenu).abs() < 1e-9,
                "{}({}) : flottant {attendu} vs étiquette {obtenu}",
                f.nom(),
                etiquette(a)
            );
        }
    }
}

/* ------------------------ Identités <-> équations ------------------------ */

#[test]
fn prop_membre_equation_egale_table_identites() {
    // MembreEquation::evaluer DOIT passer par la table des identités ;
    // on vérifie l'égalité avec l'application directe pour tout le domaine.
    for f in [FonctionTrig::Sin, FonctionTrig::Cos] {
        for forme in FormeAssociee::ASSOCIEES {
            let membre = MembreEquation { fonction: f, forme };
            for &a in &ANGLES_CANONIQUES {
                let via_table = appliquer(forme, f, a).evaluer(a);
                assert!((membre.evaluer(a) - via_table).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn prop_identites_vraies_resolvent_tout_le_domaine() {
    // Chaque ligne de la table, posée en équation f(x) côté réécrit,
    // doit être vraie sur les 16 angles.
    for f in [FonctionTrig::Sin, FonctionTrig::Cos] {
        for forme in FormeAssociee::ASSOCIEES {
            let gauche = MembreEquation { fonction: f, forme };
            let id = appliquer(forme, f, 0.0);
            // signe +1 seulement : « -sin x » n'est pas un membre exprimable
            if id.signe == 1 {
                let droite = MembreEquation {
                    fonction: id.fonction,
                    forme: FormeAssociee::Identite,
                };
                let sols = resoudre_sur_canoniques(gauche, droite);
                assert_eq!(sols.len(), 16, "{} devrait être une identité", gauche.libelle());
            }
        }
    }
}

#[test]
fn prop_solutions_dedupliquees() {
    for f in [FonctionTrig::Sin, FonctionTrig::Cos] {
        for forme in FormeAssociee::ASSOCIEES {
            let gauche = MembreEquation {
                fonction: f,
                forme: FormeAssociee::Identite,
            };
            let droite = MembreEquation { fonction: f, forme };
            let sols = resoudre_sur_canoniques(gauche, droite);
            for (i, &a) in sols.iter().enumerate() {
                for &b in &sols[i + 1..] {
                    assert!(!approx_egal(a, b), "doublon {a} / {b}");
                }
            }
        }
    }
}

/* ------------------------ Recollement 0/2π ------------------------ */

#[test]
fn prop_recollement_pres_de_zero() {
    assert!(approx_egal(1e-9, TAU - 1e-9));
    assert!(approx_egal(-1e-9, 0.0));
    assert!(!approx_egal(1e-3, TAU - 1e-3));
    assert!(approx_egal(PI + 1e-9, PI - 1e-9));
}
