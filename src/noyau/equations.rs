// src/noyau/equations.rs
//
// Équations « angles remarquables » sur le cercle
// -----------------------------------------------
// Résolution par balayage exhaustif des 16 angles canoniques : ce n'est pas
// un solveur fermé, le domaine fini EST le contrat (programme de Terminale).

use super::angle::{approx_egal, etiquette_fraction_pi, ANGLES_CANONIQUES, EPSILON};
use super::identites::{appliquer, libelle_membre, FormeAssociee};
use super::valeurs::FonctionTrig;

/// Un membre d'équation : `sin x`, `cos(π − x)`, etc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MembreEquation {
    pub fonction: FonctionTrig,
    pub forme: FormeAssociee,
}

impl MembreEquation {
    pub fn libelle(&self) -> String {
        libelle_membre(self.fonction, self.forme)
    }

    /// Valeur du membre en `a`, via la table des identités
    /// (jamais en recomposant f(forme(a)) directement : une seule source).
    pub fn evaluer(&self, a: f64) -> f64 {
        appliquer(self.forme, self.fonction, a).evaluer(a)
    }
}

/// Solutions de `gauche(a) = droite(a)` sur les angles canoniques.
///
/// Balayage, égalité à EPSILON près, déduplication par `approx_egal`,
/// tri croissant.
pub fn resoudre_sur_canoniques(gauche: MembreEquation, droite: MembreEquation) -> Vec<f64> {
    let mut solutions: Vec<f64> = Vec::new();

    for &a in &ANGLES_CANONIQUES {
        if (gauche.evaluer(a) - droite.evaluer(a)).abs() < EPSILON
            && !solutions.iter().any(|&s| approx_egal(s, a))
        {
            solutions.push(a);
        }
    }

    solutions.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    solutions
}

/// Rend un ensemble de solutions : "π/4, 5π/4", ou "∅" si vide.
pub fn format_ensemble(solutions: &[f64]) -> String {
    if solutions.is_empty() {
        return "∅".to_string();
    }
    solutions
        .iter()
        .map(|&a| etiquette_fraction_pi(a))
        .collect::<Vec<_>>()
        .join(", ")
}

/* ------------------------ tests ------------------------ */
