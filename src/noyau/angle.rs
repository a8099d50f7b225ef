// src/noyau/angle.rs
//
// Angles : normalisation, comparaison approchée, quadrants,
// étiquettes en fraction de π
// -----------------------------------------------------------
// - Plage canonique [0, 2π) pour toute comparaison / tout affichage
// - Égalité = écart < EPSILON après normalisation (jamais l'égalité flottante)
// - Étiquettes : recherche n/q sur q ∈ 1..=12, réduction via Rational64

use num_rational::Rational64;
use num_traits::Zero;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI, TAU};

/// Tolérance absolue de comparaison entre deux angles normalisés.
pub const EPSILON: f64 = 1e-6;

/// Les 16 angles « remarquables » du programme, en ordre croissant sur [0, 2π).
pub const ANGLES_CANONIQUES: [f64; 16] = [
    0.0,
    FRAC_PI_6,
    FRAC_PI_4,
    FRAC_PI_3,
    FRAC_PI_2,
    2.0 * PI / 3.0,
    3.0 * PI / 4.0,
    5.0 * PI / 6.0,
    PI,
    7.0 * PI / 6.0,
    5.0 * PI / 4.0,
    4.0 * PI / 3.0,
    3.0 * PI / 2.0,
    5.0 * PI / 3.0,
    7.0 * PI / 4.0,
    11.0 * PI / 6.0,
];

/* ------------------------ Normalisation / comparaison ------------------------ */

/// Ramène un angle quelconque dans [0, 2π).
///
/// Invariants : `normaliser(normaliser(a)) == normaliser(a)` et
/// `normaliser(a + 2πk) == normaliser(a)` pour tout k entier.
pub fn normaliser(angle: f64) -> f64 {
    let mut x = angle % TAU;
    if x < 0.0 {
        x += TAU;
    }
    x
}

/// Égalité approchée (tolérance par défaut), après normalisation.
pub fn approx_egal(a: f64, b: f64) -> bool {
    approx_egal_eps(a, b, EPSILON)
}

/// Égalité approchée avec tolérance explicite.
///
/// Tolère le recollement en 0/2π : 1e-9 et 2π - 1e-9 sont égaux.
pub fn approx_egal_eps(a: f64, b: f64, eps: f64) -> bool {
    let ecart = (normaliser(a) - normaliser(b)).abs();
    ecart < eps || TAU - ecart < eps
}

/* ------------------------ Quadrants ------------------------ */

/// Quadrant 1..=4 de l'angle normalisé (bornes π/2, π, 3π/2 incluses à gauche).
pub fn quadrant(angle: f64) -> u8 {
    let r = normaliser(angle);
    if r <= FRAC_PI_2 {
        1
    } else if r <= PI {
        2
    } else if r <= 3.0 * PI / 2.0 {
        3
    } else {
        4
    }
}

/// Angle de référence : repli dans [0, π/2] selon le quadrant.
pub fn angle_reference(angle: f64) -> f64 {
    let r = normaliser(angle);
    match quadrant(r) {
        1 => r,
        2 => PI - r,
        3 => r - PI,
        _ => TAU - r,
    }
}

/* ------------------------ Étiquettes en fraction de π ------------------------ */

/// Étiquette exacte d'un angle sous forme de fraction de π.
///
/// Cherche, pour q = 1..=12, un entier n avec |angle/π · q − n| < EPSILON,
/// réduit n/q, puis rend "0", "π", "-π", "nπ", "π/d" ou "nπ/d".
/// Repli (angle « irrégulier ») : valeur décimale à 2 chiffres suffixée "rad".
pub fn etiquette_fraction_pi(angle: f64) -> String {
    let k = angle / PI;
    for q in 1..=12i64 {
        let n = (k * q as f64).round();
        if (k * q as f64 - n).abs() < EPSILON {
            return format_coeff_pi(Rational64::new(n as i64, q));
        }
    }
    format!("{angle:.2} rad")
}

/// coeff·π réduit -> affichage « joli » (π/2, 3π/2, -2π, etc.).
fn format_coeff_pi(coeff: Rational64) -> String {
    if coeff.is_zero() {
        return "0".to_string();
    }

    let n = *coeff.numer();
    let d = *coeff.denom();

    // ±π, kπ
    if d == 1 {
        return match n {
            1 => "π".to_string(),
            -1 => "-π".to_string(),
            _ => format!("{n}π"),
        };
    }

    // ±π/d, kπ/d
    match n {
        1 => format!("π/{d}"),
        -1 => format!("-π/{d}"),
        _ => format!("{n}π/{d}"),
    }
}

/* ------------------------ tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normaliser_periodicite() {
        for k in -4i32..=4 {
            for &a in &ANGLES_CANONIQUES {
                let decale = a + TAU * k as f64;
                assert!(
                    (normaliser(decale) - normaliser(a)).abs() < 1e-9
                        || (TAU - (normaliser(decale) - normaliser(a)).abs()) < 1e-9,
                    "a={a} k={k}"
                );
            }
        }
    }

    #[test]
    fn normaliser_idempotent() {
        for &a in &[-7.3, -1.0, 0.0, 0.5, PI, TAU, 9.99, 100.0] {
            assert_eq!(normaliser(normaliser(a)), normaliser(a));
        }
    }

    #[test]
    fn normaliser_negatif() {
        assert!((normaliser(-FRAC_PI_2) - 3.0 * PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn approx_egal_reflexif_symetrique() {
        for &a in &ANGLES_CANONIQUES {
            assert!(approx_egal(a, a));
        }
        assert_eq!(approx_egal(0.1, 0.1 + 1e-9), approx_egal(0.1 + 1e-9, 0.1));
    }

    #[test]
    fn approx_egal_recollement() {
        // de part et d'autre du recollement 0/2π
        assert!(approx_egal(1e-9, TAU - 1e-9));
        assert!(approx_egal(-1e-9, 1e-9));
        assert!(!approx_egal(0.0, PI));
    }

    #[test]
    fn etiquettes_fraction_pi() {
        assert_eq!(etiquette_fraction_pi(0.0), "0");
        assert_eq!(etiquette_fraction_pi(PI), "π");
        assert_eq!(etiquette_fraction_pi(-PI), "-π");
        assert_eq!(etiquette_fraction_pi(FRAC_PI_6), "π/6");
        assert_eq!(etiquette_fraction_pi(5.0 * PI / 4.0), "5π/4");
        assert_eq!(etiquette_fraction_pi(TAU), "2π");
        assert_eq!(etiquette_fraction_pi(-FRAC_PI_3), "-π/3");
    }

    #[test]
    fn etiquette_reduction_fraction() {
        // 6π/12 doit sortir réduit en π/2
        assert_eq!(etiquette_fraction_pi(6.0 * PI / 12.0), "π/2");
        assert_eq!(etiquette_fraction_pi(4.0 * PI / 6.0), "2π/3");
    }

    #[test]
    fn etiquette_repli_decimal() {
        // 1 radian n'est aucun n/q avec q <= 12
        assert_eq!(etiquette_fraction_pi(1.0), "1.00 rad");
    }

    #[test]
    fn quadrants_et_references() {
        assert_eq!(quadrant(FRAC_PI_4), 1);
        assert_eq!(quadrant(2.0 * PI / 3.0), 2);
        assert_eq!(quadrant(7.0 * PI / 6.0), 3);
        assert_eq!(quadrant(11.0 * PI / 6.0), 4);

        assert!((angle_reference(2.0 * PI / 3.0) - FRAC_PI_3).abs() < 1e-12);
        assert!((angle_reference(7.0 * PI / 6.0) - FRAC_PI_6).abs() < 1e-12);
        assert!((angle_reference(11.0 * PI / 6.0) - FRAC_PI_6).abs() < 1e-12);
    }
}
