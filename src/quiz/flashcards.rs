// src/quiz/flashcards.rs
//
// Le paquet de flashcards — formules clés du chapitre.
// Contenu fixe, dans l'ordre du cours ; la vue boucle dessus.

/// Une carte recto/verso.
#[derive(Clone, Copy, Debug)]
pub struct Carte {
    pub recto: &'static str,
    pub verso: &'static str,
}

pub const CARTES: [Carte; 12] = [
    Carte {
        recto: "Valeurs remarquables — sin",
        verso: "sin(0)=0, sin(π/6)=1/2, sin(π/4)=√2/2, sin(π/3)=√3/2, sin(π/2)=1.",
    },
    Carte {
        recto: "Valeurs remarquables — cos",
        verso: "cos(0)=1, cos(π/6)=√3/2, cos(π/4)=√2/2, cos(π/3)=1/2, cos(π/2)=0.",
    },
    Carte {
        recto: "Signes par quadrant",
        verso: "Q1: sin+, cos+ • Q2: sin+, cos- • Q3: sin-, cos- • Q4: sin-, cos+",
    },
    Carte {
        recto: "Périodicité",
        verso: "sin(x+2π)=sin x, cos(x+2π)=cos x. Période fondamentale 2π.",
    },
    Carte {
        recto: "Parité",
        verso: "sin(-x)=-sin x (impaire), cos(-x)=cos x (paire).",
    },
    Carte {
        recto: "Complémentaire",
        verso: "sin(π/2 - x)=cos x, cos(π/2 - x)=sin x.",
    },
    Carte {
        recto: "Formules d'addition (sin)",
        verso: "sin(a±b)=sin a cos b ± cos a sin b.",
    },
    Carte {
        recto: "Formules d'addition (cos)",
        verso: "cos(a±b)=cos a cos b ∓ sin a sin b.",
    },
    Carte {
        recto: "Angles associés (π±x)",
        verso: "sin(π - x)=sin x, sin(π + x)=-sin x; cos(π - x)=-cos x, cos(π + x)=-cos x.",
    },
    Carte {
        recto: "Double angle",
        verso: "sin(2x)=2 sin x cos x; cos(2x)=cos² x - sin² x=1-2sin² x=2cos² x-1.",
    },
    Carte {
        recto: "Identité fondamentale",
        verso: "sin² x + cos² x = 1 (pour tout x).",
    },
    Carte {
        recto: "Tangente (rappel)",
        verso: "tan x = sin x / cos x quand cos x ≠ 0; tan(x+π)=tan x.",
    },
];
