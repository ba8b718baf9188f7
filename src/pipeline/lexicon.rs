//! Domain word lists for the rule-based classifier.
//!
//! Selection is a plain trigger-word check on the lower-cased claim. Claims
//! that match neither the medical nor the astronomy triggers (geography,
//! history, ...) get the scientific lexicon. That default is a known gap in
//! the heuristic and is kept as-is.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Medical,
    Astronomy,
    Scientific,
}

#[derive(Debug)]
pub struct Lexicon {
    pub domain: Domain,
    pub support: &'static [&'static str],
    pub refute: &'static [&'static str],
}

const MEDICAL_TRIGGERS: &[&str] = &["vaccine", "autism", "medical", "health"];
const ASTRONOMY_TRIGGERS: &[&str] = &["planet", "jupiter", "solar system", "space", "nasa"];

pub static SCIENTIFIC: Lexicon = Lexicon {
    domain: Domain::Scientific,
    support: &[
        "scientific",
        "established",
        "confirmed",
        "proven",
        "research shows",
        "studies indicate",
        "fact",
        "accurate",
        "correct",
        "well-documented",
        "consensus",
        "evidence",
        "fundamental",
    ],
    refute: &[
        "false",
        "incorrect",
        "wrong",
        "myth",
        "debunked",
        "not true",
        "misconception",
        "urban legend",
        "fraudulent",
        "retracted",
        "disproven",
        "not 48",
        "46 chromosomes",
        "different from",
    ],
};

pub static MEDICAL: Lexicon = Lexicon {
    domain: Domain::Medical,
    support: &[
        "medical consensus",
        "clinical studies",
        "peer-reviewed",
        "scientific evidence",
        "health organizations",
        "medical community",
        "research confirms",
        "safe",
        "approved",
    ],
    refute: &[
        "no link",
        "no connection",
        "debunked",
        "myth",
        "false claim",
        "not supported by evidence",
        "fraudulent study",
        "retracted",
        "disproven",
        "do not cause",
    ],
};

pub static ASTRONOMY: Lexicon = Lexicon {
    domain: Domain::Astronomy,
    support: &[
        "nasa confirms",
        "astronomical",
        "solar system",
        "planet",
        "largest",
        "scientific fact",
    ],
    refute: &[
        "not visible",
        "myth",
        "false",
        "cannot be seen",
        "debunked",
        "incorrect",
    ],
};

impl Domain {
    pub fn lexicon(self) -> &'static Lexicon {
        match self {
            Domain::Medical => &MEDICAL,
            Domain::Astronomy => &ASTRONOMY,
            Domain::Scientific => &SCIENTIFIC,
        }
    }
}

/// Medical triggers win over astronomy ones; everything else, including
/// biology, chemistry and physics claims, is scientific.
pub fn select_domain(claim: &str) -> Domain {
    let lower = claim.to_lowercase();
    let mentions = |triggers: &[&str]| triggers.iter().any(|t| lower.contains(t));
    if mentions(MEDICAL_TRIGGERS) {
        Domain::Medical
    } else if mentions(ASTRONOMY_TRIGGERS) {
        Domain::Astronomy
    } else {
        Domain::Scientific
    }
}
