use crate::scoring::dimension::{
    count_hits, normalize, simplicity_score, weighted_score, word_count, MEDIUM_MESSAGE_WORDS,
};
use crate::scoring::patterns::{AWARENESS_BRANDING, AWARENESS_EMOTIONAL};
use crate::Breakdown;

pub const BRANDING_WEIGHT: f64 = 0.4;
pub const EMOTIONAL_WEIGHT: f64 = 0.3;
pub const SIMPLICITY_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwarenessCounts {
    pub branding: usize,
    pub emotional: usize,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AwarenessScore {
    pub final_score: u32,
    pub breakdown: Breakdown,
    pub counts: AwarenessCounts,
}

pub fn score(ad_text: &str) -> AwarenessScore {
    let text = ad_text.to_lowercase();
    let counts = AwarenessCounts {
        branding: count_hits(&text, AWARENESS_BRANDING),
        emotional: count_hits(&text, AWARENESS_EMOTIONAL),
        // Counted on the caller's text, not the lower-cased copy.
        word_count: word_count(ad_text),
    };

    let branding = normalize(counts.branding);
    let emotional = normalize(counts.emotional);
    let simplicity = simplicity_score(counts.word_count);

    AwarenessScore {
        final_score: weighted_score(&[
            (branding, BRANDING_WEIGHT),
            (emotional, EMOTIONAL_WEIGHT),
            (simplicity, SIMPLICITY_WEIGHT),
        ]),
        breakdown: Breakdown::new()
            .with("BrandClarityIdentity", branding)
            .with("EmotionalImpactTone", emotional)
            .with("MemorabilitySimplicity", simplicity),
        counts,
    }
}

/// The length tip fires only past the medium threshold; 16-30 words score 50
/// on simplicity without a tip.
pub fn feedback(counts: &AwarenessCounts) -> Vec<String> {
    let mut tips = Vec::new();
    if counts.branding == 0 {
        tips.push(
            "Make the brand more explicit. Say who you are or what you stand for (e.g. 'Introducing ___', 'Our mission is ___')."
                .to_string(),
        );
    }
    if counts.emotional == 0 {
        tips.push(
            "Use more emotional or identity-heavy language. Words like 'bold', 'fearless', 'premium', 'unforgettable' make the brand feel distinct."
                .to_string(),
        );
    }
    if counts.word_count > MEDIUM_MESSAGE_WORDS {
        tips.push(
            "Shorten the message. Awareness ads should be punchy and easy to remember. Aim for one clear sentence or tagline."
                .to_string(),
        );
    }
    if tips.is_empty() {
        tips.push(
            "Strong awareness copy. Message is emotionally memorable, clearly tied to brand identity, and easy to remember."
                .to_string(),
        );
    }
    tips
}
