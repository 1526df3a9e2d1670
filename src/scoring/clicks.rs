use crate::scoring::dimension::{count_hits, normalize, weighted_score};
use crate::scoring::patterns::{CLICKS_CTA, CLICKS_CURIOSITY, CLICKS_URGENCY};
use crate::Breakdown;

pub const CTA_WEIGHT: f64 = 0.4;
pub const URGENCY_WEIGHT: f64 = 0.3;
pub const CURIOSITY_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClicksCounts {
    pub cta: usize,
    pub urgency: usize,
    pub curiosity: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClicksScore {
    pub final_score: u32,
    pub breakdown: Breakdown,
    pub counts: ClicksCounts,
}

pub fn score(ad_text: &str) -> ClicksScore {
    let text = ad_text.to_lowercase();
    let counts = ClicksCounts {
        cta: count_hits(&text, CLICKS_CTA),
        urgency: count_hits(&text, CLICKS_URGENCY),
        curiosity: count_hits(&text, CLICKS_CURIOSITY),
    };

    let cta = normalize(counts.cta);
    let urgency = normalize(counts.urgency);
    let curiosity = normalize(counts.curiosity);

    ClicksScore {
        final_score: weighted_score(&[
            (cta, CTA_WEIGHT),
            (urgency, URGENCY_WEIGHT),
            (curiosity, CURIOSITY_WEIGHT),
        ]),
        breakdown: Breakdown::new()
            .with("CTA", cta)
            .with("Urgency", urgency)
            .with("Curiosity", curiosity),
        counts,
    }
}

pub fn feedback(counts: &ClicksCounts) -> Vec<String> {
    let mut tips = Vec::new();
    if counts.cta == 0 {
        tips.push(
            "Add a direct call to action like 'Tap to learn more', 'Sign up now', or 'Get started'."
                .to_string(),
        );
    }
    if counts.urgency == 0 {
        tips.push(
            "Add urgency to push immediate action. Example: 'Limited time offer', 'Ends today', 'Only a few left'."
                .to_string(),
        );
    }
    if counts.curiosity == 0 {
        tips.push(
            "Add curiosity to earn the click. Example: 'You won't believe this...', 'What nobody tells you...', 'The secret they don't want you to know...'."
                .to_string(),
        );
    }
    if tips.is_empty() {
        tips.push(
            "Strong click-focused ad. You use CTA, urgency, and curiosity to drive high click-through."
                .to_string(),
        );
    }
    tips
}
