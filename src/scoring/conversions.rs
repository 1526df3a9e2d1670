use crate::scoring::dimension::{count_hits, normalize, weighted_score};
use crate::scoring::patterns::{CONVERSIONS_BENEFIT, CONVERSIONS_OFFER, CONVERSIONS_PROOF};
use crate::Breakdown;

pub const OFFER_WEIGHT: f64 = 0.4;
pub const PROOF_WEIGHT: f64 = 0.3;
pub const BENEFIT_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionsCounts {
    pub benefit: usize,
    pub proof: usize,
    pub offer: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionsScore {
    pub final_score: u32,
    pub breakdown: Breakdown,
    pub counts: ConversionsCounts,
}

pub fn score(ad_text: &str) -> ConversionsScore {
    let text = ad_text.to_lowercase();
    let counts = ConversionsCounts {
        benefit: count_hits(&text, CONVERSIONS_BENEFIT),
        proof: count_hits(&text, CONVERSIONS_PROOF),
        offer: count_hits(&text, CONVERSIONS_OFFER),
    };

    let benefit = normalize(counts.benefit);
    let proof = normalize(counts.proof);
    let offer = normalize(counts.offer);

    ConversionsScore {
        final_score: weighted_score(&[
            (offer, OFFER_WEIGHT),
            (proof, PROOF_WEIGHT),
            (benefit, BENEFIT_WEIGHT),
        ]),
        breakdown: Breakdown::new()
            .with("OfferIncentive", offer)
            .with("SocialProofTrust", proof)
            .with("BenefitClarity", benefit),
        counts,
    }
}

/// Tips run offer, proof, benefit: the order the dimensions are weighted in.
pub fn feedback(counts: &ConversionsCounts) -> Vec<String> {
    let mut tips = Vec::new();
    if counts.offer == 0 {
        tips.push(
            "Add an incentive or offer. Example: 'Start your free trial', '20% off today', 'Try it risk-free'. This pushes people to buy NOW."
                .to_string(),
        );
    }
    if counts.proof == 0 {
        tips.push(
            "Add social proof to build trust. Example: 'Trusted by 10,000+ customers', '5-star rated', 'Award-winning results'."
                .to_string(),
        );
    }
    if counts.benefit == 0 {
        tips.push(
            "Make the benefit obvious. Tell the user what THEY get: 'Sleep better in 7 days', 'Grow your business without extra work', 'Save $200 a month'."
                .to_string(),
        );
    }
    if tips.is_empty() {
        tips.push(
            "Strong conversion copy. You communicate benefits, provide proof, and include an incentive to act."
                .to_string(),
        );
    }
    tips
}
