pub mod awareness;
pub mod clicks;
pub mod conversions;
pub mod dimension;
pub mod patterns;

pub use awareness::{AwarenessCounts, AwarenessScore};
pub use clicks::{ClicksCounts, ClicksScore};
pub use conversions::{ConversionsCounts, ConversionsScore};
pub use dimension::{count_hits, normalize, simplicity_score, weighted_score, word_count};

use crate::{Breakdown, Goal};

/// Score plus tips for one goal, independent of any remote call.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalEvaluation {
    pub goal: Goal,
    pub score: u32,
    pub breakdown: Breakdown,
    pub suggestions: Vec<String>,
}

pub fn evaluate(goal: Goal, ad_text: &str) -> GoalEvaluation {
    let (score, breakdown, suggestions) = match goal {
        Goal::Clicks => {
            let result = clicks::score(ad_text);
            let tips = clicks::feedback(&result.counts);
            (result.final_score, result.breakdown, tips)
        }
        Goal::Conversions => {
            let result = conversions::score(ad_text);
            let tips = conversions::feedback(&result.counts);
            (result.final_score, result.breakdown, tips)
        }
        Goal::Awareness => {
            let result = awareness::score(ad_text);
            let tips = awareness::feedback(&result.counts);
            (result.final_score, result.breakdown, tips)
        }
    };

    GoalEvaluation {
        goal,
        score,
        breakdown,
        suggestions,
    }
}
