use std::sync::Arc;
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{LlmError, ValidationError};
use crate::image::{self, ImageSignals};
use crate::llm::{build_prompt, AdReviewer, AiReview};
use crate::scoring::{self, GoalEvaluation};
use crate::{AnalysisResult, Goal};

pub const SUMMARY_UNAVAILABLE: &str =
    "AI summary unavailable. (Model call failed or not configured.)";
pub const REWRITE_UNAVAILABLE: &str =
    "Rewrite unavailable. Add your OpenAI API key in .env to enable AI rewrites.";
pub const UNSUPPORTED_GOAL_MESSAGE: &str =
    "Goal not implemented. Use 'clicks', 'conversions', or 'awareness'.";

/// A validated analysis request. Only constructible through [`AdRequest::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct AdRequest {
    ad_text: String,
    goal: String,
    image_signals: Option<ImageSignals>,
}

impl AdRequest {
    pub fn new(
        ad_text: Option<String>,
        goal: Option<String>,
        image_signals: Option<ImageSignals>,
    ) -> Result<Self, ValidationError> {
        let ad_text = ad_text.filter(|text| !text.trim().is_empty());
        // Only an absent or empty goal is missing; any other text is routed
        // to the unsupported-goal response.
        let goal = goal.filter(|goal| !goal.is_empty());
        match (ad_text, goal) {
            (Some(ad_text), Some(goal)) => Ok(Self {
                ad_text,
                goal,
                image_signals,
            }),
            _ => Err(ValidationError::MissingInput),
        }
    }

    pub fn ad_text(&self) -> &str {
        &self.ad_text
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn image_signals(&self) -> Option<&ImageSignals> {
        self.image_signals.as_ref()
    }
}

#[derive(Clone)]
pub struct AdAnalyzer {
    reviewer: Option<Arc<dyn AdReviewer>>,
    review_timeout: Duration,
}

impl AdAnalyzer {
    pub fn new(reviewer: Option<Arc<dyn AdReviewer>>, review_timeout: Duration) -> Self {
        Self {
            reviewer,
            review_timeout,
        }
    }

    /// Scores without any remote review; AI fields get the placeholders.
    pub fn offline() -> Self {
        Self::new(None, LlmConfig::default().timeout())
    }

    pub fn review_timeout(&self) -> Duration {
        self.review_timeout
    }

    pub fn has_reviewer(&self) -> bool {
        self.reviewer.is_some()
    }

    pub async fn analyze(&self, request: &AdRequest) -> AnalysisResult {
        let Some(goal) = Goal::from_str(request.goal()) else {
            tracing::info!(goal = request.goal(), "unsupported goal requested");
            return unsupported(request.goal());
        };

        let evaluation = scoring::evaluate(goal, request.ad_text());
        let image_advice = image::advise(Some(goal), request.image_signals());
        tracing::info!(
            goal = goal.label(),
            score = evaluation.score,
            tips = evaluation.suggestions.len(),
            "scored ad"
        );

        let review = self.review(request.ad_text(), &evaluation).await;

        AnalysisResult {
            goal_analyzed: request.goal().to_string(),
            message: None,
            score: Some(evaluation.score),
            breakdown: Some(evaluation.breakdown),
            ai_summary: Some(review.summary),
            rewrite: Some(review.rewrite),
            image_advice: Some(image_advice.to_string()),
            suggestions: evaluation.suggestions,
        }
    }

    async fn review(&self, ad_text: &str, evaluation: &GoalEvaluation) -> AiReview {
        let Some(reviewer) = self.reviewer.as_ref() else {
            tracing::debug!("no reviewer configured; using placeholder text");
            return placeholder_review();
        };

        let prompt = build_prompt(
            ad_text,
            evaluation.goal,
            evaluation.score,
            &evaluation.breakdown,
        );
        let call = reviewer.analyze(&prompt);
        let outcome = match tokio::time::timeout(self.review_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.review_timeout.as_millis())),
        };

        match outcome {
            Ok(review) => review,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    goal = evaluation.goal.label(),
                    "ad review failed"
                );
                placeholder_review()
            }
        }
    }
}

fn placeholder_review() -> AiReview {
    AiReview {
        summary: SUMMARY_UNAVAILABLE.to_string(),
        rewrite: REWRITE_UNAVAILABLE.to_string(),
    }
}

fn unsupported(goal: &str) -> AnalysisResult {
    AnalysisResult {
        goal_analyzed: goal.to_string(),
        message: Some(UNSUPPORTED_GOAL_MESSAGE.to_string()),
        score: None,
        breakdown: None,
        ai_summary: None,
        rewrite: None,
        image_advice: None,
        suggestions: Vec::new(),
    }
}
