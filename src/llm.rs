use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::env;

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::{verdict, Breakdown, Goal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiReview {
    pub summary: String,
    pub rewrite: String,
}

/// Remote reviewer that turns a prompt into a summary and rewritten ad.
#[async_trait]
pub trait AdReviewer: Send + Sync {
    async fn analyze(&self, prompt: &str) -> Result<AiReview, LlmError>;
}

pub fn build_prompt(ad_text: &str, goal: Goal, score: u32, breakdown: &Breakdown) -> String {
    let breakdown_json =
        serde_json::to_string_pretty(breakdown).unwrap_or_else(|_| "{}".to_string());
    format!(
        r#"
You are an expert paid ads strategist. Your job is to evaluate ads for a specific campaign goal and then improve them.

GOAL: {goal}
ORIGINAL_AD_TEXT: """{ad_text}"""

NUMERICAL_SCORE_FOR_THIS_GOAL: {score} / 100 ({verdict})
SCORE_BREAKDOWN (0-100 each):
{breakdown_json}

TASKS:
1. Give a short honest performance review for this ad *for this goal*. Mention what's working and what's missing.
2. Give the top 2-3 fixes that would most improve performance.
3. Write a stronger revised version of the ad that's under 30 words, punchy, and does not invent fake numbers or fake guarantees.

Return ONLY valid JSON:
{{
  "aiSummary": "...human readable analysis + top fixes...",
  "rewrite": "...short improved ad copy under 30 words..."
}}
"#,
        goal = goal.label(),
        verdict = verdict(score),
    )
}

#[derive(Clone)]
pub struct OpenAiReviewer {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: f64,
}

impl OpenAiReviewer {
    /// `None` when `OPENAI_API_KEY` is unset or blank.
    pub fn from_env(
        config: &LlmConfig,
        model_override: Option<String>,
    ) -> Result<Option<Self>, LlmError> {
        let api_key = match env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => return Ok(None),
        };
        Self::new(config, api_key, model_override).map(Some)
    }

    pub fn new(
        config: &LlmConfig,
        api_key: String,
        model_override: Option<String>,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| LlmError::Config(err.to_string()))?;
        Ok(Self {
            client,
            api_key,
            api_base: config.api_base.clone(),
            model: model_override.unwrap_or_else(|| config.model.clone()),
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AdReviewer for OpenAiReviewer {
    async fn analyze(&self, prompt: &str) -> Result<AiReview, LlmError> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        };

        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.len(),
            "calling chat completions"
        );
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default().trim().to_string();
            return Err(LlmError::Api { status, detail });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::MissingChoices)?
            .message
            .content
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(parse_review(&content))
    }
}

const SYSTEM_PROMPT: &str = "You are a brutally honest performance marketing strategist. Be direct, practical, and conversion-minded.";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct RawReview {
    #[serde(rename = "aiSummary")]
    ai_summary: Option<String>,
    rewrite: Option<String>,
}

/// Reads the model's answer. Text that is not the expected JSON object is
/// kept whole as the summary with an empty rewrite.
pub fn parse_review(raw: &str) -> AiReview {
    let raw = raw.trim();
    let parsed = extract_json(raw).and_then(|json| serde_json::from_str::<RawReview>(json).ok());

    match parsed {
        Some(review) => AiReview {
            summary: review
                .ai_summary
                .filter(|summary| !summary.trim().is_empty())
                .unwrap_or_else(|| raw.to_string()),
            rewrite: review.rewrite.unwrap_or_default(),
        },
        None => AiReview {
            summary: raw.to_string(),
            rewrite: String::new(),
        },
    }
}

fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start >= end {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let review =
            parse_review(r#"{"aiSummary": "Weak hook.", "rewrite": "Try it free today."}"#);
        assert_eq!(review.summary, "Weak hook.");
        assert_eq!(review.rewrite, "Try it free today.");
    }

    #[test]
    fn parses_fenced_json() {
        let raw = "```json\n{\"aiSummary\": \"Solid.\", \"rewrite\": \"Go.\"}\n```";
        let review = parse_review(raw);
        assert_eq!(review.summary, "Solid.");
        assert_eq!(review.rewrite, "Go.");
    }

    #[test]
    fn prose_becomes_summary() {
        let review = parse_review("This ad is fine but lacks a CTA.");
        assert_eq!(review.summary, "This ad is fine but lacks a CTA.");
        assert_eq!(review.rewrite, "");
    }

    #[test]
    fn broken_json_becomes_summary() {
        let raw = r#"{"aiSummary": "cut off"#;
        let review = parse_review(raw);
        assert_eq!(review.summary, raw);
        assert!(review.rewrite.is_empty());
    }

    #[test]
    fn missing_summary_uses_raw_text() {
        let raw = r#"{"rewrite": "Shorter ad."}"#;
        let review = parse_review(raw);
        assert_eq!(review.summary, raw);
        assert_eq!(review.rewrite, "Shorter ad.");
    }

    #[test]
    fn prompt_carries_score_and_breakdown() {
        let breakdown = Breakdown::new().with("CTA", 50).with("Urgency", 0).with("Curiosity", 100);
        let prompt = build_prompt("Tap here", Goal::Clicks, 50, &breakdown);
        assert!(prompt.contains("GOAL: clicks"));
        assert!(prompt.contains(r#"ORIGINAL_AD_TEXT: """Tap here""""#));
        assert!(prompt.contains("50 / 100"));
        assert!(prompt.contains("\"Urgency\": 0"));
        assert!(prompt.contains("\"aiSummary\""));
    }
}
