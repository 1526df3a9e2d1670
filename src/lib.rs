pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod image;
pub mod llm;
pub mod scoring;
pub mod server;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub use analyzer::{AdAnalyzer, AdRequest};
pub use error::{ConfigError, LlmError, ValidationError};
pub use image::ImageSignals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    Clicks,
    Conversions,
    Awareness,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Clicks, Goal::Conversions, Goal::Awareness];

    /// Exact, case-sensitive match on the wire name.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "clicks" => Some(Goal::Clicks),
            "conversions" => Some(Goal::Conversions),
            "awareness" => Some(Goal::Awareness),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::Clicks => "clicks",
            Goal::Conversions => "conversions",
            Goal::Awareness => "awareness",
        }
    }
}

/// Dimension label to 0-100 score. Serializes as a JSON object whose keys
/// keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    entries: Vec<(&'static str, u32)>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: &'static str, score: u32) -> Self {
        self.entries.push((label, score));
        self
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, score)| *score)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, score) in &self.entries {
            map.serialize_entry(label, score)?;
        }
        map.end()
    }
}

/// Response body of one analysis. Every field is always emitted so the
/// shape does not depend on the goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub goal_analyzed: String,
    pub message: Option<String>,
    pub score: Option<u32>,
    pub breakdown: Option<Breakdown>,
    pub ai_summary: Option<String>,
    pub rewrite: Option<String>,
    pub image_advice: Option<String>,
    pub suggestions: Vec<String>,
}

pub fn verdict(score: u32) -> &'static str {
    if score >= 80 {
        "strong and close to ready to run"
    } else if score >= 60 {
        "decent but still missing key elements"
    } else if score >= 40 {
        "average and needs important improvements before running paid spend"
    } else {
        "weak and not aligned with the goal yet"
    }
}
