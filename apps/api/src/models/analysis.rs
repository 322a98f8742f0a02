use serde::{Deserialize, Serialize};

/// One extracted skill and how strongly the job description signals it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResult {
    pub name: String,
    /// 0.0 – 1.0
    pub confidence: f32,
}

impl SkillResult {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// A portfolio project suggestion derived from a single top-ranked skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
    pub related_skill: String,
}

/// Everything shown to the user for one submission. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sorted by confidence descending; ties keep extraction order.
    pub skills: Vec<SkillResult>,
    /// One per skill in `skills`, same order.
    pub ideas: Vec<ProjectIdea>,
}
