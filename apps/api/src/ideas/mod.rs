//! Idea Generator — pluggable, trait-based derivation of portfolio project ideas
//! from the top-ranked skills.
//!
//! Default: `LlmIdeaGenerator` (secondary completion call, catalog fallback).
//! Alternative: `CatalogIdeaGenerator` (static lookup, no network).
//!
//! `AppState` holds an `Arc<dyn IdeaGenerator>`, chosen at startup via `IDEA_SOURCE`.
//! Generation is best-effort: it never fails, so it can never block skill display.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::ideas::prompts::{IDEAS_PROMPT_TEMPLATE, IDEAS_TASK};
use crate::llm_client::prompts::{CAREER_COACH_PERSONA, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{complete_json, CompletionClient};
use crate::models::analysis::{ProjectIdea, SkillResult};

pub mod catalog;
pub mod prompts;

/// Returns exactly one idea per input skill, in input order.
#[async_trait]
pub trait IdeaGenerator: Send + Sync {
    async fn generate(&self, skills: &[SkillResult]) -> Vec<ProjectIdea>;
}

// ────────────────────────────────────────────────────────────────────────────
// CatalogIdeaGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct CatalogIdeaGenerator;

#[async_trait]
impl IdeaGenerator for CatalogIdeaGenerator {
    async fn generate(&self, skills: &[SkillResult]) -> Vec<ProjectIdea> {
        skills.iter().map(|s| catalog::idea_for(&s.name)).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmIdeaGenerator
// ────────────────────────────────────────────────────────────────────────────

/// One idea as the model returns it. Every field is optional so a partially
/// filled object still deserializes.
#[derive(Debug, Deserialize)]
struct IdeaDraft {
    #[serde(default)]
    skill: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

impl IdeaDraft {
    fn is_usable(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Asks the model for one idea per skill in a single call.
/// Skills the model skips, and the whole batch on any error, get catalog ideas.
pub struct LlmIdeaGenerator {
    llm: Arc<dyn CompletionClient>,
}

impl LlmIdeaGenerator {
    pub fn new(llm: Arc<dyn CompletionClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl IdeaGenerator for LlmIdeaGenerator {
    async fn generate(&self, skills: &[SkillResult]) -> Vec<ProjectIdea> {
        if skills.is_empty() {
            return Vec::new();
        }

        let prompt = build_ideas_prompt(skills);
        let system = format!("{CAREER_COACH_PERSONA} {IDEAS_TASK} {JSON_ONLY_INSTRUCTION}");

        let drafts =
            match complete_json::<Vec<IdeaDraft>>(self.llm.as_ref(), &prompt, &system).await {
                Ok(drafts) => drafts,
                Err(e) => {
                    warn!("Idea generation failed, using catalog templates: {e}");
                    Vec::new()
                }
            };

        merge_with_catalog(skills, drafts)
    }
}

fn build_ideas_prompt(skills: &[SkillResult]) -> String {
    let list = skills
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s.name))
        .collect::<Vec<_>>()
        .join("\n");

    IDEAS_PROMPT_TEMPLATE
        .replace("{skill_count}", &skills.len().to_string())
        .replace("{skills}", &list)
}

/// Pairs each skill with the draft naming it. Drafts without a `skill` are
/// paired by position when there is exactly one per skill. Anything unmatched
/// or blank falls back to the catalog.
fn merge_with_catalog(skills: &[SkillResult], drafts: Vec<IdeaDraft>) -> Vec<ProjectIdea> {
    let positional = drafts.len() == skills.len();
    let mut used = vec![false; drafts.len()];

    skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let by_name = drafts.iter().enumerate().position(|(i, d)| {
                !used[i] && d.is_usable() && d.skill.trim().eq_ignore_ascii_case(skill.name.trim())
            });
            let chosen = by_name.or_else(|| {
                let d = drafts.get(index)?;
                (positional && !used[index] && d.skill.trim().is_empty() && d.is_usable())
                    .then_some(index)
            });

            match chosen {
                Some(i) => {
                    used[i] = true;
                    let draft = &drafts[i];
                    ProjectIdea {
                        title: draft.title.trim().to_string(),
                        description: draft.description.trim().to_string(),
                        related_skill: skill.name.clone(),
                    }
                }
                None => {
                    warn!("No generated idea for '{}', using catalog", skill.name);
                    catalog::idea_for(&skill.name)
                }
            }
        })
        .collect()
}
