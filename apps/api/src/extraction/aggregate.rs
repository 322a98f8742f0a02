//! Skill aggregation across several job descriptions.
//!
//! A skill's combined confidence is the mean over the postings that mention it.
//! Postings that do not mention a skill do not pull its average down.

use std::collections::HashMap;

use crate::extraction::parser::rank_skills;
use crate::models::analysis::SkillResult;

struct Tally {
    name: String,
    total: f32,
    count: u32,
}

/// Merges per-posting skill lists by case-insensitive name.
///
/// The display name is the first spelling seen; ties in the averaged
/// confidence keep first-appearance order.
pub fn aggregate_skills(per_posting: &[Vec<SkillResult>]) -> Vec<SkillResult> {
    let mut order: Vec<Tally> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for skill in per_posting.iter().flatten() {
        let key = skill.name.to_lowercase();
        match index.get(&key) {
            Some(&i) => {
                order[i].total += skill.confidence;
                order[i].count += 1;
            }
            None => {
                index.insert(key, order.len());
                order.push(Tally {
                    name: skill.name.clone(),
                    total: skill.confidence,
                    count: 1,
                });
            }
        }
    }

    let mut merged: Vec<SkillResult> = order
        .into_iter()
        .map(|t| SkillResult::new(t.name, (t.total / t.count as f32).clamp(0.0, 1.0)))
        .collect();

    rank_skills(&mut merged);
    merged
}
