//! Similarity scoring — bag-of-words cosine similarity plus the skill gap.
//!
//! Algorithm:
//! 1. Count tokens in each text (see `text::tokenize`).
//! 2. Cosine similarity over the union of both token sets.
//!    Either vector being all-zero scores 0 instead of dividing by zero.
//! 3. match_score = similarity × 100, rounded to two decimals.
//! 4. Skills are extracted from each text; missing = job − resume, in vocabulary order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::skills::{extract_skills, SkillSet};
use crate::matching::text::term_frequencies;
use crate::matching::vocabulary::SkillVocabulary;

/// Outcome of comparing one résumé against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: f64, // 0.0 – 100.0
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    pub missing_skills: SkillSet, // job_skills − resume_skills
}

/// Compares `resume_text` with `job_text`. Total over all inputs: empty or
/// token-free texts score 0.
pub fn analyze(resume_text: &str, job_text: &str, vocabulary: &SkillVocabulary) -> AnalysisResult {
    let similarity = cosine_similarity(
        &term_frequencies(resume_text),
        &term_frequencies(job_text),
    );
    let match_score = to_match_score(similarity);

    let resume_skills = extract_skills(resume_text, vocabulary);
    let job_skills = extract_skills(job_text, vocabulary);
    let missing_skills = job_skills.difference(&resume_skills);

    debug!(
        match_score,
        resume_skills = resume_skills.len(),
        job_skills = job_skills.len(),
        missing_skills = missing_skills.len(),
        "analysis complete"
    );

    AnalysisResult {
        match_score,
        resume_skills,
        job_skills,
        missing_skills,
    }
}

/// Cosine of the angle between two term-frequency vectors. Tokens missing from
/// one side count as zero there.
pub fn cosine_similarity(a: &HashMap<String, u32>, b: &HashMap<String, u32>) -> f64 {
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Iterate the smaller map; only shared tokens contribute to the dot product.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    // fold from +0.0: an empty f64 sum is -0.0, which would serialize as "-0.0"
    let dot = small
        .iter()
        .filter_map(|(token, &count)| large.get(token).map(|&other| count as f64 * other as f64))
        .fold(0.0_f64, |acc, x| acc + x);
    if dot == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn norm(v: &HashMap<String, u32>) -> f64 {
    v.values()
        .map(|&c| (c as f64) * (c as f64))
        .sum::<f64>()
        .sqrt()
}

fn to_match_score(similarity: f64) -> f64 {
    ((similarity * 100.0) * 100.0).round() / 100.0
}
