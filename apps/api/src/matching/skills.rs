//! Skill extraction — case-insensitive substring membership against the vocabulary.
//!
//! Matching is deliberately naive: the text is not tokenized, so "java" is found
//! inside "javascript". Callers rely on this observable behavior.

use serde::{Deserialize, Serialize};

use crate::matching::vocabulary::SkillVocabulary;

/// A duplicate-free set of vocabulary terms, kept in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Skills in `self` that are absent from `other`. Order is preserved.
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        SkillSet(
            self.0
                .iter()
                .filter(|s| !other.contains(s))
                .cloned()
                .collect(),
        )
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Returns every vocabulary term occurring anywhere in `text`, ignoring case.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
    if text.is_empty() {
        return SkillSet::default();
    }

    let lowered = text.to_lowercase();
    SkillSet(
        vocabulary
            .iter()
            .filter(|term| lowered.contains(term))
            .map(String::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(text: &str) -> Vec<String> {
        extract_skills(text, &SkillVocabulary::default()).into_vec()
    }

    #[test]
    fn test_empty_text_has_no_skills() {
        assert!(skills("").is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(skills("Enjoys gardening and long walks.").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(skills("PYTHON developer"), vec!["python"]);
    }

    #[test]
    fn test_multi_word_terms() {
        let found = skills("Looking for Python, Power BI, and leadership skills.");
        assert_eq!(found, vec!["python", "power bi", "leadership"]);
    }

    #[test]
    fn test_substring_policy_matches_java_inside_javascript() {
        let found = skills("Senior JavaScript engineer");
        assert!(found.contains(&"java".to_string()));
        assert!(found.contains(&"javascript".to_string()));
    }

    #[test]
    fn test_repeated_mentions_reported_once() {
        assert_eq!(skills("sql, SQL and more Sql"), vec!["sql"]);
    }

    #[test]
    fn test_result_is_subset_of_vocabulary() {
        let vocab = SkillVocabulary::default();
        let text = "Python SQL Tableau Docker git communication teamwork nothing-else";
        let found = extract_skills(text, &vocab);
        assert!(found.iter().all(|s| vocab.contains(s)));
    }

    #[test]
    fn test_result_follows_vocabulary_order() {
        let vocab = SkillVocabulary::new(["tableau", "sql", "python"]).unwrap();
        let found = extract_skills("python then sql then tableau", &vocab);
        assert_eq!(found.into_vec(), vec!["tableau", "sql", "python"]);
    }

    #[test]
    fn test_difference_keeps_order_and_excludes_other() {
        let vocab = SkillVocabulary::default();
        let job = extract_skills("python power bi leadership", &vocab);
        let resume = extract_skills("python", &vocab);
        let missing = job.difference(&resume);
        assert_eq!(missing.into_vec(), vec!["power bi", "leadership"]);
    }
}
