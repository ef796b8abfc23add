//! Skill vocabulary — the fixed, ordered list of skill terms the extractor looks for.
//!
//! A built-in default ships with the binary. `SKILL_VOCABULARY_PATH` may point at a
//! JSON array of strings that replaces it at startup. Either way the vocabulary is
//! normalized once (trimmed, lowercased, de-duplicated in first-seen order) and then
//! shared read-only across all requests.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Default skill terms. Order here is the order skills are reported in.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "sql",
    "excel",
    "power bi",
    "tableau",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "machine learning",
    "deep learning",
    "data analysis",
    "data visualization",
    "statistics",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "html",
    "css",
    "react",
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "project management",
];

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("vocabulary file {path} is not a JSON array of strings: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("vocabulary is empty")]
    Empty,
}

/// Ordered, duplicate-free list of lowercase skill terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from arbitrary terms. Blank entries are dropped and
    /// repeated terms keep their first position.
    pub fn new<I, S>(terms: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.clone()))
            .collect();

        if terms.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { terms })
    }

    /// Loads a vocabulary from a JSON file containing an array of strings.
    pub fn from_json_file(path: &Path) -> Result<Self, VocabularyError> {
        let path_label = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path_label.clone(),
            source,
        })?;
        let terms: Vec<String> =
            serde_json::from_str(&raw).map_err(|source| VocabularyError::Parse {
                path: path_label.clone(),
                source,
            })?;
        let vocabulary = Self::new(terms)?;
        info!("Loaded {} skill terms from {path_label}", vocabulary.len());
        Ok(vocabulary)
    }

    /// Uses the file at `path` when given, otherwise the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self, VocabularyError> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self {
            terms: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
