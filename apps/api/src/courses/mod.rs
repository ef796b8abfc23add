//! Course recommendations — looks up learning videos for skills a résumé is missing.
//!
//! The lookup sits behind the `CourseRecommender` trait so the handler does not care
//! whether YouTube is configured. Lookups never fail the caller: `recommend_courses`
//! turns every error into an empty list for that skill.

pub mod handlers;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Upper bound accepted by the YouTube search endpoint for `maxResults`.
pub const MAX_RESULTS_PER_SKILL: u32 = 50;
const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("course lookup is not configured (YOUTUBE_API_KEY unset)")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single course video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub channel: String,
    pub thumbnail_url: String, // empty when the API has no medium thumbnail
    pub video_url: String,
}

/// Courses found for one missing skill.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCourses {
    pub skill: String,
    pub courses: Vec<Course>,
}

#[async_trait]
pub trait CourseRecommender: Send + Sync {
    async fn search(&self, skill: &str, limit: u32) -> Result<Vec<Course>, CourseError>;
}

/// Looks up every skill in order. A failed lookup yields an empty list for that
/// skill and a warning; it never aborts the remaining lookups.
pub async fn recommend_courses(
    recommender: &dyn CourseRecommender,
    skills: &[String],
    limit: u32,
) -> Vec<SkillCourses> {
    let limit = limit.clamp(1, MAX_RESULTS_PER_SKILL);
    let mut recommendations = Vec::with_capacity(skills.len());

    for skill in skills {
        let courses = match recommender.search(skill, limit).await {
            Ok(courses) => courses,
            Err(CourseError::NotConfigured) => {
                debug!("Course lookup disabled; skipping '{skill}'");
                Vec::new()
            }
            Err(e) => {
                warn!("Course lookup for '{skill}' failed: {e}");
                Vec::new()
            }
        };
        recommendations.push(SkillCourses {
            skill: skill.clone(),
            courses,
        });
    }

    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Disabled backend
// ────────────────────────────────────────────────────────────────────────────

/// Used when no API key is configured.
pub struct DisabledRecommender;

#[async_trait]
impl CourseRecommender for DisabledRecommender {
    async fn search(&self, _skill: &str, _limit: u32) -> Result<Vec<Course>, CourseError> {
        Err(CourseError::NotConfigured)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// YouTube Data API v3
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct YouTubeRecommender {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeRecommender {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CourseRecommender for YouTubeRecommender {
    async fn search(&self, skill: &str, limit: u32) -> Result<Vec<Course>, CourseError> {
        let query = format!("{skill} course");
        let max_results = limit.to_string();

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query.as_str()),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CourseError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let courses = parse_search_response(&body)?;
        debug!("YouTube returned {} courses for '{skill}'", courses.len());
        Ok(courses)
    }
}

/// Maps a search response body to courses. Results that are not videos are skipped.
fn parse_search_response(body: &str) -> Result<Vec<Course>, CourseError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.video_id?;
            Some(Course {
                title: item.snippet.title,
                channel: item.snippet.channel_title,
                thumbnail_url: item
                    .snippet
                    .thumbnails
                    .medium
                    .map(|t| t.url)
                    .unwrap_or_default(),
                video_url: format!("{WATCH_URL}{video_id}"),
            })
        })
        .collect())
}
