//! Axum route handler for course recommendations.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::courses::{recommend_courses, SkillCourses};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CoursesRequest {
    pub skills: Vec<String>,
    /// Results per skill; defaults to COURSE_RESULTS_LIMIT.
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub recommendations: Vec<SkillCourses>,
}

/// POST /api/v1/courses
///
/// Looks up courses for each skill, typically the `missing_skills` of an analysis.
/// Lookup failures show up as empty course lists, never as an error response.
pub async fn handle_courses(
    State(state): State<AppState>,
    Json(request): Json<CoursesRequest>,
) -> Result<Json<CoursesResponse>, AppError> {
    let skills: Vec<String> = request
        .skills
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if skills.len() != request.skills.len() {
        return Err(AppError::Validation("skills cannot contain blank entries".to_string()));
    }

    let limit = request.limit.unwrap_or(state.config.course_results_limit);
    let recommendations = recommend_courses(state.recommender.as_ref(), &skills, limit).await;

    Ok(Json(CoursesResponse { recommendations }))
}
