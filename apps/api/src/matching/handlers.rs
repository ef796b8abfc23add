//! Axum route handlers for the matching API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::documents::handlers::{collect_uploads, take_upload};
use crate::documents::read_document;
use crate::errors::AppError;
use crate::matching::similarity::{analyze, AnalysisResult};
use crate::matching::skills::{extract_skills, SkillSet};
use crate::matching::text::summarize;
use crate::matching::vocabulary::SkillVocabulary;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub skills: SkillVocabulary,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: SkillSet,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_text: String,
}

/// One analysis, built fresh per request. Nothing is kept after it is returned.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
    pub resume_summary: String,
    pub job_summary: String,
}

impl AnalysisResponse {
    fn build(resume_text: &str, job_text: &str, vocabulary: &SkillVocabulary) -> Self {
        let result = analyze(resume_text, job_text, vocabulary);
        let response = AnalysisResponse {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            resume_summary: summarize(resume_text),
            job_summary: summarize(job_text),
            result,
        };
        info!(
            "Analysis {}: score {:.2}, {} missing skills",
            response.analysis_id,
            response.result.match_score,
            response.result.missing_skills.len()
        );
        response
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills/vocabulary
pub async fn handle_vocabulary(State(state): State<AppState>) -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        skills: state.vocabulary.as_ref().clone(),
    })
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Json<ExtractSkillsResponse> {
    Json(ExtractSkillsResponse {
        skills: extract_skills(&request.text, &state.vocabulary),
    })
}

/// POST /api/v1/analysis
///
/// Compares résumé text with job text. Empty texts are valid and score 0.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisResponse> {
    Json(AnalysisResponse::build(
        &request.resume_text,
        &request.job_text,
        &state.vocabulary,
    ))
}

/// POST /api/v1/analysis/upload
///
/// Multipart fields `resume` and `job` (pdf, docx, doc or txt). Both files are
/// converted to text and then analyzed exactly like `POST /api/v1/analysis`.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut uploads = collect_uploads(multipart).await?;
    let resume = take_upload(&mut uploads, "resume")?;
    let job = take_upload(&mut uploads, "job")?;

    let resume_text = read_document(&resume.file_name, resume.bytes).await?;
    let job_text = read_document(&job.file_name, job.bytes).await?;

    Ok(Json(AnalysisResponse::build(
        &resume_text,
        &job_text,
        &state.vocabulary,
    )))
}
