pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::courses::handlers as courses;
use crate::documents::handlers as documents;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skills
        .route(
            "/api/v1/skills/vocabulary",
            get(matching::handle_vocabulary),
        )
        .route(
            "/api/v1/skills/extract",
            post(matching::handle_extract_skills),
        )
        // Analysis
        .route("/api/v1/analysis", post(matching::handle_analyze))
        .route(
            "/api/v1/analysis/upload",
            post(matching::handle_analyze_upload),
        )
        // Documents
        .route(
            "/api/v1/documents/extract",
            post(documents::handle_extract_document),
        )
        // Courses
        .route("/api/v1/courses", post(courses::handle_courses))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::courses::{Course, CourseError, CourseRecommender, DisabledRecommender};
    use crate::matching::vocabulary::SkillVocabulary;

    const BOUNDARY: &str = "skillgap-test-boundary";

    struct StaticRecommender;

    #[async_trait]
    impl CourseRecommender for StaticRecommender {
        async fn search(&self, skill: &str, limit: u32) -> Result<Vec<Course>, CourseError> {
            Ok((0..limit)
                .map(|i| Course {
                    title: format!("{skill} course {i}"),
                    channel: "Channel".to_string(),
                    thumbnail_url: String::new(),
                    video_url: format!("https://www.youtube.com/watch?v={i}"),
                })
                .collect())
        }
    }

    fn state_with(recommender: Arc<dyn CourseRecommender>, config: Config) -> AppState {
        AppState {
            config,
            vocabulary: Arc::new(SkillVocabulary::default()),
            recommender,
        }
    }

    fn app() -> Router {
        build_router(state_with(Arc::new(DisabledRecommender), Config::default()))
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(uri: &str, files: &[(&str, &str, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (field, file_name, content) in files {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_vocabulary_lists_default_skills() {
        let request = Request::get("/api/v1/skills/vocabulary")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let skills = body["skills"].as_array().unwrap();
        assert_eq!(skills.len(), SkillVocabulary::default().len());
        assert_eq!(skills[0], "python");
    }

    #[tokio::test]
    async fn test_extract_skills() {
        let request = json_request(
            "/api/v1/skills/extract",
            json!({"text": "PYTHON and Tableau dashboards"}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!(["python", "tableau"]));
    }

    #[tokio::test]
    async fn test_analyze_scenario() {
        let request = json_request(
            "/api/v1/analysis",
            json!({
                "resume_text": "Experienced in Python and SQL, strong communication.",
                "job_text": "Looking for Python, Power BI, and leadership skills."
            }),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);

        let result = &body["result"];
        assert_eq!(result["resume_skills"], json!(["python", "sql", "communication"]));
        assert_eq!(result["job_skills"], json!(["python", "power bi", "leadership"]));
        assert_eq!(result["missing_skills"], json!(["power bi", "leadership"]));
        let score = result["match_score"].as_f64().unwrap();
        assert!(score > 0.0 && score < 100.0);
        assert!(body["analysis_id"].is_string());
        assert!(body["resume_summary"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_accepts_missing_fields() {
        let request = json_request(
            "/api/v1/analysis",
            json!({"job_text": "SQL and Tableau required."}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["match_score"].as_f64(), Some(0.0));
        assert_eq!(body["result"]["missing_skills"], json!(["sql", "tableau"]));
        assert_eq!(body["resume_summary"], "No content extracted.");
    }

    #[tokio::test]
    async fn test_analyze_upload_txt_files() {
        let request = multipart_request(
            "/api/v1/analysis/upload",
            &[
                ("resume", "resume.txt", b"Python developer with SQL.".as_slice()),
                ("job", "job.TXT", b"Python and Docker required.".as_slice()),
            ],
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["missing_skills"], json!(["docker"]));
    }

    #[tokio::test]
    async fn test_analyze_upload_requires_both_files() {
        let request = multipart_request(
            "/api/v1/analysis/upload",
            &[("resume", "resume.txt", b"Python".as_slice())],
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_extract_document_unsupported() {
        let request = multipart_request(
            "/api/v1/documents/extract",
            &[("file", "photo.png", b"\x89PNG".as_slice())],
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_DOCUMENT");
    }

    #[tokio::test]
    async fn test_extract_document_txt() {
        let request = multipart_request(
            "/api/v1/documents/extract",
            &[("file", "cv.txt", b"First. Second. Third. Fourth.".as_slice())],
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "txt");
        assert_eq!(body["summary"], "First... Second... Third...");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_rejected() {
        let config = Config {
            max_upload_bytes: 64,
            ..Config::default()
        };
        let app = build_router(state_with(Arc::new(DisabledRecommender), config));
        let big = vec![b'a'; 1024];
        let request = multipart_request(
            "/api/v1/documents/extract",
            &[("file", "big.txt", big.as_slice())],
        );

        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_courses_disabled_returns_empty_lists() {
        let request = json_request(
            "/api/v1/courses",
            json!({"skills": ["power bi", "leadership"]}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["skill"], "power bi");
        assert_eq!(recs[0]["courses"], json!([]));
    }

    #[tokio::test]
    async fn test_courses_uses_configured_default_limit() {
        let app = build_router(state_with(Arc::new(StaticRecommender), Config::default()));
        let request = json_request("/api/v1/courses", json!({"skills": ["sql"]}));
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"][0]["courses"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_courses_rejects_blank_skill() {
        let request = json_request("/api/v1/courses", json!({"skills": ["sql", "  "]}));
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
