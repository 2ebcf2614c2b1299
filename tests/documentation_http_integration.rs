//! Integration tests for documentation HTTP endpoints.
//!
//! These tests drive the composed application router with mock ports:
//! 1. The API key guard protects documentation routes only
//! 2. Generation forwards caller credentials and customization
//! 3. Failures use the uniform `{success: false, error}` envelope

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{TimeZone, Utc};
use secrecy::Secret;
use serde_json::{json, Value};
use tower::ServiceExt;

use doc_agent::adapters::ai::MockTextGenerator;
use doc_agent::adapters::http::{app_router, ApiKeyAuth, DocumentationAppState};
use doc_agent::domain::context::{ContextMetadata, ProjectContext, ProjectInfo, Sprint};
use doc_agent::ports::{
    ContextFetchError, ContextRequest, GenerationError, ProjectContextSource,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Context source returning a fixed result and recording requests.
struct RecordingContextSource {
    result: Result<ProjectContext, ContextFetchError>,
    requests: Mutex<Vec<ContextRequest>>,
}

impl RecordingContextSource {
    fn returning(context: ProjectContext) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(context),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(err: ContextFetchError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(err),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<ContextRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectContextSource for RecordingContextSource {
    async fn fetch_context(
        &self,
        request: ContextRequest,
    ) -> Result<ProjectContext, ContextFetchError> {
        self.requests.lock().unwrap().push(request);
        self.result.clone()
    }
}

const API_KEY: &str = "agent-key";

fn apollo_context() -> ProjectContext {
    ProjectContext {
        project: Some(ProjectInfo {
            id: Some("p-1".to_string()),
            name: Some("Apollo".to_string()),
            ..Default::default()
        }),
        sprint_detail: Some(Sprint {
            record_id: Some("rec-7".to_string()),
            sprint_id: Some("Sprint 7".to_string()),
            ..Default::default()
        }),
        metadata: ContextMetadata {
            fetched_at: Some(Utc.with_ymd_and_hms(2024, 6, 3, 9, 30, 0).unwrap()),
            project_id: Some("p-1".to_string()),
            sprint_id: Some("s-7".to_string()),
        },
        ..Default::default()
    }
}

fn app(source: Arc<RecordingContextSource>, generator: MockTextGenerator) -> Router {
    let state = DocumentationAppState::new(source, Arc::new(generator));
    let auth = ApiKeyAuth::new("X-API-Key", Some(Secret::new(API_KEY.to_string()))).unwrap();
    app_router(state, auth)
}

fn generate_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/documentation/generate")
        .header("Content-Type", "application/json")
        .header("X-API-Key", API_KEY)
        .header("Authorization", "Bearer user-token")
        .header("Cookie", "sid=42")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// =============================================================================
// Generation
// =============================================================================

#[tokio::test]
async fn generate_sprint_report_end_to_end() {
    let source = RecordingContextSource::returning(apollo_context());
    let generator = MockTextGenerator::new().with_response(
        "```markdown\n# Sprint 7 Report\n\n## 1. Sprint Overview\nGoal met.\n\n## 2. Metrics\nVelocity 20\n```",
    );
    let app = app(source.clone(), generator.clone());

    let response = app
        .oneshot(generate_request(json!({
            "documentType": "sprint_report",
            "projectId": "p-1",
            "sprintId": "s-7",
            "userRequirements": "Highlight risks",
            "selectedSections": [{"id": "1.1", "title": "Sprint Goal"}],
            "customSections": [{"title": "Retro Actions", "description": "What we change"}]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["success"], true);

    let document = &json["document"];
    assert_eq!(document["title"], "Sprint 7 Report");
    assert_eq!(document["sections"].as_array().unwrap().len(), 3);
    assert_eq!(document["sections"][1]["content"], "Goal met.");
    assert_eq!(document["documentType"], "Sprint Report");
    assert_eq!(document["category"], "Agile");
    assert!(!document["content"].as_str().unwrap().contains("```"));
    assert_eq!(document["wordCount"], 15);

    assert_eq!(
        json["metadata"],
        json!({
            "documentType": "SPRINT_REPORT",
            "generatedAt": "2024-06-03T09:30:00.000Z",
            "model": "mock-model-1",
            "projectId": "p-1",
            "sprintId": "rec-7"
        })
    );

    let requests = source.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].sprint_id.as_deref(), Some("s-7"));
    assert_eq!(
        requests[0].credentials.authorization.as_deref(),
        Some("Bearer user-token")
    );
    assert_eq!(requests[0].credentials.cookie.as_deref(), Some("sid=42"));

    let prompt = &generator.prompts()[0];
    assert!(prompt.contains("Highlight risks"));
    assert!(prompt.contains("Retro Actions"));
    assert!(prompt.contains("Sprint 7"));
}

#[tokio::test]
async fn generate_unknown_type_is_404_without_fetching() {
    let source = RecordingContextSource::returning(apollo_context());
    let generator = MockTextGenerator::new();
    let app = app(source.clone(), generator.clone());

    let response = app
        .oneshot(generate_request(json!({"documentType": "POEM", "projectId": "p-1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "error": "Document type 'POEM' not found"})
    );
    assert!(source.requests().is_empty());
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn generate_upstream_failure_is_500() {
    let source = RecordingContextSource::failing(ContextFetchError::connection(
        "http://backend/api",
        "connection refused",
    ));
    let app = app(source, MockTextGenerator::new());

    let response = app
        .oneshot(generate_request(json!({"documentType": "SRS", "projectId": "p-1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["error"],
        "Document generation failed: Failed to fetch project context: cannot reach backend at http://backend/api: connection refused"
    );
}

#[tokio::test]
async fn generate_model_failure_is_500() {
    let source = RecordingContextSource::returning(apollo_context());
    let generator =
        MockTextGenerator::new().with_error(GenerationError::content_blocked("SAFETY"));
    let app = app(source, generator);

    let response = app
        .oneshot(generate_request(json!({"documentType": "SRS", "projectId": "p-1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert_eq!(
        json["error"],
        "Document generation failed: Text generation failed: content blocked: SAFETY"
    );
}

#[tokio::test]
async fn generate_rejects_malformed_body() {
    let app = app(
        RecordingContextSource::returning(ProjectContext::default()),
        MockTextGenerator::new(),
    );

    let response = app
        .oneshot(generate_request(json!({"projectId": "p-1"})))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// =============================================================================
// Catalog and Auth
// =============================================================================

#[tokio::test]
async fn catalog_requires_api_key() {
    let app = app(
        RecordingContextSource::returning(ProjectContext::default()),
        MockTextGenerator::new(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/documentation/types/SRS/structure")
                .header("X-API-Key", "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "error": "Invalid or missing agent API key"})
    );
}

#[tokio::test]
async fn structure_with_key_returns_sections() {
    let app = app(
        RecordingContextSource::returning(ProjectContext::default()),
        MockTextGenerator::new(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/documentation/structure/technical_spec")
                .header("x-api-key", API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["documentType"], "TECHNICAL_SPEC");
    let sections = json["structure"]["structure"].as_array().unwrap();
    assert!(!sections.is_empty());
    assert!(sections
        .iter()
        .all(|s| s["subsections"].as_array().is_some_and(|subs| !subs.is_empty())));
}

#[tokio::test]
async fn probes_stay_open() {
    let app = app(
        RecordingContextSource::returning(ProjectContext::default()),
        MockTextGenerator::new(),
    );

    for uri in ["/health", "/ready"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert_eq!(json_body(response).await["ok"], true);
    }
}
