//! Backend Context Source - ProjectContextSource over the project backend's REST API.
//!
//! Every collection is fetched concurrently with the caller's credentials.
//! Blockers and sprint detail are best effort: their failures are logged and
//! the context is built without them.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{AUTHORIZATION, COOKIE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::domain::context::{
    ActivityEntry, Blocker, ContextMetadata, Member, ProjectContext, ProjectInfo, Sprint, Task,
    UpstreamSnapshot,
};
use crate::ports::{ContextFetchError, ContextRequest, ForwardedCredentials, ProjectContextSource};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api";

/// Activity entries requested per fetch.
const ACTIVITY_FETCH_LIMIT: u32 = 100;

const NO_QUERY: &[(&str, String)] = &[];

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendClientConfig {
    /// Base URL including the API prefix (e.g. `http://localhost:5000/api`).
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BackendClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl BackendClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct BackendContextSource {
    config: BackendClientConfig,
    client: Client,
}

impl BackendContextSource {
    pub fn new(config: BackendClientConfig) -> Result<Self, ContextFetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ContextFetchError::connection(&config.base_url, e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ContextFetchError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ContextFetchError::connection(&self.config.base_url, e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| {
                ContextFetchError::connection(&self.config.base_url, "base URL cannot carry a path")
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GETs an endpoint and returns the decoded JSON body.
    async fn get_json(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        credentials: &ForwardedCredentials,
    ) -> Result<Value, ContextFetchError> {
        let endpoint = format!("/{}", segments.join("/"));
        let url = self.endpoint_url(segments)?;
        tracing::debug!(url = %url, "Fetching backend data");

        let mut builder = self.client.get(url).query(query);
        if let Some(authorization) = &credentials.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(cookie) = &credentials.cookie {
            builder = builder.header(COOKIE, cookie);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ContextFetchError::timeout(&endpoint)
            } else {
                ContextFetchError::connection(&self.config.base_url, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContextFetchError::status(&endpoint, status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ContextFetchError::decode(&endpoint, e.to_string()))
    }

    async fn fetch_project(
        &self,
        project_id: &str,
        credentials: &ForwardedCredentials,
    ) -> Result<ProjectInfo, ContextFetchError> {
        let segments = ["project", project_id];
        let mut body = self.get_json(&segments, NO_QUERY, credentials).await?;
        let endpoint = format!("/project/{}", project_id);

        match body.get_mut("project").map(Value::take) {
            Some(project) => decode_field(&endpoint, project),
            None => Err(ContextFetchError::missing_field(endpoint, "project")),
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        field: &str,
        credentials: &ForwardedCredentials,
    ) -> Result<Vec<T>, ContextFetchError> {
        let mut body = self.get_json(segments, query, credentials).await?;
        let endpoint = format!("/{}", segments.join("/"));

        match body.get_mut(field).map(Value::take) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(items) => decode_field(&endpoint, items),
        }
    }

    /// Fetches one sprint by id. A body without `sprint` but with `success`
    /// yields `None`.
    async fn fetch_sprint_detail(
        &self,
        sprint_id: &str,
        credentials: &ForwardedCredentials,
    ) -> Result<Option<Sprint>, ContextFetchError> {
        let segments = ["sprint", "sprint", sprint_id];
        let mut body = self.get_json(&segments, NO_QUERY, credentials).await?;
        let endpoint = format!("/sprint/sprint/{}", sprint_id);

        if body.get("sprint").is_none() && body.get("success").is_none() {
            return Err(ContextFetchError::missing_field(endpoint, "sprint"));
        }

        match body.get_mut("sprint").map(Value::take) {
            None | Some(Value::Null) => Ok(None),
            Some(sprint) => decode_field(&endpoint, sprint).map(Some),
        }
    }
}

fn decode_field<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, ContextFetchError> {
    serde_json::from_value(value).map_err(|e| ContextFetchError::decode(endpoint, e.to_string()))
}

#[async_trait]
impl ProjectContextSource for BackendContextSource {
    async fn fetch_context(
        &self,
        request: ContextRequest,
    ) -> Result<ProjectContext, ContextFetchError> {
        let ContextRequest {
            project_id,
            sprint_id,
            credentials,
        } = request;
        let id = project_id.as_str();
        let creds = &credentials;

        tracing::info!(
            project_id = %project_id,
            sprint_id = ?sprint_id,
            forwarded_auth = !creds.is_empty(),
            "Fetching project context"
        );

        let task_path = ["tasks", id];
        let sprint_path = ["sprint", id];
        let member_path = ["projectMember", id];
        let activity_query = [
            ("project", project_id.clone()),
            ("limit", ACTIVITY_FETCH_LIMIT.to_string()),
        ];
        let blocker_query = [
            ("projectId", project_id.clone()),
            ("resolved", "false".to_string()),
        ];

        let sprint_detail = async {
            match sprint_id.as_deref() {
                Some(sprint) => Some(self.fetch_sprint_detail(sprint, creds).await),
                None => None,
            }
        };

        let (project, tasks, sprints, members, activity, blockers, sprint_detail) = tokio::join!(
            self.fetch_project(id, creds),
            self.fetch_list::<Task>(&task_path, NO_QUERY, "tasks", creds),
            self.fetch_list::<Sprint>(&sprint_path, NO_QUERY, "sprints", creds),
            self.fetch_list::<Member>(&member_path, NO_QUERY, "members", creds),
            self.fetch_list::<ActivityEntry>(
                &["activity-logs"],
                &activity_query,
                "activityLogs",
                creds
            ),
            self.fetch_list::<Blocker>(&["blockers"], &blocker_query, "blockers", creds),
            sprint_detail,
        );

        let project = project?;
        let tasks = tasks?;
        let sprints = sprints?;
        let members = members?;
        let activity = activity?;

        let blockers = blockers.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Failed to fetch blockers, continuing without them");
            Vec::new()
        });

        let sprint_detail = match sprint_detail {
            Some(Ok(detail)) => detail,
            Some(Err(err)) => {
                tracing::warn!(error = %err, "Failed to fetch sprint detail, continuing without it");
                None
            }
            None => None,
        };

        tracing::info!(
            tasks = tasks.len(),
            sprints = sprints.len(),
            members = members.len(),
            blockers = blockers.len(),
            "Project context fetched"
        );

        let snapshot = UpstreamSnapshot {
            project,
            tasks,
            sprints,
            members,
            activity,
            blockers,
            sprint_detail,
        };
        let metadata = ContextMetadata {
            fetched_at: Some(Utc::now()),
            project_id: Some(project_id),
            sprint_id,
        };

        Ok(ProjectContext::from_snapshot(snapshot, metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> BackendContextSource {
        BackendContextSource::new(BackendClientConfig::new(base)).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = BackendClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn endpoint_url_appends_segments_to_api_prefix() {
        let url = source("http://localhost:5000/api")
            .endpoint_url(&["sprint", "sprint", "s-1"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/sprint/sprint/s-1");
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let url = source("http://localhost:5000/api/")
            .endpoint_url(&["tasks", "p-1"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/tasks/p-1");
    }

    #[test]
    fn endpoint_url_encodes_ids() {
        let url = source("http://localhost:5000/api")
            .endpoint_url(&["project", "a/b c"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/project/a%2Fb%20c");
    }

    #[test]
    fn invalid_base_url_is_connection_error() {
        let result = source("not a url").endpoint_url(&["tasks"]);
        assert!(matches!(result, Err(ContextFetchError::Connection { .. })));
    }

    #[tokio::test]
    async fn unreachable_backend_fails_with_connection_error() {
        let source = BackendContextSource::new(
            BackendClientConfig::new("http://127.0.0.1:1/api").with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let result = source.fetch_context(ContextRequest::new("p-1")).await;

        assert!(matches!(
            result,
            Err(ContextFetchError::Connection { .. }) | Err(ContextFetchError::Timeout { .. })
        ));
    }
}
