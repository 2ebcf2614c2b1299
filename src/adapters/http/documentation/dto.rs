//! HTTP DTOs (Data Transfer Objects) for documentation endpoints.
//!
//! These types define the JSON request/response structure for the
//! documentation API. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::application::handlers::documentation::{DocumentMetadata, GenerateDocumentCommand};
use crate::domain::catalog::{DocumentStructure, DocumentTypeDefinition};
use crate::domain::document::{CustomSection, GeneratedDocument, SelectedSection, UserCustomization};
use crate::ports::ForwardedCredentials;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A catalog subsection picked by the user.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectedSectionDto {
    /// Subsection id, e.g. `"1.1"`.
    pub id: String,
    pub title: String,
}

/// A user-defined section.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomSectionDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to generate a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDocumentRequest {
    pub document_type: String,
    pub project_id: String,
    #[serde(default)]
    pub sprint_id: Option<String>,
    #[serde(default)]
    pub user_requirements: Option<String>,
    #[serde(default)]
    pub selected_sections: Vec<SelectedSectionDto>,
    #[serde(default)]
    pub custom_sections: Vec<CustomSectionDto>,
    #[serde(default)]
    pub additional_notes: Option<String>,
    #[serde(default = "default_include_data_summary")]
    pub include_data_summary: bool,
}

fn default_include_data_summary() -> bool {
    true
}

impl GenerateDocumentRequest {
    /// Converts the request into an application command.
    pub fn into_command(self, credentials: ForwardedCredentials) -> GenerateDocumentCommand {
        let customization = UserCustomization {
            user_requirements: self.user_requirements,
            selected_sections: self
                .selected_sections
                .into_iter()
                .map(|s| SelectedSection::new(s.id, s.title))
                .collect(),
            custom_sections: self
                .custom_sections
                .into_iter()
                .map(|s| CustomSection {
                    title: s.title,
                    description: s.description,
                })
                .collect(),
            additional_notes: self.additional_notes,
            include_data_summary: self.include_data_summary,
        };

        let mut cmd = GenerateDocumentCommand::new(self.document_type, self.project_id)
            .with_customization(customization)
            .with_credentials(credentials);
        if let Some(sprint_id) = self.sprint_id {
            cmd = cmd.with_sprint(sprint_id);
        }
        cmd
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response listing the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentTypesResponse {
    pub success: bool,
    pub document_types: &'static [DocumentTypeDefinition],
    pub categories: Vec<&'static str>,
}

/// Response carrying one document type's structure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStructureResponse {
    pub success: bool,
    /// Canonical key of the resolved type.
    pub document_type: &'static str,
    pub structure: DocumentStructure,
}

/// Response for a generated document.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateDocumentResponse {
    pub success: bool,
    pub document: GeneratedDocument,
    pub metadata: DocumentMetadata,
}

/// Uniform failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always false.
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_applies_defaults() {
        let json = r#"{"documentType": "SRS", "projectId": "p-1"}"#;
        let req: GenerateDocumentRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.document_type, "SRS");
        assert!(req.sprint_id.is_none());
        assert!(req.selected_sections.is_empty());
        assert!(req.custom_sections.is_empty());
        assert!(req.include_data_summary);
    }

    #[test]
    fn generate_request_converts_to_command() {
        let json = r#"{
            "documentType": "sprint_report",
            "projectId": "p-1",
            "sprintId": "s-1",
            "userRequirements": "Focus on risks",
            "selectedSections": [{"id": "1.1", "title": "Sprint Goal"}],
            "customSections": [{"title": "Lessons"}, {"title": "Budget", "description": "Spend"}],
            "additionalNotes": null,
            "includeDataSummary": false
        }"#;
        let req: GenerateDocumentRequest = serde_json::from_str(json).unwrap();
        let credentials = ForwardedCredentials {
            authorization: Some("Bearer t".to_string()),
            cookie: None,
        };

        let cmd = req.into_command(credentials.clone());

        assert_eq!(cmd.document_type, "sprint_report");
        assert_eq!(cmd.sprint_id.as_deref(), Some("s-1"));
        assert_eq!(cmd.credentials, credentials);
        let c = &cmd.customization;
        assert_eq!(c.user_requirements.as_deref(), Some("Focus on risks"));
        assert_eq!(c.selected_sections, vec![SelectedSection::new("1.1", "Sprint Goal")]);
        assert_eq!(c.custom_sections[0].description, None);
        assert_eq!(c.custom_sections[1].description.as_deref(), Some("Spend"));
        assert!(c.additional_notes.is_none());
        assert!(!c.include_data_summary);
    }

    #[test]
    fn generate_request_requires_project_id() {
        let json = r#"{"documentType": "SRS"}"#;
        assert!(serde_json::from_str::<GenerateDocumentRequest>(json).is_err());
    }

    #[test]
    fn error_response_is_unsuccessful() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "boom"}));
    }
}
