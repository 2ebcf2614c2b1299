//! GenerateDocumentHandler - Command handler for generating project documents.
//!
//! Resolves the document type, gathers project context from upstream, builds
//! the prompt, calls the text generator and parses its markdown output.
//! Nothing is persisted.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::catalog::{CatalogError, DocumentCatalog};
use crate::domain::document::{GeneratedDocument, PromptAssembler, ResponseParser, UserCustomization};
use crate::ports::{
    ContextFetchError, ContextRequest, ForwardedCredentials, GenerationError, GenerationRequest,
    ProjectContextSource, TextGenerator,
};

/// Command to generate one document.
#[derive(Debug, Clone)]
pub struct GenerateDocumentCommand {
    /// Document type key as supplied by the caller.
    pub document_type: String,
    pub project_id: String,
    pub sprint_id: Option<String>,
    pub customization: UserCustomization,
    /// Forwarded to the upstream backend.
    pub credentials: ForwardedCredentials,
}

impl GenerateDocumentCommand {
    pub fn new(document_type: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            document_type: document_type.into(),
            project_id: project_id.into(),
            sprint_id: None,
            customization: UserCustomization::default(),
            credentials: ForwardedCredentials::default(),
        }
    }

    pub fn with_sprint(mut self, sprint_id: impl Into<String>) -> Self {
        self.sprint_id = Some(sprint_id.into());
        self
    }

    pub fn with_customization(mut self, customization: UserCustomization) -> Self {
        self.customization = customization;
        self
    }

    pub fn with_credentials(mut self, credentials: ForwardedCredentials) -> Self {
        self.credentials = credentials;
        self
    }
}

/// Provenance of a generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Canonical document type key.
    pub document_type: String,
    /// RFC 3339 timestamp of the context snapshot.
    pub generated_at: String,
    pub model: String,
    pub project_id: String,
    /// Storage id of the sprint detail used, if any.
    pub sprint_id: Option<String>,
}

/// Result of successful document generation.
#[derive(Debug, Clone)]
pub struct GenerateDocumentResult {
    pub document: GeneratedDocument,
    pub metadata: DocumentMetadata,
}

/// Error type for document generation.
#[derive(Debug, Clone)]
pub enum GenerateDocumentError {
    /// The requested type is not in the catalog.
    UnknownDocumentType(CatalogError),
    /// Upstream project data could not be gathered.
    UpstreamFetch(ContextFetchError),
    /// The text generator failed or produced nothing.
    Generation(GenerationError),
}

impl std::fmt::Display for GenerateDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateDocumentError::UnknownDocumentType(err) => write!(f, "{}", err),
            GenerateDocumentError::UpstreamFetch(err) => {
                write!(f, "Failed to fetch project context: {}", err)
            }
            GenerateDocumentError::Generation(err) => write!(f, "Text generation failed: {}", err),
        }
    }
}

impl std::error::Error for GenerateDocumentError {}

impl From<CatalogError> for GenerateDocumentError {
    fn from(err: CatalogError) -> Self {
        GenerateDocumentError::UnknownDocumentType(err)
    }
}

impl From<ContextFetchError> for GenerateDocumentError {
    fn from(err: ContextFetchError) -> Self {
        GenerateDocumentError::UpstreamFetch(err)
    }
}

impl From<GenerationError> for GenerateDocumentError {
    fn from(err: GenerationError) -> Self {
        GenerateDocumentError::Generation(err)
    }
}

/// Handler for generating project documents.
///
/// # Dependencies
///
/// - `ProjectContextSource`: Upstream project data
/// - `TextGenerator`: Generative model
/// - `ResponseParser`: Markdown to structured document
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateDocumentHandler::new(catalog, context_source, generator, parser);
/// let cmd = GenerateDocumentCommand::new("SRS", "proj-42");
/// let result = handler.handle(cmd).await?;
/// println!("{}", result.document.content);
/// ```
pub struct GenerateDocumentHandler {
    catalog: DocumentCatalog,
    context_source: Arc<dyn ProjectContextSource>,
    generator: Arc<dyn TextGenerator>,
    parser: Arc<ResponseParser>,
    assembler: PromptAssembler,
}

impl GenerateDocumentHandler {
    pub fn new(
        catalog: DocumentCatalog,
        context_source: Arc<dyn ProjectContextSource>,
        generator: Arc<dyn TextGenerator>,
        parser: Arc<ResponseParser>,
    ) -> Self {
        Self {
            catalog,
            context_source,
            generator,
            parser,
            assembler: PromptAssembler::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateDocumentCommand,
    ) -> Result<GenerateDocumentResult, GenerateDocumentError> {
        // 1. Resolve the document type
        let definition = self.catalog.resolve(&cmd.document_type)?;

        // 2. Gather project context
        let mut request = ContextRequest::new(&cmd.project_id).with_credentials(cmd.credentials);
        if let Some(sprint_id) = &cmd.sprint_id {
            request = request.with_sprint(sprint_id);
        }
        let context = self.context_source.fetch_context(request).await?;

        // 3. Assemble the prompt
        let prompt = self.assembler.build(definition, &context, &cmd.customization);
        tracing::info!(
            document_type = definition.key,
            prompt_chars = prompt.len(),
            selected_sections = cmd.customization.selected_sections.len(),
            "Prompt assembled"
        );

        // 4. Generate
        let response = self.generator.generate(GenerationRequest::new(prompt)).await?;
        if response.text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse.into());
        }

        // 5. Parse
        let document = self.parser.parse(&response.text, definition);
        tracing::info!(
            document_type = definition.key,
            word_count = document.word_count,
            sections = document.sections.len(),
            "Document generated"
        );

        let generated_at = context
            .metadata
            .fetched_at
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let metadata = DocumentMetadata {
            document_type: definition.key.to_string(),
            generated_at,
            model: response.model,
            project_id: context
                .project_id()
                .map(str::to_string)
                .unwrap_or(cmd.project_id),
            sprint_id: context.sprint_detail_id().map(str::to_string),
        };

        Ok(GenerateDocumentResult { document, metadata })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
