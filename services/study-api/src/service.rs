//! Session service
//!
//! Owns the per-session contexts and orchestrates one user action at a
//! time: generate, page through sections, export. Sessions are keyed
//! by id and never share state; the map lock is held only around state
//! reads and writes, never across the remote completion call.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use studymate_models::{pagination, Section, SectionToggleSet, SessionState};
use studymate_utils::{export_filename, StudyMateError, StudyMateResult};

use crate::completion_client::CompletionClient;
use crate::docx_writer;
use crate::pdf_processor::PdfProcessor;

/// The single section to render, plus enough position information for
/// the navigation controls.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub has_generated: bool,
    pub total_pages: usize,
    pub page: Option<usize>,
    pub section: Option<Section>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PageView {
    fn empty(has_generated: bool) -> Self {
        Self {
            has_generated,
            total_pages: 0,
            page: None,
            section: None,
            title: None,
            content: None,
        }
    }
}

/// Acknowledgement of a freshly opened session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a completed generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub session_id: Uuid,
    pub topic: String,
    pub material_chars: usize,
    pub sections_enabled: usize,
    /// Set when no sections were selected; generation still ran.
    pub warning: Option<String>,
}

/// A ready-to-download export.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct SessionService {
    sessions: Arc<RwLock<HashMap<Uuid, SessionState>>>,
    pdf_processor: Arc<PdfProcessor>,
    completion_client: Arc<CompletionClient>,
}

impl SessionService {
    pub fn new(completion_client: CompletionClient) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            pdf_processor: Arc::new(PdfProcessor::new()),
            completion_client: Arc::new(completion_client),
        }
    }

    /// Open a fresh session context.
    pub async fn create_session(&self) -> SessionCreated {
        let id = Uuid::new_v4();
        let state = SessionState::new();
        let created = SessionCreated {
            session_id: id,
            created_at: state.created_at,
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, state);
        info!(session_id = %id, "session created");
        created
    }

    /// Drop a session context; its state is gone after this.
    pub async fn end_session(&self, id: Uuid) -> StudyMateResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(&id)
            .map(|_| info!(session_id = %id, "session ended"))
            .ok_or(StudyMateError::SessionNotFound)
    }

    /// Run one generation: validate inputs, extract the PDF text, call
    /// the completion service, and store the result. Any failure
    /// before the final store leaves the previous session state
    /// untouched.
    pub async fn generate(
        &self,
        id: Uuid,
        pdf_bytes: &[u8],
        topic: &str,
        toggles: &SectionToggleSet,
    ) -> StudyMateResult<GenerationSummary> {
        {
            let sessions = self.sessions.read().await;
            if !sessions.contains_key(&id) {
                return Err(StudyMateError::SessionNotFound);
            }
        }

        if pdf_bytes.is_empty() {
            return Err(StudyMateError::validation(
                "file",
                "please upload a PDF and enter a topic/keyword",
            ));
        }
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(StudyMateError::validation(
                "topic",
                "please upload a PDF and enter a topic/keyword",
            ));
        }

        // Independent of the input checks: an all-off toggle set is a
        // warning, not a blocker.
        let warning = if toggles.none_enabled() {
            warn!(session_id = %id, "generation requested with no sections selected");
            Some("please select at least one study option".to_string())
        } else {
            None
        };

        let learning_material = self.pdf_processor.extract_text(pdf_bytes)?;
        info!(
            session_id = %id,
            material_chars = learning_material.len(),
            topic,
            "extracted learning material, requesting generation"
        );

        let generation = self
            .completion_client
            .generate_study_materials(&learning_material, topic)
            .await?;

        let mut sessions = self.sessions.write().await;
        let state = sessions
            .get_mut(&id)
            .ok_or(StudyMateError::SessionNotFound)?;
        state.record_generation(generation, topic.to_string());
        info!(session_id = %id, topic, "generation stored");

        Ok(GenerationSummary {
            session_id: id,
            topic: topic.to_string(),
            material_chars: learning_material.len(),
            sections_enabled: toggles.enabled_sections().len(),
            warning,
        })
    }

    /// The page currently selected by the session's page number,
    /// clamped into the enabled-section range.
    pub async fn current_page(
        &self,
        id: Uuid,
        toggles: &SectionToggleSet,
    ) -> StudyMateResult<PageView> {
        let sessions = self.sessions.read().await;
        let state = sessions.get(&id).ok_or(StudyMateError::SessionNotFound)?;
        Ok(Self::view_for(state, toggles))
    }

    /// Move one page back, then report the page.
    pub async fn previous_page(
        &self,
        id: Uuid,
        toggles: &SectionToggleSet,
    ) -> StudyMateResult<PageView> {
        self.navigate(id, toggles, pagination::previous_page).await
    }

    /// Move one page forward, then report the page.
    pub async fn next_page(
        &self,
        id: Uuid,
        toggles: &SectionToggleSet,
    ) -> StudyMateResult<PageView> {
        self.navigate(id, toggles, pagination::next_page).await
    }

    async fn navigate(
        &self,
        id: Uuid,
        toggles: &SectionToggleSet,
        step: fn(u32, usize) -> u32,
    ) -> StudyMateResult<PageView> {
        let mut sessions = self.sessions.write().await;
        let state = sessions
            .get_mut(&id)
            .ok_or(StudyMateError::SessionNotFound)?;

        if state.has_generated {
            let total = toggles.enabled_sections().len();
            state.page_number = step(state.page_number, total);
        }
        Ok(Self::view_for(state, toggles))
    }

    /// Assemble the export document for the enabled sections.
    pub async fn export(
        &self,
        id: Uuid,
        toggles: &SectionToggleSet,
    ) -> StudyMateResult<ExportedDocument> {
        let sessions = self.sessions.read().await;
        let state = sessions.get(&id).ok_or(StudyMateError::SessionNotFound)?;

        let (generation, topic) = match (&state.generation, &state.topic) {
            (Some(generation), Some(topic)) => (generation, topic),
            _ => {
                return Err(StudyMateError::validation(
                    "session",
                    "nothing has been generated yet",
                ))
            }
        };

        let bytes = docx_writer::build_document(topic, generation, toggles)?;
        info!(session_id = %id, bytes = bytes.len(), "export assembled");

        Ok(ExportedDocument {
            filename: export_filename(topic),
            bytes,
        })
    }

    fn view_for(state: &SessionState, toggles: &SectionToggleSet) -> PageView {
        let generation = match (&state.generation, state.has_generated) {
            (Some(generation), true) => generation,
            _ => return PageView::empty(false),
        };

        let enabled = toggles.enabled_sections();
        let Some(index) = pagination::effective_index(state.page_number, enabled.len()) else {
            return PageView::empty(true);
        };

        let section = enabled[index];
        PageView {
            has_generated: true,
            total_pages: enabled.len(),
            page: Some(index + 1),
            section: Some(section),
            title: Some(section.title().to_string()),
            content: Some(generation.section_text(section).to_string()),
        }
    }
}
