use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Placeholder stored for any section the completion service did not
/// return, so rendering and export never see an absent field.
pub const MISSING_SECTION_SENTINEL: &str = "N/A";

/// The four text blobs returned by one completion call.
///
/// Created once per successful call and overwritten wholesale by the
/// next one; fields hold either real text or the `"N/A"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub study_plan: String,
    pub summarized_notes: String,
    pub quiz_questions: String,
    pub supplementary_resources: String,
}

impl GenerationResult {
    /// Build a result from optional response fields, substituting the
    /// sentinel for anything absent.
    pub fn from_optional_fields(
        study_plan: Option<String>,
        summarized_notes: Option<String>,
        quiz_questions: Option<String>,
        supplementary_resources: Option<String>,
    ) -> Self {
        let or_sentinel =
            |field: Option<String>| field.unwrap_or_else(|| MISSING_SECTION_SENTINEL.to_string());
        Self {
            study_plan: or_sentinel(study_plan),
            summarized_notes: or_sentinel(summarized_notes),
            quiz_questions: or_sentinel(quiz_questions),
            supplementary_resources: or_sentinel(supplementary_resources),
        }
    }

    pub fn section_text(&self, section: Section) -> &str {
        match section {
            Section::StudyPlan => &self.study_plan,
            Section::SummarizedNotes => &self.summarized_notes,
            Section::QuizQuestions => &self.quiz_questions,
            Section::SupplementaryResources => &self.supplementary_resources,
        }
    }
}
