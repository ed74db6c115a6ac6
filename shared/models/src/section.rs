use serde::{Deserialize, Serialize};

/// One of the four named content blocks produced by a generation.
///
/// The variant order here is the canonical section order; every place
/// that walks sections (page view, export) iterates [`Section::ALL`]
/// and filters, never reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    StudyPlan,
    SummarizedNotes,
    QuizQuestions,
    SupplementaryResources,
}

impl Section {
    /// Canonical order: Study Plan, Summarized Notes, Quiz Questions,
    /// Supplementary Resources.
    pub const ALL: [Section; 4] = [
        Section::StudyPlan,
        Section::SummarizedNotes,
        Section::QuizQuestions,
        Section::SupplementaryResources,
    ];

    /// Display title used in the paged view.
    pub fn title(&self) -> &'static str {
        match self {
            Section::StudyPlan => "Study Plan",
            Section::SummarizedNotes => "Summarized Notes",
            Section::QuizQuestions => "Quiz Questions",
            Section::SupplementaryResources => "Supplementary Resources",
        }
    }

    /// Heading used in the exported document. The quiz section carries
    /// a longer heading in the document than in the paged view.
    pub fn export_heading(&self) -> &'static str {
        match self {
            Section::QuizQuestions => "Example Questions with Answers",
            other => other.title(),
        }
    }
}

/// Four independent per-section visibility toggles, all on by default.
///
/// Nothing forces at least one toggle on; an all-off set is a valid
/// empty state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionToggleSet {
    pub show_study_plan: bool,
    pub show_summarized_notes: bool,
    pub show_quiz_questions: bool,
    pub show_supplementary_resources: bool,
}

impl Default for SectionToggleSet {
    fn default() -> Self {
        Self {
            show_study_plan: true,
            show_summarized_notes: true,
            show_quiz_questions: true,
            show_supplementary_resources: true,
        }
    }
}

impl SectionToggleSet {
    pub fn is_enabled(&self, section: Section) -> bool {
        match section {
            Section::StudyPlan => self.show_study_plan,
            Section::SummarizedNotes => self.show_summarized_notes,
            Section::QuizQuestions => self.show_quiz_questions,
            Section::SupplementaryResources => self.show_supplementary_resources,
        }
    }

    /// The canonically ordered subset of sections currently toggled on.
    /// Toggles filter membership only; they never reorder.
    pub fn enabled_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.is_enabled(*s))
            .collect()
    }

    pub fn none_enabled(&self) -> bool {
        self.enabled_sections().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let toggles = SectionToggleSet::default();
        assert_eq!(toggles.enabled_sections(), Section::ALL.to_vec());
    }

    #[test]
    fn test_toggles_filter_without_reordering() {
        let toggles = SectionToggleSet {
            show_study_plan: false,
            show_quiz_questions: false,
            ..SectionToggleSet::default()
        };
        assert_eq!(
            toggles.enabled_sections(),
            vec![Section::SummarizedNotes, Section::SupplementaryResources]
        );
    }

    #[test]
    fn test_all_off_is_a_valid_empty_state() {
        let toggles = SectionToggleSet {
            show_study_plan: false,
            show_summarized_notes: false,
            show_quiz_questions: false,
            show_supplementary_resources: false,
        };
        assert!(toggles.none_enabled());
        assert!(toggles.enabled_sections().is_empty());
    }

    #[test]
    fn test_quiz_export_heading_differs_from_title() {
        assert_eq!(Section::QuizQuestions.title(), "Quiz Questions");
        assert_eq!(
            Section::QuizQuestions.export_heading(),
            "Example Questions with Answers"
        );
        assert_eq!(Section::StudyPlan.export_heading(), "Study Plan");
    }

    #[test]
    fn test_toggles_deserialize_from_partial_input() {
        let toggles: SectionToggleSet =
            serde_json::from_str(r#"{"show_quiz_questions": false}"#).unwrap();
        assert!(toggles.show_study_plan);
        assert!(!toggles.show_quiz_questions);
        assert!(toggles.show_supplementary_resources);
    }
}
