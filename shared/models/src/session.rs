use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generation::GenerationResult;

/// Per-session context. One instance per session id; sessions never
/// share state. Created at session start, dropped at session end.
///
/// `page_number` is 1-based and only meaningful once `has_generated`
/// is true and at least one section is enabled; it is clamped into
/// range at read time rather than kept in range on every toggle change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub generation: Option<GenerationResult>,
    pub topic: Option<String>,
    pub has_generated: bool,
    pub page_number: u32,
    pub created_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            generation: None,
            topic: None,
            has_generated: false,
            page_number: 1,
            created_at: Utc::now(),
        }
    }

    /// Record a completed generation. Replaces any previous result and
    /// rewinds to the first page; callers only invoke this after the
    /// completion call fully succeeded, so a failed call leaves the
    /// prior state untouched.
    pub fn record_generation(&mut self, generation: GenerationResult, topic: String) {
        self.generation = Some(generation);
        self.topic = Some(topic);
        self.has_generated = true;
        self.page_number = 1;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_generation_rewinds_to_first_page() {
        let mut state = SessionState::new();
        state.page_number = 3;

        state.record_generation(
            GenerationResult::from_optional_fields(None, None, None, None),
            "Mitosis".to_string(),
        );

        assert!(state.has_generated);
        assert_eq!(state.topic.as_deref(), Some("Mitosis"));
        assert_eq!(state.page_number, 1);
    }

    #[test]
    fn test_second_generation_overwrites_the_first() {
        let mut state = SessionState::new();
        state.record_generation(
            GenerationResult::from_optional_fields(Some("old plan".into()), None, None, None),
            "Old".to_string(),
        );
        state.record_generation(
            GenerationResult::from_optional_fields(Some("new plan".into()), None, None, None),
            "New".to_string(),
        );

        assert_eq!(state.generation.unwrap().study_plan, "new plan");
        assert_eq!(state.topic.as_deref(), Some("New"));
    }
}
