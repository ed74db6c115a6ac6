//! # StudyMate Domain Models
//!
//! Core domain types for the StudyMate study-material service.
//! All models are pure data: no I/O, no clocks, no network. The
//! service crate owns storage and transport.
//!
//! ## Key Models
//!
//! - **Section**: one of the four named content blocks, in canonical order
//! - **SectionToggleSet**: per-section visibility toggles (all on by default)
//! - **GenerationResult**: the four text blobs returned by a completion call
//! - **SessionState**: per-session context (result, topic, page position)
//! - **pagination**: pure clamp and ±1 navigation arithmetic

pub mod generation;
pub mod pagination;
pub mod section;
pub mod session;

pub use generation::*;
pub use pagination::*;
pub use section::*;
pub use session::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_defaults() {
        let state = SessionState::new();
        assert!(!state.has_generated);
        assert!(state.generation.is_none());
        assert!(state.topic.is_none());
        assert_eq!(state.page_number, 1);
    }

    #[test]
    fn test_canonical_order_is_stable() {
        let titles: Vec<&str> = Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Study Plan",
                "Summarized Notes",
                "Quiz Questions",
                "Supplementary Resources"
            ]
        );
    }
}
