use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Typed failure taxonomy for a single user action.
///
/// Every failure recovers at the boundary of the action that caused
/// it; none are fatal to the process, and a failed generation leaves
/// the prior session state untouched.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum StudyMateError {
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("PDF extraction error: {message}")]
    PdfExtraction { message: String },

    #[error("Completion service error: {message}")]
    CompletionService { message: String },

    #[error("Failed to get a response from the completion service")]
    EmptyResponse,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Document export error: {message}")]
    DocumentExport { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl StudyMateError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn pdf_extraction(message: impl Into<String>) -> Self {
        Self::PdfExtraction {
            message: message.into(),
        }
    }

    pub fn completion_service(message: impl Into<String>) -> Self {
        Self::CompletionService {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn document_export(message: impl Into<String>) -> Self {
        Self::DocumentExport {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::PdfExtraction { .. } => "PDF_EXTRACTION_ERROR",
            Self::CompletionService { .. } => "COMPLETION_SERVICE_ERROR",
            Self::EmptyResponse => "EMPTY_RESPONSE",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::DocumentExport { .. } => "DOCUMENT_EXPORT_ERROR",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::PdfExtraction { .. } => 422,
            Self::CompletionService { .. } => 502,
            Self::EmptyResponse => 502,
            Self::SessionNotFound => 404,
            Self::Configuration { .. } => 500,
            Self::DocumentExport { .. } => 500,
            Self::Internal { .. } => 500,
        }
    }
}

pub type StudyMateResult<T> = Result<T, StudyMateError>;

/// Wire shape for errors crossing the HTTP boundary.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
}

impl From<StudyMateError> for ErrorResponse {
    fn from(error: StudyMateError) -> Self {
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

// Conversion from common error types
impl From<reqwest::Error> for StudyMateError {
    fn from(error: reqwest::Error) -> Self {
        Self::completion_service(error.to_string())
    }
}

impl From<serde_json::Error> for StudyMateError {
    fn from(error: serde_json::Error) -> Self {
        Self::completion_service(format!("malformed response: {}", error))
    }
}

impl From<lopdf::Error> for StudyMateError {
    fn from(error: lopdf::Error) -> Self {
        Self::pdf_extraction(error.to_string())
    }
}

impl From<zip::result::ZipError> for StudyMateError {
    fn from(error: zip::result::ZipError) -> Self {
        Self::document_export(error.to_string())
    }
}

impl From<std::io::Error> for StudyMateError {
    fn from(error: std::io::Error) -> Self {
        Self::document_export(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_statuses() {
        let error = StudyMateError::validation("topic", "must not be empty");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);

        assert_eq!(StudyMateError::EmptyResponse.http_status_code(), 502);
        assert_eq!(StudyMateError::EmptyResponse.error_code(), "EMPTY_RESPONSE");
        assert_eq!(StudyMateError::SessionNotFound.http_status_code(), 404);
    }

    #[test]
    fn test_empty_response_is_distinct_from_remote_failure() {
        let remote = StudyMateError::completion_service("connection refused");
        assert_ne!(remote.error_code(), StudyMateError::EmptyResponse.error_code());
    }

    #[test]
    fn test_io_errors_surface_as_export_failures() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let error: StudyMateError = io.into();
        assert!(matches!(error, StudyMateError::DocumentExport { .. }));
        assert_eq!(error.error_code(), "DOCUMENT_EXPORT_ERROR");
    }

    #[test]
    fn test_error_response_carries_code() {
        let response: ErrorResponse = StudyMateError::pdf_extraction("not a pdf").into();
        assert_eq!(response.code, "PDF_EXTRACTION_ERROR");
        assert!(response.message.contains("not a pdf"));
    }
}
