//! StudyMate API service internals.
//!
//! The binary in `main.rs` wires these modules to the HTTP surface;
//! integration tests drive [`service::SessionService`] directly.

pub mod completion_client;
pub mod docx_writer;
pub mod pdf_processor;
pub mod service;
