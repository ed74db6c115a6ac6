//! Export filename derivation.

/// Lower-case the topic and keep only alphanumerics, spaces, and
/// underscores, then turn spaces into underscores. Punctuation is
/// dropped outright, so `"Photosynthesis & Cells!"` becomes
/// `photosynthesis__cells`.
pub fn sanitize_topic(topic: &str) -> String {
    topic
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect::<String>()
        .replace(' ', "_")
}

/// `study_materials_<sanitized_topic>.docx`
pub fn export_filename(topic: &str) -> String {
    format!("study_materials_{}.docx", sanitize_topic(topic))
}
