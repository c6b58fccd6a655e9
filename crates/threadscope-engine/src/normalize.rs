//! Post text normalization.

/// Lower-cased post text, ready for substring matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub title: String,
    pub body: String,
    /// `title` and `body` joined by a single space.
    pub combined: String,
}

#[must_use]
pub fn normalize_post_text(title: &str, body: &str) -> NormalizedText {
    let title = title.to_lowercase();
    let body = body.to_lowercase();
    let combined = format!("{title} {body}");
    NormalizedText {
        title,
        body,
        combined,
    }
}
