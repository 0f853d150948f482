//! Transient user-facing notices.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A short message shown once after an operation finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.variant = NoticeVariant::Destructive;
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }

    // Common notices
    pub fn success(description: impl Into<String>) -> Self {
        Self::new("Success", description)
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::new("Error", description).destructive()
    }

    pub fn rate_limited(description: impl Into<String>) -> Self {
        Self::new("Rate limit exceeded", description).destructive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        assert!(!Notice::success("done").is_destructive());
        assert!(Notice::error("Failed to create dish").is_destructive());

        let notice = Notice::rate_limited("Please wait before creating another dish.");
        assert_eq!(notice.title, "Rate limit exceeded");
        assert!(notice.is_destructive());
    }

    #[test]
    fn test_serializes_variant_lowercase() {
        let json = serde_json::to_value(Notice::error("boom")).unwrap();
        assert_eq!(json["variant"], "destructive");
        assert_eq!(json["title"], "Error");
    }
}
