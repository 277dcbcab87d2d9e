//! Request DTOs for the content API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Sections appear verbatim in `/api/content-sections/:section`, so they are
/// limited to characters that never get percent-encoded in a path.
fn validate_section(section: &str) -> Option<String> {
    if section.trim().is_empty() {
        return Some("Section cannot be empty".to_string());
    }
    let url_safe = section
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
    if !url_safe {
        return Some(format!(
            "Section '{}' may only contain ASCII letters, digits, '-', '_', '.' or '~'",
            section
        ));
    }
    None
}

/// Request body for `POST /api/content-blocks`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContentBlockRequest {
    pub section: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl CreateContentBlockRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(error_msg) = validate_section(&self.section) {
            return Some(error_msg);
        }
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        None
    }
}

/// Request body for `PUT /api/content-blocks/:id`; absent fields are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContentBlockRequest {
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl UpdateContentBlockRequest {
    pub fn validate(&self) -> Option<String> {
        if let Some(error_msg) = self.section.as_deref().and_then(validate_section) {
            return Some(error_msg);
        }
        if matches!(&self.title, Some(title) if title.trim().is_empty()) {
            return Some("Title cannot be empty".to_string());
        }
        None
    }
}

/// Request body for `POST /api/skill-tree/nodes`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillNodeRequest {
    pub name: String,
    pub sport_type: String,
    pub level: u32,
    #[serde(default)]
    pub parent_id: Option<u64>,
}

impl CreateSkillNodeRequest {
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.sport_type.trim().is_empty() {
            return Some("Sport type cannot be empty".to_string());
        }
        None
    }
}

/// Query string for `GET /api/skill-tree/nodes`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeQuery {
    pub sport_type: Option<String>,
    pub level: Option<u32>,
}

/// Request body for `POST /api/admin/cache/invalidate`
///
/// Exactly one of `key` (exact match) or `pattern` (substring) must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvalidateRequest {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
}

impl InvalidateRequest {
    pub fn validate(&self) -> Option<String> {
        match (&self.key, &self.pattern) {
            (Some(_), Some(_)) => Some("Provide either key or pattern, not both".to_string()),
            (None, None) => Some("Provide a key or a pattern".to_string()),
            (_, Some(pattern)) if pattern.is_empty() => {
                Some("Pattern cannot be empty; use the clear endpoint instead".to_string())
            }
            _ => None,
        }
    }
}
