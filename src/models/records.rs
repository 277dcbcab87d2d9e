//! Records served by the content API.

use serde::Serialize;

/// A block of editable page content, grouped by page section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: u64,
    pub section: String,
    pub title: String,
    pub body: String,
    pub updated_at: String,
}

/// One node of a sport's skill tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillNode {
    pub id: u64,
    pub name: String,
    pub sport_type: String,
    pub level: u32,
    pub parent_id: Option<u64>,
}

/// Entry of the static training drill catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDrill {
    pub id: u64,
    pub name: String,
    pub sport_type: String,
    pub duration_minutes: u32,
}

/// Per-caller data that must never be shared through the cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user: String,
    pub views: u64,
    pub generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_node_serializes_camel_case() {
        let node = SkillNode {
            id: 1,
            name: "Dribbling".to_string(),
            sport_type: "Basketball".to_string(),
            level: 1,
            parent_id: None,
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["sportType"], "Basketball");
        assert!(json["parentId"].is_null());
    }
}
