//! Content Repository
//!
//! Holds content blocks, skill-tree nodes and the drill catalogue in memory.

use std::collections::BTreeMap;

use crate::error::{CacheError, Result};
use crate::models::{
    ContentBlock, CreateContentBlockRequest, CreateSkillNodeRequest, NodeQuery, SkillNode,
    TrainingDrill, UpdateContentBlockRequest,
};

// == Content Repository ==
/// In-memory store for the content API.
#[derive(Debug)]
pub struct ContentRepository {
    blocks: BTreeMap<u64, ContentBlock>,
    nodes: BTreeMap<u64, SkillNode>,
    drills: Vec<TrainingDrill>,
    next_block_id: u64,
    next_node_id: u64,
    profile_views: u64,
}

impl ContentRepository {
    pub fn new() -> Self {
        Self {
            blocks: BTreeMap::new(),
            nodes: BTreeMap::new(),
            drills: Vec::new(),
            next_block_id: 1,
            next_node_id: 1,
            profile_views: 0,
        }
    }

    /// Creates a repository pre-populated with a small demo data set.
    pub fn seeded() -> Self {
        let mut repo = Self::new();

        for (section, title, body) in [
            ("hero", "Get Recruited", "Showcase your highlights to college coaches."),
            ("hero", "Train Smarter", "Structured drills for every position."),
            ("academy", "Course Catalogue", "Accredited courses for student athletes."),
        ] {
            repo.create_block(CreateContentBlockRequest {
                section: section.to_string(),
                title: title.to_string(),
                body: body.to_string(),
            });
        }

        let root = repo.insert_node("Ball Handling", "Basketball", 1, None);
        repo.insert_node("Crossover", "Basketball", 2, Some(root));
        repo.insert_node("Passing Accuracy", "Football", 1, None);

        repo.drills = vec![
            drill(1, "Two-Ball Dribble", "Basketball", 15),
            drill(2, "Cone Weave", "Football", 20),
            drill(3, "Ladder Footwork", "Soccer", 10),
        ];

        repo
    }

    fn insert_node(&mut self, name: &str, sport_type: &str, level: u32, parent_id: Option<u64>) -> u64 {
        let id = self.next_node_id;
        self.next_node_id += 1;
        self.nodes.insert(
            id,
            SkillNode {
                id,
                name: name.to_string(),
                sport_type: sport_type.to_string(),
                level,
                parent_id,
            },
        );
        id
    }

    // == Content Blocks ==
    pub fn blocks(&self) -> Vec<ContentBlock> {
        self.blocks.values().cloned().collect()
    }

    pub fn block(&self, id: u64) -> Result<ContentBlock> {
        self.blocks
            .get(&id)
            .cloned()
            .ok_or_else(|| CacheError::NotFound(format!("Content block {}", id)))
    }

    pub fn blocks_in_section(&self, section: &str) -> Vec<ContentBlock> {
        self.blocks
            .values()
            .filter(|block| block.section == section)
            .cloned()
            .collect()
    }

    pub fn create_block(&mut self, req: CreateContentBlockRequest) -> ContentBlock {
        let id = self.next_block_id;
        self.next_block_id += 1;

        let block = ContentBlock {
            id,
            section: req.section,
            title: req.title,
            body: req.body,
            updated_at: chrono::Utc::now().to_rfc3339(),
        };
        self.blocks.insert(id, block.clone());
        block
    }

    /// Applies a partial update. Returns the section the block was in before
    /// the update alongside the updated block.
    pub fn update_block(
        &mut self,
        id: u64,
        req: UpdateContentBlockRequest,
    ) -> Result<(String, ContentBlock)> {
        let block = self
            .blocks
            .get_mut(&id)
            .ok_or_else(|| CacheError::NotFound(format!("Content block {}", id)))?;

        let previous_section = block.section.clone();
        if let Some(section) = req.section {
            block.section = section;
        }
        if let Some(title) = req.title {
            block.title = title;
        }
        if let Some(body) = req.body {
            block.body = body;
        }
        block.updated_at = chrono::Utc::now().to_rfc3339();

        Ok((previous_section, block.clone()))
    }

    pub fn delete_block(&mut self, id: u64) -> Result<ContentBlock> {
        self.blocks
            .remove(&id)
            .ok_or_else(|| CacheError::NotFound(format!("Content block {}", id)))
    }

    // == Skill Tree ==
    pub fn nodes(&self, query: &NodeQuery) -> Vec<SkillNode> {
        self.nodes
            .values()
            .filter(|node| {
                query
                    .sport_type
                    .as_deref()
                    .map_or(true, |sport| node.sport_type.eq_ignore_ascii_case(sport))
            })
            .filter(|node| query.level.map_or(true, |level| node.level == level))
            .cloned()
            .collect()
    }

    pub fn children(&self, parent_id: u64) -> Result<Vec<SkillNode>> {
        if !self.nodes.contains_key(&parent_id) {
            return Err(CacheError::NotFound(format!("Skill node {}", parent_id)));
        }
        Ok(self
            .nodes
            .values()
            .filter(|node| node.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }

    pub fn nodes_at_level(&self, level: u32) -> Vec<SkillNode> {
        self.nodes
            .values()
            .filter(|node| node.level == level)
            .cloned()
            .collect()
    }

    pub fn create_node(&mut self, req: CreateSkillNodeRequest) -> Result<SkillNode> {
        if let Some(parent_id) = req.parent_id {
            if !self.nodes.contains_key(&parent_id) {
                return Err(CacheError::InvalidRequest(format!(
                    "Parent node {} does not exist",
                    parent_id
                )));
            }
        }

        let id = self.insert_node(&req.name, &req.sport_type, req.level, req.parent_id);
        self.nodes
            .get(&id)
            .cloned()
            .ok_or_else(|| CacheError::Internal(format!("Skill node {} vanished after insert", id)))
    }

    // == Catalogue ==
    pub fn drills(&self) -> Vec<TrainingDrill> {
        self.drills.clone()
    }

    // == Profile ==
    /// Records a profile view and returns the running total.
    pub fn record_profile_view(&mut self) -> u64 {
        self.profile_views += 1;
        self.profile_views
    }
}

impl Default for ContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn drill(id: u64, name: &str, sport_type: &str, duration_minutes: u32) -> TrainingDrill {
    TrainingDrill {
        id,
        name: name.to_string(),
        sport_type: sport_type.to_string(),
        duration_minutes,
    }
}
