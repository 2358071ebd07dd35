// 📰 Magazine Issue
//
// Identity is the UUID, not the issue number: two issues created with the
// same number are distinct, and fee agreements match on the UUID.

use crate::registry::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagazineIssue {
    /// Stable identity (UUID)
    id: String,
    issue_number: u32,
    /// Owning editor, set at creation
    editor_id: String,
    /// Contributor ids, append-only
    contributions: Vec<String>,
    published: bool,
    pub created_at: DateTime<Utc>,
}

impl MagazineIssue {
    pub fn new(issue_number: u32, editor_id: &str) -> Self {
        MagazineIssue {
            id: uuid::Uuid::new_v4().to_string(),
            issue_number,
            editor_id: editor_id.to_string(),
            contributions: Vec::new(),
            published: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn issue_number(&self) -> u32 {
        self.issue_number
    }

    pub fn editor_id(&self) -> &str {
        &self.editor_id
    }

    pub fn contributions(&self) -> &[String] {
        &self.contributions
    }

    pub fn add_contribution(&mut self, contributor_id: &str) {
        self.contributions.push(contributor_id.to_string());
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    /// One-way; publishing again changes nothing
    pub fn publish(&mut self) {
        self.published = true;
        info!(issue = self.issue_number, "Magazine issue {} published", self.issue_number);
    }
}

impl Record for MagazineIssue {
    const KIND: &'static str = "Magazine issue";

    fn record_id(&self) -> &str {
        &self.id
    }
}
