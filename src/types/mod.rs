mod node;


pub use node::{ListNode, Node};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Fully assembled codelab document
#[derive(Debug, Clone, Serialize)]
pub struct Codelab {
    pub meta: Meta,
    pub steps: Vec<Step>,
    /// When the editor produced the export, if the timestamp was usable
    pub exported_at: Option<DateTime<Utc>>,
}

/// A single rendered step
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub title: String,
    /// Environments this step renders for; empty means everywhere
    pub tags: Vec<String>,
    pub duration: Duration,
    pub content: ListNode,
}

/// Codelab-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub status: Option<String>,
    pub feedback: String,
    /// Analytics account
    pub ga: String,
    /// Total estimated duration
    pub duration: Duration,
}
