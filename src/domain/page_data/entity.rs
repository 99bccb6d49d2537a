// src/domain/page_data/entity.rs
use crate::domain::page::PageId;
use chrono::{DateTime, Utc};

/// Content entry (e.g. an article) owned by a page.
#[derive(Debug, Clone)]
pub struct PageData {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub page_id: PageId,
    pub created_at: DateTime<Utc>,
    /// Only populated by the lookups that load every nested property.
    pub content_component_datas: Vec<ContentComponentData>,
}

/// Data rendered by one content leaf component of a page data entry.
#[derive(Debug, Clone)]
pub struct ContentComponentData {
    pub id: i64,
    pub sign: String,
    pub single_datas: Vec<SingleComponentData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleComponentData {
    pub name: String,
    pub sort_index: i32,
    pub field1: Option<String>,
    pub field2: Option<String>,
    pub field3: Option<String>,
    pub field4: Option<String>,
    pub field5: Option<String>,
}
