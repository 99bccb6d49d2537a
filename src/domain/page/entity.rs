// src/domain/page/entity.rs
use crate::domain::page::value_objects::{PageId, PageName};

/// The concrete variant of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Layout-only page whose content lives in its components.
    Static,
    /// Page that owns a list of page data entries (articles).
    Content,
}

impl PageKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "static" => Some(PageKind::Static),
            "content" => Some(PageKind::Content),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub name: PageName,
    pub display_name: String,
    pub description: Option<String>,
    pub kind: PageKind,
}

impl Page {
    /// Substring match on either the display name or the name.
    pub fn matches_key(&self, key: &str) -> bool {
        self.display_name.contains(key) || self.name.as_str().contains(key)
    }
}
