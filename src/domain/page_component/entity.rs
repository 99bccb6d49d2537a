// src/domain/page_component/entity.rs
use crate::domain::page::PageId;

/// Concrete variant of a component placed on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageComponentKind {
    /// Container that lays out child components.
    Composite,
    /// Leaf that links to another page.
    PageLeaf { target_page_id: Option<PageId> },
    /// Leaf that renders page data content.
    ContentLeaf,
}

impl PageComponentKind {
    /// Rebuilds a kind from its storage tag. Unknown tags fall back to a content leaf.
    pub fn from_tag(tag: &str, target_page_id: Option<PageId>) -> Self {
        match tag {
            "composite" => PageComponentKind::Composite,
            "page_leaf" => PageComponentKind::PageLeaf { target_page_id },
            _ => PageComponentKind::ContentLeaf,
        }
    }

    pub fn target_page_id(&self) -> Option<PageId> {
        match self {
            PageComponentKind::PageLeaf { target_page_id } => *target_page_id,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageComponentSetting {
    pub name: String,
    pub display_name: Option<String>,
    pub field1: Option<String>,
    pub field2: Option<String>,
    pub field3: Option<String>,
    pub field4: Option<String>,
    pub field5: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PageComponent {
    pub id: i64,
    pub name: String,
    /// Position key of the component inside the page tree.
    pub sign: String,
    /// Sign of the enclosing composite, `None` for root components.
    pub parent_sign: Option<String>,
    pub col: Option<String>,
    pub height: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
    pub background_color: Option<String>,
    pub class_name: Option<String>,
    pub settings: Vec<PageComponentSetting>,
    pub kind: PageComponentKind,
}
