use crate::domain::page::{Page, PageKind};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discriminator emitted for each page variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PageType {
    StaticPage,
    ContentPage,
}

impl From<PageKind> for PageType {
    fn from(kind: PageKind) -> Self {
        match kind {
            PageKind::Static => PageType::StaticPage,
            PageKind::Content => PageType::ContentPage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub page_type: PageType,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            name: page.name.into_inner(),
            display_name: page.display_name,
            description: page.description,
            page_type: page.kind.into(),
        }
    }
}
