use std::sync::Arc;

use crate::{
    application::error::ApplicationResult,
    domain::{
        page::{Page, PageId, PageManager, PageName},
        page_data::PageDataManager,
    },
};

/// Read-only queries over pages, their components and their data.
pub struct PageQueryService {
    pub(super) page_manager: Arc<PageManager>,
    pub(super) page_data_manager: Arc<PageDataManager>,
}

impl PageQueryService {
    pub fn new(page_manager: Arc<PageManager>, page_data_manager: Arc<PageDataManager>) -> Self {
        Self {
            page_manager,
            page_data_manager,
        }
    }

    /// Absent or non-positive ids never match.
    pub(super) async fn find_by_optional_id(
        &self,
        id: Option<i64>,
    ) -> ApplicationResult<Option<Page>> {
        match id.and_then(|id| PageId::new(id).ok()) {
            Some(id) => Ok(self.page_manager.find_by_id(id).await?),
            None => Ok(None),
        }
    }

    /// Absent or blank names never match.
    pub(super) async fn find_by_optional_name(
        &self,
        name: Option<&str>,
    ) -> ApplicationResult<Option<Page>> {
        match PageName::parse_optional(name) {
            Some(name) => Ok(self.page_manager.find_by_name(&name).await?),
            None => Ok(None),
        }
    }
}
