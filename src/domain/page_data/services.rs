// src/domain/page_data/services.rs
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::page::{Page, PageName, PageRepository};
use crate::domain::page_data::entity::PageData;
use crate::domain::page_data::repository::PageDataRepository;

/// Domain service resolving page data through its owning page.
pub struct PageDataManager {
    page_repo: Arc<dyn PageRepository>,
    page_data_repo: Arc<dyn PageDataRepository>,
}

impl PageDataManager {
    pub fn new(
        page_repo: Arc<dyn PageRepository>,
        page_data_repo: Arc<dyn PageDataRepository>,
    ) -> Self {
        Self {
            page_repo,
            page_data_repo,
        }
    }

    pub async fn page_datas(&self, page: &Page) -> DomainResult<Vec<PageData>> {
        self.page_data_repo.list_by_page(page.id).await
    }

    /// Looks up the page by name, then its named data entry with every nested
    /// property loaded. `None` when either step misses.
    pub async fn page_data_with_components(
        &self,
        page_name: &PageName,
        page_data_name: &str,
    ) -> DomainResult<Option<PageData>> {
        let Some(page) = self.page_repo.find_by_name(page_name).await? else {
            return Ok(None);
        };

        self.page_data_repo
            .find_with_components(page.id, page_data_name)
            .await
    }
}
