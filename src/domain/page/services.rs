// src/domain/page/services.rs
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::page::entity::Page;
use crate::domain::page::repository::PageRepository;
use crate::domain::page::specifications::PageSearch;
use crate::domain::page::value_objects::{PageId, PageName};
use crate::domain::page_component::{PageComponent, PageComponentRepository};

/// Domain service owning access to pages and the components placed on them.
pub struct PageManager {
    page_repo: Arc<dyn PageRepository>,
    component_repo: Arc<dyn PageComponentRepository>,
}

impl PageManager {
    pub fn new(
        page_repo: Arc<dyn PageRepository>,
        component_repo: Arc<dyn PageComponentRepository>,
    ) -> Self {
        Self {
            page_repo,
            component_repo,
        }
    }

    pub async fn search(&self, search: &PageSearch) -> DomainResult<Vec<Page>> {
        self.page_repo.list(search).await
    }

    pub async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        self.page_repo.find_by_id(id).await
    }

    pub async fn find_by_name(&self, name: &PageName) -> DomainResult<Option<Page>> {
        self.page_repo.find_by_name(name).await
    }

    /// Components of the named page. An unknown page has no components.
    pub async fn page_components(&self, name: &PageName) -> DomainResult<Vec<PageComponent>> {
        match self.page_repo.find_by_name(name).await? {
            Some(page) => self.component_repo.list_by_page(page.id).await,
            None => Ok(Vec::new()),
        }
    }
}
