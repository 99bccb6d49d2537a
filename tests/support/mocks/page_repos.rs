// tests/support/mocks/page_repos.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use cms_pages::domain::errors::{DomainError, DomainResult};
use cms_pages::domain::page::{Page, PageId, PageName, PageRepository, PageSearch};
use cms_pages::domain::page_component::{PageComponent, PageComponentRepository};
use cms_pages::domain::page_data::{PageData, PageDataRepository};

/* -------------------------------- PageRepository -------------------------------- */

/// In-memory page store that also records the lookups it served.
#[derive(Default)]
pub struct InMemoryPageRepo {
    pages: Vec<Page>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryPageRepo {
    pub fn new(mut pages: Vec<Page>) -> Self {
        pages.sort_by_key(|page| page.id);
        Self {
            pages,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PageRepository for InMemoryPageRepo {
    async fn list(&self, search: &PageSearch) -> DomainResult<Vec<Page>> {
        self.record(format!("list:{:?}", search.key()));
        Ok(self
            .pages
            .iter()
            .filter(|page| search.is_satisfied_by(page))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        self.record(format!("id:{id}"));
        Ok(self.pages.iter().find(|page| page.id == id).cloned())
    }

    async fn find_by_name(&self, name: &PageName) -> DomainResult<Option<Page>> {
        self.record(format!("name:{name}"));
        Ok(self.pages.iter().find(|page| &page.name == name).cloned())
    }
}

/// Page store whose every call fails with a persistence error.
pub struct FailingPageRepo;

#[async_trait]
impl PageRepository for FailingPageRepo {
    async fn list(&self, _search: &PageSearch) -> DomainResult<Vec<Page>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_id(&self, _id: PageId) -> DomainResult<Option<Page>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_name(&self, _name: &PageName) -> DomainResult<Option<Page>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/* -------------------------------- PageComponentRepository -------------------------------- */

#[derive(Default)]
pub struct InMemoryComponentRepo {
    by_page: HashMap<i64, Vec<PageComponent>>,
}

impl InMemoryComponentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_components(mut self, page_id: i64, mut components: Vec<PageComponent>) -> Self {
        components.sort_by(|a, b| a.sign.cmp(&b.sign));
        self.by_page.insert(page_id, components);
        self
    }
}

#[async_trait]
impl PageComponentRepository for InMemoryComponentRepo {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageComponent>> {
        Ok(self
            .by_page
            .get(&i64::from(page_id))
            .cloned()
            .unwrap_or_default())
    }
}

/* -------------------------------- PageDataRepository -------------------------------- */

#[derive(Default)]
pub struct InMemoryPageDataRepo {
    datas: Vec<PageData>,
}

impl InMemoryPageDataRepo {
    pub fn new(datas: Vec<PageData>) -> Self {
        Self { datas }
    }
}

#[async_trait]
impl PageDataRepository for InMemoryPageDataRepo {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageData>> {
        Ok(self
            .datas
            .iter()
            .filter(|data| data.page_id == page_id)
            .map(|data| PageData {
                content_component_datas: Vec::new(),
                ..data.clone()
            })
            .collect())
    }

    async fn find_with_components(
        &self,
        page_id: PageId,
        name: &str,
    ) -> DomainResult<Option<PageData>> {
        Ok(self
            .datas
            .iter()
            .find(|data| data.page_id == page_id && data.name == name)
            .cloned())
    }
}
