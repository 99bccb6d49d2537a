use crate::domain::errors::DomainResult;
use crate::domain::page::entity::Page;
use crate::domain::page::specifications::PageSearch;
use crate::domain::page::value_objects::{PageId, PageName};
use async_trait::async_trait;

#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Every page satisfying `search`, ordered by ascending id.
    async fn list(&self, search: &PageSearch) -> DomainResult<Vec<Page>>;
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    async fn find_by_name(&self, name: &PageName) -> DomainResult<Option<Page>>;
}
