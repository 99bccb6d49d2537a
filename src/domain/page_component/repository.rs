use crate::domain::errors::DomainResult;
use crate::domain::page::PageId;
use crate::domain::page_component::entity::PageComponent;
use async_trait::async_trait;

#[async_trait]
pub trait PageComponentRepository: Send + Sync {
    /// Components of the page with their settings loaded, ordered by sign.
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageComponent>>;
}
