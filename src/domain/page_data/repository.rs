use crate::domain::errors::DomainResult;
use crate::domain::page::PageId;
use crate::domain::page_data::entity::PageData;
use async_trait::async_trait;

#[async_trait]
pub trait PageDataRepository: Send + Sync {
    /// Page data of a page without nested component data, ordered by id.
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageData>>;

    /// A single page data entry with all of its component data loaded.
    async fn find_with_components(
        &self,
        page_id: PageId,
        name: &str,
    ) -> DomainResult<Option<PageData>>;
}
