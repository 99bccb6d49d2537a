use super::PageQueryService;
use crate::{
    application::{
        dto::{PageDto, PageWindow},
        error::ApplicationResult,
    },
    domain::page::PageSearch,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub struct GetPagesQuery {
    pub search_key: Option<String>,
    pub page_index: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPagesOutput {
    /// Size of the whole filtered set, independent of the requested window.
    pub resource_num: u64,
    pub page_index: u32,
    pub pages: Vec<PageDto>,
}

impl PageQueryService {
    pub async fn get_pages(&self, query: GetPagesQuery) -> ApplicationResult<GetPagesOutput> {
        let search = PageSearch::new(query.search_key.as_deref());
        let window = PageWindow::new(query.page_index, query.page_size);

        let pages = self.page_manager.search(&search).await?;
        let resource_num = pages.len() as u64;
        tracing::debug!(
            search_key = ?search.key(),
            page_index = window.page_index,
            page_size = window.page_size,
            resource_num,
            "listing pages"
        );

        Ok(GetPagesOutput {
            resource_num,
            page_index: query.page_index,
            pages: window.apply(pages).into_iter().map(Into::into).collect(),
        })
    }
}
