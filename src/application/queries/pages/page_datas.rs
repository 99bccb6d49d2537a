use super::PageQueryService;
use crate::application::{
    dto::PageDataDto,
    error::{ApplicationError, ApplicationResult},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PAGE_NOT_FOUND_MESSAGE: &str = "failed to list page data: page not found";

pub struct GetPageDatasQuery {
    pub page_name: Option<String>,
    pub id: Option<i64>,
    pub page_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPageDatasOutput {
    pub page_datas: Vec<PageDataDto>,
    pub resource_num: u64,
    /// Echoed back unchanged; the full list is always returned.
    pub page_index: u32,
}

impl PageQueryService {
    /// Lists the data entries of a page resolved by name, then by id.
    ///
    /// This is the only query that reports a missing page as an error.
    pub async fn get_page_datas(
        &self,
        query: GetPageDatasQuery,
    ) -> ApplicationResult<GetPageDatasOutput> {
        let page = match self.find_by_optional_name(query.page_name.as_deref()).await? {
            Some(page) => Some(page),
            None => self.find_by_optional_id(query.id).await?,
        };

        let page = page.ok_or_else(|| {
            tracing::debug!(
                page_name = ?query.page_name,
                id = ?query.id,
                "page data lookup missed"
            );
            ApplicationError::not_found(PAGE_NOT_FOUND_MESSAGE)
        })?;

        let datas = self.page_data_manager.page_datas(&page).await?;
        let resource_num = datas.len() as u64;

        Ok(GetPageDatasOutput {
            page_datas: datas.into_iter().map(Into::into).collect(),
            resource_num,
            page_index: query.page_index,
        })
    }
}
