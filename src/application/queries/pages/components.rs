use super::PageQueryService;
use crate::{
    application::{dto::PageComponentDto, error::ApplicationResult},
    domain::page::PageName,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub struct GetPageComponentsQuery {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPageComponentsOutput {
    pub page_components: Vec<PageComponentDto>,
}

impl PageQueryService {
    pub async fn get_page_components(
        &self,
        query: GetPageComponentsQuery,
    ) -> ApplicationResult<GetPageComponentsOutput> {
        let components = match PageName::parse_optional(Some(query.name.as_str())) {
            Some(name) => self.page_manager.page_components(&name).await?,
            None => Vec::new(),
        };
        tracing::debug!(page = %query.name, count = components.len(), "listing page components");

        Ok(GetPageComponentsOutput {
            page_components: components.into_iter().map(Into::into).collect(),
        })
    }
}
