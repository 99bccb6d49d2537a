use super::PageQueryService;
use crate::{
    application::{dto::ContentComponentDataDto, error::ApplicationResult},
    domain::page::PageName,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub struct GetComponentDatasQuery {
    pub page_name: String,
    pub page_data_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetComponentDatasOutput {
    pub component_datas: Vec<ContentComponentDataDto>,
}

impl PageQueryService {
    pub async fn get_component_datas(
        &self,
        query: GetComponentDatasQuery,
    ) -> ApplicationResult<GetComponentDatasOutput> {
        let page_data = match PageName::parse_optional(Some(query.page_name.as_str())) {
            Some(name) => {
                self.page_data_manager
                    .page_data_with_components(&name, &query.page_data_name)
                    .await?
            }
            None => None,
        };

        let component_datas = page_data
            .map(|data| data.content_component_datas)
            .unwrap_or_default();
        tracing::debug!(
            page = %query.page_name,
            page_data = %query.page_data_name,
            count = component_datas.len(),
            "listing component data"
        );

        Ok(GetComponentDatasOutput {
            component_datas: component_datas.into_iter().map(Into::into).collect(),
        })
    }
}
