use super::PageQueryService;
use crate::application::{dto::PageDto, error::ApplicationResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub struct GetPageQuery {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetPageOutput {
    pub page: Option<PageDto>,
}

impl PageQueryService {
    /// Looks a page up by id, falling back to its name. A miss is not an error.
    pub async fn get_page(&self, query: GetPageQuery) -> ApplicationResult<GetPageOutput> {
        let page = match self.find_by_optional_id(query.id).await? {
            Some(page) => Some(page),
            None => self.find_by_optional_name(query.name.as_deref()).await?,
        };

        if page.is_none() {
            tracing::debug!(id = ?query.id, name = ?query.name, "page lookup missed");
        }

        Ok(GetPageOutput {
            page: page.map(Into::into),
        })
    }
}
