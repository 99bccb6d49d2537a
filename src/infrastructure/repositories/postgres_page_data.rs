// src/infrastructure/repositories/postgres_page_data.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::PageId;
use crate::domain::page_data::{
    ContentComponentData, PageData, PageDataRepository, SingleComponentData,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresPageDataRepository {
    pool: PgPool,
}

impl PostgresPageDataRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageDataRow {
    id: i64,
    page_id: i64,
    name: String,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PageDataRow> for PageData {
    type Error = DomainError;

    fn try_from(row: PageDataRow) -> Result<Self, Self::Error> {
        Ok(PageData {
            id: row.id,
            name: row.name,
            title: row.title,
            description: row.description,
            page_id: PageId::new(row.page_id)?,
            created_at: row.created_at,
            content_component_datas: Vec::new(),
        })
    }
}

#[derive(Debug, FromRow)]
struct ContentComponentDataRow {
    id: i64,
    sign: String,
}

#[derive(Debug, FromRow)]
struct SingleComponentDataRow {
    content_component_data_id: i64,
    name: String,
    sort_index: i32,
    field1: Option<String>,
    field2: Option<String>,
    field3: Option<String>,
    field4: Option<String>,
    field5: Option<String>,
}

impl From<SingleComponentDataRow> for SingleComponentData {
    fn from(row: SingleComponentDataRow) -> Self {
        Self {
            name: row.name,
            sort_index: row.sort_index,
            field1: row.field1,
            field2: row.field2,
            field3: row.field3,
            field4: row.field4,
            field5: row.field5,
        }
    }
}

const PAGE_DATA_COLUMNS: &str =
    "SELECT id, page_id, name, title, description, created_at FROM page_datas";

impl PostgresPageDataRepository {
    async fn load_components(&self, page_data_id: i64) -> DomainResult<Vec<ContentComponentData>> {
        let rows = sqlx::query_as::<_, ContentComponentDataRow>(
            "SELECT id, sign FROM content_component_datas WHERE page_data_id = $1 ORDER BY id",
        )
        .bind(page_data_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let single_rows = sqlx::query_as::<_, SingleComponentDataRow>(
            "SELECT content_component_data_id, name, sort_index, field1, field2, field3, field4, field5
             FROM single_component_datas WHERE content_component_data_id = ANY($1)
             ORDER BY content_component_data_id, sort_index, id",
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut singles: HashMap<i64, Vec<SingleComponentData>> = HashMap::new();
        for row in single_rows {
            singles
                .entry(row.content_component_data_id)
                .or_default()
                .push(row.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| ContentComponentData {
                single_datas: singles.remove(&row.id).unwrap_or_default(),
                id: row.id,
                sign: row.sign,
            })
            .collect())
    }
}

#[async_trait]
impl PageDataRepository for PostgresPageDataRepository {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageData>> {
        let rows = sqlx::query_as::<_, PageDataRow>(&format!(
            "{PAGE_DATA_COLUMNS} WHERE page_id = $1 ORDER BY id"
        ))
        .bind(i64::from(page_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PageData::try_from).collect()
    }

    async fn find_with_components(
        &self,
        page_id: PageId,
        name: &str,
    ) -> DomainResult<Option<PageData>> {
        let row = sqlx::query_as::<_, PageDataRow>(&format!(
            "{PAGE_DATA_COLUMNS} WHERE page_id = $1 AND name = $2"
        ))
        .bind(i64::from(page_id))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut page_data = PageData::try_from(row)?;
        page_data.content_component_datas = self.load_components(page_data.id).await?;
        Ok(Some(page_data))
    }
}
