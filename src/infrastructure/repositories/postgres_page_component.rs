// src/infrastructure/repositories/postgres_page_component.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::PageId;
use crate::domain::page_component::{
    PageComponent, PageComponentKind, PageComponentRepository, PageComponentSetting,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresPageComponentRepository {
    pool: PgPool,
}

impl PostgresPageComponentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ComponentRow {
    id: i64,
    name: String,
    sign: String,
    parent_sign: Option<String>,
    col: Option<String>,
    height: Option<String>,
    padding: Option<String>,
    margin: Option<String>,
    background_color: Option<String>,
    class_name: Option<String>,
    kind: String,
    target_page_id: Option<i64>,
}

#[derive(Debug, FromRow)]
struct SettingRow {
    page_component_id: i64,
    name: String,
    display_name: Option<String>,
    field1: Option<String>,
    field2: Option<String>,
    field3: Option<String>,
    field4: Option<String>,
    field5: Option<String>,
}

impl From<SettingRow> for PageComponentSetting {
    fn from(row: SettingRow) -> Self {
        Self {
            name: row.name,
            display_name: row.display_name,
            field1: row.field1,
            field2: row.field2,
            field3: row.field3,
            field4: row.field4,
            field5: row.field5,
        }
    }
}

impl ComponentRow {
    fn into_component(
        self,
        settings: Vec<PageComponentSetting>,
    ) -> Result<PageComponent, DomainError> {
        let target_page_id = self.target_page_id.map(PageId::new).transpose()?;

        Ok(PageComponent {
            id: self.id,
            name: self.name,
            sign: self.sign,
            parent_sign: self.parent_sign,
            col: self.col,
            height: self.height,
            padding: self.padding,
            margin: self.margin,
            background_color: self.background_color,
            class_name: self.class_name,
            settings,
            kind: PageComponentKind::from_tag(&self.kind, target_page_id),
        })
    }
}

#[async_trait]
impl PageComponentRepository for PostgresPageComponentRepository {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageComponent>> {
        let rows = sqlx::query_as::<_, ComponentRow>(
            "SELECT id, name, sign, parent_sign, col, height, padding, margin,
                    background_color, class_name, kind, target_page_id
             FROM page_components WHERE page_id = $1
             ORDER BY sign, id",
        )
        .bind(i64::from(page_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let setting_rows = sqlx::query_as::<_, SettingRow>(
            "SELECT page_component_id, name, display_name, field1, field2, field3, field4, field5
             FROM page_component_settings WHERE page_component_id = ANY($1)
             ORDER BY page_component_id, position, id",
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut settings: HashMap<i64, Vec<PageComponentSetting>> = HashMap::new();
        for row in setting_rows {
            settings
                .entry(row.page_component_id)
                .or_default()
                .push(row.into());
        }

        rows.into_iter()
            .map(|row| {
                let own = settings.remove(&row.id).unwrap_or_default();
                row.into_component(own)
            })
            .collect()
    }
}
