// src/infrastructure/repositories/postgres_page.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{Page, PageId, PageKind, PageName, PageRepository, PageSearch};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PAGE_COLUMNS: &str = "SELECT id, name, display_name, description, kind FROM pages";

#[derive(Clone)]
pub struct PostgresPageRepository {
    pool: PgPool,
}

impl PostgresPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    name: String,
    display_name: String,
    description: Option<String>,
    kind: String,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        let kind = PageKind::parse(&row.kind).ok_or_else(|| {
            DomainError::Persistence(format!("page {} has unknown kind '{}'", row.id, row.kind))
        })?;

        Ok(Page {
            id: PageId::new(row.id)?,
            name: PageName::new(row.name)?,
            display_name: row.display_name,
            description: row.description,
            kind,
        })
    }
}

#[async_trait]
impl PageRepository for PostgresPageRepository {
    async fn list(&self, search: &PageSearch) -> DomainResult<Vec<Page>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(PAGE_COLUMNS);

        // strpos keeps the match case-sensitive and free of LIKE wildcards.
        if let Some(key) = search.key() {
            builder.push(" WHERE strpos(display_name, ");
            builder.push_bind(key);
            builder.push(") > 0 OR strpos(name, ");
            builder.push_bind(key);
            builder.push(") > 0");
        }
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<PageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Page::try_from).collect()
    }

    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!("{PAGE_COLUMNS} WHERE id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_by_name(&self, name: &PageName) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!("{PAGE_COLUMNS} WHERE name = $1"))
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }
}
