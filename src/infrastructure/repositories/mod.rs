// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_page;
mod postgres_page_component;
mod postgres_page_data;

pub use error::map_sqlx;
pub use postgres_page::PostgresPageRepository;
pub use postgres_page_component::PostgresPageComponentRepository;
pub use postgres_page_data::PostgresPageDataRepository;
