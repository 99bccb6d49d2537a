mod component_datas;
mod components;
mod get;
mod list;
mod page_datas;
mod service;

pub use component_datas::{GetComponentDatasOutput, GetComponentDatasQuery};
pub use components::{GetPageComponentsOutput, GetPageComponentsQuery};
pub use get::{GetPageOutput, GetPageQuery};
pub use list::{GetPagesOutput, GetPagesQuery};
pub use page_datas::{GetPageDatasOutput, GetPageDatasQuery, PAGE_NOT_FOUND_MESSAGE};
pub use service::PageQueryService;
