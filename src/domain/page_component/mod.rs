pub mod entity;
pub mod repository;

pub use entity::{PageComponent, PageComponentKind, PageComponentSetting};
pub use repository::PageComponentRepository;
