pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Page, PageKind};
pub use repository::PageRepository;
pub use services::PageManager;
pub use specifications::PageSearch;
pub use value_objects::{PageId, PageName};
