pub mod entity;
pub mod repository;
pub mod services;

pub use entity::{ContentComponentData, PageData, SingleComponentData};
pub use repository::PageDataRepository;
pub use services::PageDataManager;
