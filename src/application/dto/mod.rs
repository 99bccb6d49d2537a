pub mod components;
pub mod page_datas;
pub mod pages;
pub mod pagination;
pub mod serde_time;

pub use components::{ComponentType, PageComponentDto, PageComponentSettingDto};
pub use page_datas::{ContentComponentDataDto, PageDataDto, SingleComponentDataDto};
pub use pages::{PageDto, PageType};
pub use pagination::PageWindow;
