// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::pages::PageQueryService,
    domain::{
        page::{PageManager, PageRepository},
        page_component::PageComponentRepository,
        page_data::{PageDataManager, PageDataRepository},
    },
};

pub struct ApplicationServices {
    pub page_queries: Arc<PageQueryService>,
}

impl ApplicationServices {
    pub fn new(
        page_repo: Arc<dyn PageRepository>,
        component_repo: Arc<dyn PageComponentRepository>,
        page_data_repo: Arc<dyn PageDataRepository>,
    ) -> Self {
        let page_manager = Arc::new(PageManager::new(
            Arc::clone(&page_repo),
            Arc::clone(&component_repo),
        ));

        let page_data_manager = Arc::new(PageDataManager::new(
            Arc::clone(&page_repo),
            Arc::clone(&page_data_repo),
        ));

        let page_queries = Arc::new(PageQueryService::new(
            Arc::clone(&page_manager),
            Arc::clone(&page_data_manager),
        ));

        Self { page_queries }
    }
}
