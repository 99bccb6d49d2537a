// src/domain/mod.rs
pub mod errors;
pub mod page;
pub mod page_component;
pub mod page_data;
