// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod page_repos;

pub use page_repos::{
    FailingPageRepo, InMemoryComponentRepo, InMemoryPageDataRepo, InMemoryPageRepo,
};
