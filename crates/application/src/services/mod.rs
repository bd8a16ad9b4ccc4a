//! Application services

mod product_search_service;

pub use product_search_service::ProductSearchService;
