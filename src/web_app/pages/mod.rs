// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - CatalogPage: Product list with add, edit, delete, search, filter and sort

pub mod catalog;

// Re-export page components
pub use catalog::CatalogPage;
