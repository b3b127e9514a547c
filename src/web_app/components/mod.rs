// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Loading, Thumbnail, etc.)
// - controls.rs: Search, category filter, sort, page size, pagination
// - product.rs: Product rows and the product list
// - add_product.rs: The add-product form
// - category.rs: Category overview
// - image_picker.rs: Local image selection encoded as data URLs

pub mod add_product;
pub mod category;
pub mod common;
pub mod controls;
pub mod image_picker;
pub mod product;

// Re-export commonly used components for convenience
pub use add_product::*;
pub use category::*;
pub use common::*;
pub use controls::*;
pub use image_picker::*;
pub use product::*;
