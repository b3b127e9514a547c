// fixtures/responses/categories.rs

use crate::fixtures::ApiFixture;

/// `GET /products/categories` (trimmed to four entries; one carries an id)
pub struct CategoriesResponse;

impl ApiFixture for CategoriesResponse {
    fn path() -> &'static str {
        "categories"
    }

    fn body() -> &'static str {
        r#"[
            {"slug": "beauty", "name": "Beauty", "url": "https://dummyjson.com/products/category/beauty"},
            {"slug": "fragrances", "name": "Fragrances", "url": "https://dummyjson.com/products/category/fragrances"},
            {"slug": "furniture", "name": "Furniture", "url": "https://dummyjson.com/products/category/furniture"},
            {"id": 4, "slug": "groceries", "name": "Groceries", "url": "https://dummyjson.com/products/category/groceries"}
        ]"#
    }
}
