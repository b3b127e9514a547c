// fixtures/responses/products.rs
//
// Product endpoints. Bodies are copied from real dummyjson.com answers and
// trimmed: listings keep only a few products, full records drop the fields
// the catalog never reads (rating, stock, reviews, ...) except where a test
// needs to prove they are ignored.

use crate::fixtures::ApiFixture;

/// `GET /products?limit=5&select=id,title,price,thumbnail,category`
pub struct FirstPageResponse;

impl ApiFixture for FirstPageResponse {
    fn path() -> &'static str {
        ""
    }

    fn body() -> &'static str {
        r#"{
            "products": [
                {"id": 1, "title": "Essence Mascara Lash Princess", "price": 9.99, "category": "beauty", "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Essence%20Mascara%20Lash%20Princess/thumbnail.png"},
                {"id": 2, "title": "Eyeshadow Palette with Mirror", "price": 19.99, "category": "beauty", "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Eyeshadow%20Palette%20with%20Mirror/thumbnail.png"},
                {"id": 3, "title": "Powder Canister", "price": 14.99, "category": "beauty", "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Powder%20Canister/thumbnail.png"},
                {"id": 4, "title": "Red Lipstick", "price": 12.99, "category": "beauty", "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Red%20Lipstick/thumbnail.png"},
                {"id": 5, "title": "Red Nail Polish", "price": 8.99, "category": "beauty", "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Red%20Nail%20Polish/thumbnail.png"}
            ],
            "total": 194,
            "skip": 0,
            "limit": 5
        }"#
    }
}

/// `GET /products/search?q=phone`
pub struct SearchPhoneResponse;

impl ApiFixture for SearchPhoneResponse {
    fn path() -> &'static str {
        "search"
    }

    fn body() -> &'static str {
        r#"{
            "products": [
                {"id": 101, "title": "Apple AirPods Max Silver", "description": "Over-ear headphones with high-fidelity audio.", "price": 549.99, "category": "mobile-accessories", "thumbnail": "https://cdn.dummyjson.com/products/images/mobile-accessories/Apple%20AirPods%20Max%20Silver/thumbnail.png", "rating": 3.47, "stock": 59},
                {"id": 122, "title": "iPhone 6", "description": "A stylish and capable smartphone.", "price": 299.99, "category": "smartphones", "thumbnail": "https://cdn.dummyjson.com/products/images/smartphones/iPhone%206/thumbnail.png", "rating": 4.52, "stock": 60}
            ],
            "total": 2,
            "skip": 0,
            "limit": 2
        }"#
    }
}

/// `GET /products/category/beauty`
pub struct BeautyCategoryResponse;

impl ApiFixture for BeautyCategoryResponse {
    fn path() -> &'static str {
        "category/beauty"
    }

    fn body() -> &'static str {
        r#"{
            "products": [
                {"id": 1, "title": "Essence Mascara Lash Princess", "description": "Popular mascara known for its volumizing effects.", "price": 9.99, "category": "beauty", "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Essence%20Mascara%20Lash%20Princess/thumbnail.png"},
                {"id": 5, "title": "Red Nail Polish", "description": "Rich and glossy red hue.", "price": 8.99, "category": "beauty", "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Red%20Nail%20Polish/thumbnail.png"}
            ],
            "total": 2,
            "skip": 0,
            "limit": 2
        }"#
    }
}

/// `GET /products?sortBy=title&order=desc`
pub struct SortedDescResponse;

impl ApiFixture for SortedDescResponse {
    fn path() -> &'static str {
        ""
    }

    fn body() -> &'static str {
        r#"{
            "products": [
                {"id": 187, "title": "iPhone X", "description": "", "price": 899.99, "category": "smartphones", "thumbnail": ""},
                {"id": 121, "title": "iPhone 5s", "description": "", "price": 199.99, "category": "smartphones", "thumbnail": ""},
                {"id": 44, "title": "Wooden Bathroom Sink With Mirror", "description": "", "price": 799.99, "category": "furniture", "thumbnail": ""}
            ],
            "total": 194,
            "skip": 0,
            "limit": 30
        }"#
    }
}

/// `POST /products/add` (the API assigns id 195 and echoes the body)
pub struct AddedProductResponse;

impl ApiFixture for AddedProductResponse {
    fn path() -> &'static str {
        "add"
    }

    fn body() -> &'static str {
        r#"{"id": 195, "title": "Desk Lamp", "price": 24.5, "category": "home-decoration", "thumbnail": "https://via.placeholder.com/150"}"#
    }
}

/// `PUT /products/1`
pub struct UpdatedProductResponse;

impl ApiFixture for UpdatedProductResponse {
    fn path() -> &'static str {
        "1"
    }

    fn body() -> &'static str {
        r#"{
            "id": 1,
            "title": "Essence Mascara Deluxe",
            "description": "Popular mascara known for its volumizing effects.",
            "price": 11.49,
            "category": "beauty",
            "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Essence%20Mascara%20Lash%20Princess/thumbnail.png"
        }"#
    }
}

/// `DELETE /products/1`
pub struct DeletedProductResponse;

impl ApiFixture for DeletedProductResponse {
    fn path() -> &'static str {
        "1"
    }

    fn body() -> &'static str {
        r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "Popular mascara known for its volumizing effects.",
            "price": 9.99,
            "category": "beauty",
            "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Essence%20Mascara%20Lash%20Princess/thumbnail.png",
            "rating": 4.94,
            "isDeleted": true,
            "deletedOn": "2024-05-20T11:04:34.561Z"
        }"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::{DeletedProduct, Product, ProductListing};

    #[test]
    fn test_fixtures_decode() {
        let page: ProductListing = FirstPageResponse::parse().unwrap();
        assert_eq!(page.products.len(), 5);
        assert_eq!(page.total_pages(), 39);

        let search: ProductListing = SearchPhoneResponse::parse().unwrap();
        assert_eq!(search.total, 2);

        let added: Product = AddedProductResponse::parse().unwrap();
        assert_eq!(added.id, 195);

        let deleted: DeletedProduct = DeletedProductResponse::parse().unwrap();
        assert!(deleted.is_deleted);
        assert!(deleted.deleted_on.is_some());
        assert_eq!(deleted.product.id, 1);
    }
}
