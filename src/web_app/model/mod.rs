// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON exchanged with the remote product API
// (dummyjson.com). They are used on both sides of the server function
// boundary, so everything here must compile for WASM as well.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod form;

pub use form::{DraftError, EditDraft, ProductDraft};

/// Page sizes offered by the "Items per page" selector
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [3, 5, 6, 9, 12];

/// Page size used when the catalog first loads
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Fields requested for paginated listings (`select=` parameter)
pub const LISTING_FIELDS: [&str; 5] = ["id", "title", "price", "thumbnail", "category"];

/// Thumbnail sent when the add form leaves the image empty
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/150";

/// Field used by the sort control
pub const SORT_FIELD: &str = "title";

/// Product record as modelled by the remote API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    // Absent when the listing was requested with a `select` subset
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// Category identifier; the API has returned both numbers and strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryId::Number(n) => write!(f, "{}", n),
            CategoryId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Product category (read-only on the client)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<CategoryId>,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Category {
    /// Stable key for rendering lists: the id when present, else the slug
    pub fn key(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| self.slug.clone())
    }
}

/// Listing envelope returned by every product collection endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

impl ProductListing {
    pub fn total_pages(&self) -> u32 {
        page_count(self.total, self.limit)
    }
}

/// Number of pages needed to show `total` items, `limit` per page.
///
/// A zero limit yields zero pages instead of dividing by zero.
pub fn page_count(total: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Body of `POST /products/add`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Body of `PUT /products/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Response of `DELETE /products/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Which source currently fills the product list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListMode {
    #[default]
    Page,
    Search,
    Category,
    Sort,
}

impl std::fmt::Display for ListMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListMode::Page => write!(f, "page"),
            ListMode::Search => write!(f, "search"),
            ListMode::Category => write!(f, "category"),
            ListMode::Sort => write!(f, "sort"),
        }
    }
}

/// Sort direction accepted by the `order=` parameter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Title A - Z",
            SortOrder::Desc => "Title Z - A",
        }
    }

    /// Parse the value of a `<select>` option; anything unknown sorts ascending
    pub fn from_value(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination request for `GET /products`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub limit: u32,
    pub skip: u32,
    pub select: Vec<String>,
}

impl PageQuery {
    /// Query for a 1-based `page` with the listing field subset
    pub fn for_page(page: u32, limit: u32) -> Self {
        Self {
            limit,
            skip: page.saturating_sub(1) * limit,
            select: LISTING_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Query-string pairs; zero or empty values are left out
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.limit > 0 {
            params.push(("limit", self.limit.to_string()));
        }
        if self.skip > 0 {
            params.push(("skip", self.skip.to_string()));
        }
        if !self.select.is_empty() {
            params.push(("select", self.select.join(",")));
        }
        params
    }
}
