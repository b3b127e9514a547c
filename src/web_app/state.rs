// web_app/state.rs - Product list view state
//
// The catalog page keeps one `CatalogState` inside a signal. All the rules
// about which source fills the list, how pagination behaves and how local
// edits are merged live here, away from the view macros, so they can be
// tested without a reactive runtime.

use serde::{Deserialize, Serialize};

use crate::web_app::model::{
    page_count, ListMode, PageQuery, Product, ProductListing, SortOrder, DEFAULT_PAGE_SIZE,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub total: u32,
    pub limit: u32,
    /// Current page (1-indexed)
    pub page: u32,
    pub mode: ListMode,
    /// Products created this session; the remote API does not keep them,
    /// so page 1 reloads put them back on top.
    pub local_additions: Vec<Product>,
    /// Bumped on every mode change; search, category and sort answers carry
    /// the value they were issued under and are dropped once it moves on.
    #[serde(default)]
    request: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogState {
    pub fn new(limit: u32) -> Self {
        Self {
            products: Vec::new(),
            total: 0,
            limit,
            page: 1,
            mode: ListMode::Page,
            local_additions: Vec::new(),
            request: 0,
        }
    }

    /// Request for the current page, only while paginating
    pub fn page_query(&self) -> Option<PageQuery> {
        (self.mode == ListMode::Page).then(|| PageQuery::for_page(self.page, self.limit))
    }

    pub fn total_pages(&self) -> u32 {
        page_count(self.total, self.limit)
    }

    pub fn shows_pagination(&self) -> bool {
        self.mode == ListMode::Page
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn prev_page(&mut self) {
        if self.can_go_prev() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.page += 1;
        }
    }

    pub fn apply_page(&mut self, listing: ProductListing) {
        self.total = listing.total;
        let mut products = listing.products;

        if self.page == 1 && !self.local_additions.is_empty() {
            products.retain(|p| !self.local_additions.iter().any(|a| a.id == p.id));
            let mut merged = self.local_additions.clone();
            merged.extend(products);
            products = merged;
        }

        self.products = products;
    }

    pub fn apply_results(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Ticket of the latest search, category or sort request
    pub fn current_request(&self) -> u64 {
        self.request
    }

    /// Apply an alternative listing unless a later transition overtook it.
    ///
    /// Returns whether the products were applied.
    pub fn apply_results_for(&mut self, issued: u64, products: Vec<Product>) -> bool {
        if issued != self.request || self.mode == ListMode::Page {
            return false;
        }
        self.apply_results(products);
        true
    }

    /// Switch to search results; an empty query goes back to paging.
    ///
    /// Returns the query to send, if any.
    pub fn search(&mut self, query: &str) -> Option<String> {
        self.request += 1;
        if query.is_empty() {
            self.mode = ListMode::Page;
            return None;
        }
        self.mode = ListMode::Search;
        Some(query.to_string())
    }

    /// Switch to a category; the empty slug ("All Categories") goes back to paging
    pub fn select_category(&mut self, slug: &str) -> Option<String> {
        self.request += 1;
        if slug.is_empty() {
            self.mode = ListMode::Page;
            return None;
        }
        self.mode = ListMode::Category;
        Some(slug.to_string())
    }

    pub fn sort(&mut self, order: SortOrder) -> SortOrder {
        self.request += 1;
        self.mode = ListMode::Sort;
        order
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.request += 1;
        self.limit = limit;
        self.page = 1;
        self.mode = ListMode::Page;
    }

    /// Show a freshly added product at the top of page 1
    pub fn prepend(&mut self, product: Product) {
        self.request += 1;
        self.mode = ListMode::Page;
        self.page = 1;
        self.products.retain(|p| p.id != product.id);
        self.local_additions.retain(|p| p.id != product.id);
        self.products.insert(0, product.clone());
        self.local_additions.insert(0, product);
    }

    pub fn replace(&mut self, product: Product) {
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
            *slot = product.clone();
        }
        if let Some(slot) = self.local_additions.iter_mut().find(|p| p.id == product.id) {
            *slot = product;
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.products.retain(|p| p.id != id);
        self.local_additions.retain(|p| p.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
