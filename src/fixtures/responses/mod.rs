// fixtures/responses/mod.rs
//
// One struct per endpoint, each implementing ApiFixture.

pub mod categories;
pub mod products;

pub use categories::CategoriesResponse;
pub use products::{
    AddedProductResponse, BeautyCategoryResponse, DeletedProductResponse, FirstPageResponse,
    SearchPhoneResponse, SortedDescResponse, UpdatedProductResponse,
};
