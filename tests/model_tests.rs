// tests/model_tests.rs
// Wire format of the shared models against recorded API bodies

use chrono::{Datelike, Timelike};
use dummyjson_catalog::fixtures::responses::*;
use dummyjson_catalog::fixtures::ApiFixture;
use dummyjson_catalog::web_app::model::*;
use rust_decimal::Decimal;

#[test]
fn test_listing_with_field_subset() -> anyhow::Result<()> {
    let listing: ProductListing = FirstPageResponse::parse()?;
    assert_eq!(listing.products.len(), 5);
    assert_eq!((listing.total, listing.skip, listing.limit), (194, 0, 5));

    let first = &listing.products[0];
    assert_eq!(first.price, Decimal::new(999, 2));
    // `select` left the description out
    assert!(first.description.is_empty());
    Ok(())
}

#[test]
fn test_unknown_fields_are_ignored() -> anyhow::Result<()> {
    let listing: ProductListing = SearchPhoneResponse::parse()?;
    assert_eq!(listing.products[1].title, "iPhone 6");
    assert!(!listing.products[1].description.is_empty());
    Ok(())
}

#[test]
fn test_category_ids_are_optional() -> anyhow::Result<()> {
    let categories: Vec<Category> = CategoriesResponse::parse()?;
    assert_eq!(categories[0].id, None);
    assert_eq!(categories[0].key(), "beauty");
    assert_eq!(categories[3].id, Some(CategoryId::Number(4)));

    let text: Category = serde_json::from_str(r#"{"id": "c-9", "slug": "tops", "name": "Tops"}"#)?;
    assert_eq!(text.key(), "c-9");
    assert!(text.url.is_empty());
    Ok(())
}

#[test]
fn test_deleted_product() -> anyhow::Result<()> {
    let deleted: DeletedProduct = DeletedProductResponse::parse()?;
    assert!(deleted.is_deleted);
    assert_eq!(deleted.product.title, "Essence Mascara Lash Princess");

    let on = deleted.deleted_on.expect("timestamp present");
    assert_eq!((on.year(), on.month(), on.day()), (2024, 5, 20));
    assert_eq!((on.hour(), on.minute()), (11, 4));
    Ok(())
}

#[test]
fn test_new_product_body() -> anyhow::Result<()> {
    let body = serde_json::to_value(NewProduct {
        title: "Desk Lamp".to_string(),
        price: Decimal::new(2450, 2),
        category: "home-decoration".to_string(),
        thumbnail: None,
    })?;

    assert_eq!(body["price"], 24.5, "prices travel as JSON numbers");
    assert!(body.get("thumbnail").is_none());
    Ok(())
}

#[test]
fn test_page_query_parameters() {
    let params = PageQuery::for_page(2, 9).params();
    assert_eq!(
        params,
        vec![
            ("limit", "9".to_string()),
            ("skip", "9".to_string()),
            ("select", LISTING_FIELDS.join(",")),
        ]
    );

    let bare = PageQuery { limit: 0, skip: 0, select: vec![] };
    assert!(bare.params().is_empty());
}

#[test]
fn test_page_counts() {
    let cases = [(194, 5, 39), (194, 12, 17), (6, 3, 2), (0, 5, 0), (10, 0, 0)];
    for (total, limit, pages) in cases {
        assert_eq!(page_count(total, limit), pages, "total={} limit={}", total, limit);
    }
}

#[test]
fn test_sort_order_values() {
    assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
    assert_eq!(SortOrder::from_value("desc"), SortOrder::Desc);
    assert_eq!(SortOrder::from_value("sideways"), SortOrder::Asc);
    assert_eq!(SortOrder::Asc.label(), "Title A - Z");
}
