// Component render tests
// Components are instantiated inside a reactive owner and rendered to HTML
// on the server side; interactive behaviour lives in the state tests.

use leptos::prelude::*;
use dummyjson_catalog::fixtures::responses::{CategoriesResponse, FirstPageResponse};
use dummyjson_catalog::fixtures::ApiFixture;
use dummyjson_catalog::web_app::components::*;
use dummyjson_catalog::web_app::model::{Category, Product, ProductListing};
use rust_decimal::Decimal;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

fn first_page() -> Vec<Product> {
    FirstPageResponse::parse::<ProductListing>()
        .expect("fixture decodes")
        .products
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        let html = Loading(LoadingProps { message: "Loading products..." }).to_html();
        assert!(html.contains("Loading products..."));
    });
}

#[test]
fn test_error_display_shows_message() {
    with_runtime(|| {
        let html = ErrorDisplay(ErrorDisplayProps {
            error: "Failed to load products".to_string(),
        })
        .to_html();
        assert!(html.contains("Failed to load products"));
    });
}

#[test]
fn test_price_display_formats_two_decimals() {
    with_runtime(|| {
        let html = PriceDisplay(PriceDisplayProps { price: Decimal::new(245, 1) }).to_html();
        assert!(html.contains("$24.50"));
    });
}

#[test]
fn test_secondary_button_instantiation() {
    with_runtime(|| {
        let html = SecondaryButton(SecondaryButtonProps {
            children: Box::new(move || view! { "Cancel" }.into_any()),
            on_click: None,
            disabled: Signal::stored(false),
        })
        .to_html();
        assert!(html.contains("Cancel"));
    });
}

#[test]
fn test_button_follows_disabled_signal() {
    with_runtime(|| {
        let busy = RwSignal::new(true);
        let render = || {
            Button(ButtonProps {
                children: Box::new(move || view! { "Add" }.into_any()),
                on_click: None,
                disabled: busy.into(),
                class: "ml-2",
            })
            .to_html()
        };

        let tags = |html: &str| {
            button_tags(html)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        let busy_tags = tags(&render());
        assert_eq!(busy_tags.len(), 1);
        assert!(has_disabled_attr(&busy_tags[0]));

        busy.set(false);
        let idle_tags = tags(&render());
        assert_eq!(idle_tags.len(), 1);
        assert!(!has_disabled_attr(&idle_tags[0]));
    });
}

#[test]
fn test_add_form_starts_enabled() {
    with_runtime(|| {
        let html = AddProductForm(AddProductFormProps {
            categories: Signal::stored(Vec::<Category>::new()),
            on_added: Callback::new(|_: Product| {}),
        })
        .to_html();
        assert!(html.contains("Add New Product"));

        let add = button_tags(&html)
            .into_iter()
            .find(|t| t.contains("ml-2"))
            .map(str::to_string);
        assert!(matches!(add, Some(ref tag) if !has_disabled_attr(tag)));
    });
}

#[test]
fn test_notice_hidden_while_empty() {
    with_runtime(|| {
        let empty = Notice(NoticeProps { message: Signal::stored(String::new()) }).to_html();
        assert!(!empty.contains("role=\"alert\""));

        let shown = Notice(NoticeProps {
            message: Signal::stored("Title and Category are required".to_string()),
        })
        .to_html();
        assert!(shown.contains("Title and Category are required"));
    });
}

#[test]
fn test_thumbnail_accepts_data_url() {
    with_runtime(|| {
        let html = Thumbnail(ThumbnailProps {
            src: Signal::stored("data:image/png;base64,iVBORw0KGgo=".to_string()),
            alt: Signal::stored("Desk Lamp".to_string()),
        })
        .to_html();
        assert!(html.contains("data:image/png;base64,iVBORw0KGgo="));
        assert!(html.contains("Desk Lamp"));
    });
}

fn render_pagination(page: u32, total_pages: u32) -> String {
    Pagination(PaginationProps {
        page: Signal::stored(page),
        total_pages: Signal::stored(total_pages),
        on_prev: Callback::new(|()| {}),
        on_next: Callback::new(|()| {}),
    })
    .to_html()
}

/// Opening `<button ...>` tags, in document order
fn button_tags(html: &str) -> Vec<&str> {
    html.split("<button")
        .skip(1)
        .map(|rest| rest.split('>').next().unwrap_or(""))
        .collect()
}

/// Whether a tag carries the `disabled` attribute (not the `disabled:` utility classes)
fn has_disabled_attr(tag: &str) -> bool {
    tag.split_whitespace()
        .any(|token| token == "disabled" || token.starts_with("disabled=") || token == "disabled/")
}

#[test]
fn test_pagination_indicator() {
    with_runtime(|| {
        let html = render_pagination(2, 39);
        assert!(html.contains("Prev"));
        assert!(html.contains("Next"));
        assert!(html.contains("39"));
    });
}

#[test]
fn test_pagination_disabled_at_the_ends() {
    with_runtime(|| {
        let cases = [
            (1, 39, true, false),
            (20, 39, false, false),
            (39, 39, false, true),
            (1, 1, true, true),
        ];

        for (page, total_pages, prev_disabled, next_disabled) in cases {
            let html = render_pagination(page, total_pages);
            let tags = button_tags(&html);
            assert_eq!(tags.len(), 2, "Prev and Next buttons: {}", html);
            let label = format!("page {} of {}", page, total_pages);
            assert_eq!(has_disabled_attr(tags[0]), prev_disabled, "Prev at {}", label);
            assert_eq!(has_disabled_attr(tags[1]), next_disabled, "Next at {}", label);
        }
    });
}

#[test]
fn test_category_list_renders_names() {
    with_runtime(|| {
        let categories: Vec<Category> = CategoriesResponse::parse().expect("fixture decodes");
        let html =
            CategoryList(CategoryListProps { categories: Signal::stored(categories) }).to_html();
        assert!(html.contains("Categories"));
        assert!(html.contains("Beauty"));
        assert!(html.contains("Groceries"));
    });
}

#[test]
fn test_product_list_empty_state() {
    with_runtime(|| {
        let html = ProductList(ProductListProps {
            products: Signal::stored(vec![]),
            on_saved: Callback::new(|_| {}),
            on_delete: Callback::new(|_| {}),
        })
        .to_html();
        assert!(html.contains("No products found"));
    });
}

#[test]
fn test_product_list_renders_rows() {
    with_runtime(|| {
        let html = ProductList(ProductListProps {
            products: Signal::stored(first_page()),
            on_saved: Callback::new(|_| {}),
            on_delete: Callback::new(|_| {}),
        })
        .to_html();
        assert!(html.contains("Essence Mascara Lash Princess"));
        assert!(html.contains("$9.99"));
        assert!(html.contains("Edit"));
        assert!(html.contains("Delete"));
        assert!(!html.contains("No products found"));
    });
}

#[test]
fn test_thumbnail_falls_back_to_placeholder() {
    with_runtime(|| {
        let html = Thumbnail(ThumbnailProps {
            src: Signal::stored(String::new()),
            alt: Signal::stored("No image".to_string()),
        })
        .to_html();
        assert!(html.contains("https://via.placeholder.com/150"));
    });
}

#[test]
fn test_product_list_rows_follow_edits() {
    with_runtime(|| {
        let mut products = first_page();
        let before = products.iter().map(row_key).collect::<Vec<_>>();

        // A saved edit changes the row identity and the rendered row
        products[0].title = "Essence Mascara Deluxe".to_string();
        products[0].price = Decimal::new(1149, 2);
        assert_ne!(row_key(&products[0]), before[0]);
        assert_eq!(row_key(&products[1]), before[1]);

        let html = ProductList(ProductListProps {
            products: Signal::stored(products),
            on_saved: Callback::new(|_| {}),
            on_delete: Callback::new(|_| {}),
        })
        .to_html();
        assert!(html.contains("Essence Mascara Deluxe"));
        assert!(html.contains("$11.49"));
        assert!(!html.contains("Essence Mascara Lash Princess"));
        assert!(html.contains("Eyeshadow Palette with Mirror"));
    });
}
