// web_app/pages/catalog.rs - Catalog page component
//
// The main page that composes all catalog components and drives the
// `CatalogState` signal: paging through the remote list, search,
// category filter, sort and the add/update/delete round trips.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::{
    delete_product, get_categories, get_products_by_category, get_products_page,
    search_products, sort_products, DELETE_PRODUCT_FAILED, LOAD_CATEGORIES_FAILED,
    LOAD_PRODUCTS_FAILED,
};
use crate::web_app::state::CatalogState;

type ListingFuture =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<ProductListing, ServerFnError>>>>;

/// Main catalog page component
///
/// Pages are fetched through a resource keyed on the current page request,
/// which only exists in `Page` mode. Search, category and sort results are
/// fetched on demand; each carries the state's request ticket so answers
/// overtaken by a later transition (a newer keystroke, a page size change,
/// an add) are dropped.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let state = RwSignal::new(CatalogState::default());
    let error = RwSignal::new(String::new());

    // Categories: loaded once
    let categories_res = Resource::new(|| (), |_| get_categories());
    let categories = Signal::derive(move || {
        categories_res
            .get()
            .and_then(|r: Result<Vec<Category>, ServerFnError>| r.ok())
            .unwrap_or_default()
    });
    let categories_failed =
        Signal::derive(move || matches!(categories_res.get(), Some(Err(_))));

    // Pages: re-fetched whenever the page request changes
    let page_query = Memo::new(move |_| state.with(|s| s.page_query()));
    let page_res = Resource::new(
        move || page_query.get(),
        |query| async move {
            match query {
                Some(q) => get_products_page(q.limit, q.skip).await.map(Some),
                None => Ok(None),
            }
        },
    );

    Effect::new(move |_| match page_res.get() {
        Some(Ok(Some(listing))) => {
            error.set(String::new());
            state.update(|s| s.apply_page(listing));
        }
        Some(Err(_)) => error.set(LOAD_PRODUCTS_FAILED.to_string()),
        _ => {}
    });

    // Fetch an alternative listing (search / category / sort)
    let load_results = move |fut: ListingFuture| {
        let issued = state.with_untracked(|s| s.current_request());
        leptos::task::spawn_local(async move {
            let result = fut.await;
            if state.with_untracked(|s| s.current_request()) != issued {
                return;
            }
            match result {
                Ok(listing) => {
                    error.set(String::new());
                    state.update(|s| {
                        s.apply_results_for(issued, listing.products);
                    });
                }
                Err(_) => error.set(LOAD_PRODUCTS_FAILED.to_string()),
            }
        });
    };

    // An empty query or slug goes back to paging; the page resource takes over
    let on_search = Callback::new(move |query: String| {
        if let Some(q) = state.try_update(|s| s.search(&query)).flatten() {
            load_results(Box::pin(search_products(q)));
        }
    });

    let on_category = Callback::new(move |slug: String| {
        if let Some(slug) = state.try_update(|s| s.select_category(&slug)).flatten() {
            load_results(Box::pin(get_products_by_category(slug)));
        }
    });

    let on_sort = Callback::new(move |order: SortOrder| {
        if let Some(order) = state.try_update(|s| s.sort(order)) {
            load_results(Box::pin(sort_products(order)));
        }
    });

    let on_limit = Callback::new(move |limit: u32| state.update(|s| s.set_limit(limit)));
    let on_prev = Callback::new(move |()| state.update(|s| s.prev_page()));
    let on_next = Callback::new(move |()| state.update(|s| s.next_page()));

    let on_added = Callback::new(move |product: Product| state.update(|s| s.prepend(product)));
    let on_saved = Callback::new(move |product: Product| state.update(|s| s.replace(product)));
    let on_delete = Callback::new(move |id: i64| {
        leptos::task::spawn_local(async move {
            match delete_product(id).await {
                Ok(deleted) => {
                    tracing::debug!("Deleted product {} (isDeleted={})", id, deleted.is_deleted);
                    error.set(String::new());
                    state.update(|s| s.remove(id));
                }
                Err(_) => error.set(DELETE_PRODUCT_FAILED.to_string()),
            }
        });
    });

    // Derived view data
    let products = Signal::derive(move || state.with(|s| s.products.clone()));
    let limit = Signal::derive(move || state.with(|s| s.limit));
    let page = Signal::derive(move || state.with(|s| s.page));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages()));
    let shows_pagination = Signal::derive(move || state.with(|s| s.shows_pagination()));

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4">
                    <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                        "DummyJSON Product App"
                    </h1>
                    <p class="text-sm text-gray-500">
                        "Product management demo using API integration"
                    </p>
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <AddProductForm categories=categories on_added=on_added />

                // Controls
                <section class="bg-white rounded-2xl shadow-sm p-6 mb-6 border border-gray-100 flex flex-col gap-4">
                    <SearchBar on_search=on_search />
                    <div class="flex flex-wrap items-center gap-3">
                        <CategoryFilter categories=categories on_select=on_category />
                        <SortControl on_sort=on_sort />
                        <PageSizeSelect limit=limit on_change=on_limit />
                    </div>
                </section>

                <div class="flex flex-col lg:flex-row gap-8 items-start">
                    // Category overview (sidebar)
                    <aside class="w-full lg:w-64 flex-shrink-0 bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                        <Show
                            when=move || !categories_failed.get()
                            fallback=|| view! { <ErrorDisplay error=LOAD_CATEGORIES_FAILED.to_string() /> }
                        >
                            <CategoryList categories=categories />
                        </Show>
                    </aside>

                    // Products
                    <section class="flex-1 w-full min-w-0">
                        {move || {
                            let message = error.get();
                            (!message.is_empty()).then(|| view! {
                                <div class="mb-4">
                                    <ErrorDisplay error=message />
                                </div>
                            })
                        }}

                        <Transition fallback=move || view! {
                            <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100">
                                <Loading message="Loading products..." />
                            </div>
                        }>
                            // Reading the resource here lets the transition track it
                            {move || page_res.get().map(|_| ())}
                            <ProductList products=products on_saved=on_saved on_delete=on_delete />
                        </Transition>

                        <Show when=move || shows_pagination.get()>
                            <Pagination
                                page=page
                                total_pages=total_pages
                                on_prev=on_prev
                                on_next=on_next
                            />
                        </Show>
                    </section>
                </div>
            </main>
        </div>
    }
}
