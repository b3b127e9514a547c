// web_app/components/controls.rs - List controls
//
// These components drive which products the list shows:
// - SearchBar: Free-text search, fired on every keystroke
// - CategoryFilter: Category select ("All Categories" clears it)
// - SortControl: Title A-Z / Z-A
// - PageSizeSelect: Items per page
// - Pagination: Prev / page indicator / Next

use leptos::prelude::*;
use crate::web_app::model::{Category, SortOrder, PAGE_SIZE_OPTIONS};

/// Search input; every change is reported, an empty string clears the search
#[component]
pub fn SearchBar(
    /// Called with the current input value
    on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            placeholder="Search product..."
            class="w-full px-4 py-3 border-2 border-gray-200 rounded-xl \
                   focus:ring-4 focus:ring-indigo-100 focus:border-indigo-500 \
                   outline-none transition-all shadow-sm"
            on:input=move |ev| on_search.run(event_target_value(&ev))
        />
    }
}

/// Category select; the empty value means "All Categories"
#[component]
pub fn CategoryFilter(
    /// Categories to offer
    categories: Signal<Vec<Category>>,
    /// Called with the selected slug (empty = all)
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="px-4 py-2 border border-gray-300 rounded-lg bg-white shadow-sm cursor-pointer"
            on:change=move |ev| on_select.run(event_target_value(&ev))
        >
            <option value="">"All Categories"</option>
            <For
                each=move || categories.get()
                key=|c| c.slug.clone()
                children=move |category| {
                    view! { <option value=category.slug.clone()>{category.name.clone()}</option> }
                }
            />
        </select>
    }
}

/// Sort select over product titles
#[component]
pub fn SortControl(
    /// Called with the chosen direction
    on_sort: Callback<SortOrder>,
) -> impl IntoView {
    let options = [SortOrder::Asc, SortOrder::Desc];

    view! {
        <select
            class="px-4 py-2 border border-gray-300 rounded-lg bg-white shadow-sm cursor-pointer"
            on:change=move |ev| on_sort.run(SortOrder::from_value(&event_target_value(&ev)))
        >
            {options.into_iter().map(|order| view! {
                <option value=order.as_str()>{order.label()}</option>
            }).collect_view()}
        </select>
    }
}

/// "Items per page" selector
#[component]
pub fn PageSizeSelect(
    /// Currently selected size
    limit: Signal<u32>,
    /// Called with the new size
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <label class="text-sm text-gray-600 flex items-center gap-2">
            "Items per page:"
            <select
                class="px-2 py-1 border border-gray-300 rounded-lg bg-white"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS.into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || limit.get() == size>
                        {size}
                    </option>
                }).collect_view()}
            </select>
        </label>
    }
}

/// Pagination component
#[component]
pub fn Pagination(
    /// Current page (1-indexed)
    page: Signal<u32>,
    /// Total number of pages
    total_pages: Signal<u32>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let button_class = "px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                        disabled:opacity-50 disabled:cursor-not-allowed \
                        hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700";

    view! {
        <div class="flex items-center gap-3 mt-6">
            <button
                type="button"
                class=button_class
                disabled=move || page.get() <= 1
                on:click=move |_| on_prev.run(())
            >
                "Prev"
            </button>

            <span class="text-sm font-medium text-gray-600 bg-gray-100 px-4 py-2 rounded-lg">
                "Page " {move || page.get()} " of " {move || total_pages.get()}
            </span>

            <button
                type="button"
                class=button_class
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_option_values() {
        let options = [SortOrder::Asc, SortOrder::Desc];
        let values: Vec<&str> = options.iter().map(|o| o.as_str()).collect();
        assert_eq!(values, vec!["asc", "desc"]);
        assert_eq!(SortOrder::Asc.label(), "Title A - Z");
        assert_eq!(SortOrder::Desc.label(), "Title Z - A");
    }

    #[test]
    fn test_page_size_parsing() {
        for size in PAGE_SIZE_OPTIONS {
            assert_eq!(size.to_string().parse::<u32>(), Ok(size));
        }
        assert!("".parse::<u32>().is_err());
    }
}
