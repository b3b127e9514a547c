// web_app/components/category.rs - Category overview

use leptos::prelude::*;
use crate::web_app::model::Category;

/// Plain list of category names
#[component]
pub fn CategoryList(
    categories: Signal<Vec<Category>>,
) -> impl IntoView {
    view! {
        <div>
            <h2 class="font-bold text-gray-900 text-sm uppercase tracking-wide mb-2">"Categories"</h2>
            <ul class="space-y-1 text-sm text-gray-700">
                <For
                    each=move || categories.get()
                    key=|c| c.key()
                    children=move |c| view! { <li>{c.name.clone()}</li> }
                />
            </ul>
        </div>
    }
}
