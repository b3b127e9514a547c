// web_app/components/add_product.rs - "Add New Product" form

use leptos::prelude::*;

use super::common::{Button, Notice, TextInput};
use super::image_picker::ImagePicker;
use crate::web_app::model::{Category, ProductDraft, Product};
use crate::web_app::server_fns::{add_product, ADD_PRODUCT_FAILED};

/// Form for creating a product
///
/// Title and category are required. The thumbnail is either typed as a URL
/// or picked from disk (inlined as a data URL); an empty one falls back to a
/// placeholder image.
#[component]
pub fn AddProductForm(
    /// Categories offered in the select
    categories: Signal<Vec<Category>>,
    /// Called with the product as created by the API
    on_added: Callback<Product>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let thumbnail = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let last_added = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        // One POST at a time
        if submitting.get_untracked() {
            return;
        }

        let draft = ProductDraft {
            title: title.get_untracked(),
            price: price.get_untracked(),
            category: category.get_untracked(),
            thumbnail: thumbnail.get_untracked(),
        };

        let new_product = match draft.validate() {
            Ok(product) => product,
            Err(e) => {
                message.set(e.to_string());
                return;
            }
        };

        message.set(String::new());
        submitting.set(true);
        leptos::task::spawn_local(async move {
            match add_product(new_product).await {
                Ok(added) => {
                    last_added.set(added.title.clone());
                    on_added.run(added);
                    title.set(String::new());
                    price.set(String::new());
                    category.set(String::new());
                    thumbnail.set(String::new());
                }
                Err(_) => message.set(ADD_PRODUCT_FAILED.to_string()),
            }
            submitting.set(false);
        });
    });

    view! {
        <section class="bg-white rounded-2xl shadow-sm p-6 mb-6 border border-gray-100">
            <h3 class="text-lg font-bold text-gray-900 mb-4">"Add New Product"</h3>
            <div class="flex flex-wrap items-center gap-2">
                <TextInput value=title placeholder="Title" />
                <TextInput value=price placeholder="Price" input_type="number" class="w-28" />
                <select
                    class="px-3 py-2 border border-gray-300 rounded-lg bg-white shadow-sm"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"Select Category"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.key()
                        children=move |c| view! { <option value=c.slug.clone()>{c.name.clone()}</option> }
                    />
                </select>
                <TextInput value=thumbnail placeholder="Thumbnail URL" input_type="url" class="w-64" />
                <ImagePicker
                    on_pick=Callback::new(move |url: String| thumbnail.set(url))
                    on_error=Callback::new(move |msg: String| message.set(msg))
                />
                <Button on_click=submit disabled=submitting class="ml-2">
                    {move || if submitting.get() { "Adding..." } else { "Add" }}
                </Button>
            </div>
            <Notice message=message />
            <Show when=move || !last_added.get().is_empty() && message.get().is_empty()>
                <p class="mt-2 text-sm text-green-700">
                    "Product added: " {move || last_added.get()}
                </p>
            </Show>
        </section>
    }
}
