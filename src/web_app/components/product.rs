// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductItem: One editable row of the list
// - ProductList: The list itself with its empty state

use leptos::prelude::*;
use rust_decimal::Decimal;

use super::common::{Button, Notice, PriceDisplay, SecondaryButton, TextInput, Thumbnail};
use super::image_picker::ImagePicker;
use crate::web_app::model::{EditDraft, Product};
use crate::web_app::server_fns::{update_product, UPDATE_PRODUCT_FAILED};

/// One product row: thumbnail on the left, details and actions on the right
///
/// In edit mode the title, price and thumbnail become inputs. Saving sends
/// one update request; on success the merged product is reported upward.
#[component]
pub fn ProductItem(
    /// The product to display
    product: Product,
    /// Called with the product as saved
    on_saved: Callback<Product>,
    /// Called with the id when Delete is clicked
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = product.id;
    let saved = RwSignal::new(product);
    let editing = RwSignal::new(false);

    // Edit buffers (raw input text)
    let title = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let thumbnail = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let start_edit = Callback::new(move |()| {
        saved.with_untracked(|p| {
            title.set(p.title.clone());
            price.set(p.price.to_string());
            thumbnail.set(p.thumbnail.clone());
        });
        message.set(String::new());
        editing.set(true);
    });

    let cancel = Callback::new(move |()| {
        message.set(String::new());
        editing.set(false);
    });

    let save = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }

        let mut draft = EditDraft {
            title: title.get_untracked(),
            price: Decimal::ZERO,
            thumbnail: thumbnail.get_untracked(),
        };
        draft.set_price_text(&price.get_untracked());

        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = update_product(id, draft.to_update()).await;
            saving.set(false);
            match result {
                Ok(updated) => {
                    let merged = draft.merge_into(updated);
                    saved.set(merged.clone());
                    editing.set(false);
                    on_saved.run(merged);
                }
                Err(_) => message.set(UPDATE_PRODUCT_FAILED.to_string()),
            }
        });
    });

    let shown_thumbnail = Signal::derive(move || {
        if editing.get() {
            thumbnail.get()
        } else {
            saved.with(|p| p.thumbnail.clone())
        }
    });
    let shown_title = Signal::derive(move || saved.with(|p| p.title.clone()));

    view! {
        <div class="grid grid-cols-[120px_1fr] gap-4 items-center p-4 border-b border-gray-200">
            <Thumbnail src=shown_thumbnail alt=shown_title />

            <div class="flex items-center justify-between gap-4">
                // Info
                <div class="flex flex-col gap-2">
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <strong>{move || shown_title.get()}</strong>
                            <p class="my-1">{move || view! { <PriceDisplay price=saved.with(|p| p.price) /> }}</p>
                        }
                    >
                        <TextInput value=thumbnail placeholder="Thumbnail URL" input_type="url" />
                        <ImagePicker
                            on_pick=Callback::new(move |url: String| thumbnail.set(url))
                            on_error=Callback::new(move |msg: String| message.set(msg))
                        />
                        <TextInput value=title placeholder="Title" />
                        <TextInput value=price placeholder="Price" input_type="number" />
                    </Show>
                    <Notice message=message />
                </div>

                // Actions
                <div class="flex gap-2">
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <Button on_click=start_edit>"Edit"</Button>
                            <SecondaryButton on_click=Callback::new(move |()| on_delete.run(id))>
                                "Delete"
                            </SecondaryButton>
                        }
                    >
                        <Button on_click=save disabled=saving>"Save"</Button>
                        <SecondaryButton on_click=cancel>"Cancel"</SecondaryButton>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Identity of a rendered row; any change to a shown field re-creates it
pub fn row_key(product: &Product) -> (i64, String, Decimal, String) {
    (product.id, product.title.clone(), product.price, product.thumbnail.clone())
}

/// Product list with an empty state
#[component]
pub fn ProductList(
    /// Products to display, in order
    products: Signal<Vec<Product>>,
    /// Forwarded from each item
    on_saved: Callback<Product>,
    /// Forwarded from each item
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100">
            <Show
                when=move || !products.get().is_empty()
                fallback=|| view! {
                    <p class="py-12 text-center text-gray-500">"No products found"</p>
                }
            >
                <For
                    each=move || products.get()
                    key=row_key
                    children=move |product| view! {
                        <ProductItem product=product on_saved=on_saved on_delete=on_delete />
                    }
                />
            </Show>
        </div>
    }
}
