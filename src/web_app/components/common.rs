// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::model::PLACEHOLDER_THUMBNAIL;
use crate::web_app::thumbnail::{is_data_url, is_remote_url};

/// Format a price the way the list shows it: `$9.99`
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price.round_dp(2))
}

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-indigo-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Displays error messages with appropriate styling.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="text-red-600 text-sm">{error}</p>
        </div>
    }
}

/// Inline status line under a form (validation or failure message)
#[component]
pub fn Notice(
    /// Message to show; nothing is rendered while empty
    #[prop(into)]
    message: Signal<String>,
) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="mt-2 text-sm text-red-600" role="alert">{move || message.get()}</p>
        </Show>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Text input bound to a string signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, number, url, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-3 py-2 border border-gray-300 rounded-lg \
                      focus:ring-2 focus:ring-indigo-500 focus:border-transparent \
                      outline-none transition-shadow shadow-sm";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Price display component
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
) -> impl IntoView {
    view! {
        <span class="text-indigo-600 font-medium">
            {format_price(price)}
        </span>
    }
}

/// Square product thumbnail; accepts remote URLs and inline data URLs
#[component]
pub fn Thumbnail(
    /// Image source
    #[prop(into)]
    src: Signal<String>,
    /// Alt text
    #[prop(into)]
    alt: Signal<String>,
) -> impl IntoView {
    // Anything that is neither a URL nor an inline image shows the placeholder
    let shown = move || {
        let src = src.get();
        if is_remote_url(&src) || is_data_url(&src) {
            src
        } else {
            PLACEHOLDER_THUMBNAIL.to_string()
        }
    };

    view! {
        <img
            src=shown
            alt=move || alt.get()
            width="120"
            height="120"
            class="w-[120px] h-[120px] object-cover rounded-xl bg-gray-100"
        />
    }
}
