// web_app/components/image_picker.rs - Local image selection
//
// Reads the picked file in the browser and hands back a base64 data URL.
// Nothing is uploaded: the data URL travels as the product's thumbnail.

use leptos::prelude::*;

/// File input accepting images
#[component]
pub fn ImagePicker(
    /// Called with the encoded `data:` URL
    on_pick: Callback<String>,
    /// Called with a user-facing message when the file cannot be used
    on_error: Callback<String>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                leptos::task::spawn_local(async move {
                    match read_as_data_url(file).await {
                        Ok(url) => on_pick.run(url),
                        Err(message) => on_error.run(message),
                    }
                });
            }
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, on_pick, on_error);
        }
    };

    view! {
        <input
            type="file"
            accept="image/*"
            class="text-sm text-gray-600 file:mr-3 file:px-3 file:py-1.5 file:rounded-lg file:border-0 file:bg-indigo-50 file:text-indigo-700"
            on:change=on_change
        />
    }
}

#[cfg(feature = "hydrate")]
async fn read_as_data_url(file: web_sys::File) -> Result<String, String> {
    use crate::web_app::thumbnail::encode_data_url;

    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected file".to_string())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let mime = file.type_();
    let declared = (!mime.is_empty()).then_some(mime.as_str());
    encode_data_url(&bytes, declared).map_err(|e| e.to_string())
}
