// web_app/thumbnail.rs - Thumbnail encoding for locally picked images
//
// Product thumbnails are either remote URLs or images the user picked from
// disk. Picked images never leave the browser as files: they are inlined as
// base64 `data:` URLs and sent to the API as plain strings.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThumbnailError {
    #[error("Selected file is empty")]
    Empty,

    #[error("Selected file is not a supported image")]
    UnsupportedFormat,
}

/// Encode image bytes as a `data:<mime>;base64,...` URL.
///
/// `declared_mime` is the type reported by the browser for the file. It is
/// trusted when it names an image; otherwise the type is sniffed from the
/// bytes.
pub fn encode_data_url(
    bytes: &[u8],
    declared_mime: Option<&str>,
) -> Result<String, ThumbnailError> {
    if bytes.is_empty() {
        return Err(ThumbnailError::Empty);
    }

    let mime = match declared_mime.filter(|m| m.starts_with("image/")) {
        Some(mime) => mime.to_string(),
        None => sniff_mime(bytes).ok_or(ThumbnailError::UnsupportedFormat)?.to_string(),
    };

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Detect the MIME type of supported image bytes
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

pub fn is_data_url(thumbnail: &str) -> bool {
    thumbnail.starts_with("data:image/")
}

pub fn is_remote_url(thumbnail: &str) -> bool {
    thumbnail.starts_with("https://") || thumbnail.starts_with("http://")
}
