//! Clipboard and file-download output for the cover-letter page.
//!
//! Both operations report failure instead of silently doing nothing, so the
//! caller can show an error toast when the browser refuses.

use content::TextFile;
use dioxus::prelude::*;

use crate::js::js_string_escape;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("no browser window available")]
    NoWindow,
    #[error("clipboard access was denied or is unavailable")]
    ClipboardDenied,
    #[error("script bridge failed: {0}")]
    Bridge(String),
    #[error("browser rejected the operation: {0}")]
    Dom(String),
    #[error("file downloads are only supported in the browser")]
    Unsupported,
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ExportError> {
    let js = format!(
        r#"(function() {{
            if (!navigator.clipboard || !navigator.clipboard.writeText) {{
                dioxus.send(false);
                return;
            }}
            navigator.clipboard.writeText({text_js}).then(
                function() {{ dioxus.send(true); }},
                function() {{ dioxus.send(false); }}
            );
        }})();"#,
        text_js = js_string_escape(text),
    );
    let mut eval = document::eval(&js);
    match eval.recv::<bool>().await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ExportError::ClipboardDenied),
        Err(e) => Err(ExportError::Bridge(format!("{e:?}"))),
    }
}

/// Offer `file` as a download.
///
/// The blob's object URL is revoked as soon as the save has been triggered,
/// whether or not the click succeeded.
#[cfg(target_arch = "wasm32")]
pub fn download_text_file(file: &TextFile) -> Result<(), ExportError> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or(ExportError::NoWindow)?;
    let document = window.document().ok_or(ExportError::NoWindow)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(file.mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(dom_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(dom_error)?;

    let result = click_download_link(&document, &url, &file.name);
    if let Err(e) = web_sys::Url::revoke_object_url(&url) {
        tracing::warn!("Failed to revoke object URL: {:?}", e);
    }
    result
}

#[cfg(target_arch = "wasm32")]
fn click_download_link(
    document: &web_sys::Document,
    url: &str,
    filename: &str,
) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(dom_error)?
        .dyn_into()
        .map_err(|_| ExportError::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href(url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| ExportError::Dom("document has no body".to_string()))?;
    body.append_child(&anchor).map_err(dom_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(dom_error)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn dom_error(value: wasm_bindgen::JsValue) -> ExportError {
    ExportError::Dom(format!("{value:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_text_file(file: &TextFile) -> Result<(), ExportError> {
    tracing::debug!("Skipping download of {} outside the browser", file.name);
    Err(ExportError::Unsupported)
}

/// Open `path` in a new browser tab.
pub fn open_in_new_tab(path: &str) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or(ExportError::NoWindow)?;
        window
            .open_with_url_and_target(path, "_blank")
            .map_err(dom_error)?;
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Cannot open {} outside the browser", path);
        Err(ExportError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::{CoverLetter, TemplateFields};

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExportError::ClipboardDenied.to_string(),
            "clipboard access was denied or is unavailable"
        );
        assert_eq!(
            ExportError::Dom("quota".to_string()).to_string(),
            "browser rejected the operation: quota"
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_download_outside_browser_is_unsupported() {
        let file = CoverLetter::default().export(&TemplateFields::default());
        assert_eq!(download_text_file(&file), Err(ExportError::Unsupported));
        assert_eq!(open_in_new_tab("/cover-letter"), Err(ExportError::Unsupported));
    }
}
