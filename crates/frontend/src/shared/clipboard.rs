//! Clipboard access through the Web Clipboard API

use wasm_bindgen_futures::spawn_local;

/// Copies `text` and reports the outcome to `on_done`
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let result = match web_sys::window() {
            Some(window) => {
                let clipboard = window.navigator().clipboard();
                wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                    .await
                    .map(|_| ())
                    .map_err(|e| format!("Clipboard write failed: {:?}", e))
            }
            None => Err("No window object".to_string()),
        };
        if let Err(e) = &result {
            log::warn!("{}", e);
        }
        on_done(result);
    });
}
