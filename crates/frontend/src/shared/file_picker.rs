//! Чтение выбранного файла из `<input type="file">`

use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// First file of the input that fired `ev`
pub fn picked_file(ev: &web_sys::Event) -> Option<File> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Clears the input so picking the same file again fires `change`
pub fn reset_input(ev: &web_sys::Event) {
    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
        input.set_value("");
    }
}

/// 1536 -> "1.5 KB"
pub fn format_file_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    if bytes < KB {
        format!("{} B", bytes as u64)
    } else if bytes < KB * KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes / (KB * KB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512.0), "512 B");
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(3.0 * 1024.0 * 1024.0), "3.0 MB");
    }
}
