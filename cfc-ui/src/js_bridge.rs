//! Thin wrappers around browser APIs.
//!
//! Only cosmetic behaviour lives here; nothing in this module touches
//! calculation data.

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CFC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Build the script that smoothly scrolls `element_id` into view after
/// `delay_ms` milliseconds.
pub fn scroll_script(element_id: &str, delay_ms: u32) -> String {
    let id_json = serde_json::to_string(element_id).unwrap_or_default();
    format!(
        "setTimeout(function() {{ var el = document.getElementById({}); if (el) {{ el.scrollIntoView({{ behavior: 'smooth' }}); }} }}, {});",
        id_json, delay_ms
    )
}

/// Scroll `element_id` into view once the current render has settled.
///
/// The element may not exist yet when this is called (the results section
/// appears on the first calculation), so the lookup happens inside the
/// timeout.
pub fn scroll_into_view(element_id: &str, delay_ms: u32) {
    call_js(&scroll_script(element_id, delay_ms));
}

/// Log to the browser console.
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_script_quotes_id() {
        let script = scroll_script("results", 100);
        assert!(script.contains("document.getElementById(\"results\")"));
        assert!(script.contains("}, 100);"));
        assert!(script.contains("behavior: 'smooth'"));
    }

    #[test]
    fn test_scroll_script_escapes_id() {
        let script = scroll_script("a\"b", 0);
        assert!(script.contains(r#"getElementById("a\"b")"#));
    }
}
