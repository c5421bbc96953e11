/// Console log with a bracketed scope, e.g. `[Links] added #3`.
///
/// Only wired up in the browser; native test builds have no console to talk to.
pub(crate) fn log(scope: &str, message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("[{scope}] {message}").into());

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (scope, message);
}

/// Keys that activate a focused control acting as a button.
pub(crate) fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Page key carried in the URL fragment (`#essentials`), if any.
pub(crate) fn page_key_from_location() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    page_key_from_hash(&hash)
}

fn page_key_from_hash(hash: &str) -> Option<String> {
    let key = hash.trim_start_matches('#').trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
