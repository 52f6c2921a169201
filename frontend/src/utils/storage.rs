use web_sys::{Storage, Window};

/// Browser window handle. Outside the browser (native test builds) there is
/// no window, and wasm-bindgen imports must not be called at all, so this
/// degrades to `Err` before touching `web_sys`.
pub fn window() -> Result<Window, String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("No window object".to_string())
    }
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}
