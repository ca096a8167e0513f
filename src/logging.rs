//! Console logging.
//!
//! On wasm this goes to the browser console. Host builds (tests) write to
//! stderr instead, since JS imports panic outside wasm.

pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("Dessert Clicker: {message}").into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("Dessert Clicker: {message}");
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("Dessert Clicker: {message}").into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("Dessert Clicker [warn]: {message}");
}
