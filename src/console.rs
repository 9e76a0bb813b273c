//! Browser console logging.
//!
//! Thin wrappers over `web_sys::console`. Off `wasm32` (unit tests on the
//! host) the calls go to stderr instead, since wasm-bindgen imports panic
//! when invoked natively.

pub fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[log] {}", msg);
}

pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[warn] {}", msg);
}
