//! CSR entry point: set up logging, locate the mount container, mount the app.

#[cfg(feature = "csr")]
fn main() {
    use wasm_bindgen::JsCast;

    use user_directory::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // The host page must provide the container; without it there is
    // nothing to render into.
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("root"))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        panic!("mount container #root not found in host page");
    };

    leptos::mount::mount_to(root, App).forget();
}

#[cfg(not(feature = "csr"))]
fn main() {}
