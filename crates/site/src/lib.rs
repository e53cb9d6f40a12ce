mod config;
mod data;
mod pages;
mod routes;
mod web_app;

pub use config::load_config;
pub use routes::{primary_nav, route_tree};
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
