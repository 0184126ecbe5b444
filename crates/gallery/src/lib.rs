//! Browser-hosted gallery rendering every component family.
//!
//! The gallery exercises the component set through its public props
//! only, and drives one button instance from a raw property bag so the
//! runtime schema path stays exercised in a real surface.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;

pub use app::GalleryApp;

/// Mounts the gallery onto the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <GalleryApp /> })
}
