//! Binary entrypoint for the browser-hosted gallery.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    gallery::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("The gallery targets the browser. Build `gallery_app` for wasm32 with the `csr` feature.");
}
