//! Client entrypoint for the CSR build.
//!
//! Mounts into `#folio-root` when the page provides one, otherwise the body.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use folio_field::{App, init_logging};
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

fn mount_root() -> Option<HtmlElement> {
	web_sys::window()?
		.document()?
		.get_element_by_id("folio-root")?
		.dyn_into()
		.ok()
}

fn main() {
	init_logging();

	match mount_root() {
		Some(root) => mount_to(root, || view! { <App /> }).forget(),
		None => mount_to_body(|| view! { <App /> }),
	}
}
