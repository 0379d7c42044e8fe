//! folio-field: the animated layer of a single-page portfolio.
//!
//! This crate provides a WASM particle-network background, a custom cursor,
//! and scroll/pointer-linked transitions, all driven from one immutable input
//! snapshot per event.

// Only enables the `js` backend for `rand` on wasm.
use getrandom as _;
use leptos::ev;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldStyle, ParticleField, ParticleFieldCanvas};
pub use components::scene::{Cursor, InputSnapshot, SceneInput, SceneTransforms, TiltCard};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio-field: logging initialized");
}

/// Load style overrides from a script element with id="field-config".
/// Expected format: JSON object with any subset of [`FieldStyle`] fields.
fn load_field_style() -> FieldStyle {
	let Some(json_text) = field_config_text() else {
		return FieldStyle::default();
	};

	match FieldStyle::from_json(&json_text) {
		Ok(style) => {
			info!("folio-field: loaded field config ({} particles)", style.count);
			style
		}
		Err(e) => {
			warn!("folio-field: failed to parse field config: {}", e);
			FieldStyle::default()
		}
	}
}

fn field_config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Read pointer-independent parts of the snapshot from the window.
fn refresh_viewport(snapshot: &mut InputSnapshot) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(w) = window.inner_width().ok().and_then(|v| v.as_f64()) {
		snapshot.viewport_width = w;
	}
	if let Some(h) = window.inner_height().ok().and_then(|v| v.as_f64()) {
		snapshot.viewport_height = h;
	}
	if let Ok(y) = window.scroll_y() {
		snapshot.scroll_y = y;
	}
}

/// Main application component.
/// Layers the particle canvas and cursor under a nav/hero shell whose styles
/// follow the pointer and scroll position.
#[component]
pub fn App(#[prop(optional)] children: Option<Children>) -> impl IntoView {
	provide_meta_context();

	let style = load_field_style();
	let input = SceneInput::new();
	provide_context(input);
	input.snapshot.update(refresh_viewport);
	let transforms = input.transforms();

	let snapshot = input.snapshot;
	let pointer = window_event_listener(ev::mousemove, move |e| {
		snapshot.update(|s| {
			s.pointer_x = e.client_x() as f64;
			s.pointer_y = e.client_y() as f64;
			refresh_viewport(s);
		});
	});
	let scroll = window_event_listener(ev::scroll, move |_| snapshot.update(refresh_viewport));
	on_cleanup(move || {
		pointer.remove();
		scroll.remove();
	});

	let nav_style = move || {
		let nav = transforms.get().nav;
		format!(
			"position: fixed; top: 24px; left: 50%; z-index: 40; transition: all 0.5s; \
			 transform: translateX(-50%) translateY({}px); opacity: {};",
			nav.offset_y, nav.opacity
		)
	};
	let hero_style = move || {
		let hero = transforms.get().hero;
		format!(
			"min-height: 100vh; position: relative; opacity: {}; transform: scale({});",
			hero.opacity, hero.scale
		)
	};
	let backdrop_style = move || {
		let (x, y) = transforms.get().backdrop;
		format!("position: absolute; inset: 0; transform: translate({}px, {}px);", x, y)
	};
	let heading_style = move || format!("transform: {};", transforms.get().heading.to_css());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="folio">
			<ParticleFieldCanvas style=style />
			<Cursor transforms=transforms />
			<nav class="folio-nav" style=nav_style>
				{["Home", "About", "Projects", "Skills", "Contact"]
					.into_iter()
					.map(|item| {
						view! { <a href=format!("#{}", item.to_lowercase())>{item}</a> }
					})
					.collect_view()}
			</nav>
			<section id="home" class="folio-hero" style=hero_style>
				<div class="folio-backdrop" style=backdrop_style />
				<div class="folio-heading" style=heading_style />
			</section>
			{children.map(|c| c())}
		</div>
	}
}
