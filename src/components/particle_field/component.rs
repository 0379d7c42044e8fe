//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a fixed, pointer-transparent canvas covering the
//! viewport. Once mounted it samples the field, then advances and redraws it
//! on every `requestAnimationFrame` tick. Unmounting cancels the pending frame
//! and removes the resize listener, so no callback outlives the canvas.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::Rng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::frame::{BrowserFrames, FrameLoop, FrameScheduler};
use super::particles::ParticleField;
use super::render::{self, Surface};
use super::theme::FieldStyle;
use super::types::Bounds;

type ResizeCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Simulation state owned by the animation loop.
struct FieldContext {
	field: ParticleField,
	bounds: Bounds,
	style: FieldStyle,
}

/// Sample a field and start animating it onto `surface`.
///
/// Declines, with a warning, when the viewport size or the drawing surface is
/// unavailable; nothing is scheduled in that case.
fn start_field<S: FrameScheduler, C: Surface + 'static>(
	bounds: Option<Bounds>,
	surface: Option<C>,
	style: &FieldStyle,
	count: usize,
	scheduler: S,
	rng: &mut impl Rng,
) -> Option<(FrameLoop<S>, Rc<RefCell<FieldContext>>)> {
	let Some(bounds) = bounds else {
		warn!("particle-field: viewport size unavailable, not starting");
		return None;
	};
	let Some(mut surface) = surface else {
		warn!("particle-field: 2d context unavailable, not starting");
		return None;
	};

	let field = ParticleField::create(count, bounds, style, rng);
	info!(
		"particle-field: {} particles on {}x{}",
		field.len(),
		bounds.width,
		bounds.height
	);

	let context = Rc::new(RefCell::new(FieldContext {
		field,
		bounds,
		style: style.clone(),
	}));
	let context_frame = context.clone();
	let frames = FrameLoop::start(scheduler, move || {
		let mut guard = context_frame.borrow_mut();
		let c = &mut *guard;
		render::advance(&mut c.field, c.bounds, &mut surface, &c.style);
	});
	Some((frames, context))
}

fn viewport(window: &Window) -> Option<Bounds> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some(Bounds::new(width, height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn size_canvas(canvas: &HtmlCanvasElement, bounds: Bounds) {
	canvas.set_width(bounds.width as u32);
	canvas.set_height(bounds.height as u32);
}

/// Renders the drifting particle network as a full-viewport background.
///
/// `style` defaults to [`FieldStyle::default`]; `count` overrides its particle
/// count. The canvas ignores pointer events so content above stays usable.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(optional)] style: Option<FieldStyle>,
	#[prop(default = None)] count: Option<usize>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let style = style.unwrap_or_default();
	let frames: Rc<RefCell<Option<FrameLoop<BrowserFrames>>>> = Rc::new(RefCell::new(None));
	let resize_cb: ResizeCallback = Rc::new(RefCell::new(None));
	let (frames_init, resize_cb_init) = (frames.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if frames_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("particle-field: no window, not starting");
			return;
		};
		let bounds = viewport(&window);
		if let Some(bounds) = bounds {
			size_canvas(&canvas, bounds);
		}

		let Some((frame_loop, context)) = start_field(
			bounds,
			context_2d(&canvas),
			&style,
			count.unwrap_or(style.count),
			BrowserFrames::default(),
			&mut rand::thread_rng(),
		) else {
			return;
		};

		// Positions keep their old distribution; only the reflection bounds follow.
		let canvas_resize = canvas.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(bounds) = web_sys::window().as_ref().and_then(viewport) else {
				return;
			};
			size_canvas(&canvas_resize, bounds);
			context.borrow_mut().bounds = bounds;
			debug!("particle-field: resized to {}x{}", bounds.width, bounds.height);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		*frames_init.borrow_mut() = Some(frame_loop);
	});

	let teardown = SendWrapper::new((frames, resize_cb));
	on_cleanup(move || {
		let (frames, resize_cb) = &*teardown;
		if let Some(frame_loop) = frames.borrow_mut().take() {
			frame_loop.stop();
			info!("particle-field: animation stopped");
		}
		if let (Some(cb), Some(window)) = (resize_cb.borrow_mut().take(), web_sys::window()) {
			let _ = window.remove_event_listener_with_callback(
				"resize",
				cb.as_ref().unchecked_ref::<js_sys::Function>(),
			);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
