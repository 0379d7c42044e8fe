//! Leptos components driven by the input snapshot.

use leptos::prelude::*;

use super::snapshot::{InputSnapshot, SceneTransforms};

/// Shared page input, provided as context by the root component.
#[derive(Clone, Copy)]
pub struct SceneInput {
	/// Latest pointer/scroll/viewport snapshot.
	pub snapshot: RwSignal<InputSnapshot>,
}

impl SceneInput {
	/// Fresh input with an empty snapshot.
	pub fn new() -> Self {
		Self {
			snapshot: RwSignal::new(InputSnapshot::default()),
		}
	}

	/// Transforms for the current snapshot, tracked reactively.
	pub fn transforms(self) -> Signal<SceneTransforms> {
		let snapshot = self.snapshot;
		Signal::derive(move || SceneTransforms::compute(&snapshot.get()))
	}

	/// Mark card `index` as hovered, or clear it with `None`.
	pub fn set_active_card(self, index: Option<usize>) {
		self.snapshot.update(|s| s.active_card = index);
	}
}

impl Default for SceneInput {
	fn default() -> Self {
		Self::new()
	}
}

/// Custom cursor: a ring that grows over cards and a dot at the pointer.
#[component]
pub fn Cursor(#[prop(into)] transforms: Signal<SceneTransforms>) -> impl IntoView {
	view! {
		<div
			class="cursor-layer"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 50;"
		>
			<div
				class="cursor-ring"
				style=move || {
					format!(
						"position: absolute; width: 32px; height: 32px; border-radius: 50%; \
						 transition: transform 1s; {}",
						transforms.get().cursor_ring.to_style()
					)
				}
			/>
			<div
				class="cursor-dot"
				style=move || {
					format!(
						"position: absolute; width: 8px; height: 8px; border-radius: 50%; {}",
						transforms.get().cursor_dot.to_style()
					)
				}
			/>
		</div>
	}
}

/// A card that tilts towards the pointer while hovered.
///
/// Requires a [`SceneInput`] in context; without one it renders flat.
#[component]
pub fn TiltCard(index: usize, children: Children) -> impl IntoView {
	let input = use_context::<SceneInput>();
	let transforms = input.map(SceneInput::transforms);

	view! {
		<div
			class="tilt-card"
			on:mouseenter=move |_| {
				if let Some(input) = input {
					input.set_active_card(Some(index));
				}
			}
			on:mouseleave=move |_| {
				if let Some(input) = input {
					input.set_active_card(None);
				}
			}
			style=move || {
				let tilt = transforms.map(|t| t.get().card_tilt(index)).unwrap_or_default();
				format!("transform: {}; transition: transform 0.3s;", tilt.to_css())
			}
		>
			{children()}
		</div>
	}
}
