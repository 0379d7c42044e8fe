//! Pointer and scroll driven transitions.
//!
//! Input is captured once per event into an immutable [`InputSnapshot`];
//! [`SceneTransforms::compute`] turns it into every style value the page
//! needs, so rendering never reads ambient mutable state.

/// Scroll offset past which the nav settles and the hero recedes.
pub const SCROLL_SETTLE: f64 = 100.0;

const RING_HALF: f64 = 16.0;
const DOT_HALF: f64 = 4.0;
const PARALLAX: f64 = 0.01;
const TILT_RANGE: f64 = 15.0;
const CARD_TILT: f64 = 5.0;

/// Everything the page reads from the browser for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
	/// Pointer position in client pixels.
	pub pointer_x: f64,
	/// Pointer position in client pixels.
	pub pointer_y: f64,
	/// Vertical document scroll offset.
	pub scroll_y: f64,
	/// Viewport width.
	pub viewport_width: f64,
	/// Viewport height.
	pub viewport_height: f64,
	/// Index of the hovered project card, if any.
	pub active_card: Option<usize>,
}

/// A translated, scaled overlay element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
	/// Left edge in pixels.
	pub left: f64,
	/// Top edge in pixels.
	pub top: f64,
	/// Uniform scale.
	pub scale: f64,
}

impl Placement {
	/// Inline style for an absolutely positioned element.
	pub fn to_style(self) -> String {
		format!(
			"left: {}px; top: {}px; transform: scale({});",
			self.left, self.top, self.scale
		)
	}
}

/// A fading element shifted and scaled by scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
	/// Opacity in `[0, 1]`.
	pub opacity: f64,
	/// Vertical offset in pixels.
	pub offset_y: f64,
	/// Uniform scale.
	pub scale: f64,
}

/// A 3D tilt in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
	/// Rotation about the horizontal axis.
	pub rotate_x: f64,
	/// Rotation about the vertical axis.
	pub rotate_y: f64,
	/// Lift towards the viewer in pixels.
	pub lift: f64,
}

impl Tilt {
	/// CSS `transform` value.
	pub fn to_css(self) -> String {
		let mut css = format!(
			"perspective(1000px) rotateX({}deg) rotateY({}deg)",
			self.rotate_x, self.rotate_y
		);
		if self.lift != 0.0 {
			css.push_str(&format!(" translateZ({}px)", self.lift));
		}
		css
	}
}

/// All derived style values for one snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTransforms {
	/// Outer cursor ring, grown while a card is active.
	pub cursor_ring: Placement,
	/// Inner cursor dot.
	pub cursor_dot: Placement,
	/// Floating navigation bar.
	pub nav: Fade,
	/// Hero section.
	pub hero: Fade,
	/// Hero backdrop offset following the pointer.
	pub backdrop: (f64, f64),
	/// Hero heading tilt.
	pub heading: Tilt,
	/// Tilt of the active card, if one is active.
	pub card: Option<(usize, Tilt)>,
}

/// Pointer position relative to the viewport centre, in `[-0.5, 0.5]`.
/// A collapsed viewport reads as centred.
fn centred(pointer: f64, extent: f64) -> f64 {
	if extent > 0.0 { pointer / extent - 0.5 } else { 0.0 }
}

impl SceneTransforms {
	/// Derive every transform from a snapshot.
	pub fn compute(input: &InputSnapshot) -> Self {
		let (px, py) = (input.pointer_x, input.pointer_y);
		let settled = input.scroll_y > SCROLL_SETTLE;
		let (cx, cy) = (
			centred(px, input.viewport_width),
			centred(py, input.viewport_height),
		);

		Self {
			cursor_ring: Placement {
				left: px - RING_HALF,
				top: py - RING_HALF,
				scale: if input.active_card.is_some() { 2.0 } else { 1.0 },
			},
			cursor_dot: Placement {
				left: px - DOT_HALF,
				top: py - DOT_HALF,
				scale: 1.0,
			},
			nav: Fade {
				opacity: if settled { 1.0 } else { 0.8 },
				offset_y: if settled { 0.0 } else { 10.0 },
				scale: 1.0,
			},
			hero: Fade {
				opacity: if settled { 0.8 } else { 1.0 },
				offset_y: 0.0,
				scale: if settled { 0.95 } else { 1.0 },
			},
			backdrop: (px * PARALLAX, py * PARALLAX),
			heading: Tilt {
				rotate_x: cy * TILT_RANGE * 0.5,
				rotate_y: cx * TILT_RANGE * 0.5,
				lift: 0.0,
			},
			card: input.active_card.map(|i| {
				(
					i,
					Tilt {
						rotate_x: cy * -CARD_TILT,
						rotate_y: cx * CARD_TILT,
						lift: 10.0,
					},
				)
			}),
		}
	}

	/// Tilt for card `index`: its own tilt when active, flat otherwise.
	pub fn card_tilt(&self, index: usize) -> Tilt {
		match self.card {
			Some((active, tilt)) if active == index => tilt,
			_ => Tilt::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(x: f64, y: f64) -> InputSnapshot {
		InputSnapshot {
			pointer_x: x,
			pointer_y: y,
			viewport_width: 1000.0,
			viewport_height: 800.0,
			..InputSnapshot::default()
		}
	}

	#[test]
	fn cursor_follows_pointer_centred() {
		let t = SceneTransforms::compute(&at(200.0, 300.0));
		assert_eq!((t.cursor_ring.left, t.cursor_ring.top), (184.0, 284.0));
		assert_eq!((t.cursor_dot.left, t.cursor_dot.top), (196.0, 296.0));
		assert_eq!(t.cursor_ring.scale, 1.0);
	}

	#[test]
	fn active_card_grows_ring_and_tilts_only_that_card() {
		let input = InputSnapshot {
			active_card: Some(2),
			..at(1000.0, 0.0)
		};
		let t = SceneTransforms::compute(&input);
		assert_eq!(t.cursor_ring.scale, 2.0);

		let tilt = t.card_tilt(2);
		assert_eq!(tilt.rotate_x, 2.5);
		assert_eq!(tilt.rotate_y, 2.5);
		assert_eq!(tilt.lift, 10.0);
		assert_eq!(t.card_tilt(0), Tilt::default());
	}

	#[test]
	fn scroll_threshold_is_strict() {
		let mut input = at(0.0, 0.0);
		input.scroll_y = SCROLL_SETTLE;
		let t = SceneTransforms::compute(&input);
		assert_eq!((t.nav.opacity, t.nav.offset_y), (0.8, 10.0));
		assert_eq!((t.hero.opacity, t.hero.scale), (1.0, 1.0));

		input.scroll_y = SCROLL_SETTLE + 1.0;
		let t = SceneTransforms::compute(&input);
		assert_eq!((t.nav.opacity, t.nav.offset_y), (1.0, 0.0));
		assert_eq!((t.hero.opacity, t.hero.scale), (0.8, 0.95));
	}

	#[test]
	fn heading_tilt_is_zero_at_centre_and_bounded() {
		let t = SceneTransforms::compute(&at(500.0, 400.0));
		assert_eq!(t.heading, Tilt::default());

		let t = SceneTransforms::compute(&at(0.0, 800.0));
		assert_eq!(t.heading.rotate_x, 3.75);
		assert_eq!(t.heading.rotate_y, -3.75);
	}

	#[test]
	fn collapsed_viewport_does_not_divide_by_zero() {
		let input = InputSnapshot {
			pointer_x: 30.0,
			pointer_y: 40.0,
			..InputSnapshot::default()
		};
		let t = SceneTransforms::compute(&input);
		assert_eq!(t.heading, Tilt::default());
		assert!(t.backdrop.0.is_finite() && t.backdrop.1.is_finite());
	}

	#[test]
	fn backdrop_parallax_is_one_percent() {
		let t = SceneTransforms::compute(&at(300.0, 200.0));
		assert_eq!(t.backdrop, (3.0, 2.0));
	}

	#[test]
	fn css_rendering() {
		let tilt = Tilt {
			rotate_x: 1.5,
			rotate_y: -2.0,
			lift: 0.0,
		};
		assert_eq!(tilt.to_css(), "perspective(1000px) rotateX(1.5deg) rotateY(-2deg)");
		assert_eq!(
			Tilt { lift: 10.0, ..tilt }.to_css(),
			"perspective(1000px) rotateX(1.5deg) rotateY(-2deg) translateZ(10px)"
		);
		let ring = Placement {
			left: 4.0,
			top: 8.5,
			scale: 2.0,
		};
		assert_eq!(ring.to_style(), "left: 4px; top: 8.5px; transform: scale(2);");
	}
}
