//! Plain data shared between the simulation and the renderer.

/// Size of the drawing surface; particles reflect off its edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Surface width in CSS pixels.
	pub width: f64,
	/// Surface height in CSS pixels.
	pub height: f64,
}

impl Bounds {
	/// Bounds of the given size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// A single proximity link from one particle to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the particle the link is drawn from.
	pub from: usize,
	/// Index of the particle the link is drawn to.
	pub to: usize,
	/// Euclidean distance between the two.
	pub distance: f64,
	/// Stroke alpha, fading linearly to zero at the threshold.
	pub alpha: f64,
}
