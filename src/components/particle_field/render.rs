//! Canvas rendering for the particle field.
//!
//! Every frame is a full redraw: clear, then for each particle in order its
//! disc followed by the links leaving it. Drawing goes through [`Surface`] so
//! the frame logic does not depend on a live browser canvas.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::theme::{Color, FieldStyle};
use super::types::Bounds;

/// The drawing primitives a frame needs.
pub trait Surface {
	/// Clear the whole surface to transparent.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a disc centred at `(x, y)`.
	fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Stroke a straight segment.
	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.set_stroke_style_str(&color.to_css());
		self.stroke();
	}
}

/// Redraws the field without moving it.
pub fn draw(
	field: &ParticleField,
	bounds: Bounds,
	surface: &mut impl Surface,
	style: &FieldStyle,
) {
	surface.clear(bounds.width, bounds.height);

	for (i, p) in field.particles.iter().enumerate() {
		surface.fill_disc(p.x, p.y, p.radius, style.color.with_alpha(p.opacity));

		for link in field.links_from(i, style.link_distance, style.link_alpha) {
			let other = &field.particles[link.to];
			surface.stroke_line(p.x, p.y, other.x, other.y, style.color.with_alpha(link.alpha));
		}
	}
}

/// One animation frame: step the simulation, then redraw.
pub fn advance(
	field: &mut ParticleField,
	bounds: Bounds,
	surface: &mut impl Surface,
	style: &FieldStyle,
) {
	field.step(bounds);
	draw(field, bounds, surface, style);
}
