//! Visual configuration for the particle field.
//!
//! Provides the RGBA color type and the tunable style (counts, sampling
//! ranges, link threshold). Every style field has a default, so a page can
//! override any subset of them through a JSON config block.

use serde::Deserialize;
use thiserror::Error;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same hue, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string. Always `rgba(...)` so per-frame alpha changes keep one format.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Particle field style and sampling ranges.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Number of particles created at mount.
	pub count: usize,
	/// Fill/stroke hue. Its alpha is replaced per draw.
	pub color: Color,
	/// Minimum disc radius (inclusive).
	pub radius_min: f64,
	/// Maximum disc radius (exclusive).
	pub radius_max: f64,
	/// Per-axis velocity bound: components are sampled in `[-speed, speed)`.
	pub speed: f64,
	/// Minimum particle opacity (inclusive).
	pub opacity_min: f64,
	/// Maximum particle opacity (exclusive).
	pub opacity_max: f64,
	/// Links are drawn strictly below this distance.
	pub link_distance: f64,
	/// Link alpha at zero distance.
	pub link_alpha: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			count: 80,
			color: Color::rgb(168, 85, 247),
			radius_min: 1.0,
			radius_max: 3.0,
			speed: 0.15,
			opacity_min: 0.2,
			opacity_max: 0.7,
			link_distance: 80.0,
			link_alpha: 0.1,
		}
	}
}

/// Why a style override was rejected.
#[derive(Debug, Error)]
pub enum StyleError {
	/// Not valid JSON, or a field has the wrong type.
	#[error("invalid field config: {0}")]
	Json(#[from] serde_json::Error),
	/// A sampling range is inverted, negative or not finite.
	#[error("invalid range for `{field}`: {detail}")]
	Range {
		/// Offending field.
		field: &'static str,
		/// What is wrong with it.
		detail: &'static str,
	},
}

fn check_range(field: &'static str, lo: f64, hi: f64) -> Result<(), StyleError> {
	if !(lo.is_finite() && hi.is_finite()) {
		return Err(StyleError::Range {
			field,
			detail: "bounds must be finite",
		});
	}
	if lo < 0.0 {
		return Err(StyleError::Range {
			field,
			detail: "minimum must not be negative",
		});
	}
	if hi < lo {
		return Err(StyleError::Range {
			field,
			detail: "maximum is below minimum",
		});
	}
	Ok(())
}

impl FieldStyle {
	/// Parse a style override. Missing fields keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, StyleError> {
		let style: Self = serde_json::from_str(text)?;
		style.validate()?;
		Ok(style)
	}

	/// Reject ranges that would bias or break sampling.
	pub fn validate(&self) -> Result<(), StyleError> {
		check_range("radius", self.radius_min, self.radius_max)?;
		check_range("opacity", self.opacity_min, self.opacity_max)?;
		check_range("speed", 0.0, self.speed)?;
		check_range("link_distance", 0.0, self.link_distance)?;
		check_range("link_alpha", 0.0, self.link_alpha)?;
		Ok(())
	}
}
