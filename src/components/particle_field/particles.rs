//! Particle model: creation, per-frame motion and proximity links.

use rand::Rng;

use super::theme::FieldStyle;
use super::types::{Bounds, Link};

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal velocity per frame; only reflection changes it.
	pub vx: f64,
	/// Vertical velocity per frame.
	pub vy: f64,
	/// Disc radius, fixed at creation.
	pub radius: f64,
	/// Fill alpha, fixed at creation.
	pub opacity: f64,
}

/// Fixed-size collection of particles, mutated in place every frame.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	/// Particles in draw order.
	pub particles: Vec<Particle>,
}

/// Uniform sample in `[lo, hi)`, or `lo` when the range is empty.
fn sample(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Link alpha for a pair at `distance`: `max_alpha` at zero, fading linearly
/// to zero at `threshold`. `None` at or beyond the threshold.
pub fn link_alpha(distance: f64, threshold: f64, max_alpha: f64) -> Option<f64> {
	(distance < threshold).then(|| max_alpha * (1.0 - distance / threshold))
}

impl ParticleField {
	/// Sample `count` independent particles inside `bounds`.
	pub fn create(count: usize, bounds: Bounds, style: &FieldStyle, rng: &mut impl Rng) -> Self {
		let particles = (0..count)
			.map(|_| Particle {
				x: sample(rng, 0.0, bounds.width),
				y: sample(rng, 0.0, bounds.height),
				radius: sample(rng, style.radius_min, style.radius_max),
				vx: sample(rng, -style.speed, style.speed),
				vy: sample(rng, -style.speed, style.speed),
				opacity: sample(rng, style.opacity_min, style.opacity_max),
			})
			.collect();

		Self { particles }
	}

	/// Build a field from explicit particles.
	pub fn from_particles(particles: Vec<Particle>) -> Self {
		Self { particles }
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True when there is nothing to draw.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Move every particle one velocity step, then reflect off `bounds`.
	///
	/// Reflection is reactive: a particle found outside flips the velocity
	/// component for that axis only, so it may overshoot by one step.
	pub fn step(&mut self, bounds: Bounds) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > bounds.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > bounds.height {
				p.vy = -p.vy;
			}
		}
	}

	/// Largest per-axis speed in the field.
	pub fn max_speed(&self) -> f64 {
		self.particles
			.iter()
			.map(|p| p.vx.abs().max(p.vy.abs()))
			.fold(0.0, f64::max)
	}

	/// Links leaving particle `i`, in particle order. Empty when `i` is out of range.
	pub fn links_from(
		&self,
		i: usize,
		threshold: f64,
		max_alpha: f64,
	) -> impl Iterator<Item = Link> + '_ {
		self.particles.get(i).into_iter().flat_map(move |a| {
			self.particles
				.iter()
				.enumerate()
				.filter(move |&(j, _)| j != i)
				.filter_map(move |(j, b)| {
					let distance = (a.x - b.x).hypot(a.y - b.y);
					link_alpha(distance, threshold, max_alpha).map(|alpha| Link {
						from: i,
						to: j,
						distance,
						alpha,
					})
				})
		})
	}

	/// Every directed link: each close pair appears once per direction.
	pub fn links(&self, threshold: f64, max_alpha: f64) -> impl Iterator<Item = Link> + '_ {
		(0..self.particles.len()).flat_map(move |i| self.links_from(i, threshold, max_alpha))
	}
}
