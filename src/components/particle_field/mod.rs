//! Ambient particle-network background.
//!
//! A fixed number of particles drift across a full-viewport canvas, bouncing
//! off its edges. Every frame each particle is drawn as a disc, and pairs
//! closer than a threshold are joined by a line whose alpha fades with
//! distance.
//!
//! # Example
//!
//! ```ignore
//! use folio_field::components::particle_field::{FieldStyle, ParticleFieldCanvas};
//!
//! view! { <ParticleFieldCanvas style=FieldStyle::default() /> }
//! ```

mod component;
mod frame;
pub mod particles;
pub mod render;
pub mod theme;
mod types;

pub use component::ParticleFieldCanvas;
pub use particles::{Particle, ParticleField, link_alpha};
pub use render::{Surface, advance, draw};
pub use theme::{Color, FieldStyle};
pub use types::{Bounds, Link};
