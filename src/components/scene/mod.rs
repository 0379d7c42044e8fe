//! Cursor follower and scroll-linked page transitions.
//!
//! [`App`](crate::App) owns one [`InputSnapshot`] signal, fed by window
//! pointer and scroll listeners and shared through [`SceneInput`]. Components
//! derive their styles from [`SceneTransforms`] computed off that snapshot.

mod overlay;
pub mod snapshot;

pub use overlay::{Cursor, SceneInput, TiltCard};
pub use snapshot::{Fade, InputSnapshot, Placement, SceneTransforms, Tilt};
