// src/lib.rs
//! Scatterpick
//!
//! Scene-side logic for interactive 3D classroom scenes: scatter objects at
//! random without overlap, pick them with the pointer, and animate the
//! result. Rendering stays with the host engine, which reads
//! [`gfx::scene::Scene::instance_data`] after each [`gfx::scene::Scene::tick`].

pub mod animation;
pub mod error;
pub mod gfx;
pub mod interaction;
pub mod placement;
pub mod prelude;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use gfx::scene::Scene;
pub use interaction::InteractionController;
pub use placement::PlacementSampler;
