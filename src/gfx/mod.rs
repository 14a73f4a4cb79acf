//! # Graphics Module
//!
//! Scene-side graphics types: cameras, colors, primitive shapes, picking and
//! the tracked object scene.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Perspective camera and the [`camera::Camera`] seam
//! - **Geometry** ([`geometry`]) - Cuboid and sphere primitives with exact ray hits
//! - **Picking** ([`picking`]) - Pointer-to-ray projection and ray casting
//! - **Scene Management** ([`scene`]) - Tracked objects, motion ticks and render export
//!
//! The rendering engine itself is external: it draws whatever
//! [`scene::Scene::instance_data`] reports each frame.

pub mod camera;
pub mod color;
pub mod geometry;
pub mod picking;
pub mod scene;

// Re-export commonly used types
pub use camera::PerspectiveCamera;
pub use color::Color;
pub use scene::Scene;
