//! # Scene Management Module
//!
//! Owns the tracked objects of a scene and drives their continuous motion.
//!
//! ## Key Components
//!
//! - [`Scene`] - Container that owns objects for the scene's lifetime and ticks them
//! - [`TrackedObject`] - A primitive with position, baseline look and current look
//! - [`ObjectId`] - Opaque handle used by the sampler and interaction controller
//! - [`InstanceRaw`] - Per-object transform and color for the rendering engine
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Vector3;
//! use scatterpick::gfx::{color::Color, geometry::Shape, scene::{Scene, TrackedObject}};
//!
//! let mut scene = Scene::new();
//! let id = scene.add(TrackedObject::new("box", Shape::unit_cube(), Vector3::new(0.0, 0.5, 0.0), Color::from_hex(0xff4500)));
//!
//! // Host render loop
//! scene.tick(0.016);
//! let instances = scene.instance_data();
//! assert_eq!(instances.len(), 1);
//! assert!(scene.get_object(id).is_some());
//! ```

pub mod object;
pub mod scene;

// Re-export main types
pub use object::{FloatMotion, InstanceRaw, ObjectId, Spin, TrackedObject, VisualState};
pub use scene::{Scene, SceneSettings};
