//! # Scatterpick Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use scatterpick::prelude::*;
//!
//! let mut scene = Scene::new();
//! let sampler = PlacementSampler::new(PlacementSettings::default()).unwrap();
//! let mut source = RandomCandidates::from_seed(1);
//!
//! for (i, placement) in sampler.scatter(5, &mut source).into_iter().enumerate() {
//!     scene.add(TrackedObject::new(format!("cube {}", i), Shape::unit_cube(), placement.position, Color::WHITE));
//! }
//!
//! let camera = PerspectiveCamera::new(Vector3::new(25.0, 20.0, 30.0), Vector3::zero(), 1.5);
//! let mut controller = InteractionController::default();
//! let _ = controller.on_pick(PointerNdc::new(0.0, 0.0), &camera, &mut scene.objects);
//! scene.tick(0.016);
//! ```

// Re-export error types
pub use crate::error::{Error, Result};

// Re-export graphics and scene types
pub use crate::gfx::camera::{Camera, PerspectiveCamera};
pub use crate::gfx::color::Color;
pub use crate::gfx::geometry::{Extents, Shape};
pub use crate::gfx::picking::{ray_from_ndc, Hit, PointerNdc, Ray, RayCaster, ShapeRayCaster};
pub use crate::gfx::scene::{InstanceRaw, ObjectId, Scene, SceneSettings, TrackedObject};

// Re-export motion, placement and interaction
pub use crate::animation::Easing;
pub use crate::interaction::{HighlightStyle, InteractionController, PickMode, SelectionInfo};
pub use crate::placement::{
    CandidateSource, Placement, PlacementBounds, PlacementSampler, PlacementSettings,
    RandomCandidates,
};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3, Zero};
