//! # Primitive Shapes
//!
//! Analytic shapes for tracked objects. The rendering engine builds the
//! actual meshes; this side only needs extents and exact ray hits.
//!
//! ## Supported Primitives
//!
//! - **Cuboid**: buildings, roads, floating cubes
//! - **Sphere**: textured and wireframe spheres
//!
//! ## Usage
//!
//! ```rust
//! use scatterpick::gfx::geometry::Shape;
//!
//! let building = Shape::cuboid(22.0, 5.0, 6.0);
//! let extents = building.extents();
//! assert_eq!(extents.height, 5.0);
//! ```

pub mod primitives;

pub use primitives::*;
