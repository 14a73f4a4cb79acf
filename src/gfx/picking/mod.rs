//! # Object Picking System
//!
//! This module turns a pointer position into a world-space ray and finds
//! which tracked objects that ray passes through.
//!
//! ## How it works
//!
//! 1. **Pointer to Ray**: Convert normalized device coordinates to a 3D ray in world space
//! 2. **Ray-Object Intersection**: Reject objects whose world bounds the ray
//!    misses, then map the ray into each object's local space and intersect
//!    its primitive shape exactly
//! 3. **Ordering**: Return the hits sorted by distance, nearest first
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Vector3;
//! use scatterpick::gfx::camera::PerspectiveCamera;
//! use scatterpick::gfx::picking::{ray_from_ndc, PointerNdc, RayCaster, ShapeRayCaster};
//! use scatterpick::gfx::scene::TrackedObject;
//! use scatterpick::gfx::geometry::Shape;
//! use scatterpick::gfx::color::Color;
//!
//! let camera = PerspectiveCamera::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, 0.0), 1.0);
//! let objects = vec![TrackedObject::new("cube", Shape::unit_cube(), Vector3::new(0.0, 0.0, 0.0), Color::WHITE)];
//!
//! let ray = ray_from_ndc(PointerNdc::new(0.0, 0.0), &camera);
//! let hits = ShapeRayCaster.cast(&ray, &objects);
//! assert_eq!(hits[0].index, 0);
//! ```

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};
use winit::dpi::{PhysicalPosition, PhysicalSize};

use crate::gfx::{
    camera::Camera,
    scene::{ObjectId, TrackedObject},
};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized when built through [`Ray::new`])
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }

    /// Map the ray through an affine transform without renormalizing, so the
    /// parameter `t` means the same point before and after.
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        let origin = matrix * self.origin.extend(1.0);
        let direction = matrix * self.direction.extend(0.0);
        Self {
            origin: origin.truncate(),
            direction: direction.truncate(),
        }
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::new(vertices[0][0], vertices[0][1], vertices[0][2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            min.x = min.x.min(vertex[0]);
            min.y = min.y.min(vertex[1]);
            min.z = min.z.min(vertex[2]);
            max.x = max.x.max(vertex[0]);
            max.y = max.y.max(vertex[1]);
            max.z = max.z.max(vertex[2]);
        }

        Self::new(min, max)
    }

    /// Test ray-AABB intersection
    /// Returns the distance to intersection point, or None if no intersection
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Apply a transformation matrix to the AABB
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        // Transform all 8 corners of the AABB and compute new bounds
        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut transformed_corners = Vec::with_capacity(8);
        for corner in &corners {
            let homogeneous = Vector4::new(corner.x, corner.y, corner.z, 1.0);
            let transformed = matrix * homogeneous;
            transformed_corners.push([
                transformed.x / transformed.w,
                transformed.y / transformed.w,
                transformed.z / transformed.w,
            ]);
        }

        Self::from_vertices(&transformed_corners)
    }
}

/// Pointer position in normalized device coordinates.
///
/// Values outside [-1, 1] are accepted as-is; they simply project to rays
/// outside the view frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerNdc {
    pub x: f32,
    pub y: f32,
}

impl PointerNdc {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert a window-space cursor position to NDC (Y flipped, origin at center)
    pub fn from_window(position: PhysicalPosition<f64>, size: PhysicalSize<u32>) -> Self {
        let width = size.width.max(1) as f64;
        let height = size.height.max(1) as f64;

        Self {
            x: ((2.0 * position.x) / width - 1.0) as f32,
            y: (1.0 - (2.0 * position.y) / height) as f32,
        }
    }
}

/// Convert a pointer in normalized device coordinates to a world-space ray
/// starting at the camera eye.
pub fn ray_from_ndc<C: Camera + ?Sized>(pointer: PointerNdc, camera: &C) -> Ray {
    let inv_view_proj = camera.inverse_view_projection();

    // Near and far plane points in NDC
    let near_point = Vector4::new(pointer.x, pointer.y, -1.0, 1.0);
    let far_point = Vector4::new(pointer.x, pointer.y, 1.0, 1.0);

    let world_near = inv_view_proj * near_point;
    let world_far = inv_view_proj * far_point;

    let near_3d = world_near.truncate() / world_near.w;
    let far_3d = world_far.truncate() / world_far.w;

    Ray::new(camera.eye(), far_3d - near_3d)
}

/// A single ray hit against a tracked object
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    /// Index of the object in the slice that was cast against
    pub index: usize,
    pub object: ObjectId,
    /// Ray parameter of the intersection; always >= 0
    pub distance: f32,
    /// World space intersection point
    pub point: Vector3<f32>,
}

/// Ray-casting seam between the interaction logic and whatever answers
/// "what does this ray hit". Implementations return hits ordered by
/// ascending distance.
pub trait RayCaster {
    fn cast(&self, ray: &Ray, objects: &[TrackedObject]) -> Vec<Hit>;
}

/// Built-in caster that intersects each object's primitive shape exactly
#[derive(Debug, Default, Clone, Copy)]
pub struct ShapeRayCaster;

impl ShapeRayCaster {
    fn intersect_object(ray: &Ray, object: &TrackedObject) -> Option<f32> {
        // Broad phase: the world bounds enclose the shape
        object.world_aabb().intersect_ray(ray)?;

        let inverse = object.model_matrix().invert()?;
        let local_ray = ray.transform(&inverse);
        object.shape.intersect_local(&local_ray)
    }
}

impl RayCaster for ShapeRayCaster {
    fn cast(&self, ray: &Ray, objects: &[TrackedObject]) -> Vec<Hit> {
        let mut hits: Vec<Hit> = objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.pickable && object.visible)
            .filter_map(|(index, object)| {
                Self::intersect_object(ray, object)
                    .filter(|distance| *distance >= 0.0)
                    .map(|distance| Hit {
                        index,
                        object: object.id,
                        distance,
                        point: ray.point_at(distance),
                    })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
