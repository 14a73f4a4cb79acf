use cgmath::{InnerSpace, Vector3};
use std::fmt;

use crate::gfx::picking::{Ray, AABB};

/// Axis-aligned size of a shape in its own local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Extents {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn half(&self) -> Vector3<f32> {
        Vector3::new(self.width, self.height, self.depth) * 0.5
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width: {:.2}\nheight: {:.2}\ndepth: {:.2}",
            self.width, self.height, self.depth
        )
    }
}

/// Primitive shape centred on the object's local origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cuboid { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
}

impl Shape {
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Shape::Cuboid {
            width,
            height,
            depth,
        }
    }

    /// Unit cube, the default box size
    pub fn unit_cube() -> Self {
        Self::cuboid(1.0, 1.0, 1.0)
    }

    pub fn sphere(radius: f32) -> Self {
        Shape::Sphere { radius }
    }

    pub fn extents(&self) -> Extents {
        match *self {
            Shape::Cuboid {
                width,
                height,
                depth,
            } => Extents::new(width, height, depth),
            Shape::Sphere { radius } => Extents::new(radius * 2.0, radius * 2.0, radius * 2.0),
        }
    }

    /// Local-space bounding box
    pub fn local_aabb(&self) -> AABB {
        let half = self.extents().half();
        AABB::new(-half, half)
    }

    /// Intersect a ray given in the shape's local space.
    ///
    /// The ray direction is not required to be normalized; the returned
    /// parameter is in units of that direction, so a world ray mapped through
    /// an inverse affine transform keeps its world-space `t`.
    pub fn intersect_local(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Shape::Cuboid { .. } => self.local_aabb().intersect_ray(ray),
            Shape::Sphere { radius } => intersect_sphere(ray, radius),
        }
    }
}

fn intersect_sphere(ray: &Ray, radius: f32) -> Option<f32> {
    let a = ray.direction.magnitude2();
    if a == 0.0 {
        return None;
    }
    let half_b = ray.origin.dot(ray.direction);
    let c = ray.origin.magnitude2() - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let t_near = (-half_b - root) / a;
    let t_far = (-half_b + root) / a;

    if t_near >= 0.0 {
        Some(t_near)
    } else if t_far >= 0.0 {
        // Origin inside the sphere
        Some(t_far)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_extents() {
        let extents = Shape::sphere(0.7).extents();
        assert_eq!(extents, Extents::new(1.4, 1.4, 1.4));
    }

    #[test]
    fn test_sphere_intersection() {
        let sphere = Shape::sphere(1.0);

        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let t = sphere.intersect_local(&ray).unwrap();
        assert!((t - 4.0).abs() < 1e-5);

        let miss = Ray::new(Vector3::new(2.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect_local(&miss).is_none());

        let behind = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect_local(&behind).is_none());
    }

    #[test]
    fn test_unnormalized_direction_keeps_parameter() {
        let cube = Shape::cuboid(2.0, 2.0, 2.0);
        // Direction scaled by 0.5, as after mapping through a 2x scale inverse
        let ray = Ray {
            origin: Vector3::new(0.0, 0.0, -5.0),
            direction: Vector3::new(0.0, 0.0, 0.5),
        };
        let t = cube.intersect_local(&ray).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_extents_display() {
        let text = Extents::new(1.0, 2.5, 1.234).to_string();
        assert_eq!(text, "width: 1.00\nheight: 2.50\ndepth: 1.23");
    }
}
