use std::sync::atomic::{AtomicUsize, Ordering};

use cgmath::{Euler, Matrix4, Rad, Vector3};

use crate::animation::{float_offset, Easing};
use crate::gfx::{
    camera::camera_utils::convert_matrix4_to_array,
    color::Color,
    geometry::{Extents, Shape},
    picking::AABB,
};

static NEXT_OBJECT_ID: AtomicUsize = AtomicUsize::new(0);

/// Opaque handle to a tracked object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    pub(super) fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The part of an object's look that selection changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub color: Color,
    pub scale: f32,
}

/// Vertical bobbing around the height the object was placed at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub base_y: f32,
    /// Phase offset in radians so objects don't bob in lockstep
    pub phase: f32,
    pub amplitude: f32,
}

/// Constant rotation, radians per second around each local axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub angular_velocity: Vector3<f32>,
}

/// Per-object data handed to the renderer each frame
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// A primitive placed in the scene, with its baseline and current look.
///
/// Cloning gives the copy a fresh [`ObjectId`]; two objects never share a handle.
#[derive(Debug)]
pub struct TrackedObject {
    pub id: ObjectId,
    pub name: String,
    pub shape: Shape,
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
    /// Displayed uniform scale; eases towards `target_scale` every tick
    pub scale: f32,
    pub target_scale: f32,
    pub color: Color,
    pub pickable: bool,
    pub visible: bool,
    pub floating: Option<FloatMotion>,
    pub spin: Option<Spin>,
    /// Next palette slot when clicks cycle colors
    pub color_index: usize,
    baseline: VisualState,
}

impl Clone for TrackedObject {
    fn clone(&self) -> Self {
        Self {
            id: ObjectId::next(),
            name: self.name.clone(),
            shape: self.shape,
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            target_scale: self.target_scale,
            color: self.color,
            pickable: self.pickable,
            visible: self.visible,
            floating: self.floating,
            spin: self.spin,
            color_index: self.color_index,
            baseline: self.baseline,
        }
    }
}

impl TrackedObject {
    /// Create an object at `position`; its baseline look is captured here
    pub fn new(name: impl Into<String>, shape: Shape, position: Vector3<f32>, color: Color) -> Self {
        Self {
            id: ObjectId::next(),
            name: name.into(),
            shape,
            position,
            rotation: Euler::new(Rad(0.0), Rad(0.0), Rad(0.0)),
            scale: 1.0,
            target_scale: 1.0,
            color,
            pickable: true,
            visible: true,
            floating: None,
            spin: None,
            color_index: 0,
            baseline: VisualState { color, scale: 1.0 },
        }
    }

    /// Bob vertically around the current height
    pub fn with_float(mut self, phase: f32, amplitude: f32) -> Self {
        self.floating = Some(FloatMotion {
            base_y: self.position.y,
            phase,
            amplitude,
        });
        self
    }

    pub fn with_spin(mut self, angular_velocity: Vector3<f32>) -> Self {
        self.spin = Some(Spin { angular_velocity });
        self
    }

    pub fn with_rotation(mut self, rotation: Euler<Rad<f32>>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_pickable(mut self, pickable: bool) -> Self {
        self.pickable = pickable;
        self
    }

    pub fn baseline(&self) -> VisualState {
        self.baseline
    }

    pub fn visual_state(&self) -> VisualState {
        VisualState {
            color: self.color,
            scale: self.target_scale,
        }
    }

    /// True when color and target scale match the baseline
    pub fn is_at_baseline(&self) -> bool {
        self.visual_state() == self.baseline
    }

    pub fn restore_baseline(&mut self) {
        self.color = self.baseline.color;
        self.target_scale = self.baseline.scale;
    }

    pub fn apply_highlight(&mut self, color: Color, scale: f32) {
        self.color = color;
        self.target_scale = scale;
    }

    pub fn extents(&self) -> Extents {
        self.shape.extents()
    }

    /// T * Rx * Ry * Rz * S
    pub fn model_matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from_angle_x(self.rotation.x)
            * Matrix4::from_angle_y(self.rotation.y)
            * Matrix4::from_angle_z(self.rotation.z);
        let s = Matrix4::from_scale(self.scale);
        t * r * s
    }

    /// World-space bounds of the transformed shape
    pub fn world_aabb(&self) -> AABB {
        self.shape.local_aabb().transform(&self.model_matrix())
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: convert_matrix4_to_array(self.model_matrix()),
            color: self.color.to_array4(),
        }
    }

    /// Advance continuous motion: floating, then spin, then scale easing.
    ///
    /// `elapsed` is total scene time, `dt` the time since the previous tick.
    pub fn update_motion(&mut self, elapsed: f32, dt: f32, easing: &Easing) {
        if let Some(float) = self.floating {
            self.position.y = float.base_y + float_offset(elapsed, float.phase, float.amplitude);
        }

        if let Some(spin) = self.spin {
            self.rotation.x += Rad(spin.angular_velocity.x * dt);
            self.rotation.y += Rad(spin.angular_velocity.y * dt);
            self.rotation.z += Rad(spin.angular_velocity.z * dt);
        }

        self.scale = easing.step(self.scale, self.target_scale, dt);
    }
}
