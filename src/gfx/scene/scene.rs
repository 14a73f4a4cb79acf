use cgmath::Vector3;
use log::{debug, trace, warn};

use crate::animation::Easing;
use crate::error::{Error, Result};

use super::object::{InstanceRaw, ObjectId, TrackedObject};

/// Scene-wide settings for continuous motion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneSettings {
    pub easing: Easing,
}

impl SceneSettings {
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.easing.validate()
    }
}

/// Main scene containing all tracked objects
pub struct Scene {
    pub objects: Vec<TrackedObject>,
    settings: SceneSettings,
    last_elapsed: f32,
}

impl Scene {
    /// Creates an empty scene with default settings
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            settings: SceneSettings::default(),
            last_elapsed: 0.0,
        }
    }

    pub fn with_settings(settings: SceneSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::new()
        })
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Adds an object and returns its handle.
    ///
    /// An object whose id is already in the scene is given a new one.
    pub fn add(&mut self, mut object: TrackedObject) -> ObjectId {
        if self.object_index(object.id).is_some() {
            let fresh = ObjectId::next();
            warn!(
                "'{}' reuses handle {:?} already in the scene, re-keyed as {:?}",
                object.name, object.id, fresh
            );
            object.id = fresh;
        }
        let id = object.id;
        debug!(
            "Adding '{}' ({:?}) at ({:.2}, {:.2}, {:.2})",
            object.name, id, object.position.x, object.position.y, object.position.z
        );
        self.objects.push(object);
        id
    }

    /// Removes an object, returning it to the caller
    pub fn remove(&mut self, id: ObjectId) -> Result<TrackedObject> {
        let index = self.object_index(id).ok_or(Error::UnknownObject(id))?;
        Ok(self.objects.remove(index))
    }

    pub fn object_index(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|object| object.id == id)
    }

    /// Gets immutable reference to an object by handle
    pub fn get_object(&self, id: ObjectId) -> Option<&TrackedObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    /// Gets mutable reference to an object by handle
    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut TrackedObject> {
        self.objects.iter_mut().find(|object| object.id == id)
    }

    /// Like [`Scene::get_object`], but an unknown handle is an error
    pub fn require(&self, id: ObjectId) -> Result<&TrackedObject> {
        self.get_object(id).ok_or(Error::UnknownObject(id))
    }

    pub fn set_pickable(&mut self, id: ObjectId, pickable: bool) -> Result<()> {
        let object = self.get_object_mut(id).ok_or(Error::UnknownObject(id))?;
        object.pickable = pickable;
        Ok(())
    }

    /// Gets the total number of objects
    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn positions(&self) -> Vec<Vector3<f32>> {
        self.objects.iter().map(|object| object.position).collect()
    }

    /// Advances every object's continuous motion to `elapsed` seconds of scene time.
    ///
    /// All objects are updated before this returns, so the host can present
    /// the frame right after. Non-finite times are ignored.
    pub fn tick(&mut self, elapsed: f32) {
        if !elapsed.is_finite() {
            warn!("Ignoring tick at non-finite time {}", elapsed);
            return;
        }
        let dt = (elapsed - self.last_elapsed).max(0.0);
        self.last_elapsed = elapsed;
        trace!("Tick at {:.3}s (dt {:.4}s)", elapsed, dt);

        let easing = self.settings.easing;
        for object in &mut self.objects {
            object.update_motion(elapsed, dt, &easing);
        }
    }

    /// Transform and color of every visible object, in scene order
    pub fn instance_data(&self) -> Vec<InstanceRaw> {
        self.objects
            .iter()
            .filter(|object| object.visible)
            .map(TrackedObject::to_raw)
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
