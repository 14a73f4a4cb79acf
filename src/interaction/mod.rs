//! # Pick-and-Toggle Interaction
//!
//! Resolves pointer clicks to objects and applies the selection look.
//!
//! Two modes are supported:
//!
//! - **Highlight**: the nearest hit becomes the single selected object and is
//!   tinted and scaled up; the previous selection goes back to its baseline.
//!   A miss clears the selection.
//! - **Cycle colors**: each hit advances the object's color through a palette.
//!   Colors stick between clicks.
//!
//! The selection lives on the controller, so independent scenes each keep
//! their own.

use std::fmt;

use cgmath::Vector3;
use log::debug;

use crate::error::{Error, Result};
use crate::gfx::{
    camera::Camera,
    color::Color,
    geometry::Extents,
    picking::{ray_from_ndc, Hit, PointerNdc, Ray, RayCaster, ShapeRayCaster},
    scene::{ObjectId, TrackedObject},
};

/// Look applied to the selected object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightStyle {
    pub color: Color,
    /// Target scale of the selected object; must be above 1
    pub scale: f32,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: Color::from_hex(0xffcc00),
            scale: 1.3,
        }
    }
}

impl HighlightStyle {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 1.0) {
            return Err(Error::InvalidConfig(format!(
                "highlight scale must be greater than 1, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

/// What a successful pick does to the object under the pointer
#[derive(Debug, Clone, PartialEq)]
pub enum PickMode {
    Highlight(HighlightStyle),
    CycleColors(Vec<Color>),
}

impl PickMode {
    /// White, blue, baby blue, black
    pub fn default_palette() -> Vec<Color> {
        vec![
            Color::from_hex(0xffffff),
            Color::from_hex(0x2196f3),
            Color::from_hex(0x9ad0ec),
            Color::from_hex(0x000000),
        ]
    }

    pub fn cycle_colors() -> Self {
        PickMode::CycleColors(Self::default_palette())
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            PickMode::Highlight(style) => style.validate(),
            PickMode::CycleColors(_) => Ok(()),
        }
    }
}

impl Default for PickMode {
    fn default() -> Self {
        PickMode::Highlight(HighlightStyle::default())
    }
}

/// Payload of a successful pick
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionInfo {
    pub object: ObjectId,
    pub name: String,
    pub position: Vector3<f32>,
    pub extents: Extents,
    /// Distance from the camera along the pick ray
    pub distance: f32,
}

impl fmt::Display for SelectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} selected", self.name)?;
        writeln!(f)?;
        writeln!(f, "Position")?;
        writeln!(f, "x: {:.2}", self.position.x)?;
        writeln!(f, "y: {:.2}", self.position.y)?;
        writeln!(f, "z: {:.2}", self.position.z)?;
        writeln!(f)?;
        writeln!(f, "Size")?;
        write!(f, "{}", self.extents)
    }
}

/// Turns pointer events into selection changes
pub struct InteractionController<R: RayCaster = ShapeRayCaster> {
    caster: R,
    mode: PickMode,
    selected: Option<ObjectId>,
}

impl InteractionController<ShapeRayCaster> {
    pub fn new(mode: PickMode) -> Result<Self> {
        Self::with_caster(ShapeRayCaster, mode)
    }
}

impl Default for InteractionController<ShapeRayCaster> {
    fn default() -> Self {
        Self {
            caster: ShapeRayCaster,
            mode: PickMode::default(),
            selected: None,
        }
    }
}

impl<R: RayCaster> InteractionController<R> {
    /// Use a host-provided ray caster instead of the built-in shape tests
    pub fn with_caster(caster: R, mode: PickMode) -> Result<Self> {
        mode.validate()?;
        Ok(Self {
            caster,
            mode,
            selected: None,
        })
    }

    pub fn mode(&self) -> &PickMode {
        &self.mode
    }

    /// Switch modes; any highlighted object is restored first. Leaving
    /// color-cycle mode puts every object back on its baseline color.
    pub fn set_mode(&mut self, mode: PickMode, objects: &mut [TrackedObject]) -> Result<()> {
        mode.validate()?;
        self.clear_selection(objects);
        if let PickMode::CycleColors(_) = self.mode {
            for object in objects.iter_mut() {
                object.restore_baseline();
                object.color_index = 0;
            }
        }
        self.mode = mode;
        Ok(())
    }

    /// Currently selected object, if any
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Drop the selection, restoring its baseline look in highlight mode
    pub fn clear_selection(&mut self, objects: &mut [TrackedObject]) {
        if let PickMode::Highlight(_) = self.mode {
            restore_previous(&mut self.selected, objects);
        }
        self.selected = None;
    }

    /// Handle a pointer event: project it through `camera` and pick among `objects`
    pub fn on_pick<C: Camera + ?Sized>(
        &mut self,
        pointer: PointerNdc,
        camera: &C,
        objects: &mut [TrackedObject],
    ) -> Option<SelectionInfo> {
        let ray = ray_from_ndc(pointer, camera);
        self.pick_ray(&ray, objects)
    }

    /// Pick with an already projected ray
    pub fn pick_ray(&mut self, ray: &Ray, objects: &mut [TrackedObject]) -> Option<SelectionInfo> {
        let nearest = self.caster.cast(ray, objects).into_iter().next();

        match &self.mode {
            PickMode::Highlight(style) => {
                restore_previous(&mut self.selected, objects);

                let hit = nearest?;
                let object = &mut objects[hit.index];
                object.apply_highlight(style.color, style.scale);
                self.selected = Some(object.id);
                debug!("Selected '{}' at distance {:.2}", object.name, hit.distance);
                Some(selection_info(object, &hit))
            }
            PickMode::CycleColors(palette) => {
                let Some(hit) = nearest else {
                    self.selected = None;
                    debug!("Pick missed");
                    return None;
                };

                let object = &mut objects[hit.index];
                if !palette.is_empty() {
                    object.color = palette[object.color_index % palette.len()];
                    object.color_index = (object.color_index + 1) % palette.len();
                }
                self.selected = Some(object.id);
                debug!("'{}' recolored to {}", object.name, object.color);
                Some(selection_info(object, &hit))
            }
        }
    }
}

/// Restore the previously selected object and clear the handle. Every object
/// carrying the handle is restored; a handle whose object has left the scene is
/// simply dropped.
fn restore_previous(selected: &mut Option<ObjectId>, objects: &mut [TrackedObject]) {
    if let Some(previous) = selected.take() {
        let mut restored = 0;
        for object in objects.iter_mut().filter(|object| object.id == previous) {
            object.restore_baseline();
            restored += 1;
        }
        if restored == 0 {
            debug!("Previous selection {:?} no longer in scene", previous);
        }
    }
}

fn selection_info(object: &TrackedObject, hit: &Hit) -> SelectionInfo {
    SelectionInfo {
        object: object.id,
        name: object.name.clone(),
        position: object.position,
        extents: object.extents(),
        distance: hit.distance,
    }
}
