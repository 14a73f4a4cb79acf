//! # Random Non-Overlapping Placement
//!
//! First-fit rejection sampling: draw uniform points inside a box and accept
//! the first one that keeps a minimum center-to-center distance from every
//! object already placed.
//!
//! ## Usage
//!
//! ```rust
//! use scatterpick::placement::{PlacementSampler, PlacementSettings, RandomCandidates};
//!
//! let sampler = PlacementSampler::new(PlacementSettings::default().with_min_distance(4.0)).unwrap();
//! let mut source = RandomCandidates::from_seed(7);
//!
//! let layout = sampler.scatter(20, &mut source);
//! assert_eq!(layout.len(), 20);
//! ```
//!
//! ## Exhaustion
//!
//! [`PlacementSampler::place`] reports [`Error::PlacementExhausted`] when no
//! candidate passes within `max_attempts`. [`PlacementSampler::scatter`] then
//! still places the object at the last rejected candidate, which can overlap
//! a neighbour. That fallback is a known defect kept for layout compatibility;
//! such placements are flagged with `fell_back` and logged as warnings.

use cgmath::{InnerSpace, Vector3};
use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::gfx::scene::TrackedObject;

/// Anything with a center point the sampler can keep distance from
pub trait Positioned {
    fn position(&self) -> Vector3<f32>;
}

impl Positioned for Vector3<f32> {
    fn position(&self) -> Vector3<f32> {
        *self
    }
}

impl Positioned for TrackedObject {
    fn position(&self) -> Vector3<f32> {
        self.position
    }
}

impl Positioned for Placement {
    fn position(&self) -> Vector3<f32> {
        self.position
    }
}

/// Axis-aligned box candidates are drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementBounds {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl PlacementBounds {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Square footprint of `half_width` around the origin on x/z, `y_min..y_max` high
    pub fn centered(half_width: f32, y_min: f32, y_max: f32) -> Self {
        Self::new(
            Vector3::new(-half_width, y_min, -half_width),
            Vector3::new(half_width, y_max, half_width),
        )
    }

    pub fn contains(&self, point: Vector3<f32>) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }

    pub fn validate(&self) -> Result<()> {
        let axes = [
            ("x", self.min.x, self.max.x),
            ("y", self.min.y, self.max.y),
            ("z", self.min.z, self.max.z),
        ];
        for (axis, min, max) in axes {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(Error::InvalidConfig(format!(
                    "placement bounds on {} must be finite with min <= max, got {}..{}",
                    axis, min, max
                )));
            }
        }
        Ok(())
    }
}

impl Default for PlacementBounds {
    fn default() -> Self {
        Self::centered(15.0, 0.0, 8.0)
    }
}

/// Where candidate points come from. Inject a deterministic source in tests.
pub trait CandidateSource {
    fn next_candidate(&mut self, bounds: &PlacementBounds) -> Vector3<f32>;
}

/// Uniform random candidates from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomCandidates<R> {
    rng: R,
}

impl<R: Rng> RandomCandidates<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomCandidates<StdRng> {
    /// Reproducible source for a given seed
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RandomCandidates<rand::rngs::ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> CandidateSource for RandomCandidates<R> {
    fn next_candidate(&mut self, bounds: &PlacementBounds) -> Vector3<f32> {
        let extent = bounds.max - bounds.min;
        Vector3::new(
            bounds.min.x + self.rng.random::<f32>() * extent.x,
            bounds.min.y + self.rng.random::<f32>() * extent.y,
            bounds.min.z + self.rng.random::<f32>() * extent.z,
        )
    }
}

/// Replays a fixed list of points, cycling when it runs out.
///
/// Useful for reproducing a recorded layout. Bounds are ignored.
#[derive(Debug, Clone)]
pub struct ScriptedCandidates {
    points: Vec<Vector3<f32>>,
    next: usize,
}

impl ScriptedCandidates {
    pub fn new(points: Vec<Vector3<f32>>) -> Self {
        Self { points, next: 0 }
    }

    /// How many candidates have been handed out so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl CandidateSource for ScriptedCandidates {
    fn next_candidate(&mut self, _bounds: &PlacementBounds) -> Vector3<f32> {
        if self.points.is_empty() {
            return Vector3::new(0.0, 0.0, 0.0);
        }
        let point = self.points[self.next % self.points.len()];
        self.next += 1;
        point
    }
}

/// Placement sampler configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSettings {
    pub bounds: PlacementBounds,
    /// Accepted candidates are strictly farther than this from every existing center
    pub min_distance: f32,
    pub max_attempts: u32,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            bounds: PlacementBounds::default(),
            min_distance: 4.0,
            max_attempts: 100,
        }
    }
}

impl PlacementSettings {
    pub fn with_bounds(mut self, bounds: PlacementBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "min distance must be a non-negative number, got {}",
                self.min_distance
            )));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One object's position as produced by [`PlacementSampler::scatter`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vector3<f32>,
    /// Set when no candidate passed and the last rejected one was used
    pub fell_back: bool,
}

/// First-fit rejection sampler
#[derive(Debug, Clone)]
pub struct PlacementSampler {
    settings: PlacementSettings,
}

impl PlacementSampler {
    pub fn new(settings: PlacementSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    /// Whether `candidate` is strictly farther than the minimum distance from all of `existing`
    pub fn is_clear<P: Positioned>(&self, candidate: Vector3<f32>, existing: &[P]) -> bool {
        existing
            .iter()
            .all(|other| (other.position() - candidate).magnitude() > self.settings.min_distance)
    }

    /// Draw candidates until one is clear of `existing`. `existing` is only read.
    pub fn place<P, S>(&self, existing: &[P], source: &mut S) -> Result<Vector3<f32>>
    where
        P: Positioned,
        S: CandidateSource + ?Sized,
    {
        self.search(existing, source)
            .map_err(|last_candidate| Error::PlacementExhausted {
                attempts: self.settings.max_attempts,
                last_candidate,
            })
    }

    /// [`PlacementSampler::place`], falling back to the last rejected candidate on exhaustion
    pub fn place_or_fallback<P, S>(&self, existing: &[P], source: &mut S) -> Placement
    where
        P: Positioned,
        S: CandidateSource + ?Sized,
    {
        match self.search(existing, source) {
            Ok(position) => Placement {
                position,
                fell_back: false,
            },
            Err(last_candidate) => {
                warn!(
                    "No clear position after {} attempts, using last candidate ({:.2}, {:.2}, {:.2}); it may overlap",
                    self.settings.max_attempts, last_candidate.x, last_candidate.y, last_candidate.z
                );
                Placement {
                    position: last_candidate,
                    fell_back: true,
                }
            }
        }
    }

    /// Accepted candidate, or the last rejected one once attempts run out
    fn search<P, S>(&self, existing: &[P], source: &mut S) -> std::result::Result<Vector3<f32>, Vector3<f32>>
    where
        P: Positioned,
        S: CandidateSource + ?Sized,
    {
        let mut last_candidate = Vector3::new(0.0, 0.0, 0.0);

        for attempt in 1..=self.settings.max_attempts {
            let candidate = source.next_candidate(&self.settings.bounds);
            if self.is_clear(candidate, existing) {
                debug!(
                    "Placed at ({:.2}, {:.2}, {:.2}) after {} attempt(s)",
                    candidate.x, candidate.y, candidate.z, attempt
                );
                return Ok(candidate);
            }
            last_candidate = candidate;
        }

        Err(last_candidate)
    }

    /// Lay out `count` objects one after another, each avoiding all earlier ones
    pub fn scatter<S>(&self, count: usize, source: &mut S) -> Vec<Placement>
    where
        S: CandidateSource + ?Sized,
    {
        let mut placements: Vec<Placement> = Vec::with_capacity(count);
        for _ in 0..count {
            let placement = self.place_or_fallback(&placements, source);
            placements.push(placement);
        }

        let fallbacks = placements.iter().filter(|p| p.fell_back).count();
        debug!("Scattered {} objects ({} fallback)", count, fallbacks);
        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_then_accepts() {
        let sampler = PlacementSampler::new(PlacementSettings::default()).unwrap();
        let existing = [Vector3::new(0.0, 0.0, 0.0)];
        let mut source = ScriptedCandidates::new(vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(10.0, 2.0, 5.0),
        ]);

        let position = sampler.place(&existing, &mut source).unwrap();
        assert_eq!(position, Vector3::new(10.0, 2.0, 5.0));
        assert_eq!(source.drawn(), 2);
    }

    #[test]
    fn test_distance_equal_to_minimum_is_rejected() {
        let sampler = PlacementSampler::new(PlacementSettings::default()).unwrap();
        let existing = [Vector3::new(0.0, 0.0, 0.0)];
        assert!(!sampler.is_clear(Vector3::new(4.0, 0.0, 0.0), &existing));
        assert!(sampler.is_clear(Vector3::new(4.01, 0.0, 0.0), &existing));
    }

    #[test]
    fn test_exhaustion_reports_last_candidate() {
        let settings = PlacementSettings::default().with_max_attempts(3);
        let sampler = PlacementSampler::new(settings).unwrap();
        let existing = [Vector3::new(0.0, 0.0, 0.0)];
        let mut source = ScriptedCandidates::new(vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ]);

        let err = sampler.place(&existing, &mut source).unwrap_err();
        assert_eq!(
            err,
            Error::PlacementExhausted {
                attempts: 3,
                last_candidate: Vector3::new(0.0, 0.0, 1.0),
            }
        );

        let fallback = sampler.place_or_fallback(&existing, &mut source);
        assert!(fallback.fell_back);
        assert_eq!(fallback.position, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_empty_existing_accepts_first() {
        let sampler = PlacementSampler::new(PlacementSettings::default()).unwrap();
        let mut source = ScriptedCandidates::new(vec![Vector3::new(3.0, 3.0, 3.0)]);
        let none: [Vector3<f32>; 0] = [];
        assert_eq!(
            sampler.place(&none, &mut source).unwrap(),
            Vector3::new(3.0, 3.0, 3.0)
        );
    }

    #[test]
    fn test_random_candidates_stay_in_bounds() {
        let bounds = PlacementBounds::default();
        let mut source = RandomCandidates::from_seed(42);
        for _ in 0..1000 {
            assert!(bounds.contains(source.next_candidate(&bounds)));
        }

        // Degenerate box collapses to a point
        let flat = PlacementBounds::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(source.next_candidate(&flat), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_settings_validation() {
        assert!(PlacementSettings::default().validate().is_ok());
        assert!(PlacementSettings::default().with_max_attempts(0).validate().is_err());
        assert!(PlacementSettings::default().with_min_distance(-1.0).validate().is_err());
        assert!(PlacementSettings::default()
            .with_min_distance(f32::NAN)
            .validate()
            .is_err());

        let inverted = PlacementBounds::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(-1.0, 1.0, 1.0));
        assert!(PlacementSettings::default()
            .with_bounds(inverted)
            .validate()
            .is_err());
    }
}
