//! Error types for scatterpick
//!
//! Picking and ticking never fail; errors only come out of settings
//! validation, placement exhaustion and handle lookups.

use cgmath::Vector3;
use thiserror::Error;

use crate::gfx::scene::ObjectId;

/// Main error type for scatterpick operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The sampler ran out of attempts. `last_candidate` is the final rejected
    /// point, which callers may still use as a fallback position.
    #[error("No valid position found after {attempts} attempts")]
    PlacementExhausted {
        attempts: u32,
        last_candidate: Vector3<f32>,
    },

    #[error("Unknown object: {0:?}")]
    UnknownObject(ObjectId),
}

/// Result type alias for scatterpick operations
pub type Result<T> = std::result::Result<T, Error>;
