//! Physics module - collision detection and response
//!
//! The pipeline runs once per tick for the single dynamic entity (the
//! player): integration, then a distance-sorted broad phase over the
//! environment bucket, then a narrow phase that resolves the first
//! confirmed hit and stops. Picking reuses the same primitives for
//! editor selection.
//!
//! # Module Organization
//!
//! - [`volume`] - Sphere and axis-aligned-box bounding volumes
//! - [`intersect`] - Pure shape-pair and ray intersection tests
//! - [`closest`] - Closest-point and face-normal queries
//! - [`broad_phase`] - Distance-sorted candidate selection
//! - [`narrow_phase`] - Exact tests and penetration resolution
//! - [`integrator`] - Gravity, velocity, and the world-floor clamp
//! - [`picking`] - Ray picking of environment objects
//! - [`simulation`] - The per-frame facade driven by the editor

pub mod broad_phase;
pub mod closest;
pub mod integrator;
pub mod intersect;
pub mod narrow_phase;
pub mod picking;
pub mod simulation;
pub mod volume;

pub use broad_phase::CollisionCandidate;
pub use narrow_phase::ContactResolution;
pub use picking::{PickHit, Ray};
pub use simulation::{Simulation, TickOutcome};
pub use volume::{BoundingVolume, VolumeKind};
