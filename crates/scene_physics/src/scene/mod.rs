//! Scene layer - object ownership and role classification
//!
//! The scene owns every object behind a stable arena key; the physics
//! core holds keys only and resolves them per tick. Roles classify
//! objects into the mutually exclusive Player / Environment / Monster
//! buckets that drive collision participation.

pub mod object;
pub mod registry;

pub use object::{Instance, ObjectKey, Scene, SceneObject};
pub use registry::{Role, RoleRegistry};
