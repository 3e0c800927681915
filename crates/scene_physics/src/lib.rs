//! # Scene Physics
//!
//! Collision detection and physics core for an interactive 3D scene
//! editor.
//!
//! ## Features
//!
//! - **Role Registry**: classifies scene objects as player, static
//!   environment, or monster, with mutually exclusive membership
//! - **Two-Phase Collision**: distance-sorted broad phase over outer
//!   bounding spheres, exact narrow phase over sphere and box volumes
//! - **Penetration Resolution**: pushes the player out of static
//!   geometry, including the moving-sphere root-finding case
//! - **Ray Picking**: nearest-hit selection of environment objects for
//!   editor interaction
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_physics::prelude::*;
//!
//! let mut scene = Scene::new();
//! let mut simulation = Simulation::new(SimulationConfig::default());
//!
//! let player = scene.insert(
//!     SceneObject::new(BoundingVolume::sphere(1.0)).with_position(Vec3::new(0.0, 10.0, 0.0)),
//! );
//! simulation.register_object(player, Role::Player);
//!
//! let ground = scene.insert(SceneObject::new(BoundingVolume::aabb(Vec3::new(5.0, 1.0, 5.0))));
//! simulation.register_object(ground, Role::Environment);
//!
//! // In your game loop:
//! let outcome = simulation.update(&mut scene, 1.0 / 60.0);
//! assert_ne!(outcome, TickOutcome::Skipped);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod scene;

pub use config::{Config, ConfigError, SimulationConfig};
pub use physics::{BoundingVolume, Simulation, TickOutcome, VolumeKind};
pub use scene::{ObjectKey, Role, Scene, SceneObject};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, SimulationConfig},
        foundation::math::Vec3,
        physics::{BoundingVolume, PickHit, Ray, Simulation, TickOutcome, VolumeKind},
        scene::{Instance, ObjectKey, Role, RoleRegistry, Scene, SceneObject},
    };
}
