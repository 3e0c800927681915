//! Simulation facade driven by the editor layer
//!
//! One [`Simulation::update`] call per frame advances the player and
//! resolves at most one contact; [`Simulation::pick_object`] serves the
//! editor's click-to-select. The scene owns every object; the facade
//! holds only keys and borrows the scene per call.

use crate::config::SimulationConfig;
use crate::foundation::math::Vec3;
use crate::physics::broad_phase::collect_candidates;
use crate::physics::integrator::{integrate, IntegrationResult};
use crate::physics::narrow_phase::resolve_first_hit;
use crate::physics::picking::{pick, PickHit, Ray};
use crate::scene::{ObjectKey, Role, RoleRegistry, Scene};
use log::trace;

/// Outcome of one simulation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing ran: non-positive time step or no registered player
    Skipped,
    /// The player moved without touching anything
    NoCollision,
    /// The player was clamped to the world floor; collision detection
    /// was pre-empted for this tick
    FloorClamped,
    /// A contact was resolved (the depth is diagnostic only)
    Resolved {
        /// Displacement magnitude applied to eliminate the overlap
        penetration_depth: f32,
    },
}

/// Collision and physics core of the editor
pub struct Simulation {
    registry: RoleRegistry,
    config: SimulationConfig,
    gravity_enabled: bool,
    picked: Option<PickHit>,
}

impl Simulation {
    /// Create a simulation with the given configuration
    pub fn new(config: SimulationConfig) -> Self {
        let gravity_enabled = config.gravity_enabled;
        Self {
            registry: RoleRegistry::new(),
            config,
            gravity_enabled,
            picked: None,
        }
    }

    /// Reset all registrations and picked state atomically
    ///
    /// Called before scene teardown so no stale keys survive into the
    /// next scene.
    pub fn clear_data(&mut self) {
        self.registry.clear();
        self.picked = None;
    }

    /// Register an object under a role (see [`RoleRegistry::register`])
    pub fn register_object(&mut self, key: ObjectKey, role: Role) {
        self.registry.register(key, role);
    }

    /// Remove an object from its role bucket
    pub fn deregister_object(&mut self, key: ObjectKey) {
        self.registry.deregister(key);
    }

    /// Role of an object, or `None` if unregistered
    pub fn role_of(&self, key: ObjectKey) -> Option<Role> {
        self.registry.role_of(key)
    }

    /// The registered player, if any
    pub fn player(&self) -> Option<ObjectKey> {
        self.registry.player()
    }

    /// Toggle gravity (on in Play/Test mode, off in Edit mode)
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    /// Whether gravity is currently applied
    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Advance the simulation one tick
    ///
    /// Integrates the player, then runs broad and narrow phase unless
    /// the floor clamp pre-empted them. Ticks with `delta_time <= 0`
    /// are skipped entirely.
    pub fn update(&mut self, scene: &mut Scene, delta_time: f32) -> TickOutcome {
        if delta_time <= 0.0 {
            return TickOutcome::Skipped;
        }
        let Some(player) = self.registry.player() else {
            return TickOutcome::Skipped;
        };
        let Some(object) = scene.get_mut(player) else {
            return TickOutcome::Skipped;
        };

        let result = integrate(
            object,
            self.config.gravity,
            self.gravity_enabled,
            self.config.world_floor_height,
            delta_time,
        );
        if result == IntegrationResult::FloorClamped {
            return TickOutcome::FloorClamped;
        }

        let candidates = collect_candidates(scene, &self.registry, player);
        trace!("broad phase produced {} candidate(s)", candidates.len());

        match resolve_first_hit(scene, player, &candidates) {
            Some(resolution) => TickOutcome::Resolved {
                penetration_depth: resolution.penetration_depth,
            },
            None => TickOutcome::NoCollision,
        }
    }

    /// Ray-pick the nearest environment object; caches the hit
    ///
    /// Returns whether anything was hit; the hit itself is read through
    /// [`Simulation::picked_object`] and [`Simulation::picked_point`].
    pub fn pick_object(&mut self, scene: &Scene, origin: Vec3, direction: Vec3) -> bool {
        let ray = Ray::new(origin, direction);
        self.picked = pick(scene, &self.registry, &ray);
        self.picked.is_some()
    }

    /// The object hit by the last successful pick
    pub fn picked_object(&self) -> Option<ObjectKey> {
        self.picked.as_ref().map(|hit| hit.object)
    }

    /// The world-space point hit by the last successful pick
    pub fn picked_point(&self) -> Option<Vec3> {
        self.picked.as_ref().map(|hit| hit.point)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
