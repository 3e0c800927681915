//! Narrow-phase intersection testing and penetration resolution
//!
//! Candidates arrive sorted by distance from the broad phase; the scan
//! resolves the first confirmed hit and stops, so the nearest static
//! obstacle always wins and at most one resolution happens per tick.
//!
//! Narrow-phase shapes are an object's inner volumes when authored,
//! otherwise its outer volume stands in as the sole shape, collapsing
//! the shape-count branching into one nested loop with early exit.

use crate::foundation::math::{safe_normalize, safe_normalize_or, Vec3};
use crate::physics::broad_phase::CollisionCandidate;
use crate::physics::closest::{
    closest_face_normal_on_aabb, closest_point_on_aabb, closest_point_on_sphere,
};
use crate::physics::intersect::{aabb_aabb, sphere_aabb, sphere_sphere};
use crate::physics::volume::VolumeKind;
use crate::scene::{ObjectKey, Scene};
use log::{debug, warn};

/// A resolved contact; the depth is diagnostic only
#[derive(Debug, Clone, Copy)]
pub struct ContactResolution {
    /// The environment object that was hit
    pub object: ObjectKey,
    /// Which instance was hit, for instanced objects
    pub instance_index: Option<usize>,
    /// Magnitude of the displacement applied to the player
    pub penetration_depth: f32,
}

/// Examine candidates in order and resolve the first confirmed hit
///
/// Returns `None` when no candidate's shapes actually intersect the
/// player's; the caller then applies the tick's motion unmodified.
pub fn resolve_first_hit(
    scene: &mut Scene,
    player: ObjectKey,
    candidates: &[CollisionCandidate],
) -> Option<ContactResolution> {
    let player_object = scene.get(player)?;
    let player_shapes = player_object.effective_shapes().to_vec();
    let mut position = player_object.position;
    let mut velocity = player_object.linear_velocity;

    for candidate in candidates {
        let Some(object) = scene.get(candidate.object) else {
            continue;
        };

        let mut resolved_depth = None;
        'shapes: for player_shape in &player_shapes {
            let player_center = player_shape.world_center(position);
            for static_shape in object.effective_shapes() {
                let static_center = static_shape.world_center(candidate.world_position);

                let hit = match (player_shape.kind, static_shape.kind) {
                    (VolumeKind::Sphere { radius: r1 }, VolumeKind::Sphere { radius: r2 }) => {
                        sphere_sphere(player_center, r1, static_center, r2)
                    }
                    (VolumeKind::Sphere { radius }, VolumeKind::Aabb { half_extents }) => {
                        sphere_aabb(player_center, radius, static_center, half_extents)
                    }
                    (VolumeKind::Aabb { half_extents }, VolumeKind::Sphere { radius }) => {
                        sphere_aabb(static_center, radius, player_center, half_extents)
                    }
                    (
                        VolumeKind::Aabb { half_extents: h1 },
                        VolumeKind::Aabb { half_extents: h2 },
                    ) => aabb_aabb(player_center, h1, static_center, h2),
                };

                if hit {
                    resolved_depth = Some(resolve_penetration(
                        player_shape.kind,
                        player_center,
                        static_shape.kind,
                        static_center,
                        &mut position,
                        &mut velocity,
                    ));
                    break 'shapes;
                }
            }
        }

        if let Some(depth) = resolved_depth {
            if let Some(player_object) = scene.get_mut(player) {
                player_object.position = position;
                player_object.linear_velocity = velocity;
            }
            return Some(ContactResolution {
                object: candidate.object,
                instance_index: candidate.instance_index,
                penetration_depth: depth,
            });
        }
    }

    None
}

/// Push the player out of a confirmed-intersecting shape pair
///
/// Mutates the player's position (and vertical velocity where a top
/// face is hit) and returns the displacement magnitude. Degenerate
/// inputs (zero velocity, coincident centers) resolve to zero
/// displacement instead of NaN.
fn resolve_penetration(
    player_kind: VolumeKind,
    player_center: Vec3,
    static_kind: VolumeKind,
    static_center: Vec3,
    position: &mut Vec3,
    velocity: &mut Vec3,
) -> f32 {
    match (player_kind, static_kind) {
        (VolumeKind::Sphere { radius: r1 }, VolumeKind::Sphere { radius: r2 }) => {
            // Back the player out along its direction of travel until the
            // spheres are exactly separated by r1 + r2.
            let Some(direction) = safe_normalize(*velocity) else {
                debug!("sphere-sphere resolution skipped: player has no movement direction");
                return 0.0;
            };
            let offset = player_center - static_center;
            let a = direction.dot(&direction);
            let b = -2.0 * offset.dot(&direction);
            let c = offset.dot(&offset) - (r1 + r2) * (r1 + r2);

            let discriminant = b * b - 4.0 * a * c;
            if discriminant <= 0.0 {
                warn!(
                    "sphere-sphere resolution found no real separation (discriminant {discriminant})"
                );
                return 0.0;
            }

            let x = (-b + discriminant.sqrt()) / (2.0 * a);
            *position -= direction * x;
            x.abs()
        }

        (VolumeKind::Sphere { radius }, VolumeKind::Aabb { half_extents }) => {
            let static_closest = closest_point_on_aabb(player_center, static_center, half_extents);
            let dynamic_closest = closest_point_on_sphere(static_closest, player_center, radius);
            let resolution = static_closest - dynamic_closest;

            if let Some(direction) = safe_normalize(resolution) {
                // Landing on a top face kills the fall
                if direction.y == 1.0 {
                    velocity.y = 0.0;
                }
            }
            *position += resolution;
            resolution.magnitude()
        }

        (VolumeKind::Aabb { half_extents }, VolumeKind::Sphere { radius }) => {
            let dynamic_closest = closest_point_on_aabb(static_center, player_center, half_extents);
            let offset = dynamic_closest - static_center;
            let Some(direction) = safe_normalize(offset) else {
                debug!("box-sphere resolution skipped: closest point coincides with sphere center");
                return 0.0;
            };
            let magnitude = radius - offset.magnitude();
            *position += direction * magnitude;
            magnitude.abs()
        }

        (VolumeKind::Aabb { half_extents: player_half }, VolumeKind::Aabb { half_extents }) => {
            let static_closest = closest_point_on_aabb(player_center, static_center, half_extents);
            let dynamic_closest = closest_point_on_aabb(static_center, player_center, player_half);

            // Resolve along the direction of travel, not the axis of
            // least penetration.
            let travel = safe_normalize_or(*velocity, Vec3::zeros());
            let normal =
                closest_face_normal_on_aabb(static_closest, static_center, half_extents, travel);
            if normal == Vec3::zeros() {
                debug!("box-box resolution skipped: no usable face normal");
                return 0.0;
            }

            let diff = static_closest - dynamic_closest;
            let resolution = normal * diff.dot(&normal);
            if normal.y == 1.0 {
                velocity.y = 0.0;
            }
            *position += resolution;
            resolution.magnitude()
        }
    }
}
