//! Ray picking of environment objects
//!
//! Editor selection, not simulation: a ray is cast against every
//! environment object's outer sphere as a cheap gate; objects with
//! inner volumes are then hit-tested against those, which are the
//! authoritative surface. The globally nearest hit wins.

use crate::foundation::math::Vec3;
use crate::physics::intersect::{ray_aabb, ray_sphere};
use crate::physics::volume::VolumeKind;
use crate::scene::{ObjectKey, RoleRegistry, Scene, SceneObject};

/// A ray for picking
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized on construction)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a successful pick
#[derive(Debug, Clone, Copy)]
pub struct PickHit {
    /// The environment object that was hit
    pub object: ObjectKey,
    /// Which instance was hit, for instanced objects
    pub instance_index: Option<usize>,
    /// Distance from the ray origin to the hit
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
}

/// Cast a ray against all environment objects and return the nearest hit
pub fn pick(scene: &Scene, registry: &RoleRegistry, ray: &Ray) -> Option<PickHit> {
    let mut nearest: Option<PickHit> = None;

    for key in registry.environment() {
        let Some(object) = scene.get(key) else {
            continue;
        };

        if object.is_instanced() {
            for (index, instance) in object.instances.iter().enumerate() {
                let position = object.position + instance.translation;
                let radius = instance.bounding_radius();
                if let Some(t) = hit_placement(object, position, radius, ray) {
                    consider(&mut nearest, key, Some(index), t, ray);
                }
            }
        } else {
            let radius = object.outer_volume.bounding_radius();
            if let Some(t) = hit_placement(object, object.position, radius, ray) {
                consider(&mut nearest, key, None, t, ray);
            }
        }
    }

    nearest
}

/// Hit-test one placement of an object: outer gate, then inner volumes
fn hit_placement(
    object: &SceneObject,
    position: Vec3,
    outer_radius: f32,
    ray: &Ray,
) -> Option<f32> {
    let outer_center = object.outer_volume.world_center(position);
    let outer_t = ray_sphere(ray.origin, ray.direction, outer_center, outer_radius)?;

    if object.inner_volumes.is_empty() {
        return Some(outer_t);
    }

    // Inner volumes are the authoritative surface: a ray that passes the
    // outer gate but misses every inner volume is a miss.
    let mut nearest_inner: Option<f32> = None;
    for volume in &object.inner_volumes {
        let center = volume.world_center(position);
        let t = match volume.kind {
            VolumeKind::Sphere { radius } => ray_sphere(ray.origin, ray.direction, center, radius),
            VolumeKind::Aabb { half_extents } => {
                ray_aabb(ray.origin, ray.direction, center, half_extents)
            }
        };
        if let Some(t) = t {
            if nearest_inner.map_or(true, |best| t < best) {
                nearest_inner = Some(t);
            }
        }
    }
    nearest_inner
}

fn consider(
    nearest: &mut Option<PickHit>,
    object: ObjectKey,
    instance_index: Option<usize>,
    t: f32,
    ray: &Ray,
) {
    if nearest.as_ref().map_or(true, |hit| t < hit.distance) {
        *nearest = Some(PickHit {
            object,
            instance_index,
            distance: t,
            point: ray.point_at(t),
        });
    }
}
