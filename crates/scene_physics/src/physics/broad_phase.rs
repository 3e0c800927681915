//! Broad-phase candidate selection
//!
//! A linear scan of the environment bucket against the player's outer
//! sphere. Survivors are sorted by squared center distance so the
//! narrow phase always examines the nearest obstacle first. The list is
//! rebuilt from scratch every tick; nothing is cached across ticks.

use crate::foundation::math::Vec3;
use crate::physics::intersect::sphere_sphere;
use crate::scene::{ObjectKey, RoleRegistry, Scene};
use std::cmp::Ordering;

/// A broad-phase survivor, consumed by the narrow phase within the tick
#[derive(Debug, Clone)]
pub struct CollisionCandidate {
    /// The environment object that overlapped the player's outer sphere
    pub object: ObjectKey,
    /// Which instance matched, for instanced objects
    pub instance_index: Option<usize>,
    /// Resolved world-space origin of the matching object or instance
    pub world_position: Vec3,
    /// Squared distance between the two outer-sphere centers
    pub distance_squared: f32,
}

/// Scan the environment bucket for outer-sphere overlaps with the player
///
/// Instanced objects are tested once per instance, each with its own
/// cached bounding radius. The result is stably sorted ascending by
/// squared distance; ties keep discovery order.
pub fn collect_candidates(
    scene: &Scene,
    registry: &RoleRegistry,
    player: ObjectKey,
) -> Vec<CollisionCandidate> {
    let Some(player_object) = scene.get(player) else {
        return Vec::new();
    };
    let player_center = player_object.outer_volume.world_center(player_object.position);
    let player_radius = player_object.outer_volume.bounding_radius();

    let mut candidates = Vec::new();

    for key in registry.environment() {
        let Some(object) = scene.get(key) else {
            continue;
        };

        if object.is_instanced() {
            for (index, instance) in object.instances.iter().enumerate() {
                let position = object.position + instance.translation;
                let center = object.outer_volume.world_center(position);
                let radius = instance.bounding_radius();
                if sphere_sphere(player_center, player_radius, center, radius) {
                    candidates.push(CollisionCandidate {
                        object: key,
                        instance_index: Some(index),
                        world_position: position,
                        distance_squared: (center - player_center).magnitude_squared(),
                    });
                }
            }
        } else {
            let center = object.outer_volume.world_center(object.position);
            let radius = object.outer_volume.bounding_radius();
            if sphere_sphere(player_center, player_radius, center, radius) {
                candidates.push(CollisionCandidate {
                    object: key,
                    instance_index: None,
                    world_position: object.position,
                    distance_squared: (center - player_center).magnitude_squared(),
                });
            }
        }
    }

    candidates.sort_by(|a, b| {
        a.distance_squared
            .partial_cmp(&b.distance_squared)
            .unwrap_or(Ordering::Equal)
    });

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::volume::BoundingVolume;
    use crate::scene::{Instance, Role, SceneObject};
    use approx::assert_relative_eq;

    fn scene_with_player(position: Vec3, radius: f32) -> (Scene, RoleRegistry, ObjectKey) {
        let mut scene = Scene::new();
        let mut registry = RoleRegistry::new();
        let player = scene.insert(
            SceneObject::new(BoundingVolume::sphere(radius)).with_position(position),
        );
        registry.register(player, Role::Player);
        (scene, registry, player)
    }

    #[test]
    fn test_candidates_sorted_by_distance() {
        let (mut scene, mut registry, player) = scene_with_player(Vec3::zeros(), 10.0);

        // Inserted far-to-near; the scan must return near-to-far
        let positions = [3.0, 1.0, 2.0];
        let mut keys = Vec::new();
        for &x in &positions {
            let key = scene.insert(
                SceneObject::new(BoundingVolume::sphere(1.0))
                    .with_position(Vec3::new(x, 0.0, 0.0)),
            );
            registry.register(key, Role::Environment);
            keys.push(key);
        }

        let candidates = collect_candidates(&scene, &registry, player);
        assert_eq!(candidates.len(), 3);
        assert_relative_eq!(candidates[0].distance_squared, 1.0);
        assert_relative_eq!(candidates[1].distance_squared, 4.0);
        assert_relative_eq!(candidates[2].distance_squared, 9.0);
        assert_eq!(candidates[0].object, keys[1]);
    }

    #[test]
    fn test_non_overlapping_objects_are_rejected() {
        let (mut scene, mut registry, player) = scene_with_player(Vec3::zeros(), 1.0);

        let far = scene.insert(
            SceneObject::new(BoundingVolume::sphere(1.0))
                .with_position(Vec3::new(10.0, 0.0, 0.0)),
        );
        registry.register(far, Role::Environment);

        assert!(collect_candidates(&scene, &registry, player).is_empty());
    }

    #[test]
    fn test_instances_tested_individually() {
        let (mut scene, mut registry, player) = scene_with_player(Vec3::zeros(), 1.0);

        // One instance nearby, one far out of range; each instance
        // carries its own scaled radius.
        let object = SceneObject::new(BoundingVolume::sphere(1.0))
            .with_instance(Instance::new(
                Vec3::new(1.5, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 1.0),
                1.0,
            ))
            .with_instance(Instance::new(
                Vec3::new(50.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 1.0),
                1.0,
            ));
        let key = scene.insert(object);
        registry.register(key, Role::Environment);

        let candidates = collect_candidates(&scene, &registry, player);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].instance_index, Some(0));
        assert_eq!(candidates[0].world_position, Vec3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn test_instance_scale_extends_reach() {
        let (mut scene, mut registry, player) = scene_with_player(Vec3::zeros(), 1.0);

        // Unscaled this instance would be out of range; the 4x scale on
        // one axis inflates its cached radius enough to overlap.
        let object = SceneObject::new(BoundingVolume::sphere(1.0)).with_instance(Instance::new(
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(4.0, 1.0, 1.0),
            1.0,
        ));
        let key = scene.insert(object);
        registry.register(key, Role::Environment);

        let candidates = collect_candidates(&scene, &registry, player);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_missing_player_yields_no_candidates() {
        let scene = Scene::new();
        let registry = RoleRegistry::new();
        let mut stale_scene = Scene::new();
        let stale = stale_scene.insert(SceneObject::new(BoundingVolume::sphere(1.0)));
        stale_scene.remove(stale);

        assert!(collect_candidates(&scene, &registry, stale).is_empty());
    }
}
