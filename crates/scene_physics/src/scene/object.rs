//! Scene objects and their owning arena

use crate::foundation::math::Vec3;
use crate::physics::volume::BoundingVolume;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a scene object
    ///
    /// Keys survive insertions and removals of other objects; a key
    /// whose object was removed simply resolves to `None`.
    pub struct ObjectKey;
}

/// Per-instance placement of an instanced object
///
/// Instanced environment objects share one authored shape but are
/// placed many times, each with its own translation and non-uniform
/// scale. Each instance caches its own bounding radius.
#[derive(Debug, Clone)]
pub struct Instance {
    /// World-space translation relative to the owning object's position
    pub translation: Vec3,
    scale: Vec3,
    radius_bias: f32,
    bounding_radius: f32,
}

impl Instance {
    /// Create an instance; the bounding radius is derived immediately
    pub fn new(translation: Vec3, scale: Vec3, radius_bias: f32) -> Self {
        let mut instance = Self {
            translation,
            scale,
            radius_bias,
            bounding_radius: 0.0,
        };
        instance.recompute_bounding_radius();
        instance
    }

    /// Current scale factors
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Update the scale, keeping the cached bounding radius in sync
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.recompute_bounding_radius();
    }

    /// Effective bounding-sphere radius for broad phase and picking
    ///
    /// `radius_bias * max(scale.x, scale.y, scale.z)`; the bias is an
    /// authoring-time constant.
    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    fn recompute_bounding_radius(&mut self) {
        self.bounding_radius = self.radius_bias * self.scale.x.max(self.scale.y).max(self.scale.z);
    }
}

/// A scene-owned object participating in collision and picking
///
/// Velocity and acceleration are meaningful only for the player; they
/// stay zero on static environment objects.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// World-space origin
    pub position: Vec3,

    /// Linear velocity in units per second
    pub linear_velocity: Vec3,

    /// Linear acceleration in units per second squared
    pub linear_acceleration: Vec3,

    /// Coarse volume used for broad phase and picking
    pub outer_volume: BoundingVolume,

    /// Finer-grained volumes used for narrow phase when present
    pub inner_volumes: Vec<BoundingVolume>,

    /// Per-instance placements; empty for single objects
    pub instances: Vec<Instance>,
}

impl SceneObject {
    /// Create an object at the origin with the given outer volume
    pub fn new(outer_volume: BoundingVolume) -> Self {
        Self {
            position: Vec3::zeros(),
            linear_velocity: Vec3::zeros(),
            linear_acceleration: Vec3::zeros(),
            outer_volume,
            inner_volumes: Vec::new(),
            instances: Vec::new(),
        }
    }

    /// Builder: set the world position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder: set the initial linear velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// Builder: add an inner volume
    pub fn with_inner_volume(mut self, volume: BoundingVolume) -> Self {
        self.inner_volumes.push(volume);
        self
    }

    /// Builder: add an instance placement
    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.instances.push(instance);
        self
    }

    /// Whether this object is placed via instances
    pub fn is_instanced(&self) -> bool {
        !self.instances.is_empty()
    }

    /// Narrow-phase shapes: inner volumes when authored, else the outer
    /// volume stands in as the sole shape
    pub fn effective_shapes(&self) -> &[BoundingVolume] {
        if self.inner_volumes.is_empty() {
            std::slice::from_ref(&self.outer_volume)
        } else {
            &self.inner_volumes
        }
    }
}

/// Arena owning all scene objects
///
/// The physics core never stores references into the arena, only
/// [`ObjectKey`]s resolved per call.
#[derive(Default)]
pub struct Scene {
    objects: SlotMap<ObjectKey, SceneObject>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Insert an object, returning its key
    pub fn insert(&mut self, object: SceneObject) -> ObjectKey {
        self.objects.insert(object)
    }

    /// Remove an object; returns it if the key was live
    pub fn remove(&mut self, key: ObjectKey) -> Option<SceneObject> {
        self.objects.remove(key)
    }

    /// Resolve a key to its object
    pub fn get(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Resolve a key to its object, mutably
    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Whether a key is live
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove all objects
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stale_key_resolves_to_none() {
        let mut scene = Scene::new();
        let key = scene.insert(SceneObject::new(BoundingVolume::sphere(1.0)));
        scene.remove(key);
        assert!(scene.get(key).is_none());
        assert!(!scene.contains(key));
    }

    #[test]
    fn test_instance_radius_tracks_scale() {
        let mut instance = Instance::new(Vec3::zeros(), Vec3::new(1.0, 2.0, 3.0), 1.5);
        assert_relative_eq!(instance.bounding_radius(), 4.5);

        instance.set_scale(Vec3::new(4.0, 1.0, 1.0));
        assert_relative_eq!(instance.bounding_radius(), 6.0);
    }

    #[test]
    fn test_effective_shapes_falls_back_to_outer() {
        let object = SceneObject::new(BoundingVolume::sphere(2.0));
        assert_eq!(object.effective_shapes().len(), 1);
        assert_eq!(object.effective_shapes()[0], object.outer_volume);

        let object = object.with_inner_volume(BoundingVolume::aabb(Vec3::new(1.0, 1.0, 1.0)));
        assert_eq!(object.effective_shapes().len(), 1);
        assert_ne!(object.effective_shapes()[0], object.outer_volume);
    }
}
