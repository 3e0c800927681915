//! Bounding volume primitives
//!
//! Volumes are authored in entity-local space: a center offset plus a
//! sphere radius or box half-extents. World-space centers are resolved
//! on demand from the owning object's position during collision tests.

use crate::foundation::math::Vec3;

/// Shape payload of a bounding volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeKind {
    /// Sphere with the given radius
    Sphere {
        /// Sphere radius (non-negative)
        radius: f32,
    },
    /// Axis-aligned box with the given half-extents
    ///
    /// Boxes are never rotated; the separating-axis tests assume the
    /// three world axes.
    Aabb {
        /// Box half-extents along each world axis (non-negative)
        half_extents: Vec3,
    },
}

/// A bounding volume attached to a scene object
///
/// An object always carries exactly one outer volume (broad phase and
/// picking) and zero or more inner volumes (narrow phase).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    /// Offset from the owning object's position to the volume center
    pub center_offset: Vec3,
    /// Shape payload
    pub kind: VolumeKind,
}

impl BoundingVolume {
    /// Create a sphere volume centered on the owning object
    pub fn sphere(radius: f32) -> Self {
        Self {
            center_offset: Vec3::zeros(),
            kind: VolumeKind::Sphere {
                radius: radius.max(0.0),
            },
        }
    }

    /// Create an axis-aligned box volume centered on the owning object
    pub fn aabb(half_extents: Vec3) -> Self {
        Self {
            center_offset: Vec3::zeros(),
            kind: VolumeKind::Aabb {
                half_extents: Vec3::new(
                    half_extents.x.max(0.0),
                    half_extents.y.max(0.0),
                    half_extents.z.max(0.0),
                ),
            },
        }
    }

    /// Builder: offset the volume center from the owning object
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.center_offset = offset;
        self
    }

    /// Resolve the volume's world-space center
    pub fn world_center(&self, owner_position: Vec3) -> Vec3 {
        owner_position + self.center_offset
    }

    /// Radius of the smallest sphere containing this volume
    ///
    /// For spheres this is the radius itself; for boxes, the distance
    /// from the center to a corner.
    pub fn bounding_radius(&self) -> f32 {
        match self.kind {
            VolumeKind::Sphere { radius } => radius,
            VolumeKind::Aabb { half_extents } => half_extents.magnitude(),
        }
    }

    /// A zero-extent volume intersects nothing except at distance zero
    pub fn is_degenerate(&self) -> bool {
        match self.kind {
            VolumeKind::Sphere { radius } => radius == 0.0,
            VolumeKind::Aabb { half_extents } => {
                half_extents.x == 0.0 && half_extents.y == 0.0 && half_extents.z == 0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_world_center_applies_offset() {
        let volume = BoundingVolume::sphere(2.0).with_offset(Vec3::new(0.0, 1.0, 0.0));
        let center = volume.world_center(Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(center, Vec3::new(5.0, 1.0, 0.0));
    }

    #[test]
    fn test_negative_extents_are_clamped() {
        let sphere = BoundingVolume::sphere(-1.0);
        assert!(sphere.is_degenerate());

        let aabb = BoundingVolume::aabb(Vec3::new(-1.0, -2.0, -3.0));
        assert!(aabb.is_degenerate());
    }

    #[test]
    fn test_bounding_radius_of_box_reaches_corner() {
        let aabb = BoundingVolume::aabb(Vec3::new(1.0, 2.0, 2.0));
        assert_relative_eq!(aabb.bounding_radius(), 3.0);
    }
}
