//! Primitive intersection tests
//!
//! Pure functions over world-space centers and extents. Each shape pair
//! has exactly one implementation; call sites swap arguments for the
//! mirrored order rather than duplicating the math, so both orders share
//! identical rounding behavior.

use crate::foundation::math::Vec3;
use crate::physics::closest::closest_point_on_aabb;

/// Test whether two spheres overlap (boundary inclusive)
///
/// Exactly touching spheres (`distance == r1 + r2`) count as overlapping.
pub fn sphere_sphere(center_a: Vec3, radius_a: f32, center_b: Vec3, radius_b: f32) -> bool {
    let distance_squared = (center_a - center_b).magnitude_squared();
    let radius_sum = radius_a + radius_b;
    distance_squared <= radius_sum * radius_sum
}

/// Test whether a sphere overlaps an axis-aligned box
///
/// Clamps the sphere center into the box to find the box's closest
/// point, then compares squared distances.
pub fn sphere_aabb(
    sphere_center: Vec3,
    radius: f32,
    box_center: Vec3,
    half_extents: Vec3,
) -> bool {
    let closest = closest_point_on_aabb(sphere_center, box_center, half_extents);
    (sphere_center - closest).magnitude_squared() <= radius * radius
}

/// Test whether two axis-aligned boxes overlap
///
/// Separating-axis test restricted to the three world axes; boxes are
/// never rotated.
pub fn aabb_aabb(center_a: Vec3, half_a: Vec3, center_b: Vec3, half_b: Vec3) -> bool {
    let delta = center_a - center_b;
    delta.x.abs() <= half_a.x + half_b.x
        && delta.y.abs() <= half_a.y + half_b.y
        && delta.z.abs() <= half_a.z + half_b.z
}

/// Ray-sphere intersection
///
/// Solves the quadratic `a t^2 + b t + c = 0` along the ray. Returns the
/// smaller non-negative root; a ray starting inside the sphere falls
/// back to the larger root (the exit point). A zero discriminant is a
/// tangential hit and yields its single root.
pub fn ray_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;

    let a = direction.dot(&direction);
    let b = 2.0 * oc.dot(&direction);
    let c = oc.dot(&oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t1 = (-b - sqrt_discriminant) / (2.0 * a);
    let t2 = (-b + sqrt_discriminant) / (2.0 * a);

    if t1 >= 0.0 {
        Some(t1)
    } else if t2 >= 0.0 {
        Some(t2)
    } else {
        None
    }
}

/// Ray-AABB intersection (slab test)
///
/// Returns the entry distance, or the exit distance for a ray starting
/// inside the box, matching the root-selection policy of [`ray_sphere`].
pub fn ray_aabb(origin: Vec3, direction: Vec3, center: Vec3, half_extents: Vec3) -> Option<f32> {
    let min = center - half_extents;
    let max = center + half_extents;

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        if d.abs() < f32::EPSILON {
            // Ray parallel to this slab: must already be inside it
            if o < min[axis] || o > max[axis] {
                return None;
            }
        } else {
            let inv_d = 1.0 / d;
            let mut t0 = (min[axis] - o) * inv_d;
            let mut t1 = (max[axis] - o) * inv_d;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }
    }

    if t_min >= 0.0 {
        Some(t_min)
    } else if t_max >= 0.0 {
        Some(t_max)
    } else {
        None
    }
}
