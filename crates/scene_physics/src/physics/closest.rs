//! Closest-point queries against bounding volumes
//!
//! Pure helpers used by the narrow phase to turn a confirmed overlap
//! into contact geometry.

use crate::foundation::math::{safe_normalize_or, Vec3};

/// Closest point on a sphere's surface to an external point
///
/// When the query point coincides with the center the direction is
/// undefined; +Y is substituted so the result is a stable surface point
/// instead of NaN.
pub fn closest_point_on_sphere(point: Vec3, center: Vec3, radius: f32) -> Vec3 {
    let direction = safe_normalize_or(point - center, Vec3::new(0.0, 1.0, 0.0));
    center + direction * radius
}

/// Closest point on an axis-aligned box to an external point
///
/// Component-wise clamp into `[center - half, center + half]`. Points
/// inside the box clamp to themselves.
pub fn closest_point_on_aabb(point: Vec3, center: Vec3, half_extents: Vec3) -> Vec3 {
    let min = center - half_extents;
    let max = center + half_extents;
    Vec3::new(
        point.x.clamp(min.x, max.x),
        point.y.clamp(min.y, max.y),
        point.z.clamp(min.z, max.z),
    )
}

/// Outward unit normal of the box face a surface point lies on
///
/// Compares each coordinate of `point` against the box extents. A point
/// on an edge or corner lies on several faces; `travel` breaks the tie
/// toward the face most opposed to the direction of travel (pass zero
/// for no preference). A strictly interior point returns the zero
/// vector as a sentinel.
pub fn closest_face_normal_on_aabb(
    point: Vec3,
    center: Vec3,
    half_extents: Vec3,
    travel: Vec3,
) -> Vec3 {
    const FACE_NORMALS: [([f32; 3], usize, f32); 6] = [
        ([-1.0, 0.0, 0.0], 0, -1.0),
        ([1.0, 0.0, 0.0], 0, 1.0),
        ([0.0, -1.0, 0.0], 1, -1.0),
        ([0.0, 1.0, 0.0], 1, 1.0),
        ([0.0, 0.0, -1.0], 2, -1.0),
        ([0.0, 0.0, 1.0], 2, 1.0),
    ];

    let mut best: Option<(Vec3, f32)> = None;
    for (normal, axis, sign) in FACE_NORMALS {
        let face_coord = center[axis] + sign * half_extents[axis];
        if point[axis] == face_coord {
            let normal = Vec3::new(normal[0], normal[1], normal[2]);
            let opposition = normal.dot(&travel);
            match best {
                Some((_, best_opposition)) if opposition >= best_opposition => {}
                _ => best = Some((normal, opposition)),
            }
        }
    }

    best.map_or_else(Vec3::zeros, |(normal, _)| normal)
}
