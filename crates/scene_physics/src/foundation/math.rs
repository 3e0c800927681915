//! Math utilities and types
//!
//! Provides fundamental math types for 3D collision detection and
//! simulation.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Threshold below which a vector is treated as having no direction
pub const DIRECTION_EPSILON: f32 = 1e-6;

/// Normalize a vector, returning `None` for near-zero input
///
/// `Vec3::normalize` on a zero-length vector produces NaN components,
/// which would silently poison every position they touch downstream.
/// Callers decide what a missing direction means for them.
pub fn safe_normalize(v: Vec3) -> Option<Vec3> {
    let magnitude_squared = v.magnitude_squared();
    if magnitude_squared < DIRECTION_EPSILON * DIRECTION_EPSILON {
        None
    } else {
        Some(v / magnitude_squared.sqrt())
    }
}

/// Normalize a vector, substituting `fallback` for near-zero input
pub fn safe_normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    safe_normalize(v).unwrap_or(fallback)
}
