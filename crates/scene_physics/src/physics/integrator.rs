//! Per-tick motion integration for the player
//!
//! Acceleration is an impulse accumulator: gravity and any external
//! impulses are summed into it during the tick and it is cleared after
//! integration, so only explicit per-tick additions persist.

use crate::foundation::math::Vec3;
use crate::scene::SceneObject;

/// Result of one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationResult {
    /// The player ended the tick above the world floor; collision
    /// detection should run
    Airborne,
    /// The player was clamped to the world floor; the clamp pre-empts
    /// collision detection for this tick
    FloorClamped,
}

/// Advance the player one tick under gravity and linear velocity
///
/// Callers must ensure `delta_time > 0`; the simulation facade skips
/// non-positive ticks entirely.
pub fn integrate(
    object: &mut SceneObject,
    gravity: Vec3,
    gravity_enabled: bool,
    floor_height: f32,
    delta_time: f32,
) -> IntegrationResult {
    if gravity_enabled {
        object.linear_acceleration += gravity;
    }

    object.linear_velocity += object.linear_acceleration * delta_time;
    object.position += object.linear_velocity * delta_time;
    object.linear_acceleration = Vec3::zeros();

    if object.position.y < floor_height {
        object.position.y = floor_height;
        object.linear_velocity.y = 0.0;
        IntegrationResult::FloorClamped
    } else {
        IntegrationResult::Airborne
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::volume::BoundingVolume;
    use approx::assert_relative_eq;

    fn player_at(y: f32) -> SceneObject {
        SceneObject::new(BoundingVolume::sphere(1.0)).with_position(Vec3::new(0.0, y, 0.0))
    }

    #[test]
    fn test_gravity_accumulates_into_velocity() {
        let mut object = player_at(10.0);
        let result = integrate(&mut object, Vec3::new(0.0, -10.0, 0.0), true, -100.0, 0.1);

        assert_eq!(result, IntegrationResult::Airborne);
        assert_relative_eq!(object.linear_velocity.y, -1.0);
        assert_relative_eq!(object.position.y, 9.9);
        // Impulse model: acceleration does not persist
        assert_eq!(object.linear_acceleration, Vec3::zeros());
    }

    #[test]
    fn test_gravity_disabled_leaves_velocity_alone() {
        let mut object = player_at(10.0);
        object.linear_velocity = Vec3::new(1.0, 0.0, 0.0);
        integrate(&mut object, Vec3::new(0.0, -10.0, 0.0), false, -100.0, 0.5);

        assert_relative_eq!(object.linear_velocity.y, 0.0);
        assert_relative_eq!(object.position.x, 0.5);
    }

    #[test]
    fn test_floor_clamp_zeroes_vertical_velocity() {
        let mut object = player_at(0.1);
        object.linear_velocity = Vec3::new(0.0, -50.0, 0.0);
        let result = integrate(&mut object, Vec3::new(0.0, -10.0, 0.0), true, 0.0, 0.1);

        assert_eq!(result, IntegrationResult::FloorClamped);
        assert_relative_eq!(object.position.y, 0.0);
        assert_relative_eq!(object.linear_velocity.y, 0.0);
    }

    #[test]
    fn test_floor_clamp_is_idempotent() {
        // Already resting exactly on the floor with no vertical motion:
        // repeated ticks must not disturb it. Gravity pulls it below the
        // floor each tick and the clamp restores it exactly.
        let mut object = player_at(0.0);
        for _ in 0..10 {
            integrate(&mut object, Vec3::new(0.0, -10.0, 0.0), true, 0.0, 0.1);
            assert_relative_eq!(object.position.y, 0.0);
            assert_relative_eq!(object.linear_velocity.y, 0.0);
        }
    }
}
