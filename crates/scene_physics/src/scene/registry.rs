//! Role classification of scene objects

use crate::foundation::collections::KeySet;
use crate::scene::object::ObjectKey;

/// Mutually exclusive collision role of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The single controllable entity advanced by the integrator
    Player,
    /// Static, collidable world geometry
    Environment,
    /// Dynamic hazards; registration is plumbed but the simulation
    /// does not yet collide against this bucket
    Monster,
}

/// Registry mapping object keys to their role bucket
///
/// An object belongs to exactly one bucket at a time; registering into
/// a bucket silently removes it from the others. All operations are
/// total over the key space.
#[derive(Debug, Default, Clone)]
pub struct RoleRegistry {
    player: Option<ObjectKey>,
    environment: KeySet<ObjectKey>,
    monster: KeySet<ObjectKey>,
}

impl RoleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object under a role, displacing any previous role
    ///
    /// Registering as `Player` while another object holds that role
    /// replaces the holder; the previous player becomes unregistered.
    pub fn register(&mut self, key: ObjectKey, role: Role) {
        self.deregister(key);
        match role {
            Role::Player => self.player = Some(key),
            Role::Environment => {
                self.environment.insert(key);
            }
            Role::Monster => {
                self.monster.insert(key);
            }
        }
    }

    /// Remove an object from whichever bucket holds it; no-op otherwise
    pub fn deregister(&mut self, key: ObjectKey) {
        if self.player == Some(key) {
            self.player = None;
        }
        self.environment.remove(key);
        self.monster.remove(key);
    }

    /// Role of an object, or `None` if unregistered
    pub fn role_of(&self, key: ObjectKey) -> Option<Role> {
        if self.player == Some(key) {
            Some(Role::Player)
        } else if self.environment.contains(key) {
            Some(Role::Environment)
        } else if self.monster.contains(key) {
            Some(Role::Monster)
        } else {
            None
        }
    }

    /// The current player, if one is registered
    pub fn player(&self) -> Option<ObjectKey> {
        self.player
    }

    /// Iterate the environment bucket (unspecified order)
    pub fn environment(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.environment.iter()
    }

    /// Iterate the monster bucket (unspecified order)
    pub fn monster(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.monster.iter()
    }

    /// Number of registered environment objects
    pub fn environment_count(&self) -> usize {
        self.environment.len()
    }

    /// Remove all registrations atomically
    pub fn clear(&mut self) {
        self.player = None;
        self.environment.clear();
        self.monster.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn keys(n: usize) -> Vec<ObjectKey> {
        let mut map: SlotMap<ObjectKey, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn test_roles_are_exclusive() {
        let k = keys(1);
        let mut registry = RoleRegistry::new();

        registry.register(k[0], Role::Environment);
        assert_eq!(registry.role_of(k[0]), Some(Role::Environment));

        registry.register(k[0], Role::Monster);
        assert_eq!(registry.role_of(k[0]), Some(Role::Monster));
        assert_eq!(registry.environment_count(), 0);

        registry.register(k[0], Role::Player);
        assert_eq!(registry.role_of(k[0]), Some(Role::Player));
        assert_eq!(registry.monster().count(), 0);
    }

    #[test]
    fn test_player_replacement_unregisters_previous() {
        let k = keys(2);
        let mut registry = RoleRegistry::new();

        registry.register(k[0], Role::Player);
        registry.register(k[1], Role::Player);

        assert_eq!(registry.player(), Some(k[1]));
        assert_eq!(registry.role_of(k[0]), None);
    }

    #[test]
    fn test_deregister_is_total() {
        let k = keys(2);
        let mut registry = RoleRegistry::new();

        registry.register(k[0], Role::Environment);
        registry.deregister(k[0]);
        assert_eq!(registry.role_of(k[0]), None);

        // Never registered: still a no-op
        registry.deregister(k[1]);
        assert_eq!(registry.role_of(k[1]), None);
    }

    #[test]
    fn test_clear_resets_all_buckets() {
        let k = keys(3);
        let mut registry = RoleRegistry::new();
        registry.register(k[0], Role::Player);
        registry.register(k[1], Role::Environment);
        registry.register(k[2], Role::Monster);

        registry.clear();
        assert_eq!(registry.player(), None);
        for &key in &k {
            assert_eq!(registry.role_of(key), None);
        }
    }
}
