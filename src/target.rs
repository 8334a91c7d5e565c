//! Things a camera can follow.

use crate::components::Position;
use glam::Vec2;
use hecs::{Entity, World};

/// Anything with a world-space position that can be read once per frame.
///
/// Returns `None` when the target no longer has a position (for example a
/// despawned entity); the controller skips that frame.
pub trait Target {
    fn position(&self) -> Option<Vec2>;
}

impl Target for Vec2 {
    fn position(&self) -> Option<Vec2> {
        Some(*self)
    }
}

impl Target for Position {
    fn position(&self) -> Option<Vec2> {
        Some(self.as_vec2())
    }
}

/// Follows the `Position` component of an entity in a hecs world
#[derive(Clone, Copy)]
pub struct EntityTarget<'w> {
    world: &'w World,
    entity: Entity,
}

impl<'w> EntityTarget<'w> {
    pub fn new(world: &'w World, entity: Entity) -> Self {
        Self { world, entity }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }
}

impl Target for EntityTarget<'_> {
    fn position(&self) -> Option<Vec2> {
        self.world
            .get::<&Position>(self.entity)
            .ok()
            .map(|pos| pos.as_vec2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_positions_are_targets() {
        assert_eq!(Vec2::new(1.0, 2.0).position(), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(Position::new(5.0, 6.0).position(), Some(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn test_entity_target_reads_position() {
        let mut world = World::new();
        let entity = world.spawn((Position::new(3.0, -4.0),));
        let target = EntityTarget::new(&world, entity);
        assert_eq!(target.position(), Some(Vec2::new(3.0, -4.0)));
    }

    #[test]
    fn test_entity_target_without_position() {
        let mut world = World::new();
        let entity = world.spawn((42u32,));
        let target = EntityTarget::new(&world, entity);
        assert_eq!(target.position(), None);
    }

    #[test]
    fn test_despawned_entity_has_no_position() {
        let mut world = World::new();
        let entity = world.spawn((Position::new(1.0, 1.0),));
        world.despawn(entity).unwrap();
        assert_eq!(EntityTarget::new(&world, entity).position(), None);
    }
}
