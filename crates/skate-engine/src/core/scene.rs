use crate::components::entity::Entity;

/// Simple entity storage using a flat Vec.
/// Side-scrollers rebuild it from game state every frame, so it only ever
/// holds a few dozen draw records.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(128),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Find all entities with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Entity> {
        self.entities.iter().filter(|e| e.tag == tag).collect()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use glam::Vec2;

    #[test]
    fn spawn_keeps_insertion_order() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_pos(Vec2::new(10.0, 20.0)));
        scene.spawn(Entity::new(EntityId(2)));
        let ids: Vec<EntityId> = scene.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntityId(1), EntityId(2)]);
        assert_eq!(scene.iter().next().unwrap().pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn clear_empties_scene() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)));
        scene.spawn(Entity::new(EntityId(2)));
        assert_eq!(scene.len(), 2);
        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn filters_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("player"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("coin"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("coin"));
        assert_eq!(scene.find_by_tag("player").unwrap().id, EntityId(1));
        assert_eq!(scene.find_all_by_tag("coin").len(), 2);
    }
}
