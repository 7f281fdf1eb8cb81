//! Entity trait: records with a stable identifier, plus id lookups over slices.

/// A record identified by `id` rather than by its field values.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// First entity in `items` with the given id.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|e| e.id() == id)
}

/// Mutable counterpart of [`find_by_id`].
pub fn find_by_id_mut<'a, E: Entity>(items: &'a mut [E], id: &E::Id) -> Option<&'a mut E> {
    items.iter_mut().find(|e| e.id() == id)
}

/// Index of the entity with the given id.
pub fn position_by_id<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|e| e.id() == id)
}
