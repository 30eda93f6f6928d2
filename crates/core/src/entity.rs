//! Records with a stable identity, and lookup over collections of them.

/// A record identified by a key that never changes while its other fields do.
pub trait Entity {
    type Id: Copy + Eq + core::fmt::Debug;

    fn id(&self) -> Self::Id;
}

/// First entity in `items` whose id equals `id`.
pub fn find_by_id<'a, E: Entity + 'a>(
    items: impl IntoIterator<Item = &'a E>,
    id: E::Id,
) -> Option<&'a E> {
    items.into_iter().find(|e| e.id() == id)
}

/// Mutable counterpart of [`find_by_id`].
pub fn find_by_id_mut<'a, E: Entity + 'a>(
    items: impl IntoIterator<Item = &'a mut E>,
    id: E::Id,
) -> Option<&'a mut E> {
    items.into_iter().find(|e| e.id() == id)
}
