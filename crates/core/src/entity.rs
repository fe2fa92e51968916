//! Entity trait: identity that survives edits.

/// Anything the backend owns and the client holds a copy of.
///
/// Two copies with the same id refer to the same record even when their fields
/// differ; the catalog uses this to replace stale copies in place.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
