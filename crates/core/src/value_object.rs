//! Value objects: compared by value, no identity.

/// Marker for derived values such as a stock status or a category summary.
///
/// They are recomputed from item state on every pass and never carry an id,
/// so equality is structural.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
