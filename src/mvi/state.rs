//! Base trait for slice state.

/// Marker trait for state owned by a reducer.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Constructible empty (Default is the state before anything loaded)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
