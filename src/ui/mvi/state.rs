//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq so the store can skip no-op updates)
pub trait UiState: Clone + PartialEq + Default + std::fmt::Debug + 'static {}
