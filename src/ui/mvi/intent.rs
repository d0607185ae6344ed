//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions such as an actuator being pressed.
/// They carry no behaviour; reducers decide what they mean.
pub trait Intent: std::fmt::Debug + 'static {}
