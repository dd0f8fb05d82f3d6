/// Marker trait for values dispatched into a reducer.
///
/// Implemented by closed enums only; adding a new kind of change means
/// adding a variant, never inspecting payloads at runtime.
pub trait Intent: Send + 'static {}
