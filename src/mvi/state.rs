/// Marker trait for reducer-owned state.
///
/// `Default` is the initial value, `PartialEq` lets the store skip
/// notifying subscribers when a transition changed nothing.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
