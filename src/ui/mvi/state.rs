/// Marker trait for renderable UI state.
///
/// `PartialEq` lets callers detect whether a reduction changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
