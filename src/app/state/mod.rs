/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kurve, View,
/// Selektion, Gesten, Wiedergabe).
pub mod app_state;
pub mod gesture;
pub mod selection;
pub mod view;

pub use app_state::EditorState;
pub use gesture::{GestureMode, HandleKind};
pub use selection::SelectionState;
pub use view::ViewState;
