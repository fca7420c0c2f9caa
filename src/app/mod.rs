/// Application Layer
///
/// Controller, Zustand, Use-Cases und die Intent-Events des Editors.
pub mod controller;
pub mod events;
pub mod history;
pub mod notify;
pub mod playback;
pub mod state;
pub mod use_cases;

pub use controller::EditorController;
pub use events::EditorIntent;
pub use history::{EditHistory, Snapshot};
pub use notify::{CollectingNotifier, LogNotifier, Notifier, Severity};
pub use playback::{PlaybackClock, PlaybackMode, PlaybackState};
pub use state::EditorState;
