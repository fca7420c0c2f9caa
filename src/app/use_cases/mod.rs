/// Use Cases
///
/// Die Anwendungslogik als freie Funktionen über dem `EditorState`:
/// Editieren, Selektion, Gesten, Kamera, History und Session-Persistenz.
pub mod camera;
pub mod editing;
pub mod gestures;
pub mod history;
pub mod selection;
pub mod session;
