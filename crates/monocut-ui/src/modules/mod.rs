// crates/monocut-ui/src/modules/mod.rs
//
// Module registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing EditorModule
//   2. Add `pub mod mypanel;` below
//   3. Give MonoCutApp a field for it and place it in update()

pub mod inspector;
pub mod library;
pub mod preview_module;
pub mod status_bar;
pub mod timeline;
pub mod toolbar;

use egui::Ui;
use monocut_core::commands::EditorCommand;
use monocut_core::state::AppState;

/// Every panel implements this trait.
/// Panels read state and emit commands. They never mutate state directly.
pub trait EditorModule {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut Ui, state: &AppState, cmd: &mut Vec<EditorCommand>);
}

/// A button that is always drawn but never clickable. The shell shows
/// features that are not wired up yet.
pub(crate) fn inert_button(ui: &mut Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add_enabled(false, egui::Button::new(text))
}
