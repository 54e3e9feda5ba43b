// crates/monocut-ui/src/modules/toolbar.rs
//
// Top bar: menu row with the brand on the right, then the tool buttons.
// Only import and library refresh do anything; the rest are drawn disabled.

use super::{inert_button, EditorModule};
use monocut_core::commands::EditorCommand;
use monocut_core::state::AppState;
use crate::theme::{ACCENT, DARK_TEXT_DIM};
use egui::{Align, Layout, RichText, Ui};

const INERT_MENUS: &[&str] = &["编辑", "视图", "工具", "帮助"];
const INERT_TOOLS: &[&str] = &["✨ AI自动分析", "⬆ 导出", "↶ 撤销", "↷ 重做", "⚙ 设置"];

/// Standard toolbar button: consistent height, icon-forward.
fn tool_btn(label: impl Into<egui::WidgetText>) -> egui::Button<'static> {
    egui::Button::new(label).min_size(egui::vec2(0.0, 26.0))
}

pub struct ToolbarModule;

impl ToolbarModule {
    pub fn new() -> Self { Self }
}

impl EditorModule for ToolbarModule {
    fn name(&self) -> &str { "工具栏" }

    fn ui(&mut self, ui: &mut Ui, state: &AppState, cmd: &mut Vec<EditorCommand>) {
        // ── Menu row ─────────────────────────────────────────────────────────
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("文件", |ui| {
                let import = ui.add_enabled(
                    !state.import_in_flight(),
                    egui::Button::new("导入素材").shortcut_text("Ctrl+I"),
                );
                if import.clicked() {
                    cmd.push(EditorCommand::RequestImport);
                    ui.close();
                }
                if ui.button("刷新素材列表").clicked() {
                    cmd.push(EditorCommand::RefreshLibrary);
                    ui.close();
                }
            });
            for name in INERT_MENUS {
                ui.add_enabled(false, egui::Button::new(*name).frame(false));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new("AI智能剪辑助手 · Mono+Blue").strong().size(13.0).color(ACCENT));
            });
        });

        // ── Tools ────────────────────────────────────────────────────────────
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            let busy  = state.import_in_flight();
            let label = if busy { "⏳ 导入中..." } else { "📂 导入素材" };
            if ui.add_enabled(!busy, tool_btn(RichText::new(label).size(12.0))).clicked() {
                cmd.push(EditorCommand::RequestImport);
            }
            ui.separator();
            for tool in INERT_TOOLS {
                inert_button(ui, RichText::new(*tool).size(12.0));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new("拖拽视频到窗口即可导入").size(11.0).color(DARK_TEXT_DIM));
            });
        });
    }
}
