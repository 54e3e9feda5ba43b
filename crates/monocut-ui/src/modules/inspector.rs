// crates/monocut-ui/src/modules/inspector.rs
use super::{inert_button, EditorModule};
use monocut_core::commands::EditorCommand;
use monocut_core::state::AppState;
use monocut_core::view::property_rows;
use crate::theme::{DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM};
use egui::{RichText, Stroke, Ui};

pub struct InspectorModule;

impl InspectorModule {
    pub fn new() -> Self { Self }
}

impl EditorModule for InspectorModule {
    fn name(&self) -> &str { "属性面板" }

    fn ui(&mut self, ui: &mut Ui, state: &AppState, _cmd: &mut Vec<EditorCommand>) {
        egui::Frame::new()
            .fill(DARK_BG_2)
            .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
            .show(ui, |ui| {
                ui.label(RichText::new(self.name()).size(13.0).strong());
            });

        ui.horizontal(|ui| {
            ui.add_space(4.0);
            let _ = ui.selectable_label(true, RichText::new("视频属性").size(11.0));
            inert_button(ui, RichText::new("字幕编辑").size(11.0));
            inert_button(ui, RichText::new("音频设置").size(11.0));
        });
        ui.separator();

        // ── Properties ───────────────────────────────────────────────────────
        egui::Frame::new()
            .fill(DARK_BG_3)
            .stroke(Stroke::new(1.0, DARK_BORDER))
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                egui::Grid::new("inspector_props")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        for row in property_rows(state.selected_asset()) {
                            ui.label(RichText::new(row.label).size(11.0).color(DARK_TEXT_DIM));
                            ui.label(RichText::new(row.value).monospace().size(11.0));
                            ui.end_row();
                        }
                    });
            });

        ui.add_space(10.0);

        // ── Audio / speed (inert) ────────────────────────────────────────────
        ui.label(RichText::new("音量").size(11.0).color(DARK_TEXT_DIM));
        let mut volume = 100.0_f32;
        ui.add_enabled(
            false,
            egui::Slider::new(&mut volume, 0.0..=200.0).suffix("%").show_value(true),
        );

        ui.add_space(8.0);
        ui.label(RichText::new("播放速度").size(11.0).color(DARK_TEXT_DIM));
        ui.label(RichText::new("● 正常　○ 慢动作　○ 快动作").size(11.0).color(DARK_TEXT_DIM));
    }
}
