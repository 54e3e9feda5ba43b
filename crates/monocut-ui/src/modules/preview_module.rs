// crates/monocut-ui/src/modules/preview_module.rs
//
// Preview panel. Playback is not wired up yet; the panel shows a black
// letterboxed canvas, disabled transport controls, the selected asset's
// duration as the progress readout and a one-line hint.

use super::{inert_button, EditorModule};
use monocut_core::commands::EditorCommand;
use monocut_core::state::AppState;
use monocut_core::view::{preview_hint, progress_time};
use crate::theme::{DARK_BG_0, DARK_BG_2, DARK_BORDER, DARK_TEXT_DIM};
use egui::{Align2, Color32, FontId, RichText, Sense, Stroke, Ui};

/// Canvas is always 16:9; the panel letterboxes around it.
const CANVAS_ASPECT: f32 = 16.0 / 9.0;

pub struct PreviewModule;

impl PreviewModule {
    pub fn new() -> Self { Self }
}

impl EditorModule for PreviewModule {
    fn name(&self) -> &str { "预览窗口" }

    fn ui(&mut self, ui: &mut Ui, state: &AppState, _cmd: &mut Vec<EditorCommand>) {
        let selected = state.selected_asset();

        egui::Frame::new()
            .fill(DARK_BG_2)
            .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.name()).size(13.0).strong());
                    if let Some(asset) = selected {
                        ui.add_space(8.0);
                        ui.add(egui::Label::new(
                            RichText::new(&asset.file_name).size(11.0).color(DARK_TEXT_DIM),
                        ).truncate());
                    }
                });
            });

        // ── Canvas ───────────────────────────────────────────────────────────
        let controls_h = 64.0;
        let avail  = ui.available_size();
        let area_h = (avail.y - controls_h).max(60.0);
        let (area, _) = ui.allocate_exact_size(egui::vec2(avail.x, area_h), Sense::hover());

        let (cw, ch) = if area.width() / area.height() > CANVAS_ASPECT {
            (area.height() * CANVAS_ASPECT, area.height())
        } else {
            (area.width(), area.width() / CANVAS_ASPECT)
        };
        let canvas = egui::Rect::from_center_size(area.center(), egui::vec2(cw, ch));
        let painter = ui.painter_at(area);
        painter.rect_filled(area, 0.0, DARK_BG_0);
        painter.rect_filled(canvas, 2.0, Color32::BLACK);
        painter.rect_stroke(canvas, 2.0, Stroke::new(1.0, DARK_BORDER), egui::StrokeKind::Inside);
        painter.text(
            canvas.center(),
            Align2::CENTER_CENTER,
            preview_hint(selected),
            FontId::proportional(13.0),
            Color32::from_gray(110),
        );

        // ── Transport ────────────────────────────────────────────────────────
        ui.add_space(4.0);
        let mut pos = 0.0_f32;
        ui.add_enabled(false, egui::Slider::new(&mut pos, 0.0..=1.0).show_value(false));

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            inert_button(ui, RichText::new("⏮").size(14.0));
            inert_button(ui, RichText::new("▶").size(14.0));
            inert_button(ui, RichText::new("⏭").size(14.0));
            ui.add_space(8.0);
            ui.label(RichText::new(progress_time(selected)).monospace().size(12.0).color(DARK_TEXT_DIM));
        });
    }
}
