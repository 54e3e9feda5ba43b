// crates/monocut-ui/src/modules/timeline.rs
//
// Timeline placeholder: fixed track headers, a 0:00–2:30 ruler and an empty
// lane area. Nothing here is interactive.

use super::EditorModule;
use monocut_core::commands::EditorCommand;
use monocut_core::state::AppState;
use crate::theme::{DARK_BG_0, DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM};
use egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Stroke, Ui};

const TRACKS: &[&str] = &["▾ 视频轨道 V1", "▾ 音频轨道 A1", "▾ 字幕轨道 S1", "▾ 配乐轨道 M1"];
const HEADER_W: f32 = 120.0;
const RULER_H:  f32 = 22.0;
const TRACK_H:  f32 = 34.0;
/// Ruler span in seconds.
const RULER_SPAN: u32 = 150;
const RULER_STEP: u32 = 10;

pub struct TimelineModule;

impl TimelineModule {
    pub fn new() -> Self { Self }
}

fn ruler_label(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

impl EditorModule for TimelineModule {
    fn name(&self) -> &str { "时间轴编辑器" }

    fn ui(&mut self, ui: &mut Ui, _state: &AppState, _cmd: &mut Vec<EditorCommand>) {
        egui::Frame::new()
            .fill(DARK_BG_2)
            .inner_margin(egui::Margin { left: 8, right: 8, top: 4, bottom: 4 })
            .show(ui, |ui| {
                ui.label(RichText::new(self.name()).size(13.0).strong());
            });

        let height = RULER_H + TRACK_H * TRACKS.len() as f32;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, DARK_BG_0);

        let lanes_left = rect.left() + HEADER_W;
        let lanes_w    = (rect.right() - lanes_left).max(1.0);

        // ── Ruler ────────────────────────────────────────────────────────────
        let ruler = egui::Rect::from_min_max(
            Pos2::new(lanes_left, rect.top()),
            Pos2::new(rect.right(), rect.top() + RULER_H),
        );
        painter.rect_filled(ruler, 0.0, DARK_BG_2);
        for secs in (0..=RULER_SPAN).step_by(RULER_STEP as usize) {
            let x = lanes_left + lanes_w * secs as f32 / RULER_SPAN as f32;
            let major = secs % 30 == 0;
            let tick_h = if major { 8.0 } else { 4.0 };
            painter.line_segment(
                [Pos2::new(x, ruler.bottom() - tick_h), Pos2::new(x, ruler.bottom())],
                Stroke::new(1.0, DARK_BORDER),
            );
            if major {
                let align = if secs == RULER_SPAN { Align2::RIGHT_TOP } else { Align2::LEFT_TOP };
                painter.text(
                    Pos2::new(x + 2.0, ruler.top() + 2.0), align, ruler_label(secs),
                    FontId::monospace(9.0), DARK_TEXT_DIM,
                );
            }
        }

        // ── Tracks ───────────────────────────────────────────────────────────
        for (i, name) in TRACKS.iter().enumerate() {
            let top = rect.top() + RULER_H + TRACK_H * i as f32;
            let header = egui::Rect::from_min_size(Pos2::new(rect.left(), top), egui::vec2(HEADER_W, TRACK_H));
            let lane   = egui::Rect::from_min_max(Pos2::new(lanes_left, top), Pos2::new(rect.right(), top + TRACK_H));
            painter.rect_filled(header, 0.0, DARK_BG_3);
            painter.text(
                header.left_center() + egui::vec2(8.0, 0.0), Align2::LEFT_CENTER, *name,
                FontId::proportional(11.0), DARK_TEXT_DIM,
            );
            painter.line_segment([lane.left_bottom(), lane.right_bottom()], Stroke::new(1.0, DARK_BORDER));
        }

        let lanes = egui::Rect::from_min_max(Pos2::new(lanes_left, rect.top() + RULER_H), rect.max);
        painter.text(
            lanes.center(), Align2::CENTER_CENTER, "将素材拖拽到时间轴开始剪辑",
            FontId::proportional(12.0), Color32::from_gray(95),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruler_labels() {
        assert_eq!(ruler_label(0), "0:00");
        assert_eq!(ruler_label(90), "1:30");
        assert_eq!(ruler_label(RULER_SPAN), "2:30");
    }
}
