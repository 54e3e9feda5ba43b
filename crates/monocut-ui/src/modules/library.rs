// crates/monocut-ui/src/modules/library.rs
use super::{inert_button, EditorModule};
use monocut_core::commands::EditorCommand;
use monocut_core::media_types::MediaAsset;
use monocut_core::state::{AppState, NoticeKind};
use monocut_core::view::{card_meta, library_summary, thumbnail_uri};
use crate::theme::{
    ACCENT, DARK_BG_2, DARK_BG_3, DARK_BG_4, DARK_BORDER, DARK_TEXT_DIM,
    ERROR_BG, ERROR_TEXT, WARNING_BG, WARNING_TEXT,
};
use egui::{Align, Color32, Id, Layout, RichText, Sense, Stroke, Ui};

const CARD_W:  f32 = 132.0;
const THUMB_W: f32 = 124.0;
const THUMB_H: f32 = 70.0;

pub struct LibraryModule {
    /// Relative thumbnail references resolve against the backend.
    base_url: String,
}

impl LibraryModule {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl EditorModule for LibraryModule {
    fn name(&self) -> &str { "素材库" }

    fn ui(&mut self, ui: &mut Ui, state: &AppState, cmd: &mut Vec<EditorCommand>) {
        ui.vertical(|ui| {
            // ── Header ──────────────────────────────────────────────────────
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(self.name()).size(13.0).strong());
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let busy  = state.import_in_flight();
                            let label = if busy { "导入中..." } else { "导入素材" };
                            let btn   = egui::Button::new(RichText::new(label).size(11.0));
                            if ui.add_enabled(!busy, btn).clicked() {
                                cmd.push(EditorCommand::RequestImport);
                            }
                        });
                    });
                });

            // ── Tabs ────────────────────────────────────────────────────────
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                let _ = ui.selectable_label(true, RichText::new("素材列表").size(11.0));
                inert_button(ui, RichText::new("AI分析结果").size(11.0));
            });

            ui.horizontal(|ui| {
                ui.add_space(6.0);
                ui.label(RichText::new(library_summary(&state.registry)).size(10.0).color(DARK_TEXT_DIM));
            });

            // ── Notice ──────────────────────────────────────────────────────
            if let Some(notice) = &state.notice {
                let (fill, text) = match notice.kind {
                    NoticeKind::Warning => (WARNING_BG, WARNING_TEXT),
                    NoticeKind::Error   => (ERROR_BG, ERROR_TEXT),
                };
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.add(egui::Label::new(RichText::new(&notice.text).size(11.0).color(text)).wrap());
                            ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                                if ui.small_button("×").on_hover_text("关闭").clicked() {
                                    cmd.push(EditorCommand::DismissNotice);
                                }
                            });
                        });
                    });
            }

            ui.separator();

            // ── Asset grid ──────────────────────────────────────────────────
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(4.0);

                if state.library_loading {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("正在加载素材列表...").size(11.0).color(DARK_TEXT_DIM));
                    });
                    return;
                }

                if state.registry.is_empty() {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("🎬").size(32.0));
                        ui.add_space(6.0);
                        ui.label(RichText::new("拖拽或点击导入视频素材").size(12.0).color(DARK_TEXT_DIM));
                        ui.label(RichText::new("支持 mp4 / mov / avi / mkv / flv").size(10.0).color(DARK_TEXT_DIM));
                    });
                    return;
                }

                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
                    let selected = state.registry.selected_id();
                    for asset in state.registry.iter() {
                        let is_selected = selected == Some(asset.id.as_str());
                        self.card(ui, asset, is_selected, cmd);
                    }
                });
                ui.add_space(8.0);
            });
        });
    }
}

impl LibraryModule {
    fn card(&self, ui: &mut Ui, asset: &MediaAsset, is_selected: bool, cmd: &mut Vec<EditorCommand>) {
        let meta = card_meta(asset);
        let border_color = if is_selected { ACCENT } else { DARK_BORDER };
        let card_fill    = if is_selected { DARK_BG_4 } else { DARK_BG_3 };

        let card_resp = egui::Frame::new()
            .fill(card_fill)
            .stroke(Stroke::new(if is_selected { 1.5 } else { 1.0 }, border_color))
            .corner_radius(egui::CornerRadius::same(5))
            .inner_margin(egui::Margin::same(4))
            .show(ui, |ui| {
                ui.set_width(CARD_W);
                ui.vertical(|ui| {
                    // ── Thumbnail + duration badge ───────────────────────────
                    let thumb = asset.thumbnails.first()
                        .and_then(|t| thumbnail_uri(t, &self.base_url));
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(THUMB_W, THUMB_H), Sense::hover());
                    ui.painter().rect_filled(rect, 3.0, Color32::from_rgb(14, 16, 21));
                    match thumb {
                        Some(uri) => {
                            egui::Image::new(uri)
                                .corner_radius(egui::CornerRadius::same(3))
                                .paint_at(ui, rect);
                        }
                        None => {
                            ui.painter().text(rect.center(), egui::Align2::CENTER_CENTER, "视频",
                                egui::FontId::proportional(13.0), Color32::from_gray(90));
                        }
                    }
                    let badge_pos = rect.right_bottom() - egui::vec2(4.0, 4.0);
                    let galley = ui.painter().layout_no_wrap(
                        meta.badge.clone(), egui::FontId::monospace(10.0), Color32::WHITE);
                    let badge_rect = egui::Rect::from_min_max(
                        badge_pos - galley.size() - egui::vec2(6.0, 2.0), badge_pos);
                    ui.painter().rect_filled(badge_rect, 2.0, Color32::from_black_alpha(170));
                    ui.painter().galley(badge_rect.min + egui::vec2(3.0, 1.0), galley, Color32::WHITE);

                    // ── Info ─────────────────────────────────────────────────
                    ui.add_space(3.0);
                    ui.add(egui::Label::new(RichText::new(&asset.file_name).size(11.0)).truncate())
                        .on_hover_text(&asset.file_name);
                    ui.label(RichText::new(&meta.resolution).size(10.0).color(DARK_TEXT_DIM));
                    ui.label(RichText::new(&meta.detail).size(10.0).color(DARK_TEXT_DIM));
                });
            }).response;

        // ── Interact ─────────────────────────────────────────────────────────
        let interact = ui.interact(card_resp.rect, Id::new("asset_card").with(&asset.id), Sense::click());
        if interact.clicked() {
            cmd.push(EditorCommand::SelectAsset(Some(asset.id.clone())));
        }
        if interact.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        interact.context_menu(|ui| {
            ui.set_min_width(140.0);
            if ui.button("刷新信息").clicked() {
                cmd.push(EditorCommand::RefreshAsset(asset.id.clone()));
                ui.close();
            }
            ui.separator();
            ui.label(RichText::new(&asset.file_path).size(10.0).color(DARK_TEXT_DIM));
            let audio = if asset.has_audio { "含音频" } else { "无音频" };
            ui.label(RichText::new(audio).size(10.0).color(DARK_TEXT_DIM));
            ui.label(RichText::new(&asset.create_time).size(10.0).color(DARK_TEXT_DIM));
        });
    }
}
