// crates/monocut-ui/src/modules/status_bar.rs
use super::EditorModule;
use monocut_core::commands::EditorCommand;
use monocut_core::media_types::BackendStatus;
use monocut_core::state::AppState;
use monocut_core::view::backend_status_label;
use crate::theme::{
    DARK_TEXT_DIM, STATUS_CHECKING, STATUS_OFFLINE, STATUS_ONLINE, WARNING_TEXT,
};
use egui::{Align, Color32, Layout, RichText, Sense, Ui};

pub struct StatusBarModule;

impl StatusBarModule {
    pub fn new() -> Self { Self }
}

fn status_color(status: BackendStatus) -> Color32 {
    match status {
        BackendStatus::Checking => STATUS_CHECKING,
        BackendStatus::Online   => STATUS_ONLINE,
        BackendStatus::Offline  => STATUS_OFFLINE,
    }
}

impl EditorModule for StatusBarModule {
    fn name(&self) -> &str { "状态栏" }

    fn ui(&mut self, ui: &mut Ui, state: &AppState, cmd: &mut Vec<EditorCommand>) {
        ui.horizontal(|ui| {
            let color = status_color(state.backend_status);
            let (dot, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
            ui.painter().circle_filled(dot.center(), 4.0, color);

            ui.label(
                RichText::new(format!("后端状态：{}", backend_status_label(state.backend_status)))
                    .size(11.0)
                    .color(color),
            );
            if !state.backend_message.is_empty() {
                ui.label(RichText::new(&state.backend_message).size(11.0).color(DARK_TEXT_DIM));
            }

            if let Some(ffmpeg) = state.ffmpeg.as_ref().filter(|f| !f.installed) {
                ui.separator();
                ui.label(RichText::new(format!("⚠ FFmpeg 未就绪：{}", ffmpeg.message)).size(11.0).color(WARNING_TEXT));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if state.backend_status == BackendStatus::Offline
                    && ui.small_button("重试连接").clicked()
                {
                    cmd.push(EditorCommand::RetryHealthCheck);
                }
            });
        });
    }
}
