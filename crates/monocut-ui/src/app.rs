// crates/monocut-ui/src/app.rs
use std::path::PathBuf;
use std::sync::Arc;

use monocut_api::{ApiClient, ApiConfig, ApiWorker};
use monocut_core::commands::EditorCommand;
use monocut_core::state::AppState;
use crate::context::AppContext;
use crate::helpers::import::{dropped_file_paths, pick_video_files};
use crate::theme::{configure_style, install_cjk_font, ACCENT, DARK_BG_0};
use crate::modules::{
    EditorModule,
    inspector::InspectorModule,
    library::LibraryModule,
    preview_module::PreviewModule,
    status_bar::StatusBarModule,
    timeline::TimelineModule,
    toolbar::ToolbarModule,
};
use eframe::egui;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Only the picker directory survives a restart; the library lives on the backend.
#[derive(Serialize, Deserialize, Default)]
struct AppStorage {
    last_import_dir: Option<PathBuf>,
}

const IMPORT_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::I);

// ── App ───────────────────────────────────────────────────────────────────────

pub struct MonoCutApp {
    state:        AppState,
    context:      AppContext,
    toolbar:      ToolbarModule,
    library:      LibraryModule,
    preview:      PreviewModule,
    inspector:    InspectorModule,
    timeline:     TimelineModule,
    status_bar:   StatusBarModule,
    /// Commands emitted by modules each frame, processed after the UI pass
    pending_cmds: Vec<EditorCommand>,
}

impl MonoCutApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ApiConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        configure_style(&cc.egui_ctx);
        install_cjk_font(&cc.egui_ctx);
        // Pin to dark mode so OS theme changes don't overwrite ours.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        let stored = cc.storage
            .and_then(|s| eframe::get_value::<AppStorage>(s, eframe::APP_KEY))
            .unwrap_or_default();

        let mut state = AppState {
            last_import_dir: stored.last_import_dir,
            ..AppState::default()
        };

        let base_url = config.base_url.clone();
        let repaint_ctx = cc.egui_ctx.clone();
        let worker = ApiWorker::new(
            ApiClient::new(config),
            Arc::new(move || repaint_ctx.request_repaint()),
        );
        let context = AppContext::new(worker);
        context.start(&mut state);

        Self {
            state,
            context,
            toolbar:      ToolbarModule::new(),
            library:      LibraryModule::new(base_url),
            preview:      PreviewModule::new(),
            inspector:    InspectorModule::new(),
            timeline:     TimelineModule::new(),
            status_bar:   StatusBarModule::new(),
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: EditorCommand) {
        match cmd {
            // ── Import ───────────────────────────────────────────────────────
            EditorCommand::RequestImport => {
                if self.state.import_in_flight() {
                    debug!("import already running, request ignored");
                    return;
                }
                let picked = pick_video_files(self.state.last_import_dir.as_deref());
                if picked.directory.is_some() {
                    self.state.last_import_dir = picked.directory;
                }
                self.process_command(EditorCommand::ImportPaths(picked.paths));
            }
            EditorCommand::ImportPaths(paths) => {
                if let Some(ticket) = self.state.begin_import(paths) {
                    self.context.api.import_videos(ticket);
                }
            }

            // ── Library ──────────────────────────────────────────────────────
            EditorCommand::RefreshLibrary => {
                info!("library refresh requested");
                self.context.api.list_media_assets(self.state.begin_list());
            }
            EditorCommand::RefreshAsset(id) => {
                self.context.api.refresh_asset(id);
            }
            EditorCommand::SelectAsset(id) => {
                self.state.select_asset(id.as_deref());
            }
            EditorCommand::DismissNotice => {
                self.state.dismiss_notice();
            }

            // ── Backend ──────────────────────────────────────────────────────
            EditorCommand::RetryHealthCheck => {
                self.context.retry_health_check(&mut self.state);
            }
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&IMPORT_SHORTCUT)) {
            self.pending_cmds.push(EditorCommand::RequestImport);
        }

        let files = ctx.input(|i| i.raw.dropped_files.clone());
        if !files.is_empty() {
            let paths = dropped_file_paths(&files, self.state.last_import_dir.as_deref());
            info!(dropped = files.len(), usable = paths.len(), "files dropped");
            self.pending_cmds.push(EditorCommand::ImportPaths(paths));
        }
    }

    fn paint_drop_overlay(&self, ctx: &egui::Context) {
        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }
        let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("drop_overlay")));
        let rect = ctx.screen_rect();
        painter.rect_filled(rect, 0.0, DARK_BG_0.gamma_multiply(0.8));
        painter.rect_stroke(rect.shrink(8.0), 6.0, egui::Stroke::new(2.0, ACCENT), egui::StrokeKind::Inside);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "松开鼠标导入视频素材",
            egui::FontId::proportional(20.0),
            ACCENT,
        );
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for MonoCutApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let stored = AppStorage { last_import_dir: self.state.last_import_dir.clone() };
        eframe::set_value(storage, eframe::APP_KEY, &stored);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.api.shutdown();
        info!("shutting down");
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.context.ingest_api_results(&mut self.state);
        self.handle_input(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.toolbar.ui(ui, &self.state, &mut self.pending_cmds);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .exact_height(26.0)
            .show(ctx, |ui| {
                self.status_bar.ui(ui, &self.state, &mut self.pending_cmds);
            });

        egui::TopBottomPanel::bottom("timeline_panel")
            .resizable(true)
            .min_height(160.0)
            .default_height(220.0)
            .show(ctx, |ui| {
                self.timeline.ui(ui, &self.state, &mut self.pending_cmds);
            });

        egui::SidePanel::left("library_panel")
            .resizable(true)
            .default_width(320.0)
            .min_width(220.0)
            .show(ctx, |ui| {
                self.library.ui(ui, &self.state, &mut self.pending_cmds);
            });

        egui::SidePanel::right("inspector_panel")
            .resizable(true)
            .default_width(280.0)
            .min_width(220.0)
            .show(ctx, |ui| {
                self.inspector.ui(ui, &self.state, &mut self.pending_cmds);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.preview.ui(ui, &self.state, &mut self.pending_cmds);
        });

        self.paint_drop_overlay(ctx);

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<EditorCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }
    }
}
