// crates/monocut-ui/src/theme.rs
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context as _};
use egui::{Color32, Context, FontData, FontDefinitions, FontFamily, Stroke, Style, Visuals};
use tracing::{info, warn};

// ── Palette (Mono+Blue) ──────────────────────────────────────────────────────
pub const ACCENT:        Color32 = Color32::from_rgb( 64, 132, 255);
pub const ACCENT_DIM:    Color32 = Color32::from_rgb( 36,  82, 170);
pub const ACCENT_HOVER:  Color32 = Color32::from_rgb(110, 164, 255);

pub const DARK_BG_0:     Color32 = Color32::from_rgb( 16,  18,  23);
pub const DARK_BG_1:     Color32 = Color32::from_rgb( 23,  26,  33); // #171A21 window background
pub const DARK_BG_2:     Color32 = Color32::from_rgb( 30,  34,  43);
pub const DARK_BG_3:     Color32 = Color32::from_rgb( 39,  44,  55);
pub const DARK_BG_4:     Color32 = Color32::from_rgb( 50,  56,  70);

pub const DARK_TEXT:     Color32 = Color32::from_rgb(222, 226, 234);
pub const DARK_TEXT_DIM: Color32 = Color32::from_rgb(124, 132, 148);
pub const DARK_BORDER:   Color32 = Color32::from_rgb( 56,  62,  78);

pub const STATUS_ONLINE:   Color32 = Color32::from_rgb( 72, 199, 116);
pub const STATUS_OFFLINE:  Color32 = Color32::from_rgb(232,  84,  84);
pub const STATUS_CHECKING: Color32 = Color32::from_rgb(230, 180,  60);

pub const WARNING_BG:    Color32 = Color32::from_rgb( 66,  54,  22);
pub const WARNING_TEXT:  Color32 = Color32::from_rgb(240, 200, 110);
pub const ERROR_BG:      Color32 = Color32::from_rgb( 72,  28,  32);
pub const ERROR_TEXT:    Color32 = Color32::from_rgb(255, 150, 150);

// ── Style ──────────────────────────────────────────────────────────────────────
// Flat Mono+Blue: idle widgets have no outline, only fills step up in
// brightness. Blue appears on hover, press, focus and selection.

fn widget_visuals(
    fill:   Color32,
    border: Stroke,
    text:   Stroke,
    radius: egui::CornerRadius,
) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill:       fill,
        weak_bg_fill:  fill,
        bg_stroke:     border,
        fg_stroke:     text,
        corner_radius: radius,
        expansion:     0.0,
    }
}

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    style.spacing.item_spacing     = egui::vec2(6.0, 4.0);
    style.spacing.button_padding   = egui::vec2(12.0, 4.0);
    style.spacing.menu_margin      = egui::Margin::same(6);
    style.spacing.window_margin    = egui::Margin::same(8);
    style.spacing.scroll.bar_width = 6.0;
    style.spacing.interact_size.y  = 24.0;

    let r  = egui::CornerRadius::same(3);
    let no = Stroke::NONE;

    let mut v = Visuals::dark();
    v.panel_fill       = DARK_BG_1;
    v.window_fill      = DARK_BG_2;
    v.faint_bg_color   = DARK_BG_2;
    v.extreme_bg_color = DARK_BG_0;
    v.window_stroke    = Stroke::new(1.0, DARK_BORDER);
    v.window_shadow    = egui::epaint::Shadow::NONE;
    v.popup_shadow     = egui::epaint::Shadow::NONE;
    v.hyperlink_color  = ACCENT_HOVER;
    v.text_cursor.stroke = Stroke::new(2.0, ACCENT);


    // Selected text, selectable labels and active tabs: solid blue, white text.
    v.selection.bg_fill = ACCENT;
    v.selection.stroke  = Stroke::new(1.0, Color32::WHITE);

    v.widgets.noninteractive = widget_visuals(DARK_BG_1, Stroke::new(1.0, DARK_BORDER), Stroke::new(1.0, DARK_TEXT), r);
    v.widgets.inactive       = widget_visuals(DARK_BG_3, no, Stroke::new(1.0, DARK_TEXT), r);
    v.widgets.hovered        = widget_visuals(DARK_BG_4, Stroke::new(1.0, ACCENT_DIM), Stroke::new(1.0, Color32::WHITE), r);
    v.widgets.active         = widget_visuals(ACCENT_DIM, Stroke::new(1.0, ACCENT), Stroke::new(1.0, Color32::WHITE), r);
    v.widgets.open           = widget_visuals(DARK_BG_4, Stroke::new(1.0, ACCENT), Stroke::new(1.0, ACCENT_HOVER), r);

    v.window_corner_radius = egui::CornerRadius::same(6);
    v.menu_corner_radius   = r;
    v.override_text_color  = None;

    style.visuals = v;
    ctx.set_style(style);
}

// ── CJK font ─────────────────────────────────────────────────────────────────
// egui's bundled fonts have no Han glyphs and every label in the shell is
// Chinese. Borrow a system font when one exists; without it the labels render
// as boxes but the app still works.

const CJK_FONT_CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttf",
    "C:\\Windows\\Fonts\\simhei.ttf",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
];

const CJK_FONT_NAME: &str = "system-cjk";

pub fn install_cjk_font(ctx: &Context) {
    match load_first_font(CJK_FONT_CANDIDATES) {
        Ok((path, bytes)) => {
            let mut fonts = FontDefinitions::default();
            fonts
                .font_data
                .insert(CJK_FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
            // Fallback after the defaults so Latin text keeps egui's look.
            for family in [FontFamily::Proportional, FontFamily::Monospace] {
                fonts.families.entry(family).or_default().push(CJK_FONT_NAME.to_owned());
            }
            ctx.set_fonts(fonts);
            info!(path = %path, "CJK font installed");
        }
        Err(e) => warn!("no CJK font available: {e:#}"),
    }
}

fn load_first_font(candidates: &[&str]) -> anyhow::Result<(String, Vec<u8>)> {
    for candidate in candidates {
        let path = Path::new(candidate);
        if !path.is_file() {
            continue;
        }
        let bytes = std::fs::read(path).with_context(|| format!("reading {candidate}"))?;
        return Ok((candidate.to_string(), bytes));
    }
    bail!("none of {} known font paths exist", candidates.len())
}
