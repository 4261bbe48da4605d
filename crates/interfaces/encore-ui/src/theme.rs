use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Palette lifted from the product's web styles (near-black slate + cyan glow)
pub const COL_BG: Color32 = Color32::from_rgb(3, 7, 18);
pub const COL_PANEL: Color32 = Color32::from_rgb(11, 17, 33);
pub const COL_CARD: Color32 = Color32::from_rgb(15, 23, 42);
pub const COL_BORDER: Color32 = Color32::from_rgb(30, 41, 59);
pub const COL_TEXT: Color32 = Color32::from_rgb(229, 231, 235);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(148, 163, 184);
pub const COL_ACCENT: Color32 = Color32::from_rgb(34, 211, 238);
pub const COL_ACCENT_DARK: Color32 = Color32::from_rgb(8, 145, 178);
pub const COL_SECONDARY: Color32 = Color32::from_rgb(192, 132, 252);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const COL_WARN: Color32 = Color32::from_rgb(250, 204, 21);
pub const COL_DANGER: Color32 = Color32::from_rgb(239, 68, 68);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_PANEL;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_CARD;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.12);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.extreme_bg_color = COL_BG;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (
            TextStyle::Heading,
            FontId::new(20.0, FontFamily::Proportional),
        ),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
        (
            TextStyle::Button,
            FontId::new(12.0, FontFamily::Proportional),
        ),
        (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}
