use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        "primary" => (COL_ACCENT, COL_ACCENT, COL_BG),
        "success" => (COL_SUCCESS, COL_SUCCESS, COL_BG),
        "danger" => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        "ghost" => (Color32::TRANSPARENT, Color32::TRANSPARENT, COL_TEXT_DIM),
        _ => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
    };

    let filled = matches!(variant, "primary" | "success");
    let text = egui::RichText::new(label)
        .size(11.0)
        .strong()
        .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(110.0, 28.0))
        .fill(if enabled && filled {
            fill
        } else {
            Color32::TRANSPARENT
        })
        .stroke(egui::Stroke::new(
            1.0,
            if variant == "ghost" {
                Color32::TRANSPARENT
            } else if enabled {
                stroke_col
            } else {
                COL_BORDER
            },
        ));

    ui.add_enabled(enabled, btn)
}

/// Rounded category/filter pill. Selection is purely visual on the home
/// screen; the mock catalog is never filtered.
pub fn pill(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let text = egui::RichText::new(label).size(11.0).strong().color(if active {
        COL_BG
    } else {
        COL_TEXT_DIM
    });

    ui.add(
        egui::Button::new(text)
            .fill(if active {
                COL_ACCENT_DARK
            } else {
                Color32::TRANSPARENT
            })
            .stroke(egui::Stroke::new(
                1.0,
                if active { COL_ACCENT } else { COL_BORDER },
            ))
            .corner_radius(egui::CornerRadius::same(14))
            .min_size(egui::vec2(0.0, 26.0)),
    )
}
