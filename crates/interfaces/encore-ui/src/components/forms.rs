use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

fn field_column(style_gap: f32) -> taffy::Style {
    taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(style_gap),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    }
}

pub fn text_field<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, value: &mut String, hint: &str) {
    tui.style(field_column(2.0)).add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui_add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
    });
}

pub fn text_area<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    hint: &str,
    rows: usize,
) {
    tui.style(field_column(2.0)).add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui_add(
            egui::TextEdit::multiline(value)
                .hint_text(hint)
                .desired_rows(rows)
                .desired_width(f32::INFINITY),
        );
    });
}

pub fn secret_field<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, value: &mut String, hint: &str) {
    tui.style(field_column(2.0)).add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui_add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .password(true)
                .desired_width(f32::INFINITY)
                .font(egui::FontId::monospace(12.0)),
        );
    });
}
