use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use encore_app_core::Route;

pub struct HeaderResponse {
    pub navigate_to: Option<Route>,
}

fn nav_entry(route: &Route) -> Option<usize> {
    match route {
        Route::Home | Route::EventDetail(_) => Some(0),
        Route::Dashboard => Some(1),
        Route::CreateEvent => Some(2),
        Route::Admin => None,
    }
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, route: &Route, busy: bool) -> HeaderResponse {
    let mut resp = HeaderResponse { navigate_to: None };
    let active = nav_entry(route);

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("ENCORE")
                        .size(16.0)
                        .extra_letter_spacing(3.0)
                        .strong()
                        .color(COL_ACCENT),
                );
                tui.label(
                    egui::RichText::new("eventos")
                        .size(10.0)
                        .color(COL_TEXT_DIM),
                );
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                let entries = [
                    ("EXPLORAR", Route::Home),
                    ("DASHBOARD", Route::Dashboard),
                    ("CRIAR EVENTO", Route::CreateEvent),
                ];
                for (ix, (label, target)) in entries.into_iter().enumerate() {
                    let variant = if active == Some(ix) { "primary" } else { "ghost" };
                    if tui.ui(|ui| cmd_button(ui, label, variant, true)).clicked() {
                        resp.navigate_to = Some(target);
                    }
                }

                if busy {
                    tui.ui_add(egui::Spinner::new().color(COL_ACCENT));
                }
            });
        },
    );

    resp
}
