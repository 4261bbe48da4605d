use crate::theme::*;
use crate::utils::{cmd_button, pill, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use encore_app_core::{home_vm, EncoreApplication, EventCardVm, Route};

/// Search inputs are view-local and inert: the curated grid below is never
/// filtered by them.
#[derive(Default)]
pub struct HomeScreen {
    pub query: String,
    pub location: String,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    screen: &mut HomeScreen,
    app: &mut EncoreApplication,
) {
    let vm = home_vm();
    let mut open_event: Option<String> = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(16.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        // Hero
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(8.0),
            padding: length(24.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new("VIVA O MOMENTO")
                    .size(10.0)
                    .extra_letter_spacing(2.0)
                    .strong()
                    .color(COL_ACCENT),
            );
            tui.label(
                egui::RichText::new("Descubra o Extraordinário")
                    .size(32.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(
                egui::RichText::new(
                    "Eventos curados para o público de vanguarda. Shows, workshops e \
                     experiências imersivas que definem o futuro.",
                )
                .size(13.0)
                .color(COL_TEXT_DIM),
            );
        });

        // Search row (inert by design)
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(8.0),
            padding: length(8.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_PANEL)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                tui.style(taffy::Style {
                    flex_grow: 2.0,
                    flex_basis: length(0.0),
                    ..Default::default()
                })
                .ui_add(
                    egui::TextEdit::singleline(&mut screen.query)
                        .hint_text("Buscar eventos, artistas...")
                        .desired_width(f32::INFINITY),
                );
                tui.style(taffy::Style {
                    flex_grow: 1.0,
                    flex_basis: length(0.0),
                    ..Default::default()
                })
                .ui_add(
                    egui::TextEdit::singleline(&mut screen.location)
                        .hint_text("Localização")
                        .desired_width(f32::INFINITY),
                );
                tui.ui(|ui| cmd_button(ui, "EXPLORAR", "primary", true));
            },
        );

        // Category pills ("Todos" stays active; selection has no effect)
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::Center),
            gap: length(6.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for (ix, label) in vm.pills.iter().enumerate() {
                tui.ui(|ui| pill(ui, label, ix == 0));
            }
        });

        tui.ui(|ui| section_label(ui, "EM ALTA"));

        // Card grid
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            flex_wrap: taffy::FlexWrap::Wrap,
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for card in &vm.cards {
                if draw_card(&mut *tui, card) {
                    open_event = Some(card.id.clone());
                }
            }
        });
    });

    if let Some(id) = open_event {
        app.navigate(Route::EventDetail(id));
    }
}

fn draw_card<'a>(tui: impl TuiBuilderLogic<'a>, card: &EventCardVm) -> bool {
    let mut clicked = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(6.0),
        padding: length(12.0),
        size: taffy::Size {
            width: length(320.0),
            height: auto(),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_CARD)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            // Banner placeholder in place of the remote cover image
            tui.style(taffy::Style {
                size: taffy::Size {
                    width: percent(1.),
                    height: length(90.0),
                },
                ..Default::default()
            })
            .ui(|ui| {
                let rect = ui.max_rect();
                ui.painter()
                    .rect_filled(rect, 6.0, COL_ACCENT_DARK.linear_multiply(0.25));
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    card.category_label,
                    egui::FontId::proportional(12.0),
                    COL_ACCENT,
                );
            });

            tui.label(
                egui::RichText::new(format!("{} • {}", card.date_label, card.time))
                    .size(10.0)
                    .strong()
                    .color(COL_ACCENT),
            );
            tui.label(
                egui::RichText::new(&card.title)
                    .size(15.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(
                egui::RichText::new(&card.summary)
                    .size(11.0)
                    .color(COL_TEXT_DIM),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                justify_content: Some(taffy::JustifyContent::SpaceBetween),
                align_items: Some(taffy::AlignItems::Center),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new(&card.location)
                        .size(10.0)
                        .color(COL_TEXT_DIM),
                );
                tui.label(
                    egui::RichText::new(&card.price_label)
                        .size(14.0)
                        .strong()
                        .color(COL_TEXT),
                );
            });

            if tui
                .ui(|ui| cmd_button(ui, "VER INGRESSOS", "outline", true))
                .clicked()
            {
                clicked = true;
            }
        },
    );

    clicked
}
